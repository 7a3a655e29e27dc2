//! Opens a store offer page on the client.
//!
//! The second field is disjoint across [`ProtocolVersion::V50`]: a
//! show-all boolean before the cut, a redirect type byte from it.
//! The two shapes are modelled as one sum type; encoding the wrong
//! arm for the negotiated version is rejected.

use shardnet_wire::{Reader, Writer};

use crate::common::NetString;
use crate::error::CodecError;
use crate::handler::PacketHandler;
use crate::packet::Packet;
use crate::version::ProtocolVersion;

/// Where the store offer opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreRedirectType {
    Marketplace = 0,
    DressingRoom = 1,
    ServerPage = 2,
}

impl StoreRedirectType {
    fn from_raw(raw: u8) -> Result<Self, CodecError> {
        Ok(match raw {
            0 => Self::Marketplace,
            1 => Self::DressingRoom,
            2 => Self::ServerPage,
            _ => {
                return Err(CodecError::malformed(format!(
                    "unknown store redirect type {raw}"
                )))
            }
        })
    }
}

/// The version-dependent half of the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOfferDisplay {
    /// Wire form up to [`ProtocolVersion::V50`] (exclusive).
    ShowAll(bool),
    /// Wire form from [`ProtocolVersion::V50`].
    Redirect(StoreRedirectType),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowStoreOfferPacket {
    pub offer_id: NetString,
    pub display: StoreOfferDisplay,
}

impl Packet for ShowStoreOfferPacket {
    const ID: u16 = 91;

    fn decode_payload(
        reader: &mut Reader<'_>,
        version: ProtocolVersion,
    ) -> Result<Self, CodecError> {
        let offer_id = NetString::read(reader)?;
        let display = if version >= ProtocolVersion::V50 {
            StoreOfferDisplay::Redirect(StoreRedirectType::from_raw(reader.read_u8()?)?)
        } else {
            StoreOfferDisplay::ShowAll(reader.read_bool()?)
        };
        Ok(Self { offer_id, display })
    }

    fn encode_payload(
        &self,
        writer: &mut Writer,
        version: ProtocolVersion,
    ) -> Result<(), CodecError> {
        self.offer_id.write(writer);
        match (self.display, version >= ProtocolVersion::V50) {
            (StoreOfferDisplay::Redirect(redirect), true) => {
                writer.write_u8(redirect as u8);
                Ok(())
            }
            (StoreOfferDisplay::ShowAll(show_all), false) => {
                writer.write_bool(show_all);
                Ok(())
            }
            (StoreOfferDisplay::Redirect(_), false) => {
                Err(CodecError::UnsupportedForVersion {
                    what: "store offer redirect type",
                    version,
                })
            }
            (StoreOfferDisplay::ShowAll(_), true) => {
                Err(CodecError::UnsupportedForVersion {
                    what: "store offer show-all flag",
                    version,
                })
            }
        }
    }

    fn dispatch(&self, handler: &mut dyn PacketHandler) -> bool {
        handler.handle_show_store_offer(self)
    }
}

// =========================================================================
// Tests
// =========================================================================

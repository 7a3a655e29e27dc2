//! The message envelope: header packing, whole-message decode/encode,
//! and the exact-consumption rule.
//!
//! Every message begins with a single unsigned varint header packing
//! three fields:
//!
//! ```text
//! bits 0..=9    message id
//! bits 10..=11  sender sub-client id
//! bits 12..=13  recipient sub-client id
//! ```
//!
//! A payload must be consumed exactly: leftover bytes after a
//! successful payload decode mean the two sides disagree about the
//! layout for this version, and the message is rejected rather than
//! silently truncated.

use shardnet_wire::{Reader, Writer};

use crate::error::CodecError;
use crate::handler::PacketHandler;
use crate::version::ProtocolVersion;

// ---------------------------------------------------------------------------
// Header
// ---------------------------------------------------------------------------

const ID_MASK: u32 = 0x3ff;
const SENDER_SHIFT: u32 = 10;
const RECIPIENT_SHIFT: u32 = 12;
const SUB_CLIENT_MASK: u32 = 0x3;

/// The decoded header varint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PacketHeader {
    pub id: u16,
    /// Split-screen sub-client that sent the message (0 = main client).
    pub sender_sub_id: u8,
    /// Sub-client the message is addressed to.
    pub recipient_sub_id: u8,
}

impl PacketHeader {
    pub fn new(id: u16) -> Self {
        Self {
            id,
            sender_sub_id: 0,
            recipient_sub_id: 0,
        }
    }

    pub fn read(reader: &mut Reader<'_>) -> Result<Self, CodecError> {
        let packed = reader.read_var_u32()?;
        Ok(Self {
            id: (packed & ID_MASK) as u16,
            sender_sub_id: ((packed >> SENDER_SHIFT) & SUB_CLIENT_MASK) as u8,
            recipient_sub_id: ((packed >> RECIPIENT_SHIFT) & SUB_CLIENT_MASK) as u8,
        })
    }

    pub fn write(&self, writer: &mut Writer) {
        let packed = (self.id as u32 & ID_MASK)
            | ((self.sender_sub_id as u32 & SUB_CLIENT_MASK) << SENDER_SHIFT)
            | ((self.recipient_sub_id as u32 & SUB_CLIENT_MASK) << RECIPIENT_SHIFT);
        writer.write_var_u32(packed);
    }
}

// ---------------------------------------------------------------------------
// The message trait
// ---------------------------------------------------------------------------

/// One protocol message: a typed payload plus its envelope plumbing.
///
/// Implementors provide the id, the payload codec, and dispatch; the
/// whole-message [`decode`](Packet::decode) and
/// [`encode`](Packet::encode) wrappers are shared.
pub trait Packet: Sized {
    /// The message id carried in the header.
    const ID: u16;

    /// Decodes the payload that follows the header. The reader holds
    /// exactly the remainder of the message body.
    fn decode_payload(
        reader: &mut Reader<'_>,
        version: ProtocolVersion,
    ) -> Result<Self, CodecError>;

    /// Encodes the payload after the header has been written.
    fn encode_payload(
        &self,
        writer: &mut Writer,
        version: ProtocolVersion,
    ) -> Result<(), CodecError>;

    /// Routes this message to its handler callback.
    fn dispatch(&self, handler: &mut dyn PacketHandler) -> bool;

    /// Decodes a complete message from `bytes`: header, payload, and
    /// the exact-consumption check.
    fn decode(bytes: &[u8], version: ProtocolVersion) -> Result<(PacketHeader, Self), CodecError> {
        let mut reader = Reader::new(bytes);
        let header = PacketHeader::read(&mut reader)?;
        if header.id != Self::ID {
            return Err(CodecError::UnexpectedPacket {
                expected: Self::ID,
                actual: header.id,
            });
        }
        let payload = Self::decode_payload(&mut reader, version)?;
        if !reader.is_empty() {
            tracing::debug!(
                id = header.id,
                count = reader.remaining(),
                "trailing bytes after payload"
            );
            return Err(CodecError::TrailingBytes {
                count: reader.remaining(),
            });
        }
        Ok((header, payload))
    }

    /// Encodes a complete message: header varint, then payload.
    fn encode(
        &self,
        header: PacketHeader,
        version: ProtocolVersion,
    ) -> Result<Vec<u8>, CodecError> {
        let mut writer = Writer::new();
        header.write(&mut writer);
        self.encode_payload(&mut writer, version)?;
        Ok(writer.into_bytes())
    }

    /// Encodes with a default header (main client on both ends).
    fn encode_default(&self, version: ProtocolVersion) -> Result<Vec<u8>, CodecError> {
        self.encode(PacketHeader::new(Self::ID), version)
    }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_packs_id_and_sub_ids() {
        let header = PacketHeader {
            id: 0x12a,
            sender_sub_id: 2,
            recipient_sub_id: 3,
        };
        let mut writer = Writer::new();
        header.write(&mut writer);

        let bytes = writer.into_bytes();
        let mut reader = Reader::new(&bytes);
        assert_eq!(PacketHeader::read(&mut reader).unwrap(), header);
        assert!(reader.is_empty());
    }

    #[test]
    fn test_header_id_occupies_ten_bits() {
        // id 0x3ff with both sub-ids set packs to 0x3fff.
        let header = PacketHeader {
            id: 0x3ff,
            sender_sub_id: 3,
            recipient_sub_id: 3,
        };
        let mut writer = Writer::new();
        header.write(&mut writer);

        let bytes = writer.into_bytes();
        let mut reader = Reader::new(&bytes);
        assert_eq!(reader.read_var_u32().unwrap(), 0x3fff);
    }

    #[test]
    fn test_default_header_is_single_byte_for_small_ids() {
        let mut writer = Writer::new();
        PacketHeader::new(0x2c).write(&mut writer);
        assert_eq!(writer.as_slice(), &[0x2c]);
    }
}

//! Code-builder editor actions sent by the client.
//!
//! The third field is disjoint across [`ProtocolVersion::V100`]: the
//! inline source string before the cut, a one-byte status code from
//! it. One sum type covers both; encoding the wrong arm for the
//! negotiated version is rejected.

use shardnet_wire::{Reader, Writer};

use crate::common::NetString;
use crate::error::CodecError;
use crate::handler::PacketHandler;
use crate::packet::Packet;
use crate::version::ProtocolVersion;

/// The version-dependent tail of the message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeBuilderValue {
    /// Wire form up to [`ProtocolVersion::V100`] (exclusive).
    Source(NetString),
    /// Wire form from [`ProtocolVersion::V100`].
    Status(u8),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBuilderSourcePacket {
    pub operation: u8,
    pub category: u8,
    pub value: CodeBuilderValue,
}

impl Packet for CodeBuilderSourcePacket {
    const ID: u16 = 178;

    fn decode_payload(
        reader: &mut Reader<'_>,
        version: ProtocolVersion,
    ) -> Result<Self, CodecError> {
        let operation = reader.read_u8()?;
        let category = reader.read_u8()?;
        let value = if version >= ProtocolVersion::V100 {
            CodeBuilderValue::Status(reader.read_u8()?)
        } else {
            CodeBuilderValue::Source(NetString::read(reader)?)
        };
        Ok(Self {
            operation,
            category,
            value,
        })
    }

    fn encode_payload(
        &self,
        writer: &mut Writer,
        version: ProtocolVersion,
    ) -> Result<(), CodecError> {
        writer.write_u8(self.operation);
        writer.write_u8(self.category);
        match (&self.value, version >= ProtocolVersion::V100) {
            (CodeBuilderValue::Status(status), true) => {
                writer.write_u8(*status);
                Ok(())
            }
            (CodeBuilderValue::Source(source), false) => {
                source.write(writer);
                Ok(())
            }
            (CodeBuilderValue::Status(_), false) => {
                Err(CodecError::UnsupportedForVersion {
                    what: "code builder status byte",
                    version,
                })
            }
            (CodeBuilderValue::Source(_), true) => {
                Err(CodecError::UnsupportedForVersion {
                    what: "inline code builder source",
                    version,
                })
            }
        }
    }

    fn dispatch(&self, handler: &mut dyn PacketHandler) -> bool {
        handler.handle_code_builder_source(self)
    }
}

// =========================================================================
// Tests
// =========================================================================

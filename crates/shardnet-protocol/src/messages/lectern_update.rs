//! Lectern page-turn notification.
//!
//! The drop-book flag was removed after [`ProtocolVersion::V60`]; on
//! newer revisions it never touches the wire and decodes as `false`.

use shardnet_wire::{Reader, Writer};

use crate::common::BlockPos;
use crate::error::CodecError;
use crate::handler::PacketHandler;
use crate::packet::Packet;
use crate::version::ProtocolVersion;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LecternUpdatePacket {
    pub page: u8,
    pub total_pages: u8,
    pub position: BlockPos,
    /// Only on the wire up to [`ProtocolVersion::V60`].
    pub drop_book: bool,
}

impl Packet for LecternUpdatePacket {
    const ID: u16 = 125;

    fn decode_payload(
        reader: &mut Reader<'_>,
        version: ProtocolVersion,
    ) -> Result<Self, CodecError> {
        Ok(Self {
            page: reader.read_u8()?,
            total_pages: reader.read_u8()?,
            position: BlockPos::read(reader)?,
            drop_book: if version <= ProtocolVersion::V60 {
                reader.read_bool()?
            } else {
                false
            },
        })
    }

    fn encode_payload(
        &self,
        writer: &mut Writer,
        version: ProtocolVersion,
    ) -> Result<(), CodecError> {
        writer.write_u8(self.page);
        writer.write_u8(self.total_pages);
        self.position.write(writer);
        if version <= ProtocolVersion::V60 {
            writer.write_bool(self.drop_book);
        }
        Ok(())
    }

    fn dispatch(&self, handler: &mut dyn PacketHandler) -> bool {
        handler.handle_lectern_update(self)
    }
}

// =========================================================================
// Tests
// =========================================================================

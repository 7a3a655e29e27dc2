//! Raw movement input from the client: a flat message with no version
//! gates. Motion components are finite-checked like every other
//! float the codec accepts.

use shardnet_wire::{Reader, Writer};

use crate::common::Vec2;
use crate::error::CodecError;
use crate::handler::PacketHandler;
use crate::packet::Packet;
use crate::version::ProtocolVersion;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlayerInputPacket {
    pub motion: Vec2,
    pub jumping: bool,
    pub sneaking: bool,
}

impl Packet for PlayerInputPacket {
    const ID: u16 = 57;

    fn decode_payload(
        reader: &mut Reader<'_>,
        _version: ProtocolVersion,
    ) -> Result<Self, CodecError> {
        Ok(Self {
            motion: Vec2::read(reader)?,
            jumping: reader.read_bool()?,
            sneaking: reader.read_bool()?,
        })
    }

    fn encode_payload(
        &self,
        writer: &mut Writer,
        _version: ProtocolVersion,
    ) -> Result<(), CodecError> {
        self.motion.write(writer);
        writer.write_bool(self.jumping);
        writer.write_bool(self.sneaking);
        Ok(())
    }

    fn dispatch(&self, handler: &mut dyn PacketHandler) -> bool {
        handler.handle_player_input(self)
    }
}

// =========================================================================
// Tests
// =========================================================================

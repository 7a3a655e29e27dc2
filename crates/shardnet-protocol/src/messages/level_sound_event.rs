//! World sound event broadcast. The baseline message: a flat field
//! list with no version gates.

use shardnet_wire::{Reader, Writer};

use crate::common::Vec3;
use crate::error::CodecError;
use crate::handler::PacketHandler;
use crate::packet::Packet;
use crate::version::ProtocolVersion;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LevelSoundEventPacket {
    pub sound: u8,
    pub position: Vec3,
    pub extra_data: i32,
    pub entity_type: i32,
    pub is_baby_mob: bool,
    pub disable_relative_volume: bool,
}

impl Packet for LevelSoundEventPacket {
    const ID: u16 = 24;

    fn decode_payload(
        reader: &mut Reader<'_>,
        _version: ProtocolVersion,
    ) -> Result<Self, CodecError> {
        Ok(Self {
            sound: reader.read_u8()?,
            position: Vec3::read(reader)?,
            extra_data: reader.read_var_i32()?,
            entity_type: reader.read_var_i32()?,
            is_baby_mob: reader.read_bool()?,
            disable_relative_volume: reader.read_bool()?,
        })
    }

    fn encode_payload(
        &self,
        writer: &mut Writer,
        _version: ProtocolVersion,
    ) -> Result<(), CodecError> {
        writer.write_u8(self.sound);
        self.position.write(writer);
        writer.write_var_i32(self.extra_data);
        writer.write_var_i32(self.entity_type);
        writer.write_bool(self.is_baby_mob);
        writer.write_bool(self.disable_relative_volume);
        Ok(())
    }

    fn dispatch(&self, handler: &mut dyn PacketHandler) -> bool {
        handler.handle_level_sound_event(self)
    }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trips_on_every_version() {
        let packet = LevelSoundEventPacket {
            sound: 42,
            position: Vec3::new(100.5, 64.0, -20.25),
            extra_data: -7,
            entity_type: 15,
            is_baby_mob: true,
            disable_relative_volume: false,
        };

        for version in [
            ProtocolVersion::MIN_SUPPORTED,
            ProtocolVersion::V120,
            ProtocolVersion::LATEST,
        ] {
            let bytes = packet.encode_default(version).unwrap();
            let (_, decoded) = LevelSoundEventPacket::decode(&bytes, version).unwrap();
            assert_eq!(decoded, packet);
        }
    }

    #[test]
    fn test_trailing_bytes_are_rejected() {
        let packet = LevelSoundEventPacket::default();
        let mut bytes = packet.encode_default(ProtocolVersion::LATEST).unwrap();
        bytes.push(0xff);

        let err = LevelSoundEventPacket::decode(&bytes, ProtocolVersion::LATEST).unwrap_err();
        assert_eq!(err, CodecError::TrailingBytes { count: 1 });
    }

    #[test]
    fn test_truncated_payload_is_wire_error() {
        let packet = LevelSoundEventPacket::default();
        let bytes = packet.encode_default(ProtocolVersion::LATEST).unwrap();

        let err =
            LevelSoundEventPacket::decode(&bytes[..bytes.len() - 1], ProtocolVersion::LATEST)
                .unwrap_err();
        assert!(matches!(err, CodecError::Wire(_)));
    }
}

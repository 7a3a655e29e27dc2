//! Per-player game mode change.
//!
//! The tick counter has existed at three historical widths: absent
//! below [`ProtocolVersion::V80`], an unsigned 32-bit varint up to
//! [`ProtocolVersion::V130`], and an unsigned 64-bit varint from
//! [`ProtocolVersion::V140`]. Encoding a tick too large for the
//! 32-bit window is rejected rather than truncated.

use shardnet_wire::{Reader, Writer};

use crate::common::{read_actor_unique_id, write_actor_unique_id};
use crate::error::CodecError;
use crate::handler::PacketHandler;
use crate::packet::Packet;
use crate::version::ProtocolVersion;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UpdatePlayerGameTypePacket {
    pub game_mode: i32,
    pub player_actor_unique_id: i64,
    /// Absent below [`ProtocolVersion::V80`] (decodes as 0).
    pub tick: u64,
}

impl Packet for UpdatePlayerGameTypePacket {
    const ID: u16 = 151;

    fn decode_payload(
        reader: &mut Reader<'_>,
        version: ProtocolVersion,
    ) -> Result<Self, CodecError> {
        Ok(Self {
            game_mode: reader.read_var_i32()?,
            player_actor_unique_id: read_actor_unique_id(reader)?,
            tick: if version >= ProtocolVersion::V140 {
                reader.read_var_u64()?
            } else if version >= ProtocolVersion::V80 {
                reader.read_var_u32()? as u64
            } else {
                0
            },
        })
    }

    fn encode_payload(
        &self,
        writer: &mut Writer,
        version: ProtocolVersion,
    ) -> Result<(), CodecError> {
        writer.write_var_i32(self.game_mode);
        write_actor_unique_id(writer, self.player_actor_unique_id);
        if version >= ProtocolVersion::V140 {
            writer.write_var_u64(self.tick);
        } else if version >= ProtocolVersion::V80 {
            let tick = u32::try_from(self.tick).map_err(|_| {
                CodecError::UnsupportedForVersion {
                    what: "64-bit tick counter",
                    version,
                }
            })?;
            writer.write_var_u32(tick);
        }
        Ok(())
    }

    fn dispatch(&self, handler: &mut dyn PacketHandler) -> bool {
        handler.handle_update_player_game_type(self)
    }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_round_trips_at_each_width() {
        let packet = UpdatePlayerGameTypePacket {
            game_mode: 2,
            player_actor_unique_id: -12345,
            tick: 500_000,
        };

        for version in [
            ProtocolVersion::V80,
            ProtocolVersion::V130,
            ProtocolVersion::V140,
            ProtocolVersion::LATEST,
        ] {
            let bytes = packet.encode_default(version).unwrap();
            let (_, decoded) =
                UpdatePlayerGameTypePacket::decode(&bytes, version).unwrap();
            assert_eq!(decoded, packet, "version {version}");
        }
    }

    #[test]
    fn test_tick_absent_below_v80() {
        let packet = UpdatePlayerGameTypePacket {
            game_mode: 1,
            player_actor_unique_id: 9,
            tick: 777,
        };
        let bytes = packet.encode_default(ProtocolVersion::V70).unwrap();
        let (_, decoded) =
            UpdatePlayerGameTypePacket::decode(&bytes, ProtocolVersion::V70).unwrap();
        assert_eq!(decoded.tick, 0);
    }

    #[test]
    fn test_wide_tick_rejected_in_the_32_bit_window() {
        let packet = UpdatePlayerGameTypePacket {
            game_mode: 0,
            player_actor_unique_id: 1,
            tick: u64::from(u32::MAX) + 1,
        };
        let err = packet.encode_default(ProtocolVersion::V100).unwrap_err();
        assert!(matches!(err, CodecError::UnsupportedForVersion { .. }));

        // Fine from V140 where the field is 64-bit.
        assert!(packet.encode_default(ProtocolVersion::V140).is_ok());
    }
}

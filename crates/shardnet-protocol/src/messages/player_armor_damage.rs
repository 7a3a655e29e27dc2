//! Armor durability loss notification.
//!
//! Two wholly different layouts: up to [`ProtocolVersion::V200`] a
//! bit-flag byte announces which of the fixed slots follow, in slot
//! order; from [`ProtocolVersion::V210`] the message is a plain
//! length-prefixed list of slot/damage pairs. The body slot only
//! joined the flag layout at [`ProtocolVersion::V120`] — encoding a
//! body pair for anything older is rejected, as are duplicate slot
//! pairs on the flag layout, which cannot represent them.

use shardnet_wire::{Reader, Writer};

use crate::error::CodecError;
use crate::handler::PacketHandler;
use crate::packet::Packet;
use crate::version::ProtocolVersion;

/// One armor slot. The discriminant is both the list-layout slot byte
/// and the bit position in the legacy flag byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArmorSlot {
    Head = 0,
    Torso = 1,
    Legs = 2,
    Feet = 3,
    Body = 4,
}

impl ArmorSlot {
    const FLAG_ORDER: [ArmorSlot; 5] = [
        Self::Head,
        Self::Torso,
        Self::Legs,
        Self::Feet,
        Self::Body,
    ];

    fn from_raw(raw: u8) -> Result<Self, CodecError> {
        Ok(match raw {
            0 => Self::Head,
            1 => Self::Torso,
            2 => Self::Legs,
            3 => Self::Feet,
            4 => Self::Body,
            _ => {
                return Err(CodecError::malformed(format!(
                    "unknown armor slot {raw}"
                )))
            }
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlayerArmorDamagePacket {
    /// Slot/damage pairs, in wire order.
    pub damage: Vec<(ArmorSlot, i32)>,
}

impl PlayerArmorDamagePacket {
    /// The first damage recorded for `slot`, if any.
    fn damage_for(&self, slot: ArmorSlot) -> Option<i32> {
        self.damage
            .iter()
            .find(|(s, _)| *s == slot)
            .map(|(_, d)| *d)
    }
}

impl Packet for PlayerArmorDamagePacket {
    const ID: u16 = 149;

    fn decode_payload(
        reader: &mut Reader<'_>,
        version: ProtocolVersion,
    ) -> Result<Self, CodecError> {
        let mut damage = Vec::new();
        if version >= ProtocolVersion::V210 {
            let count = reader.read_var_u32()? as usize;
            for _ in 0..count {
                let slot = ArmorSlot::from_raw(reader.read_u8()?)?;
                let amount = reader.read_var_i32()?;
                damage.push((slot, amount));
            }
        } else {
            let flags = reader.read_u8()?;
            for slot in ArmorSlot::FLAG_ORDER {
                if slot == ArmorSlot::Body && version < ProtocolVersion::V120 {
                    continue;
                }
                if flags & (1 << slot as u8) != 0 {
                    damage.push((slot, reader.read_var_i32()?));
                }
            }
        }
        Ok(Self { damage })
    }

    fn encode_payload(
        &self,
        writer: &mut Writer,
        version: ProtocolVersion,
    ) -> Result<(), CodecError> {
        if version >= ProtocolVersion::V210 {
            writer.write_var_u32(self.damage.len() as u32);
            for (slot, amount) in &self.damage {
                writer.write_u8(*slot as u8);
                writer.write_var_i32(*amount);
            }
            return Ok(());
        }

        if version < ProtocolVersion::V120 && self.damage_for(ArmorSlot::Body).is_some() {
            return Err(CodecError::UnsupportedForVersion {
                what: "body armor slot damage",
                version,
            });
        }

        // The flag byte can name each slot once; a second pair for the
        // same slot would be dropped, so it is rejected instead.
        let mut flags = 0u8;
        for (slot, _) in &self.damage {
            let bit = 1 << (*slot as u8);
            if flags & bit != 0 {
                return Err(CodecError::UnsupportedForVersion {
                    what: "duplicate armor slot damage",
                    version,
                });
            }
            flags |= bit;
        }
        writer.write_u8(flags);
        for slot in ArmorSlot::FLAG_ORDER {
            if let Some(amount) = self.damage_for(slot) {
                writer.write_var_i32(amount);
            }
        }
        Ok(())
    }

    fn dispatch(&self, handler: &mut dyn PacketHandler) -> bool {
        handler.handle_player_armor_damage(self)
    }
}

// =========================================================================
// Tests
// =========================================================================

//! The server's item type catalogue.
//!
//! Each entry carries an opaque component tree blob. The flat numeric
//! id, component flag, and item version fields only exist from
//! [`ProtocolVersion::V160`]; before that the string id and the tree
//! are the whole entry.

use shardnet_wire::{Reader, Writer};

use crate::common::NetString;
use crate::error::CodecError;
use crate::handler::PacketHandler;
use crate::packet::Packet;
use crate::tree::TreeBlob;
use crate::version::ProtocolVersion;

/// One item type registration.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemTypeEntry {
    pub string_id: NetString,
    /// Only on the wire from [`ProtocolVersion::V160`]; decodes as -1
    /// below the cut.
    pub numeric_id: i16,
    /// Only on the wire from [`ProtocolVersion::V160`].
    pub component_based: bool,
    /// Only on the wire from [`ProtocolVersion::V160`]; decodes as -1
    /// below the cut.
    pub item_version: i32,
    pub component_data: TreeBlob,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ItemRegistryPacket {
    pub entries: Vec<ItemTypeEntry>,
}

impl Packet for ItemRegistryPacket {
    const ID: u16 = 162;

    fn decode_payload(
        reader: &mut Reader<'_>,
        version: ProtocolVersion,
    ) -> Result<Self, CodecError> {
        let count = reader.read_var_u32()? as usize;
        let mut entries = Vec::with_capacity(count.min(4096));
        for _ in 0..count {
            let string_id = NetString::read(reader)?;
            let (numeric_id, component_based, item_version) =
                if version >= ProtocolVersion::V160 {
                    (
                        reader.read_i16()?,
                        reader.read_bool()?,
                        reader.read_var_i32()?,
                    )
                } else {
                    (-1, false, -1)
                };
            let component_data = TreeBlob::read(reader)?;
            entries.push(ItemTypeEntry {
                string_id,
                numeric_id,
                component_based,
                item_version,
                component_data,
            });
        }
        Ok(Self { entries })
    }

    fn encode_payload(
        &self,
        writer: &mut Writer,
        version: ProtocolVersion,
    ) -> Result<(), CodecError> {
        writer.write_var_u32(self.entries.len() as u32);
        for entry in &self.entries {
            entry.string_id.write(writer);
            if version >= ProtocolVersion::V160 {
                writer.write_i16(entry.numeric_id);
                writer.write_bool(entry.component_based);
                writer.write_var_i32(entry.item_version);
            }
            entry.component_data.write(writer);
        }
        Ok(())
    }

    fn dispatch(&self, handler: &mut dyn PacketHandler) -> bool {
        handler.handle_item_registry(self)
    }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ItemRegistryPacket {
        ItemRegistryPacket {
            entries: vec![
                ItemTypeEntry {
                    string_id: NetString::from("shard:iron_ingot"),
                    numeric_id: 265,
                    component_based: false,
                    item_version: 2,
                    component_data: TreeBlob::from_encoded(vec![0x0a, 0x00]),
                },
                ItemTypeEntry {
                    string_id: NetString::from("shard:custom_wand"),
                    numeric_id: 1001,
                    component_based: true,
                    item_version: 3,
                    component_data: TreeBlob::from_encoded(vec![0x0a, 0x01, 0x02]),
                },
            ],
        }
    }

    #[test]
    fn test_round_trips_on_latest() {
        let packet = sample();
        let bytes = packet.encode_default(ProtocolVersion::LATEST).unwrap();
        let (_, decoded) = ItemRegistryPacket::decode(&bytes, ProtocolVersion::LATEST).unwrap();
        assert_eq!(decoded, packet);
    }

    #[test]
    fn test_flat_fields_dropped_below_v160() {
        let packet = sample();
        let bytes = packet.encode_default(ProtocolVersion::V150).unwrap();
        let (_, decoded) = ItemRegistryPacket::decode(&bytes, ProtocolVersion::V150).unwrap();

        for entry in &decoded.entries {
            assert_eq!(entry.numeric_id, -1);
            assert!(!entry.component_based);
            assert_eq!(entry.item_version, -1);
        }
        assert_eq!(
            decoded.entries[1].component_data,
            packet.entries[1].component_data
        );
    }
}

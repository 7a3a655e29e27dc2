//! Client inventory manipulation requests.
//!
//! Each request is a tagged action stream decoded through the standard
//! action registry, followed by the text-filter strings typed into
//! anvils and the like.

use shardnet_wire::{Reader, Writer};

use crate::actions::{standard_registry, InventoryAction};
use crate::common::NetString;
use crate::error::CodecError;
use crate::handler::PacketHandler;
use crate::packet::Packet;
use crate::version::ProtocolVersion;

/// One batched request: id, actions, and filter text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InventoryRequest {
    pub request_id: i32,
    pub actions: Vec<InventoryAction>,
    pub filter_strings: Vec<NetString>,
    pub filter_string_cause: i32,
}

impl InventoryRequest {
    pub fn read(
        reader: &mut Reader<'_>,
        version: ProtocolVersion,
    ) -> Result<Self, CodecError> {
        let request_id = reader.read_var_i32()?;
        let action_count = reader.read_var_u32()? as usize;
        let mut actions = Vec::with_capacity(action_count.min(64));
        for _ in 0..action_count {
            let tag = reader.read_u8()?;
            actions.push(standard_registry().decode(tag, reader, version)?);
        }
        let filter_count = reader.read_var_u32()? as usize;
        let mut filter_strings = Vec::with_capacity(filter_count.min(64));
        for _ in 0..filter_count {
            filter_strings.push(NetString::read(reader)?);
        }
        let filter_string_cause = reader.read_i32()?;
        Ok(Self {
            request_id,
            actions,
            filter_strings,
            filter_string_cause,
        })
    }

    pub fn write(&self, writer: &mut Writer, version: ProtocolVersion) {
        writer.write_var_i32(self.request_id);
        writer.write_var_u32(self.actions.len() as u32);
        for action in &self.actions {
            action.write(writer, version);
        }
        writer.write_var_u32(self.filter_strings.len() as u32);
        for string in &self.filter_strings {
            string.write(writer);
        }
        writer.write_i32(self.filter_string_cause);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InventoryRequestPacket {
    pub requests: Vec<InventoryRequest>,
}

impl Packet for InventoryRequestPacket {
    const ID: u16 = 147;

    fn decode_payload(
        reader: &mut Reader<'_>,
        version: ProtocolVersion,
    ) -> Result<Self, CodecError> {
        let count = reader.read_var_u32()? as usize;
        let mut requests = Vec::with_capacity(count.min(64));
        for _ in 0..count {
            requests.push(InventoryRequest::read(reader, version)?);
        }
        Ok(Self { requests })
    }

    fn encode_payload(
        &self,
        writer: &mut Writer,
        version: ProtocolVersion,
    ) -> Result<(), CodecError> {
        writer.write_var_u32(self.requests.len() as u32);
        for request in &self.requests {
            request.write(writer, version);
        }
        Ok(())
    }

    fn dispatch(&self, handler: &mut dyn PacketHandler) -> bool {
        handler.handle_inventory_request(self)
    }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::inventory::{FullContainerName, SlotInfo};

    fn slot(container_id: u8, slot: u8) -> SlotInfo {
        SlotInfo {
            container: FullContainerName::new(container_id),
            slot,
            stack_id: 2,
        }
    }

    fn sample() -> InventoryRequestPacket {
        InventoryRequestPacket {
            requests: vec![InventoryRequest {
                request_id: -3,
                actions: vec![
                    InventoryAction::Take {
                        count: 1,
                        source: slot(28, 0),
                        destination: slot(12, 3),
                    },
                    InventoryAction::CraftRecipe {
                        recipe_id: 88,
                        repetitions: 2,
                    },
                ],
                filter_strings: vec![NetString::from("Renamed Sword")],
                filter_string_cause: 5,
            }],
        }
    }

    #[test]
    fn test_round_trips_on_latest() {
        let packet = sample();
        let bytes = packet.encode_default(ProtocolVersion::LATEST).unwrap();
        let (_, decoded) =
            InventoryRequestPacket::decode(&bytes, ProtocolVersion::LATEST).unwrap();
        assert_eq!(decoded, packet);
    }

    #[test]
    fn test_unknown_action_tag_kills_the_whole_request() {
        let packet = sample();
        let mut bytes = packet.encode_default(ProtocolVersion::LATEST).unwrap();
        // Two header bytes, request count, request id, action count,
        // then the first action tag.
        bytes[5] = 7;

        let err =
            InventoryRequestPacket::decode(&bytes, ProtocolVersion::LATEST).unwrap_err();
        assert_eq!(
            err,
            CodecError::UnrecognizedVariant {
                registry: "inventory action",
                tag: 7
            }
        );
    }
}

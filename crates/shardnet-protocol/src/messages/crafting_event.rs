//! Legacy crafting notification: which recipe was used and the stacks
//! that went in and came out. Stack bodies travel opaquely through
//! [`ItemStackWrapper`].

use shardnet_wire::{Reader, Writer};
use uuid::Uuid;

use crate::common::{read_uuid, write_uuid};
use crate::error::CodecError;
use crate::handler::PacketHandler;
use crate::packet::Packet;
use crate::types::inventory::ItemStackWrapper;
use crate::version::ProtocolVersion;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CraftingEventPacket {
    pub window_id: u8,
    pub window_type: i32,
    pub recipe_uuid: Uuid,
    pub input: Vec<ItemStackWrapper>,
    pub output: Vec<ItemStackWrapper>,
}

fn read_stacks(reader: &mut Reader<'_>) -> Result<Vec<ItemStackWrapper>, CodecError> {
    let count = reader.read_var_u32()? as usize;
    let mut stacks = Vec::with_capacity(count.min(128));
    for _ in 0..count {
        stacks.push(ItemStackWrapper::read(reader)?);
    }
    Ok(stacks)
}

fn write_stacks(writer: &mut Writer, stacks: &[ItemStackWrapper]) {
    writer.write_var_u32(stacks.len() as u32);
    for stack in stacks {
        stack.write(writer);
    }
}

impl Packet for CraftingEventPacket {
    const ID: u16 = 53;

    fn decode_payload(
        reader: &mut Reader<'_>,
        _version: ProtocolVersion,
    ) -> Result<Self, CodecError> {
        Ok(Self {
            window_id: reader.read_u8()?,
            window_type: reader.read_var_i32()?,
            recipe_uuid: read_uuid(reader)?,
            input: read_stacks(reader)?,
            output: read_stacks(reader)?,
        })
    }

    fn encode_payload(
        &self,
        writer: &mut Writer,
        _version: ProtocolVersion,
    ) -> Result<(), CodecError> {
        writer.write_u8(self.window_id);
        writer.write_var_i32(self.window_type);
        write_uuid(writer, &self.recipe_uuid);
        write_stacks(writer, &self.input);
        write_stacks(writer, &self.output);
        Ok(())
    }

    fn dispatch(&self, handler: &mut dyn PacketHandler) -> bool {
        handler.handle_crafting_event(self)
    }
}

// =========================================================================
// Tests
// =========================================================================

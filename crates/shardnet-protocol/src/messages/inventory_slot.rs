//! Single-slot content sync. Shares the versioned container
//! addressing tail with the full-content message; the slot's item
//! always follows it.

use shardnet_wire::{Reader, Writer};

use crate::error::CodecError;
use crate::handler::PacketHandler;
use crate::messages::inventory_content::{read_container_tail, write_container_tail};
use crate::packet::Packet;
use crate::types::inventory::{FullContainerName, ItemStackWrapper};
use crate::version::ProtocolVersion;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InventorySlotPacket {
    pub window_id: u32,
    pub slot: u32,
    /// Only on the wire from [`ProtocolVersion::V120`]; before
    /// [`ProtocolVersion::V130`] only its dynamic id travels.
    pub container: FullContainerName,
    /// Only on the wire from [`ProtocolVersion::V130`] up to (not
    /// including) [`ProtocolVersion::V140`].
    pub dynamic_container_size: u32,
    /// Only on the wire from [`ProtocolVersion::V140`].
    pub storage: ItemStackWrapper,
    pub item: ItemStackWrapper,
}

impl Packet for InventorySlotPacket {
    const ID: u16 = 50;

    fn decode_payload(
        reader: &mut Reader<'_>,
        version: ProtocolVersion,
    ) -> Result<Self, CodecError> {
        let window_id = reader.read_var_u32()?;
        let slot = reader.read_var_u32()?;
        let (container, dynamic_container_size, storage) =
            read_container_tail(reader, version)?;
        let item = ItemStackWrapper::read(reader)?;
        Ok(Self {
            window_id,
            slot,
            container,
            dynamic_container_size,
            storage,
            item,
        })
    }

    fn encode_payload(
        &self,
        writer: &mut Writer,
        version: ProtocolVersion,
    ) -> Result<(), CodecError> {
        writer.write_var_u32(self.window_id);
        writer.write_var_u32(self.slot);
        write_container_tail(
            writer,
            version,
            &self.container,
            self.dynamic_container_size,
            &self.storage,
        );
        self.item.write(writer);
        Ok(())
    }

    fn dispatch(&self, handler: &mut dyn PacketHandler) -> bool {
        handler.handle_inventory_slot(self)
    }
}

// =========================================================================
// Tests
// =========================================================================

//! Full-container content sync.
//!
//! The container addressing tail grew in steps: a bare dynamic id at
//! [`ProtocolVersion::V120`], the full container name plus a dynamic
//! size at [`ProtocolVersion::V130`], and the size replaced by a
//! storage stack at [`ProtocolVersion::V140`]. Below V120 the window
//! id alone addresses the container.

use shardnet_wire::{Reader, Writer};

use crate::error::CodecError;
use crate::handler::PacketHandler;
use crate::packet::Packet;
use crate::types::inventory::{FullContainerName, ItemStackWrapper};
use crate::version::ProtocolVersion;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InventoryContentPacket {
    pub window_id: u32,
    pub items: Vec<ItemStackWrapper>,
    /// Only on the wire from [`ProtocolVersion::V120`]; before
    /// [`ProtocolVersion::V130`] only its dynamic id travels.
    pub container: FullContainerName,
    /// Only on the wire from [`ProtocolVersion::V130`] up to (not
    /// including) [`ProtocolVersion::V140`].
    pub dynamic_container_size: u32,
    /// Only on the wire from [`ProtocolVersion::V140`].
    pub storage: ItemStackWrapper,
}

pub(super) fn read_container_tail(
    reader: &mut Reader<'_>,
    version: ProtocolVersion,
) -> Result<(FullContainerName, u32, ItemStackWrapper), CodecError> {
    let mut container = FullContainerName::default();
    let mut dynamic_container_size = 0;
    let mut storage = ItemStackWrapper::default();
    if version >= ProtocolVersion::V130 {
        container = FullContainerName::read(reader, version)?;
        if version >= ProtocolVersion::V140 {
            storage = ItemStackWrapper::read(reader)?;
        } else {
            dynamic_container_size = reader.read_var_u32()?;
        }
    } else if version >= ProtocolVersion::V120 {
        container.dynamic_id = Some(reader.read_var_u32()?);
    }
    Ok((container, dynamic_container_size, storage))
}

pub(super) fn write_container_tail(
    writer: &mut Writer,
    version: ProtocolVersion,
    container: &FullContainerName,
    dynamic_container_size: u32,
    storage: &ItemStackWrapper,
) {
    if version >= ProtocolVersion::V130 {
        container.write(writer, version);
        if version >= ProtocolVersion::V140 {
            storage.write(writer);
        } else {
            writer.write_var_u32(dynamic_container_size);
        }
    } else if version >= ProtocolVersion::V120 {
        writer.write_var_u32(container.dynamic_id.unwrap_or(0));
    }
}

impl Packet for InventoryContentPacket {
    const ID: u16 = 49;

    fn decode_payload(
        reader: &mut Reader<'_>,
        version: ProtocolVersion,
    ) -> Result<Self, CodecError> {
        let window_id = reader.read_var_u32()?;
        let count = reader.read_var_u32()? as usize;
        let mut items = Vec::with_capacity(count.min(256));
        for _ in 0..count {
            items.push(ItemStackWrapper::read(reader)?);
        }
        let (container, dynamic_container_size, storage) =
            read_container_tail(reader, version)?;
        Ok(Self {
            window_id,
            items,
            container,
            dynamic_container_size,
            storage,
        })
    }

    fn encode_payload(
        &self,
        writer: &mut Writer,
        version: ProtocolVersion,
    ) -> Result<(), CodecError> {
        writer.write_var_u32(self.window_id);
        writer.write_var_u32(self.items.len() as u32);
        for item in &self.items {
            item.write(writer);
        }
        write_container_tail(
            writer,
            version,
            &self.container,
            self.dynamic_container_size,
            &self.storage,
        );
        Ok(())
    }

    fn dispatch(&self, handler: &mut dyn PacketHandler) -> bool {
        handler.handle_inventory_content(self)
    }
}

// =========================================================================
// Tests
// =========================================================================

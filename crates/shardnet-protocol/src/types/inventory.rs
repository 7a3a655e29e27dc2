//! Container addressing for inventory requests.

use shardnet_wire::{Reader, Writer};

use crate::common::{read_optional, write_optional};
use crate::error::CodecError;
use crate::version::ProtocolVersion;

/// Identifies one container, with its dynamic id where the container
/// was created at runtime.
///
/// Three historical wire layouts:
/// - below [`ProtocolVersion::V120`]: the container byte alone;
/// - from V120: container byte + fixed 32-bit dynamic id (0 when the
///   container is static);
/// - from [`ProtocolVersion::V130`]: container byte + optional 32-bit
///   dynamic id, distinguishing "static" from "dynamic id 0".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FullContainerName {
    pub container_id: u8,
    pub dynamic_id: Option<u32>,
}

impl FullContainerName {
    pub fn new(container_id: u8) -> Self {
        Self {
            container_id,
            dynamic_id: None,
        }
    }

    pub fn read(
        reader: &mut Reader<'_>,
        version: ProtocolVersion,
    ) -> Result<Self, CodecError> {
        let container_id = reader.read_u8()?;
        let dynamic_id = if version >= ProtocolVersion::V130 {
            read_optional(reader, |r| Ok(r.read_u32()?))?
        } else if version >= ProtocolVersion::V120 {
            Some(reader.read_i32()? as u32)
        } else {
            None
        };
        Ok(Self {
            container_id,
            dynamic_id,
        })
    }

    pub fn write(&self, writer: &mut Writer, version: ProtocolVersion) {
        writer.write_u8(self.container_id);
        if version >= ProtocolVersion::V130 {
            write_optional(writer, self.dynamic_id.as_ref(), |w, v| w.write_u32(*v));
        } else if version >= ProtocolVersion::V120 {
            writer.write_i32(self.dynamic_id.unwrap_or(0) as i32);
        }
    }
}

/// An item stack travelling through a container message: the stack id
/// plus the stack body as an opaque, length-prefixed blob.
///
/// The codec carries the stack body without parsing it — item stack
/// internals belong to the item subsystem, not to the wire layer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ItemStackWrapper {
    pub stack_id: i32,
    pub stack: Vec<u8>,
}

impl ItemStackWrapper {
    pub fn read(reader: &mut Reader<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            stack_id: reader.read_var_i32()?,
            stack: reader.read_byte_array()?,
        })
    }

    pub fn write(&self, writer: &mut Writer) {
        writer.write_var_i32(self.stack_id);
        writer.write_byte_array(&self.stack);
    }
}

/// One slot reference inside an inventory request action: which
/// container, which slot, and the stack id the client believes is
/// there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SlotInfo {
    pub container: FullContainerName,
    pub slot: u8,
    pub stack_id: i32,
}

impl SlotInfo {
    pub fn read(
        reader: &mut Reader<'_>,
        version: ProtocolVersion,
    ) -> Result<Self, CodecError> {
        Ok(Self {
            container: FullContainerName::read(reader, version)?,
            slot: reader.read_u8()?,
            stack_id: reader.read_var_i32()?,
        })
    }

    pub fn write(&self, writer: &mut Writer, version: ProtocolVersion) {
        self.container.write(writer, version);
        writer.write_u8(self.slot);
        writer.write_var_i32(self.stack_id);
    }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn round_trip(name: FullContainerName, version: ProtocolVersion) -> FullContainerName {
        let mut writer = Writer::new();
        name.write(&mut writer, version);
        let bytes = writer.into_bytes();
        let mut reader = Reader::new(&bytes);
        let decoded = FullContainerName::read(&mut reader, version).unwrap();
        assert!(reader.is_empty());
        decoded
    }

    #[test]
    fn test_container_name_round_trips_on_each_layout() {
        let name = FullContainerName {
            container_id: 12,
            dynamic_id: Some(7),
        };
        assert_eq!(round_trip(name, ProtocolVersion::LATEST), name);
        assert_eq!(round_trip(name, ProtocolVersion::V120), name);

        // Below V120 the dynamic id is not representable at all.
        let decoded = round_trip(name, ProtocolVersion::V100);
        assert_eq!(decoded.container_id, 12);
        assert_eq!(decoded.dynamic_id, None);
    }

    #[test]
    fn test_v120_layout_conflates_static_with_dynamic_zero() {
        let name = FullContainerName {
            container_id: 3,
            dynamic_id: None,
        };
        let decoded = round_trip(name, ProtocolVersion::V120);
        // The fixed-width layout has no absent state; None comes back
        // as dynamic id 0.
        assert_eq!(decoded.dynamic_id, Some(0));

        // The optional layout keeps the distinction.
        assert_eq!(round_trip(name, ProtocolVersion::V130), name);
    }

    #[test]
    fn test_stack_wrapper_carries_the_body_opaquely() {
        let wrapper = ItemStackWrapper {
            stack_id: -9,
            stack: vec![0xff, 0x00, 0xab],
        };
        let mut writer = Writer::new();
        wrapper.write(&mut writer);
        let bytes = writer.into_bytes();
        let mut reader = Reader::new(&bytes);
        assert_eq!(ItemStackWrapper::read(&mut reader).unwrap(), wrapper);
        assert!(reader.is_empty());
    }

    #[test]
    fn test_slot_info_round_trips() {
        let slot = SlotInfo {
            container: FullContainerName::new(28),
            slot: 4,
            stack_id: -3,
        };
        let mut writer = Writer::new();
        slot.write(&mut writer, ProtocolVersion::LATEST);
        let bytes = writer.into_bytes();
        let mut reader = Reader::new(&bytes);
        assert_eq!(
            SlotInfo::read(&mut reader, ProtocolVersion::LATEST).unwrap(),
            slot
        );
    }
}

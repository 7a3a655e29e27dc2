//! Show or hide HUD elements.
//!
//! The element and visibility discriminants widened from an unsigned
//! byte to a signed varint at [`ProtocolVersion::V170`].

use shardnet_wire::{Reader, Writer};

use crate::error::CodecError;
use crate::handler::PacketHandler;
use crate::packet::Packet;
use crate::types::hud::{HudElement, HudVisibility};
use crate::version::ProtocolVersion;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetHudPacket {
    pub elements: Vec<HudElement>,
    pub visibility: HudVisibility,
}

fn read_discriminant(
    reader: &mut Reader<'_>,
    version: ProtocolVersion,
) -> Result<i32, CodecError> {
    if version >= ProtocolVersion::V170 {
        Ok(reader.read_var_i32()?)
    } else {
        Ok(reader.read_u8()? as i32)
    }
}

fn write_discriminant(writer: &mut Writer, version: ProtocolVersion, raw: i32) {
    if version >= ProtocolVersion::V170 {
        writer.write_var_i32(raw);
    } else {
        writer.write_u8(raw as u8);
    }
}

impl Packet for SetHudPacket {
    const ID: u16 = 308;

    fn decode_payload(
        reader: &mut Reader<'_>,
        version: ProtocolVersion,
    ) -> Result<Self, CodecError> {
        let count = reader.read_var_u32()? as usize;
        let mut elements = Vec::with_capacity(count.min(64));
        for _ in 0..count {
            elements.push(HudElement::from_raw(read_discriminant(reader, version)?)?);
        }
        let visibility = HudVisibility::from_raw(read_discriminant(reader, version)?)?;
        Ok(Self {
            elements,
            visibility,
        })
    }

    fn encode_payload(
        &self,
        writer: &mut Writer,
        version: ProtocolVersion,
    ) -> Result<(), CodecError> {
        writer.write_var_u32(self.elements.len() as u32);
        for element in &self.elements {
            write_discriminant(writer, version, element.to_raw());
        }
        write_discriminant(writer, version, self.visibility.to_raw());
        Ok(())
    }

    fn dispatch(&self, handler: &mut dyn PacketHandler) -> bool {
        handler.handle_set_hud(self)
    }
}

// =========================================================================
// Tests
// =========================================================================

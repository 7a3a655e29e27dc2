//! Server-driven camera control.
//!
//! Below [`ProtocolVersion::V30`] the whole payload is a legacy tree
//! blob; from V30 it is a flat list of optional instructions, growing
//! new fields at [`ProtocolVersion::V120`] (target, remove-target)
//! and [`ProtocolVersion::V200`] (field of view). The two shapes are
//! populated by separate constructors; encoding a shape the version
//! does not use fails with [`CodecError::NotPopulated`].

use shardnet_wire::{Reader, Writer};

use crate::common::{read_optional, write_optional};
use crate::error::CodecError;
use crate::handler::PacketHandler;
use crate::packet::Packet;
use crate::tree::TreeBlob;
use crate::types::camera::{
    CameraFadeInstruction, CameraFovInstruction, CameraSetInstruction,
    CameraTargetInstruction,
};
use crate::version::ProtocolVersion;

/// The flat instruction list used from [`ProtocolVersion::V30`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CameraInstructions {
    pub set: Option<CameraSetInstruction>,
    pub clear: Option<bool>,
    pub fade: Option<CameraFadeInstruction>,
    /// Only on the wire from [`ProtocolVersion::V120`].
    pub target: Option<CameraTargetInstruction>,
    /// Only on the wire from [`ProtocolVersion::V120`].
    pub remove_target: Option<bool>,
    /// Only on the wire from [`ProtocolVersion::V200`].
    pub field_of_view: Option<CameraFovInstruction>,
}

#[derive(Debug, Clone, PartialEq)]
enum CameraPayload {
    Flat(CameraInstructions),
    Legacy(TreeBlob),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CameraInstructionPacket {
    payload: CameraPayload,
}

impl CameraInstructionPacket {
    /// Builds the modern flat form, usable from
    /// [`ProtocolVersion::V30`].
    pub fn from_instructions(instructions: CameraInstructions) -> Self {
        Self {
            payload: CameraPayload::Flat(instructions),
        }
    }

    /// Builds the legacy tree form, usable below
    /// [`ProtocolVersion::V30`].
    pub fn legacy(tree: TreeBlob) -> Self {
        Self {
            payload: CameraPayload::Legacy(tree),
        }
    }

    pub fn instructions(&self) -> Option<&CameraInstructions> {
        match &self.payload {
            CameraPayload::Flat(instructions) => Some(instructions),
            CameraPayload::Legacy(_) => None,
        }
    }

    pub fn legacy_tree(&self) -> Option<&TreeBlob> {
        match &self.payload {
            CameraPayload::Legacy(tree) => Some(tree),
            CameraPayload::Flat(_) => None,
        }
    }
}

impl Packet for CameraInstructionPacket {
    const ID: u16 = 300;

    fn decode_payload(
        reader: &mut Reader<'_>,
        version: ProtocolVersion,
    ) -> Result<Self, CodecError> {
        if version < ProtocolVersion::V30 {
            return Ok(Self::legacy(TreeBlob::read(reader)?));
        }

        let mut instructions = CameraInstructions {
            set: read_optional(reader, |r| CameraSetInstruction::read(r, version))?,
            clear: read_optional(reader, |r| Ok(r.read_bool()?))?,
            fade: read_optional(reader, CameraFadeInstruction::read)?,
            ..CameraInstructions::default()
        };
        if version >= ProtocolVersion::V120 {
            instructions.target = read_optional(reader, CameraTargetInstruction::read)?;
            instructions.remove_target = read_optional(reader, |r| Ok(r.read_bool()?))?;
            if version >= ProtocolVersion::V200 {
                instructions.field_of_view =
                    read_optional(reader, CameraFovInstruction::read)?;
            }
        }
        Ok(Self::from_instructions(instructions))
    }

    fn encode_payload(
        &self,
        writer: &mut Writer,
        version: ProtocolVersion,
    ) -> Result<(), CodecError> {
        if version < ProtocolVersion::V30 {
            let tree = self.legacy_tree().ok_or(CodecError::NotPopulated {
                what: "legacy camera instruction tree",
            })?;
            tree.write(writer);
            return Ok(());
        }

        let instructions = self.instructions().ok_or(CodecError::NotPopulated {
            what: "flat camera instructions",
        })?;
        write_optional(writer, instructions.set.as_ref(), |w, v| {
            v.write(w, version)
        });
        write_optional(writer, instructions.clear.as_ref(), |w, v| w.write_bool(*v));
        write_optional(writer, instructions.fade.as_ref(), |w, v| v.write(w));
        if version >= ProtocolVersion::V120 {
            write_optional(writer, instructions.target.as_ref(), |w, v| v.write(w));
            write_optional(writer, instructions.remove_target.as_ref(), |w, v| {
                w.write_bool(*v)
            });
            if version >= ProtocolVersion::V200 {
                write_optional(writer, instructions.field_of_view.as_ref(), |w, v| {
                    v.write(w)
                });
            }
        }
        Ok(())
    }

    fn dispatch(&self, handler: &mut dyn PacketHandler) -> bool {
        handler.handle_camera_instruction(self)
    }
}

// =========================================================================
// Tests
// =========================================================================

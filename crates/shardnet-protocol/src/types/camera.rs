//! Camera instruction sub-records.
//!
//! Every field that steers the client camera is optional — an
//! instruction only overrides what it names. Float components are
//! finite-checked on read; a NaN camera position is rejected at the
//! codec boundary.

use shardnet_wire::{Reader, Writer};

use crate::common::{read_finite_f32, read_optional, write_optional, Vec2, Vec3};
use crate::error::CodecError;
use crate::version::ProtocolVersion;

/// Easing applied to a camera movement: curve type byte plus duration
/// in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraEase {
    pub ease_type: u8,
    pub duration: f32,
}

impl CameraEase {
    pub fn read(reader: &mut Reader<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            ease_type: reader.read_u8()?,
            duration: read_finite_f32(reader, "camera ease duration")?,
        })
    }

    pub fn write(&self, writer: &mut Writer) {
        writer.write_u8(self.ease_type);
        writer.write_f32(self.duration);
    }
}

/// Camera orientation: pitch and yaw in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraRotation {
    pub pitch: f32,
    pub yaw: f32,
}

impl CameraRotation {
    pub fn read(reader: &mut Reader<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            pitch: read_finite_f32(reader, "camera rotation pitch")?,
            yaw: read_finite_f32(reader, "camera rotation yaw")?,
        })
    }

    pub fn write(&self, writer: &mut Writer) {
        writer.write_f32(self.pitch);
        writer.write_f32(self.yaw);
    }
}

/// Places the camera on a preset, optionally easing into position.
///
/// The view offset, entity offset, and ignore-starting-values fields
/// only exist from their respective protocol revisions; below those
/// cuts they are never on the wire.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CameraSetInstruction {
    pub preset: u32,
    pub ease: Option<CameraEase>,
    pub position: Option<Vec3>,
    pub rotation: Option<CameraRotation>,
    pub facing: Option<Vec3>,
    /// Only on the wire from [`ProtocolVersion::V120`].
    pub view_offset: Option<Vec2>,
    /// Only on the wire from [`ProtocolVersion::V140`].
    pub entity_offset: Option<Vec3>,
    pub default_preset: Option<bool>,
    /// Only on the wire from [`ProtocolVersion::V190`].
    pub ignore_starting_values: bool,
}

impl CameraSetInstruction {
    pub fn read(
        reader: &mut Reader<'_>,
        version: ProtocolVersion,
    ) -> Result<Self, CodecError> {
        let preset = reader.read_u32()?;
        let ease = read_optional(reader, CameraEase::read)?;
        let position = read_optional(reader, Vec3::read)?;
        let rotation = read_optional(reader, CameraRotation::read)?;
        let facing = read_optional(reader, Vec3::read)?;
        let view_offset = if version >= ProtocolVersion::V120 {
            read_optional(reader, Vec2::read)?
        } else {
            None
        };
        let entity_offset = if version >= ProtocolVersion::V140 {
            read_optional(reader, Vec3::read)?
        } else {
            None
        };
        let default_preset = read_optional(reader, |r| Ok(r.read_bool()?))?;
        let ignore_starting_values = if version >= ProtocolVersion::V190 {
            reader.read_bool()?
        } else {
            false
        };
        Ok(Self {
            preset,
            ease,
            position,
            rotation,
            facing,
            view_offset,
            entity_offset,
            default_preset,
            ignore_starting_values,
        })
    }

    pub fn write(&self, writer: &mut Writer, version: ProtocolVersion) {
        writer.write_u32(self.preset);
        write_optional(writer, self.ease.as_ref(), |w, v| v.write(w));
        write_optional(writer, self.position.as_ref(), |w, v| v.write(w));
        write_optional(writer, self.rotation.as_ref(), |w, v| v.write(w));
        write_optional(writer, self.facing.as_ref(), |w, v| v.write(w));
        if version >= ProtocolVersion::V120 {
            write_optional(writer, self.view_offset.as_ref(), |w, v| v.write(w));
        }
        if version >= ProtocolVersion::V140 {
            write_optional(writer, self.entity_offset.as_ref(), |w, v| v.write(w));
        }
        write_optional(writer, self.default_preset.as_ref(), |w, v| w.write_bool(*v));
        if version >= ProtocolVersion::V190 {
            writer.write_bool(self.ignore_starting_values);
        }
    }
}

/// Screen fade timing: seconds to fade in, hold, and fade out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraFadeTime {
    pub fade_in: f32,
    pub hold: f32,
    pub fade_out: f32,
}

impl CameraFadeTime {
    pub fn read(reader: &mut Reader<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            fade_in: read_finite_f32(reader, "camera fade-in time")?,
            hold: read_finite_f32(reader, "camera fade hold time")?,
            fade_out: read_finite_f32(reader, "camera fade-out time")?,
        })
    }

    pub fn write(&self, writer: &mut Writer) {
        writer.write_f32(self.fade_in);
        writer.write_f32(self.hold);
        writer.write_f32(self.fade_out);
    }
}

/// Fade overlay color, each channel in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraFadeColor {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
}

impl CameraFadeColor {
    pub fn read(reader: &mut Reader<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            red: read_finite_f32(reader, "camera fade red")?,
            green: read_finite_f32(reader, "camera fade green")?,
            blue: read_finite_f32(reader, "camera fade blue")?,
        })
    }

    pub fn write(&self, writer: &mut Writer) {
        writer.write_f32(self.red);
        writer.write_f32(self.green);
        writer.write_f32(self.blue);
    }
}

/// Fades the screen to a color and back.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CameraFadeInstruction {
    pub time: Option<CameraFadeTime>,
    pub color: Option<CameraFadeColor>,
}

impl CameraFadeInstruction {
    pub fn read(reader: &mut Reader<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            time: read_optional(reader, CameraFadeTime::read)?,
            color: read_optional(reader, CameraFadeColor::read)?,
        })
    }

    pub fn write(&self, writer: &mut Writer) {
        write_optional(writer, self.time.as_ref(), |w, v| v.write(w));
        write_optional(writer, self.color.as_ref(), |w, v| v.write(w));
    }
}

/// Locks the camera onto an actor. Only on the wire from
/// [`ProtocolVersion::V120`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraTargetInstruction {
    pub center_offset: Option<Vec3>,
    pub actor_unique_id: i64,
}

impl CameraTargetInstruction {
    pub fn read(reader: &mut Reader<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            center_offset: read_optional(reader, Vec3::read)?,
            actor_unique_id: reader.read_i64()?,
        })
    }

    pub fn write(&self, writer: &mut Writer) {
        write_optional(writer, self.center_offset.as_ref(), |w, v| v.write(w));
        writer.write_i64(self.actor_unique_id);
    }
}

/// Overrides the camera field of view. Only on the wire from
/// [`ProtocolVersion::V200`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraFovInstruction {
    pub field_of_view: f32,
    pub ease_time: f32,
    pub ease_type: u8,
    pub clear: bool,
}

impl CameraFovInstruction {
    pub fn read(reader: &mut Reader<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            field_of_view: read_finite_f32(reader, "camera field of view")?,
            ease_time: read_finite_f32(reader, "camera fov ease time")?,
            ease_type: reader.read_u8()?,
            clear: reader.read_bool()?,
        })
    }

    pub fn write(&self, writer: &mut Writer) {
        writer.write_f32(self.field_of_view);
        writer.write_f32(self.ease_time);
        writer.write_u8(self.ease_type);
        writer.write_bool(self.clear);
    }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_instruction_round_trips_on_latest() {
        let instruction = CameraSetInstruction {
            preset: 7,
            ease: Some(CameraEase {
                ease_type: 2,
                duration: 1.5,
            }),
            position: Some(Vec3::new(1.0, 64.0, -3.5)),
            rotation: None,
            facing: None,
            view_offset: Some(Vec2::new(0.5, -0.5)),
            entity_offset: None,
            default_preset: Some(true),
            ignore_starting_values: true,
        };

        let mut writer = Writer::new();
        instruction.write(&mut writer, ProtocolVersion::LATEST);

        let bytes = writer.into_bytes();
        let mut reader = Reader::new(&bytes);
        let decoded =
            CameraSetInstruction::read(&mut reader, ProtocolVersion::LATEST).unwrap();
        assert_eq!(decoded, instruction);
        assert!(reader.is_empty());
    }

    #[test]
    fn test_set_instruction_omits_gated_fields_on_old_versions() {
        let instruction = CameraSetInstruction {
            preset: 1,
            ..CameraSetInstruction::default()
        };

        let mut old = Writer::new();
        instruction.write(&mut old, ProtocolVersion::V100);
        let mut new = Writer::new();
        instruction.write(&mut new, ProtocolVersion::LATEST);

        // Three extra bytes on latest: view offset, entity offset, and
        // ignore-starting-values.
        assert_eq!(new.len(), old.len() + 3);
    }

    #[test]
    fn test_fade_instruction_round_trips() {
        let instruction = CameraFadeInstruction {
            time: Some(CameraFadeTime {
                fade_in: 0.25,
                hold: 1.0,
                fade_out: 0.25,
            }),
            color: Some(CameraFadeColor {
                red: 1.0,
                green: 0.0,
                blue: 0.0,
            }),
        };

        let mut writer = Writer::new();
        instruction.write(&mut writer);

        let bytes = writer.into_bytes();
        let mut reader = Reader::new(&bytes);
        assert_eq!(CameraFadeInstruction::read(&mut reader).unwrap(), instruction);
    }

    #[test]
    fn test_non_finite_fade_time_is_rejected() {
        let mut writer = Writer::new();
        writer.write_bool(true);
        writer.write_f32(f32::INFINITY);
        writer.write_f32(1.0);
        writer.write_f32(1.0);
        writer.write_bool(false);

        let bytes = writer.into_bytes();
        let mut reader = Reader::new(&bytes);
        let err = CameraFadeInstruction::read(&mut reader).unwrap_err();
        assert!(matches!(err, CodecError::Malformed { .. }));
    }
}

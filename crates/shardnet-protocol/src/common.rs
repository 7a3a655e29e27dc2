//! Shared value codecs used by many messages: strings, optionals,
//! UUIDs, vectors, and block positions.
//!
//! These are the building blocks one level above raw primitives — the
//! types the wire crate is deliberately ignorant of because their
//! layouts are protocol conventions, not byte-level facts.

use shardnet_wire::{Reader, Writer};
use uuid::Uuid;

use crate::error::CodecError;

// ---------------------------------------------------------------------------
// Strings
// ---------------------------------------------------------------------------

/// A length-prefixed wire string.
///
/// Stored as raw bytes, not `String`: the protocol passes invalid
/// UTF-8 through unchanged so that decode-then-encode reproduces the
/// input byte-for-byte. Use [`NetString::to_string_lossy`] when a
/// human-readable rendering is all that's needed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NetString(pub Vec<u8>);

impl NetString {
    pub fn read(reader: &mut Reader<'_>) -> Result<Self, CodecError> {
        Ok(Self(reader.read_string()?))
    }

    pub fn write(&self, writer: &mut Writer) {
        writer.write_string(&self.0);
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn to_string_lossy(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.0)
    }
}

impl From<&str> for NetString {
    fn from(s: &str) -> Self {
        Self(s.as_bytes().to_vec())
    }
}

impl From<String> for NetString {
    fn from(s: String) -> Self {
        Self(s.into_bytes())
    }
}

impl PartialEq<&str> for NetString {
    fn eq(&self, other: &&str) -> bool {
        self.0 == other.as_bytes()
    }
}

impl std::fmt::Display for NetString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_string_lossy())
    }
}

// ---------------------------------------------------------------------------
// Optionals
// ---------------------------------------------------------------------------

/// Reads an optional value: one presence byte, then the value if the
/// byte was nonzero.
///
/// Absence yields `None`, never a default placeholder. Whether the
/// field exists *at all* in the negotiated version is the caller's
/// decision — this helper only handles "present but unset" versus
/// "present and set".
pub fn read_optional<'a, T>(
    reader: &mut Reader<'a>,
    read: impl FnOnce(&mut Reader<'a>) -> Result<T, CodecError>,
) -> Result<Option<T>, CodecError> {
    if reader.read_bool()? {
        Ok(Some(read(reader)?))
    } else {
        Ok(None)
    }
}

/// Writes an optional value: presence byte, then the value if present.
pub fn write_optional<T>(
    writer: &mut Writer,
    value: Option<&T>,
    write: impl FnOnce(&mut Writer, &T),
) {
    match value {
        Some(v) => {
            writer.write_bool(true);
            write(writer, v);
        }
        None => writer.write_bool(false),
    }
}

// ---------------------------------------------------------------------------
// UUIDs
// ---------------------------------------------------------------------------

/// Reads a UUID as two 64-bit halves, most-significant half first,
/// each little-endian on the wire.
pub fn read_uuid(reader: &mut Reader<'_>) -> Result<Uuid, CodecError> {
    let high = reader.read_u64()?;
    let low = reader.read_u64()?;
    Ok(Uuid::from_u64_pair(high, low))
}

/// Writes a UUID in the layout [`read_uuid`] expects.
pub fn write_uuid(writer: &mut Writer, uuid: &Uuid) {
    let (high, low) = uuid.as_u64_pair();
    writer.write_u64(high);
    writer.write_u64(low);
}

// ---------------------------------------------------------------------------
// Floats with finiteness requirements
// ---------------------------------------------------------------------------

/// Reads an `f32` that must be finite.
///
/// Positions and rotations reject NaN/infinity at the codec boundary;
/// letting them through has historically crashed consumers much later,
/// far from the connection that sent them.
pub fn read_finite_f32(reader: &mut Reader<'_>, field: &str) -> Result<f32, CodecError> {
    let value = reader.read_f32()?;
    if !value.is_finite() {
        return Err(CodecError::malformed(format!(
            "non-finite float in {field}"
        )));
    }
    Ok(value)
}

// ---------------------------------------------------------------------------
// Vectors and positions
// ---------------------------------------------------------------------------

/// A 2-component float vector (two LE f32).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn read(reader: &mut Reader<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            x: read_finite_f32(reader, "vec2.x")?,
            y: read_finite_f32(reader, "vec2.y")?,
        })
    }

    pub fn write(&self, writer: &mut Writer) {
        writer.write_f32(self.x);
        writer.write_f32(self.y);
    }
}

/// A 3-component float vector (three LE f32).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn read(reader: &mut Reader<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            x: read_finite_f32(reader, "vec3.x")?,
            y: read_finite_f32(reader, "vec3.y")?,
            z: read_finite_f32(reader, "vec3.z")?,
        })
    }

    pub fn write(&self, writer: &mut Writer) {
        writer.write_f32(self.x);
        writer.write_f32(self.y);
        writer.write_f32(self.z);
    }
}

/// A block-grid position: zig-zag varint x and z, unsigned varint y.
///
/// The asymmetric y encoding is a protocol convention — world height
/// is non-negative on the wire even though x/z span the whole map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BlockPos {
    pub x: i32,
    pub y: u32,
    pub z: i32,
}

impl BlockPos {
    pub fn new(x: i32, y: u32, z: i32) -> Self {
        Self { x, y, z }
    }

    pub fn read(reader: &mut Reader<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            x: reader.read_var_i32()?,
            y: reader.read_var_u32()?,
            z: reader.read_var_i32()?,
        })
    }

    pub fn write(&self, writer: &mut Writer) {
        writer.write_var_i32(self.x);
        writer.write_var_u32(self.y);
        writer.write_var_i32(self.z);
    }
}

/// Reads an actor-unique id (zig-zag 64-bit varint).
pub fn read_actor_unique_id(reader: &mut Reader<'_>) -> Result<i64, CodecError> {
    Ok(reader.read_var_i64()?)
}

/// Writes an actor-unique id.
pub fn write_actor_unique_id(writer: &mut Writer, id: i64) {
    writer.write_var_i64(id);
}

// =========================================================================
// Tests
// =========================================================================

//! Forward-only read cursor over a borrowed byte buffer.

use crate::{MAX_VARINT32_BYTES, MAX_VARINT64_BYTES, WireError};

/// A bounds-checked read cursor over a byte slice.
///
/// The reader owns a position invariant: `position() <= len()`. Reads
/// advance the position; a failed read leaves the position where it
/// was, so a decode error never leaves the cursor in the middle of a
/// half-consumed value. There is no backward seeking.
///
/// The reader borrows its input — decoding a message does not copy the
/// payload until individual fields ask for owned data.
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    /// Creates a reader over `buf`, positioned at the start.
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Current cursor position in bytes from the start of the buffer.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Number of bytes left to read.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Returns `true` once every byte has been consumed.
    pub fn is_empty(&self) -> bool {
        self.pos == self.buf.len()
    }

    /// Takes the next `n` bytes as a borrowed slice.
    pub fn take(&mut self, n: usize) -> Result<&'a [u8], WireError> {
        if n > self.remaining() {
            return Err(WireError::Truncated {
                needed: n,
                remaining: self.remaining(),
            });
        }
        let slice = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    // -----------------------------------------------------------------------
    // Fixed-width values
    // -----------------------------------------------------------------------

    pub fn read_u8(&mut self) -> Result<u8, WireError> {
        Ok(self.take(1)?[0])
    }

    /// Reads one byte as a boolean. Any nonzero byte decodes as `true`;
    /// legacy peers are known to emit values other than 0/1 here.
    pub fn read_bool(&mut self) -> Result<bool, WireError> {
        Ok(self.read_u8()? != 0)
    }

    pub fn read_u16(&mut self) -> Result<u16, WireError> {
        Ok(u16::from_le_bytes(self.take_array()?))
    }

    pub fn read_i16(&mut self) -> Result<i16, WireError> {
        Ok(i16::from_le_bytes(self.take_array()?))
    }

    pub fn read_u32(&mut self) -> Result<u32, WireError> {
        Ok(u32::from_le_bytes(self.take_array()?))
    }

    pub fn read_i32(&mut self) -> Result<i32, WireError> {
        Ok(i32::from_le_bytes(self.take_array()?))
    }

    pub fn read_u64(&mut self) -> Result<u64, WireError> {
        Ok(u64::from_le_bytes(self.take_array()?))
    }

    pub fn read_i64(&mut self) -> Result<i64, WireError> {
        Ok(i64::from_le_bytes(self.take_array()?))
    }

    pub fn read_f32(&mut self) -> Result<f32, WireError> {
        Ok(f32::from_le_bytes(self.take_array()?))
    }

    pub fn read_f64(&mut self) -> Result<f64, WireError> {
        Ok(f64::from_le_bytes(self.take_array()?))
    }

    // -----------------------------------------------------------------------
    // Variable-length integers
    // -----------------------------------------------------------------------

    /// Reads an unsigned 32-bit varint (at most 5 bytes).
    pub fn read_var_u32(&mut self) -> Result<u32, WireError> {
        let start = self.pos;
        let mut value: u32 = 0;
        for i in 0..MAX_VARINT32_BYTES {
            let byte = match self.read_u8() {
                Ok(b) => b,
                Err(e) => {
                    self.pos = start;
                    return Err(e);
                }
            };
            value |= u32::from(byte & 0x7f) << (i * 7);
            if byte & 0x80 == 0 {
                return Ok(value);
            }
        }
        self.pos = start;
        Err(WireError::VarIntTooLong {
            max_bytes: MAX_VARINT32_BYTES,
        })
    }

    /// Reads an unsigned 64-bit varint (at most 10 bytes).
    pub fn read_var_u64(&mut self) -> Result<u64, WireError> {
        let start = self.pos;
        let mut value: u64 = 0;
        for i in 0..MAX_VARINT64_BYTES {
            let byte = match self.read_u8() {
                Ok(b) => b,
                Err(e) => {
                    self.pos = start;
                    return Err(e);
                }
            };
            value |= u64::from(byte & 0x7f) << (i * 7);
            if byte & 0x80 == 0 {
                return Ok(value);
            }
        }
        self.pos = start;
        Err(WireError::VarIntTooLong {
            max_bytes: MAX_VARINT64_BYTES,
        })
    }

    /// Reads a signed 32-bit varint (zig-zag mapped).
    pub fn read_var_i32(&mut self) -> Result<i32, WireError> {
        let raw = self.read_var_u32()?;
        Ok(((raw >> 1) as i32) ^ -((raw & 1) as i32))
    }

    /// Reads a signed 64-bit varint (zig-zag mapped).
    pub fn read_var_i64(&mut self) -> Result<i64, WireError> {
        let raw = self.read_var_u64()?;
        Ok(((raw >> 1) as i64) ^ -((raw & 1) as i64))
    }

    // -----------------------------------------------------------------------
    // Length-prefixed data
    // -----------------------------------------------------------------------

    /// Reads a length-prefixed byte array (unsigned varint count + raw
    /// bytes) into an owned vector.
    pub fn read_byte_array(&mut self) -> Result<Vec<u8>, WireError> {
        let start = self.pos;
        let len = self.read_var_u32()? as usize;
        match self.take(len) {
            Ok(bytes) => Ok(bytes.to_vec()),
            Err(e) => {
                self.pos = start;
                Err(e)
            }
        }
    }

    /// Reads a length-prefixed string as raw bytes.
    ///
    /// The contents are intentionally not validated as UTF-8: whatever
    /// byte sequence the peer sent is preserved so that re-encoding
    /// reproduces the input exactly.
    pub fn read_string(&mut self) -> Result<Vec<u8>, WireError> {
        self.read_byte_array()
    }

    fn take_array<const N: usize>(&mut self) -> Result<[u8; N], WireError> {
        let slice = self.take(N)?;
        let mut array = [0u8; N];
        array.copy_from_slice(slice);
        Ok(array)
    }
}

// =========================================================================
// Tests
// =========================================================================

//! Byte-level primitives for the Shardnet wire format.
//!
//! This crate is the bottom of the codec stack. It knows nothing about
//! protocol versions or message layouts — it only knows how to move
//! primitive values in and out of a contiguous byte buffer:
//!
//! - **Reader** ([`Reader`]) — a forward-only cursor over a borrowed
//!   byte slice. Every read is bounds-checked; reading past the end
//!   fails with [`WireError::Truncated`] and consumes nothing.
//! - **Writer** ([`Writer`]) — an append-only buffer. Writes cannot
//!   fail, so the write API is infallible.
//! - **Errors** ([`WireError`]) — what can go wrong at the byte level.
//!
//! # Encoding conventions
//!
//! Fixed-width integers and floats are little-endian. Variable-length
//! integers use one continuation bit (the MSB) per byte with 7-bit
//! groups in little-endian order; signed variants are zig-zag mapped
//! onto the unsigned representation. Strings and byte arrays are
//! length-prefixed with an unsigned varint byte count. String contents
//! are *not* validated — invalid byte sequences round-trip unchanged.
//!
//! ```text
//! Transport (framed bytes) → Wire (primitives) → Protocol (messages)
//! ```

// ---------------------------------------------------------------------------
// Module declarations
// ---------------------------------------------------------------------------

mod error;
mod reader;
mod writer;

// ---------------------------------------------------------------------------
// Re-exports
// ---------------------------------------------------------------------------

pub use error::WireError;
pub use reader::Reader;
pub use writer::Writer;

/// Maximum encoded length of a 32-bit varint.
pub const MAX_VARINT32_BYTES: usize = 5;

/// Maximum encoded length of a 64-bit varint.
pub const MAX_VARINT64_BYTES: usize = 10;

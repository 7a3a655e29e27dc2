//! Error types for the wire layer.
//!
//! Wire errors are deliberately narrow: the only things that can go
//! wrong below the message layer are running out of bytes and a varint
//! that never terminates. Everything else (bad enum values, dangling
//! table indices, unknown tags) is a protocol-level concern and lives
//! in the protocol crate's error enum.

/// Errors that can occur while reading primitives from a wire buffer.
///
/// All variants are recoverable from the caller's point of view — the
/// usual reaction is to drop the connection that produced the bytes.
/// Reads never panic and never return partially-filled values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WireError {
    /// A read ran past the end of the buffer.
    ///
    /// `needed` is the number of bytes the read required, `remaining`
    /// how many were actually left. The cursor is not advanced, so the
    /// buffer state stays consistent for error reporting.
    #[error("truncated input: needed {needed} bytes, {remaining} remaining")]
    Truncated { needed: usize, remaining: usize },

    /// A varint had its continuation bit set past the maximum width.
    ///
    /// Peer-controlled input must not be able to keep us shifting
    /// forever; 32-bit varints stop at 5 bytes, 64-bit ones at 10.
    #[error("varint exceeded maximum width of {max_bytes} bytes")]
    VarIntTooLong { max_bytes: usize },
}

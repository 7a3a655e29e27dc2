//! Error types for the protocol layer.
//!
//! Each crate defines its own error enum. A [`WireError`] means the
//! bytes ran out or a varint misbehaved; a [`CodecError`] means the
//! bytes were structurally wrong for the message being decoded, or an
//! encode was attempted that the negotiated version cannot express.
//!
//! Decode-time variants all identify the offending field, index, or
//! tag. Nothing is ever silently replaced with a default — the byte
//! stream is peer-controlled, and substituting defaults would
//! desynchronize everything that follows.

use shardnet_wire::WireError;

use crate::version::ProtocolVersion;

/// Errors that can occur while decoding or encoding a message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    /// A byte-level failure: truncated input or an overlong varint.
    /// Recoverable by the caller (typically: drop the connection).
    #[error(transparent)]
    Wire(#[from] WireError),

    /// A value decoded fine at the byte level but is invalid for the
    /// field it landed in — an unknown enum byte, a non-finite float
    /// where a finite one is required, and so on.
    #[error("malformed value: {what}")]
    Malformed { what: String },

    /// A record referenced a string-table index with no corresponding
    /// entry. Fatal to the message being decoded.
    #[error("unresolved string table index {index}")]
    UnresolvedIndex { index: u32 },

    /// Two records claimed the same name slot in a string table.
    #[error("duplicate string table index {index}")]
    DuplicateIndex { index: u32 },

    /// A polymorphic stream carried a type tag no decoder is
    /// registered for. Fatal to the remaining stream: variant payloads
    /// are not self-delimiting, so skipping is not an option.
    #[error("unrecognized {registry} variant tag {tag}")]
    UnrecognizedVariant { registry: &'static str, tag: u8 },

    /// An encode was attempted with a value the negotiated protocol
    /// version cannot represent. A local programming-contract
    /// violation, not a wire failure.
    #[error("{what} is not supported on protocol version {version}")]
    UnsupportedForVersion {
        what: &'static str,
        version: ProtocolVersion,
    },

    /// An encode was attempted on a message whose required alternate
    /// payload was never populated. A local programming error.
    #[error("{what} not populated")]
    NotPopulated { what: &'static str },

    /// A message decode finished without consuming its whole payload.
    #[error("{count} trailing bytes after message payload")]
    TrailingBytes { count: usize },

    /// The envelope header named a different message than expected.
    #[error("expected message id {expected}, found {actual}")]
    UnexpectedPacket { expected: u16, actual: u16 },
}

impl CodecError {
    /// Convenience constructor for [`CodecError::Malformed`].
    pub fn malformed(what: impl Into<String>) -> Self {
        Self::Malformed { what: what.into() }
    }
}

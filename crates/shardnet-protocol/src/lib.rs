//! Versioned message codec for the shardnet wire protocol.
//!
//! This crate is the compatibility engine: every message is defined
//! once and adapts its wire layout to the [`ProtocolVersion`]
//! negotiated for the session. The pieces:
//!
//! - [`version`] — the cut-point catalogue and span helpers every
//!   field gate compares against.
//! - [`common`] — shared value codecs (strings, optionals, UUIDs,
//!   vectors, block positions).
//! - [`table`] — the insertion-ordered string interner and the
//!   two-phase index resolver.
//! - [`registry`] — tag-dispatched decoding for polymorphic records.
//! - [`tree`] — the opaque, cacheable legacy tree payload.
//! - [`packet`] — the envelope: header packing, exact-consumption
//!   decode, handler dispatch.
//! - [`messages`] — the concrete message set built on all of the
//!   above.
//!
//! Everything is synchronous and stateless across calls; see the
//! module docs for the per-call ownership rules.

pub mod actions;
pub mod common;
pub mod error;
pub mod handler;
pub mod messages;
pub mod packet;
pub mod registry;
pub mod table;
pub mod tree;
pub mod types;
pub mod version;

pub use actions::InventoryAction;
pub use error::CodecError;
pub use handler::PacketHandler;
pub use packet::{Packet, PacketHeader};
pub use registry::VariantRegistry;
pub use table::{StringInterner, StringTable};
pub use tree::{CacheableTree, RawTree, TreeBlob, TreeFormat};
pub use version::{ProtocolVersion, VersionSpan};

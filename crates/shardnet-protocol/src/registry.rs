//! Tag-dispatched decoding for polymorphic record streams.
//!
//! Some message payloads are a stream of heterogeneous sub-records,
//! each introduced by a one-byte type tag. Variant payloads are not
//! self-delimiting, so an unknown tag cannot be skipped — the only
//! safe reaction is to fail the whole stream.
//!
//! The registry is the decode half of that story: a closed mapping
//! from tag to decoder function, built once at startup and read-only
//! afterwards (safe for unsynchronized concurrent reads). The encode
//! half never consults it: each variant owns its static tag and the
//! encoder derives the tag from the variant's identity, so a
//! tag/payload mismatch cannot be constructed.

use std::collections::HashMap;

use shardnet_wire::Reader;

use crate::error::CodecError;
use crate::version::ProtocolVersion;

/// A decoder for one variant of a polymorphic record type `T`.
pub type VariantDecoder<T> =
    fn(&mut Reader<'_>, ProtocolVersion) -> Result<T, CodecError>;

/// A closed tag → decoder mapping for one polymorphic record type.
#[derive(Debug)]
pub struct VariantRegistry<T> {
    name: &'static str,
    decoders: HashMap<u8, VariantDecoder<T>>,
}

impl<T> VariantRegistry<T> {
    /// Creates an empty registry. `name` identifies the record family
    /// in error messages (e.g. `"inventory action"`).
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            decoders: HashMap::new(),
        }
    }

    /// Registers a decoder for `tag`.
    ///
    /// # Panics
    /// Panics if the tag is already registered — two variants sharing
    /// a tag is a construction-time bug, not a runtime condition.
    pub fn register(&mut self, tag: u8, decoder: VariantDecoder<T>) {
        let previous = self.decoders.insert(tag, decoder);
        assert!(
            previous.is_none(),
            "duplicate {} tag {tag} registered",
            self.name
        );
    }

    /// Number of registered variants.
    pub fn len(&self) -> usize {
        self.decoders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decoders.is_empty()
    }

    /// Whether `tag` has a registered decoder.
    pub fn contains(&self, tag: u8) -> bool {
        self.decoders.contains_key(&tag)
    }

    /// Decodes one record: the caller has already consumed the tag
    /// byte and hands it in together with the payload reader.
    pub fn decode(
        &self,
        tag: u8,
        reader: &mut Reader<'_>,
        version: ProtocolVersion,
    ) -> Result<T, CodecError> {
        let decoder = self.decoders.get(&tag).ok_or_else(|| {
            tracing::debug!(registry = self.name, tag, "unrecognized variant tag");
            CodecError::UnrecognizedVariant {
                registry: self.name,
                tag,
            }
        })?;
        decoder(reader, version)
    }
}

// =========================================================================
// Tests
// =========================================================================

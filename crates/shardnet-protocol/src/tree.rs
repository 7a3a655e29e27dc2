//! Adapter for the legacy compound-tree payload format.
//!
//! Several older message layouts carry a hierarchical tag tree instead
//! of flat fields. The tree format itself is defined outside this
//! crate; the codec treats it as an opaque, re-encodable byte blob.
//! On the wire the blob travels as `uvarint length + raw bytes`.
//!
//! Encoding a tree can be expensive and the same tree is often sent to
//! many peers, so [`CacheableTree`] encodes lazily and caches the
//! bytes after the first encoding.

use std::sync::OnceLock;

use shardnet_wire::{Reader, Writer};

use crate::error::CodecError;

/// A host-supplied tree that knows how to serialize itself.
///
/// The codec never inspects tree contents; it only needs this one
/// contract to turn a tree into wire bytes.
pub trait TreeFormat {
    fn to_bytes(&self) -> Vec<u8>;
}

/// Trivial passthrough tree: already-encoded bytes.
///
/// This is what decoded messages hold — the codec has no business
/// parsing a payload it is only expected to carry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTree(pub Vec<u8>);

impl TreeFormat for RawTree {
    fn to_bytes(&self) -> Vec<u8> {
        self.0.clone()
    }
}

/// A compound tree whose encoding is computed at most once.
///
/// Built either from a live tree (outbound; encoded lazily on first
/// use) or from pre-encoded bytes (inbound; the cache is primed and
/// the tree slot stays empty).
#[derive(Debug)]
pub struct CacheableTree<T: TreeFormat = RawTree> {
    tree: Option<T>,
    cache: OnceLock<Vec<u8>>,
}

impl<T: TreeFormat> CacheableTree<T> {
    /// Wraps a live tree; encoding happens on first [`encoded`] call.
    ///
    /// [`encoded`]: CacheableTree::encoded
    pub fn new(tree: T) -> Self {
        Self {
            tree: Some(tree),
            cache: OnceLock::new(),
        }
    }

    /// Wraps bytes that are already in the tree wire format.
    pub fn from_encoded(bytes: Vec<u8>) -> Self {
        let cache = OnceLock::new();
        let _ = cache.set(bytes);
        Self { tree: None, cache }
    }

    /// The encoded tree bytes, computing and caching them on first use.
    pub fn encoded(&self) -> &[u8] {
        self.cache.get_or_init(|| {
            self.tree
                .as_ref()
                .map(TreeFormat::to_bytes)
                .unwrap_or_default()
        })
    }

    /// Reads a length-prefixed tree blob.
    pub fn read(reader: &mut Reader<'_>) -> Result<Self, CodecError> {
        Ok(Self::from_encoded(reader.read_byte_array()?))
    }

    /// Writes the blob with its length prefix.
    pub fn write(&self, writer: &mut Writer) {
        writer.write_byte_array(self.encoded());
    }
}

impl<T: TreeFormat + Clone> Clone for CacheableTree<T> {
    fn clone(&self) -> Self {
        let cache = OnceLock::new();
        if let Some(bytes) = self.cache.get() {
            let _ = cache.set(bytes.clone());
        }
        Self {
            tree: self.tree.clone(),
            cache,
        }
    }
}

/// Two cacheable trees are equal when they encode to the same bytes.
impl<T: TreeFormat> PartialEq for CacheableTree<T> {
    fn eq(&self, other: &Self) -> bool {
        self.encoded() == other.encoded()
    }
}

impl<T: TreeFormat> Eq for CacheableTree<T> {}

/// The blob type messages use when they only relay tree payloads.
pub type TreeBlob = CacheableTree<RawTree>;

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingTree<'a> {
        bytes: Vec<u8>,
        encodes: &'a AtomicUsize,
    }

    impl TreeFormat for CountingTree<'_> {
        fn to_bytes(&self) -> Vec<u8> {
            self.encodes.fetch_add(1, Ordering::SeqCst);
            self.bytes.clone()
        }
    }

    #[test]
    fn test_tree_encoded_exactly_once() {
        let encodes = AtomicUsize::new(0);
        let tree = CacheableTree::new(CountingTree {
            bytes: vec![1, 2, 3],
            encodes: &encodes,
        });

        assert_eq!(tree.encoded(), &[1, 2, 3]);
        assert_eq!(tree.encoded(), &[1, 2, 3]);
        assert_eq!(encodes.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_blob_round_trips_with_length_prefix() {
        let blob = TreeBlob::from_encoded(vec![0xde, 0xad, 0xbe, 0xef]);
        let mut writer = Writer::new();
        blob.write(&mut writer);
        assert_eq!(writer.as_slice(), &[0x04, 0xde, 0xad, 0xbe, 0xef]);

        let bytes = writer.into_bytes();
        let mut reader = Reader::new(&bytes);
        let decoded = TreeBlob::read(&mut reader).unwrap();
        assert_eq!(decoded, blob);
        assert!(reader.is_empty());
    }

    #[test]
    fn test_equality_is_by_encoded_bytes() {
        let a = TreeBlob::from_encoded(vec![9, 9]);
        let b = CacheableTree::new(RawTree(vec![9, 9]));
        assert_eq!(a, b);
    }
}

//! The index-table string codec: interning on encode, two-phase
//! resolution on decode.
//!
//! Formats with many repeated identifiers (biome names, tag names)
//! deduplicate them through a dense table. Records carry integer
//! indices inline; the table itself is emitted once, wherever the
//! format places it — which may be *after* the records. Decoding is
//! therefore two-phase:
//!
//! 1. buffer every record with its raw indices, without resolving;
//! 2. read the table;
//! 3. resolve each recorded index, failing on dangling references
//!    ([`CodecError::UnresolvedIndex`]) and on a name slot claimed by
//!    two records ([`CodecError::DuplicateIndex`]).
//!
//! A single-pass resolver would be incorrect for table-after-records
//! formats, so no single-pass path is offered.
//!
//! Both sides are scoped to one encode or decode call; nothing here is
//! a process-wide cache.

use indexmap::IndexSet;
use shardnet_wire::{Reader, Writer};

use crate::common::NetString;
use crate::error::CodecError;

// ---------------------------------------------------------------------------
// Encode side
// ---------------------------------------------------------------------------

/// Insertion-ordered string interner used while encoding.
///
/// The first occurrence of a string appends it and assigns the next
/// dense index; later occurrences reuse the existing index. Iteration
/// order is exactly first-seen order, which is what goes on the wire.
#[derive(Debug, Default)]
pub struct StringInterner {
    strings: IndexSet<NetString>,
}

impl StringInterner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Interns `string`, returning its dense index.
    pub fn intern(&mut self, string: &NetString) -> u32 {
        if let Some(index) = self.strings.get_index_of(string) {
            return index as u32;
        }
        let (index, _) = self.strings.insert_full(string.clone());
        index as u32
    }

    /// Number of distinct strings interned so far.
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    /// Writes the table in first-seen order: uvarint count, then each
    /// string length-prefixed.
    pub fn write(&self, writer: &mut Writer) {
        writer.write_var_u32(self.strings.len() as u32);
        for string in &self.strings {
            string.write(writer);
        }
    }
}

// ---------------------------------------------------------------------------
// Decode side
// ---------------------------------------------------------------------------

/// The decoded table plus the bookkeeping for phase three of the
/// two-phase decode.
#[derive(Debug)]
pub struct StringTable {
    strings: Vec<NetString>,
    claimed: Vec<bool>,
}

impl StringTable {
    /// Reads the table: uvarint count, then each string.
    pub fn read(reader: &mut Reader<'_>) -> Result<Self, CodecError> {
        let count = reader.read_var_u32()? as usize;
        let mut strings = Vec::with_capacity(count.min(4096));
        for _ in 0..count {
            strings.push(NetString::read(reader)?);
        }
        let claimed = vec![false; strings.len()];
        Ok(Self { strings, claimed })
    }

    /// Builds a table directly from strings (used by tests and by
    /// encoders that need to echo a table back).
    pub fn from_strings(strings: Vec<NetString>) -> Self {
        let claimed = vec![false; strings.len()];
        Self { strings, claimed }
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    /// Resolves a reference index to its string.
    ///
    /// Plain references (tags and the like) may legitimately repeat,
    /// so this never reports duplicates — only dangling indices.
    pub fn resolve(&self, index: u32) -> Result<&NetString, CodecError> {
        self.strings
            .get(index as usize)
            .ok_or(CodecError::UnresolvedIndex { index })
    }

    /// Resolves a *defining* index — one that names a record.
    ///
    /// Each definition slot may be claimed exactly once; a second
    /// record naming the same index is ambiguous and fails with
    /// [`CodecError::DuplicateIndex`].
    pub fn claim(&mut self, index: u32) -> Result<&NetString, CodecError> {
        let slot = self
            .claimed
            .get_mut(index as usize)
            .ok_or(CodecError::UnresolvedIndex { index })?;
        if *slot {
            return Err(CodecError::DuplicateIndex { index });
        }
        *slot = true;
        Ok(&self.strings[index as usize])
    }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn s(text: &str) -> NetString {
        NetString::from(text)
    }

    #[test]
    fn test_interning_assigns_indices_in_first_seen_order() {
        let mut interner = StringInterner::new();
        assert_eq!(interner.intern(&s("plains")), 0);
        assert_eq!(interner.intern(&s("overworld")), 1);
        assert_eq!(interner.intern(&s("desert")), 2);
        assert_eq!(interner.intern(&s("overworld")), 1);
        assert_eq!(interner.intern(&s("dry")), 3);
        assert_eq!(interner.len(), 4);
    }

    #[test]
    fn test_interning_same_string_n_times_yields_one_entry() {
        let mut interner = StringInterner::new();
        for _ in 0..10 {
            assert_eq!(interner.intern(&s("overworld")), 0);
        }
        assert_eq!(interner.len(), 1);
    }

    #[test]
    fn test_table_write_read_round_trip() {
        let mut interner = StringInterner::new();
        interner.intern(&s("plains"));
        interner.intern(&s("overworld"));

        let mut writer = Writer::new();
        interner.write(&mut writer);

        let bytes = writer.into_bytes();
        let mut reader = Reader::new(&bytes);
        let table = StringTable::read(&mut reader).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.resolve(0).unwrap(), &s("plains"));
        assert_eq!(table.resolve(1).unwrap(), &s("overworld"));
    }

    #[test]
    fn test_dangling_reference_is_unresolved_never_empty_string() {
        let table = StringTable::from_strings(vec![s("plains")]);
        assert_eq!(
            table.resolve(1).unwrap_err(),
            CodecError::UnresolvedIndex { index: 1 }
        );
    }

    #[test]
    fn test_claiming_same_definition_slot_twice_is_duplicate() {
        let mut table = StringTable::from_strings(vec![s("plains"), s("desert")]);
        assert_eq!(table.claim(0).unwrap(), &s("plains"));
        assert_eq!(
            table.claim(0).unwrap_err(),
            CodecError::DuplicateIndex { index: 0 }
        );
        // Other slots stay claimable.
        assert_eq!(table.claim(1).unwrap(), &s("desert"));
    }

    #[test]
    fn test_plain_references_may_repeat() {
        let table = StringTable::from_strings(vec![s("overworld")]);
        assert_eq!(table.resolve(0).unwrap(), &s("overworld"));
        assert_eq!(table.resolve(0).unwrap(), &s("overworld"));
    }
}

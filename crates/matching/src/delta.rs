//! The edit script produced by delta generation.

use std::collections::BTreeMap;

/// Ordered edit script rewriting a base file into a modified file.
///
/// Both tables are keyed by base-file block index. An insert at index `i`
/// places literal bytes immediately before base block `i` (index equal to
/// the block count appends past the end); a delete at index `i` drops a run
/// of consecutive base blocks starting at `i`. When both tables carry the
/// same key the insert applies first.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DeltaScript {
    content_hash: Vec<u8>,
    block_len: u16,
    inserts: BTreeMap<u32, Vec<u8>>,
    deletes: BTreeMap<u32, u32>,
}

impl DeltaScript {
    /// Creates an empty script for `block_len`-byte blocks.
    #[must_use]
    pub fn new(block_len: u16) -> Self {
        Self {
            content_hash: Vec::new(),
            block_len,
            inserts: BTreeMap::new(),
            deletes: BTreeMap::new(),
        }
    }

    /// The block length inherited from the signature.
    #[must_use]
    pub const fn block_len(&self) -> u16 {
        self.block_len
    }

    /// The base file's content hash, empty when integrity was not requested.
    #[must_use]
    pub fn content_hash(&self) -> &[u8] {
        &self.content_hash
    }

    /// Stores the content hash carried over from the signature.
    pub fn set_content_hash(&mut self, hash: impl Into<Vec<u8>>) {
        self.content_hash = hash.into();
    }

    /// Records literal bytes to emit before base block `index`.
    ///
    /// An empty byte sequence is dropped: the script never carries
    /// zero-length inserts.
    pub fn insert_literals(&mut self, index: u32, bytes: Vec<u8>) {
        if !bytes.is_empty() {
            self.inserts.insert(index, bytes);
        }
    }

    /// Records a run of `count` base blocks to drop starting at `index`.
    ///
    /// A zero-block run is dropped: the script never carries empty deletes.
    pub fn delete_run(&mut self, index: u32, count: u32) {
        if count > 0 {
            self.deletes.insert(index, count);
        }
    }

    /// Literal bytes to emit before base block `index`, if any.
    #[must_use]
    pub fn insert_at(&self, index: u32) -> Option<&[u8]> {
        self.inserts.get(&index).map(Vec::as_slice)
    }

    /// Length of the delete run starting at base block `index`, if any.
    #[must_use]
    pub fn delete_at(&self, index: u32) -> Option<u32> {
        self.deletes.get(&index).copied()
    }

    /// Inserts in ascending block order.
    pub fn inserts(&self) -> impl Iterator<Item = (u32, &[u8])> {
        self.inserts.iter().map(|(&k, v)| (k, v.as_slice()))
    }

    /// Deletes in ascending block order.
    pub fn deletes(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.deletes.iter().map(|(&k, &v)| (k, v))
    }

    /// Number of insert entries.
    #[must_use]
    pub fn insert_count(&self) -> usize {
        self.inserts.len()
    }

    /// Number of delete entries.
    #[must_use]
    pub fn delete_count(&self) -> usize {
        self.deletes.len()
    }

    /// Returns `true` when the script carries no edits at all.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.inserts.is_empty() && self.deletes.is_empty()
    }

    /// Resets the script to its freshly-constructed state.
    pub fn clear(&mut self) {
        self.content_hash.clear();
        self.block_len = 0;
        self.inserts.clear();
        self.deletes.clear();
    }
}

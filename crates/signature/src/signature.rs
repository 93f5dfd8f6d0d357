//! The two-level block index summarizing a base file.

use rustc_hash::FxHashMap;

/// Signature of a base file: per-block weak and strong checksums plus the
/// metadata delta generation needs.
///
/// The index maps weak checksum → strong digest → block index. Two distinct
/// blocks may share a weak value (it is only 32 bits of Adler-style sums),
/// so the nested map is what lets the differ disambiguate them with the
/// strong digest instead of discarding one.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FileSignature {
    content_hash: Vec<u8>,
    block_len: u16,
    blocks: FxHashMap<u32, FxHashMap<u64, u32>>,
}

impl FileSignature {
    /// Creates an empty signature for `block_len`-byte blocks.
    #[must_use]
    pub fn new(block_len: u16) -> Self {
        Self {
            content_hash: Vec::new(),
            block_len,
            blocks: FxHashMap::default(),
        }
    }

    /// The block length the base file was cut with.
    #[must_use]
    pub const fn block_len(&self) -> u16 {
        self.block_len
    }

    /// The whole-file content hash, empty when integrity was not requested.
    #[must_use]
    pub fn content_hash(&self) -> &[u8] {
        &self.content_hash
    }

    /// Stores the whole-file content hash.
    pub fn set_content_hash(&mut self, hash: impl Into<Vec<u8>>) {
        self.content_hash = hash.into();
    }

    /// Records the checksums of block `index`.
    ///
    /// A byte-identical block recorded twice keeps the later index; the
    /// delta semantics only need *some* copy of the content.
    pub fn insert(&mut self, weak: u32, strong: u64, index: u32) {
        self.blocks.entry(weak).or_default().insert(strong, index);
    }

    /// Whether any block carries this weak checksum.
    #[must_use]
    pub fn contains_weak(&self, weak: u32) -> bool {
        self.blocks.contains_key(&weak)
    }

    /// Looks up the block index for a confirmed weak + strong pair.
    #[must_use]
    pub fn find(&self, weak: u32, strong: u64) -> Option<u32> {
        self.blocks.get(&weak)?.get(&strong).copied()
    }

    /// Total number of indexed blocks.
    ///
    /// This is the differ's sole source for the base file's block count
    /// when emitting the trailing delete.
    #[must_use]
    pub fn entry_count(&self) -> u64 {
        self.blocks.values().map(|inner| inner.len() as u64).sum()
    }

    /// Returns `true` when no blocks are indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Resets the signature to its freshly-constructed state.
    pub fn clear(&mut self) {
        self.content_hash.clear();
        self.block_len = 0;
        self.blocks.clear();
    }

    /// Entries as `(weak, strong, index)` triples sorted by weak checksum,
    /// then strong digest.
    ///
    /// Hash-map iteration order is nondeterministic, so the codec sorts
    /// here to keep serialized output reproducible.
    pub(crate) fn sorted_entries(&self) -> Vec<(u32, Vec<(u64, u32)>)> {
        let mut outer: Vec<(u32, Vec<(u64, u32)>)> = self
            .blocks
            .iter()
            .map(|(&weak, inner)| {
                let mut strongs: Vec<(u64, u32)> =
                    inner.iter().map(|(&strong, &index)| (strong, index)).collect();
                strongs.sort_unstable_by_key(|&(strong, _)| strong);
                (weak, strongs)
            })
            .collect();
        outer.sort_unstable_by_key(|&(weak, _)| weak);
        outer
    }
}

//! Strong block digest backing the weak-checksum confirmation step.
//!
//! A weak-checksum hit only nominates a candidate block; the differ then
//! recomputes this 64-bit digest over the current window and treats a
//! combined weak+strong agreement as block equality without re-reading the
//! base file. XXH64 is not cryptographic, but at 64 bits an accidental
//! collision on top of a weak-hash collision is vanishingly unlikely for
//! the block sizes involved.

/// Seed used for every block digest.
///
/// Signatures and deltas are only comparable when produced with the same
/// seed, so it is fixed rather than negotiated.
pub const BLOCK_DIGEST_SEED: u64 = 0;

/// Streaming XXH64 hasher for block confirmation digests.
///
/// # Examples
///
/// ```
/// use checksums::strong::Xxh64;
///
/// let mut hasher = Xxh64::new(0);
/// hasher.update(b"chunk 1");
/// hasher.update(b"chunk 2");
/// assert_eq!(hasher.finalize(), Xxh64::digest(0, b"chunk 1chunk 2"));
/// ```
#[derive(Clone)]
pub struct Xxh64 {
    inner: xxhash_rust::xxh64::Xxh64,
}

impl Xxh64 {
    /// Creates a hasher with the supplied seed.
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self {
            inner: xxhash_rust::xxh64::Xxh64::new(seed),
        }
    }

    /// Feeds additional bytes into the digest state.
    pub fn update(&mut self, data: &[u8]) {
        self.inner.update(data);
    }

    /// Finalises the digest and returns the 64-bit XXH64 value.
    #[must_use]
    pub fn finalize(self) -> u64 {
        self.inner.digest()
    }

    /// Convenience helper that computes the XXH64 digest for `data` in one shot.
    #[must_use]
    pub fn digest(seed: u64, data: &[u8]) -> u64 {
        xxhash_rust::xxh64::xxh64(data, seed)
    }
}

/// Digest of a single block with the fixed [`BLOCK_DIGEST_SEED`].
#[must_use]
pub fn block_digest(block: &[u8]) -> u64 {
    Xxh64::digest(BLOCK_DIGEST_SEED, block)
}

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `checksums` provides the three hashing primitives used by the blockdiff
//! delta-sync engine:
//!
//! - [`RollingChecksum`] — the Adler-style weak checksum (two 16-bit sums
//!   modulo 65521) that slides over the modified file one byte at a time in
//!   O(1) per step. It is cheap and collision-prone; it only nominates
//!   candidate blocks.
//! - [`strong::Xxh64`] — the 64-bit XXH64 digest (seed 0) that confirms a
//!   candidate block. A weak+strong agreement is treated as block equality.
//! - [`content::Sha256`] — the 256-bit cryptographic digest of a whole file,
//!   used as an optional end-to-end integrity check when applying a delta.
//!
//! # Invariants
//!
//! - Both rolling state components are stored reduced to `[0, 65521)`;
//!   intermediate arithmetic is performed in wider signed integers so the
//!   subtract-then-reduce step is exact.
//! - After the window has been primed, sliding the checksum byte-for-byte
//!   yields bit-identical values to recomputing the checksum over the window
//!   from scratch with [`RollingChecksum::hash_buffer`].
//! - Strong and content digests are pure functions of their input: stable
//!   across runs and platforms.
//!
//! # Examples
//!
//! Slide a window over a buffer and confirm the equivalence invariant:
//!
//! ```
//! use checksums::RollingChecksum;
//!
//! let data = b"the quick brown fox";
//! let mut rolling = RollingChecksum::new(4);
//! for (i, &byte) in data.iter().enumerate() {
//!     let evicted = if i >= 4 { data[i - 4] } else { 0 };
//!     rolling.slide(evicted, byte);
//! }
//! assert_eq!(rolling.value(), RollingChecksum::hash_buffer(&data[15..19]));
//! ```

pub mod content;
mod rolling;
pub mod strong;

pub use rolling::RollingChecksum;

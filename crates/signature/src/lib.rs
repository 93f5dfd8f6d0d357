#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `signature` builds and serializes the compact summary of a base file that
//! delta generation consumes in place of the file itself. A [`FileSignature`]
//! indexes every block of the base file by its weak rolling checksum and
//! 64-bit strong digest; the two-level index tolerates weak-checksum
//! collisions across blocks while keeping the weak+strong lookup O(1).
//!
//! The crate also owns the pieces that decide *how* a base file is cut into
//! blocks: [`derive_block_len`] (the 4 KiB-capped sizing heuristic applied
//! when the caller does not force a block size) and [`BlockReader`], which
//! turns any [`std::io::Read`] into the non-overlapping block stream the
//! signer and the patcher share.
//!
//! # Invariants
//!
//! - Every non-empty block of the source contributes exactly one entry, so
//!   a signature of `n` blocks answers [`FileSignature::entry_count`] with
//!   `n` — unless two blocks are byte-identical, in which case the later
//!   index wins. That entry count is the authoritative block count during
//!   delta generation.
//! - Serialization is deterministic: entries are ordered by weak checksum,
//!   then by strong digest, regardless of hash-map iteration order.

mod codec;
mod generate;
mod layout;
mod reader;
mod signature;

pub use generate::generate_signature;
pub use layout::{MAX_BLOCK_LEN, derive_block_len};
pub use reader::BlockReader;
pub use signature::FileSignature;

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `matching` is the delta half of the blockdiff engine. Given the
//! [`signature::FileSignature`] of a base file, [`generate_delta`] streams
//! the modified file byte by byte through a [`SlidingWindow`], slides a
//! rolling weak checksum over it, confirms candidate blocks with the strong
//! digest, and emits a [`DeltaScript`]: the minimal set of literal inserts
//! and block-run deletes that rewrites the base file into the modified one.
//! [`apply_delta`] is the inverse pass, replaying the script against the
//! base file's block stream to reconstruct the modified file.
//!
//! # Invariants
//!
//! - Literal runs plus matched base blocks concatenate exactly to the
//!   modified file: every consumed byte is either retracted as part of a
//!   confirmed match or flushed as an insert.
//! - Matches are greedy and strictly left-to-right over the base file. A
//!   confirmed match pointing at or before the last matched block is
//!   ignored, so delete runs never overlap and never go negative.
//! - The script stores inserts and deletes in ascending block order, which
//!   is the order [`apply_delta`] consumes and the codec serializes.
//! - When integrity is requested, the delta inherits the signature's
//!   content hash and [`apply_delta`] refuses to write a single byte before
//!   the hashes agree.

mod apply;
mod codec;
mod delta;
mod generate;
mod window;

pub use apply::{ApplyError, apply_delta};
pub use delta::DeltaScript;
pub use generate::generate_delta;
pub use window::SlidingWindow;

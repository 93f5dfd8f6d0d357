#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `engine` is the file-facing layer of blockdiff. It wires the streaming
//! cores — [`signature`] for indexing a base file, [`matching`] for delta
//! generation and application — onto concrete files and exposes the three
//! whole-file operations:
//!
//! - [`sign`] — summarize a base file into a signature file.
//! - [`diff`] — compute a delta file from a signature file and a modified
//!   file, without touching the base file at all.
//! - [`patch`] — rebuild the modified file from the base file and a delta
//!   file, optionally verifying the base's content hash first.
//!
//! Each operation is a single synchronous streaming pass and fails fast
//! with a typed [`EngineError`]; an operation that returns `Ok(())` has
//! fully written and flushed its output file.
//!
//! # Examples
//!
//! ```no_run
//! use engine::{diff, patch, sign};
//!
//! # fn main() -> Result<(), engine::EngineError> {
//! sign("base.bin".as_ref(), "base.sig".as_ref(), true, 0)?;
//! diff("base.sig".as_ref(), "edited.bin".as_ref(), "edited.delta".as_ref(), true)?;
//! patch("base.bin".as_ref(), "edited.delta".as_ref(), "rebuilt.bin".as_ref(), true)?;
//! # Ok(())
//! # }
//! ```

mod error;
mod fs;
mod local;

pub use error::{EngineError, EngineResult};
pub use fs::{create_sink, open_block_reader, open_window, read_all};
pub use local::{diff, patch, sign};

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `wire` implements the binary encoding shared by blockdiff signature and
//! delta files: big-endian, width-exact integers, and a leading `u64` frame
//! length that lets a reader validate the body before interpreting it.
//!
//! Length fields are always 8 bytes. The format deliberately has no magic
//! number and no version byte; a file is identified by the operation that
//! consumes it.
//!
//! # Errors
//!
//! Decoding surfaces [`WireError`]: a frame whose declared length disagrees
//! with the bytes actually present, or any field extending past the end of
//! the input. Encoding is infallible.
//!
//! # Examples
//!
//! ```
//! use wire::{WireReader, WireWriter};
//!
//! let mut writer = WireWriter::new();
//! writer.put_u16(0x1000);
//! writer.put_bytes(b"payload");
//! let frame = writer.finish_frame();
//!
//! let mut reader = WireReader::open_frame(&frame).unwrap();
//! assert_eq!(reader.take_u16().unwrap(), 0x1000);
//! assert_eq!(reader.take_bytes(7).unwrap(), b"payload");
//! assert_eq!(reader.remaining(), 0);
//! ```

mod error;
mod frame;

pub use error::WireError;
pub use frame::{WireReader, WireWriter};

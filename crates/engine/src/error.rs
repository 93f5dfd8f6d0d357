//! Error types for the file-backed operations.

use std::io;
use std::path::PathBuf;

use matching::ApplyError;
use thiserror::Error;
use wire::WireError;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors surfaced by [`sign`](crate::sign), [`diff`](crate::diff), and
/// [`patch`](crate::patch).
#[derive(Debug, Error)]
pub enum EngineError {
    /// An input path is missing or cannot be opened for reading.
    #[error("input not found or unreadable: {path}")]
    NotFound {
        /// The offending path.
        path: PathBuf,
    },
    /// A serialized signature or delta file is zero bytes long.
    #[error("input file is empty: {path}")]
    EmptyInput {
        /// The offending path.
        path: PathBuf,
    },
    /// A serialized signature or delta failed to decode.
    #[error("malformed buffer: {0}")]
    Malformed(
        #[from]
        #[source]
        WireError,
    ),
    /// The delta's content hash disagrees with the base file's.
    #[error("delta content hash does not match the base file")]
    IntegrityMismatch,
    /// An underlying read or write failed.
    #[error("I/O error: {0}")]
    Io(
        #[from]
        #[source]
        io::Error,
    ),
    /// A caller-visible precondition was violated.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl From<ApplyError> for EngineError {
    fn from(err: ApplyError) -> Self {
        match err {
            ApplyError::IntegrityMismatch => Self::IntegrityMismatch,
            ApplyError::Io(io_err) => Self::Io(io_err),
        }
    }
}

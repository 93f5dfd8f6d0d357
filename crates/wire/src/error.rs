//! Error type shared by the wire-format reader.

use thiserror::Error;

/// Errors raised while decoding a signature or delta frame.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum WireError {
    /// The frame's declared body length disagrees with the bytes present.
    #[error("frame declares {declared} body bytes but {actual} are present")]
    FrameLength {
        /// Body length announced by the leading `u64`.
        declared: u64,
        /// Bytes actually available after the length prefix.
        actual: u64,
    },
    /// A field extends past the end of the input.
    #[error("truncated input: needed {needed} more bytes, {remaining} remain")]
    Truncated {
        /// Bytes the next field required.
        needed: u64,
        /// Bytes left in the buffer.
        remaining: u64,
    },
    /// A count field exceeds what the remaining body could possibly hold.
    #[error("count {count} is impossible for the {remaining} remaining bytes")]
    ImpossibleCount {
        /// The declared element count.
        count: u64,
        /// Bytes left in the buffer.
        remaining: u64,
    },
    /// A field decoded cleanly but holds a value the format forbids.
    #[error("invalid field value: {what}")]
    Invalid {
        /// Description of the offending field.
        what: &'static str,
    },
}

//! Error types for the huffzip library.
//!
//! Every failure is reported to the caller. Nothing is corrected or skipped: a stream is either decoded
//! completely or rejected.

use thiserror::Error;

/// Errors raised while encoding or decoding a huffzip stream.
#[derive(Debug, Error)]
pub enum HuffError {
    /// There is nothing to build a tree from.
    #[error("cannot encode an empty input")]
    EmptyInput,

    /// The serialized tree ran out of bits, or describes an impossible tree.
    #[error("corrupt tree encoding at bit {bit}: {reason}")]
    CorruptTree { bit: usize, reason: &'static str },

    /// The pad count field is out of range or points past the end of the stream.
    #[error("invalid padding count {pad} at bit {bit}")]
    BadPadding { pad: usize, bit: usize },

    /// The payload ended in the middle of a code.
    #[error("payload truncated at bit {bit}")]
    TruncatedPayload { bit: usize },

    /// A payload bit leads nowhere in the tree.
    #[error("invalid code in payload at bit {bit}")]
    InvalidCode { bit: usize },

    /// A test run restored something other than its input.
    #[error("restored data does not match the input")]
    Mismatch,

    /// Read/write failure in the file layer.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, HuffError>;

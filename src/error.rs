//! Error types for nebula-sha256

use thiserror::Error;

/// Errors reported by the incremental SHA-256 hasher.
///
/// Both variants are caller-side precondition violations. Hashing itself
/// cannot fail, so there is nothing to retry.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sha256Error {
    /// The hasher was already finalized and must be reset before it
    /// accepts more input.
    #[error("hasher is finalized; call reset() before updating it again")]
    Finalized,

    /// The message would exceed 2^64 - 1 bits, the largest length the
    /// padding can encode.
    #[error("message length overflow: {len} bytes hashed, {additional} more requested")]
    LengthOverflow {
        /// Bytes accepted so far.
        len: u64,
        /// Bytes in the rejected update.
        additional: u64,
    },
}

/// Errors produced when parsing a [`Digest`](crate::Digest) from text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DigestParseError {
    /// The input is not exactly 64 hex digits.
    #[error("invalid digest length: expected 64 hex digits, got {0}")]
    InvalidLength(usize),

    /// The input contains a character that is not a hex digit.
    #[error("invalid hex digit {character:?} at index {index}")]
    InvalidHex {
        /// The offending character.
        character: char,
        /// Its position in the input.
        index: usize,
    },
}

/// Result type for hasher operations.
pub type Result<T> = std::result::Result<T, Sha256Error>;

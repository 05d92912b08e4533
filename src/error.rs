//! Error types
//!
//! SHA-256 is total over every input whose bit length fits in 64 bits, so
//! the error surface is small: an over-long message, and malformed
//! hexadecimal text when parsing a digest back from its string form.

use thiserror::Error;

/// Errors raised while hashing.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sha256Error {
    /// The message bit length (`len * 8`) does not fit in a `u64`.
    #[error("input of {len} bytes is too long: bit length does not fit in 64 bits")]
    InputTooLong { len: usize },
}

/// Errors raised while decoding hexadecimal text.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HexError {
    #[error("hex string has odd length {len}")]
    OddLength { len: usize },

    #[error("invalid hex character {found:?} at index {index}")]
    InvalidCharacter { index: usize, found: char },

    #[error("expected {expected} decoded bytes, found {found}")]
    InvalidDigestLength { expected: usize, found: usize },
}

//! Hexadecimal encoding
//!
//! Thin wrappers over the `hex` crate. Encoding always produces lowercase
//! digits, most significant nibble first. Decoding accepts either case.

use ::hex::FromHexError;

use crate::error::HexError;

/// Renders `bytes` as lowercase hexadecimal, two characters per byte.
pub fn to_hex(bytes: &[u8]) -> String {
    ::hex::encode(bytes)
}

/// Renders `bytes` as uppercase hexadecimal, two characters per byte.
pub fn to_hex_upper(bytes: &[u8]) -> String {
    ::hex::encode_upper(bytes)
}

/// Decodes a hexadecimal string into bytes.
///
/// # Errors
/// - [`HexError::OddLength`] if `text` has an odd number of bytes
/// - [`HexError::InvalidCharacter`] at the first non-hex byte
pub fn from_hex(text: &str) -> Result<Vec<u8>, HexError> {
    ::hex::decode(text).map_err(|err| decode_error(err, text.len(), 0))
}

/// Maps a `hex` crate error onto [`HexError`].
///
/// `text_len` is the length of the input in bytes; `expected` is the
/// decoded length a fixed-size target required.
pub(crate) fn decode_error(err: FromHexError, text_len: usize, expected: usize) -> HexError {
    match err {
        FromHexError::OddLength => HexError::OddLength { len: text_len },
        FromHexError::InvalidHexCharacter { c, index } => {
            HexError::InvalidCharacter { index, found: c }
        }
        FromHexError::InvalidStringLength => HexError::InvalidDigestLength {
            expected,
            found: text_len / 2,
        },
    }
}

//! 256-bit digest primitive
//!
//! This module defines the fixed-size value returned by SHA-256.
//!
//! It is a **simple, explicit value type**: 32 bytes in the order FIPS
//! 180-4 serializes the final hash state (eight big-endian words). It is
//! `Copy`, immutable once produced, and formats as lowercase hexadecimal.

use std::fmt::{self, Display, Formatter, LowerHex, UpperHex};
use std::str::FromStr;

use hex::FromHex;

use crate::encoding::hex::{decode_error, to_hex, to_hex_upper};
use crate::error::HexError;

pub(super) const LEN: usize = 32;

/// A 32-byte SHA-256 digest.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Digest(pub(crate) [u8; LEN]);

impl Digest {
    /// Length of a digest in bytes.
    pub const LEN: usize = LEN;

    /// Borrows the digest bytes.
    pub fn as_bytes(&self) -> &[u8; LEN] {
        &self.0
    }

    /// Renders the digest as 64 lowercase hexadecimal characters.
    pub fn to_hex(&self) -> String {
        to_hex(&self.0)
    }

    /// Parses a digest from 64 hexadecimal characters (either case).
    ///
    /// # Errors
    /// Any [`HexError`] from decoding, or
    /// [`HexError::InvalidDigestLength`] if the text does not decode to
    /// exactly 32 bytes.
    pub fn from_hex(text: &str) -> Result<Self, HexError> {
        <[u8; LEN]>::from_hex(text)
            .map(Digest)
            .map_err(|err| decode_error(err, text.len(), LEN))
    }
}

impl FromStr for Digest {
    type Err = HexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Digest::from_hex(s)
    }
}

impl Display for Digest {
    /// Formats the digest as lowercase hexadecimal, without separators.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        LowerHex::fmt(self, f)
    }
}

impl LowerHex for Digest {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl UpperHex for Digest {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&to_hex_upper(&self.0))
    }
}

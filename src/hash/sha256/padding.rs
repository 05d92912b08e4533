//! SHA-256 message padding
//!
//! Implements the Merkle–Damgård padding rule of FIPS 180-4 §5.1.1: a
//! single `0x80` marker byte, zero bytes up to 56 mod 64, then the message
//! length in bits as a 64-bit big-endian integer.
//!
//! The message is always copied into a buffer owned by the returned
//! [`PaddedMessage`]; the caller's bytes are only ever read.

use tracing::trace;

use super::BLOCK_LEN;
use crate::error::Sha256Error;

/// Size of the trailing bit-length field in bytes.
pub const LENGTH_FIELD_LEN: usize = 8;

/// A message padded to a whole number of 64-byte blocks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaddedMessage {
    blocks: Vec<[u8; BLOCK_LEN]>,
    message_len: usize,
}

impl PaddedMessage {
    /// The padded blocks, in message order.
    pub fn blocks(&self) -> &[[u8; BLOCK_LEN]] {
        &self.blocks
    }

    /// The whole padded buffer as one contiguous byte slice.
    pub fn as_bytes(&self) -> &[u8] {
        self.blocks.as_flattened()
    }

    /// Total padded length in bytes. Always a multiple of 64.
    pub fn len(&self) -> usize {
        self.blocks.len() * BLOCK_LEN
    }

    /// Always `false`: even the empty message pads to one block.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Length of the original, unpadded message in bytes.
    pub fn message_len(&self) -> usize {
        self.message_len
    }
}

/// Returns the message length in bits.
///
/// # Errors
/// [`Sha256Error::InputTooLong`] if `len * 8` does not fit in a `u64`.
pub fn bit_length(len: usize) -> Result<u64, Sha256Error> {
    u64::try_from(len)
        .ok()
        .and_then(|l| l.checked_mul(8))
        .ok_or(Sha256Error::InputTooLong { len })
}

/// Number of zero bytes placed between the `0x80` marker and the length
/// field for a message of `len` bytes.
pub fn zero_padding_len(len: usize) -> usize {
    let rem = len % BLOCK_LEN;

    if rem < 56 { 55 - rem } else { 119 - rem }
}

/// Pads `message` into a sequence of 64-byte blocks.
///
/// # Errors
/// [`Sha256Error::InputTooLong`] if the message bit length cannot be
/// encoded in 64 bits.
pub fn pad(message: &[u8]) -> Result<PaddedMessage, Sha256Error> {
    let len = message.len();
    let bit_len = bit_length(len)?;

    let zeros = zero_padding_len(len);
    let total = len + 1 + zeros + LENGTH_FIELD_LEN;

    debug_assert_eq!(total % BLOCK_LEN, 0);
    debug_assert!(total >= len + 1 + LENGTH_FIELD_LEN);

    let mut blocks = vec![[0u8; BLOCK_LEN]; total / BLOCK_LEN];
    let bytes = blocks.as_flattened_mut();

    bytes[..len].copy_from_slice(message);
    bytes[len] = 0x80;
    bytes[total - LENGTH_FIELD_LEN..].copy_from_slice(&bit_len.to_be_bytes());

    trace!(len, zeros, blocks = blocks.len(), "padded message");

    Ok(PaddedMessage {
        blocks,
        message_len: len,
    })
}

//! SHA-256 core hashing functions
//!
//! This module implements the compression side of SHA-256 as defined in
//! FIPS 180-4.
//!
//! It provides:
//! - the compression function operating on 512-bit blocks
//! - the sequential fold of that function over a padded message
//! - the complete `sha256` / `sha256_hex` entry points

use tracing::debug;

use super::computations::{all_rounds, expand_schedule};
use super::padding::pad;
use super::{BLOCK_LEN, H256_INIT};
use crate::error::Sha256Error;
use crate::primitives::Digest;

/// Compresses a single 512-bit message block.
///
/// The block is expanded into its 64-word schedule, the 64 rounds are run
/// over a copy of `state`, and the result is added back into `state`.
///
/// # Parameters
/// - `block`: A 512-bit (64-byte) message block
/// - `state`: The current hash state (8 × 32-bit words)
#[inline(always)]
pub fn compress(block: &[u8; BLOCK_LEN], state: &mut [u32; 8]) {
    let w = expand_schedule(block);

    all_rounds(state, &w);
}

/// Folds the compression function over `blocks`, in order, starting from
/// the SHA-256 initial hash value.
///
/// The blocks must already be padded; this function does no padding of
/// its own.
pub fn compress_blocks<'a, I>(blocks: I) -> Digest
where
    I: IntoIterator<Item = &'a [u8; BLOCK_LEN]>,
{
    let mut state = H256_INIT;

    for block in blocks {
        compress(block, &mut state);
    }

    Digest::from(state)
}

/// Computes the SHA-256 hash of the given input.
///
/// # Errors
/// [`Sha256Error::InputTooLong`] if the input bit length does not fit in
/// 64 bits. No digest is produced in that case.
pub fn sha256(input: &[u8]) -> Result<Digest, Sha256Error> {
    let padded = pad(input)?;

    debug!(
        len = input.len(),
        blocks = padded.blocks().len(),
        "hashing message"
    );

    Ok(compress_blocks(padded.blocks()))
}

/// Computes the SHA-256 hash of the given input as 64 lowercase hex
/// characters.
pub fn sha256_hex(input: &[u8]) -> Result<String, Sha256Error> {
    sha256(input).map(|digest| digest.to_hex())
}

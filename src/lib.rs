//! SHA-256 message digest
//!
//! This crate implements the SHA-256 hash function as defined in
//! FIPS 180-4, together with the small amount of supporting code needed to
//! present its output.
//!
//! The focus is on **clarity, predictability, and auditability**: every
//! step of the algorithm (padding, schedule expansion, the 64-round
//! compression function) lives in its own small, explicit function.
//!
//! # Module overview
//!
//! - `hash`
//!   The SHA-256 algorithm itself. The padder turns an arbitrary message
//!   into a freshly owned sequence of 64-byte blocks, and the compressor
//!   folds the eight-word hash state over those blocks.
//!
//! - `primitives`
//!   The fixed-size `Digest` value type returned by the hash, with
//!   explicit big-endian conversions.
//!
//! - `encoding`
//!   Lowercase hexadecimal rendering of digests, and the inverse decoding.
//!
//! - `error`
//!   Typed errors for over-long inputs and malformed hexadecimal text.
//!
//! # Example
//!
//! ```
//! let hex = sha256_core::hash::sha256_hex(b"abc").unwrap();
//! assert_eq!(
//!     hex,
//!     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
//! );
//! ```
//!
//! # Design goals
//!
//! - Caller data is never mutated or aliased by padding
//! - Fixed-width wrapping arithmetic, spelled out explicitly
//! - Constant tables as `const` data, shared freely between computations
//! - Minimal and explicit APIs

pub mod encoding;
pub mod error;
pub mod hash;
pub mod primitives;

pub use error::{HexError, Sha256Error};
pub use hash::{sha256, sha256_hex};
pub use primitives::Digest;

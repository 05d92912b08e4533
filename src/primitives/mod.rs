//! Primitive types
//!
//! Fixed-size value types with well-defined, big-endian semantics.
//!
//! Current primitives include:
//! - `Digest`: the 256-bit output of SHA-256

mod digest;

pub use digest::Digest;

//! Text encodings for digests.

pub mod hex;

pub use self::hex::{from_hex, to_hex, to_hex_upper};

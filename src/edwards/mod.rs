//! Edwards point helpers: decompression and hash-to-point.
//!
//! Thin layer over `curve25519-dalek` providing the two decompression paths and the
//! cofactor-cleared hash-to-point map used to derive generators.

pub mod decompress;
pub mod hash_to_point;

// Re-export
pub use self::{
    decompress::decompress_checked,
    hash_to_point::{hash_to_point, hash_to_point_precomputed},
};
#[cfg(any(debug_assertions, feature = "verify-generators"))]
pub(crate) use self::decompress::decompress_unchecked_preauthorized;

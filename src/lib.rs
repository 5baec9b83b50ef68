#![doc = include_str!("../README.md")]
#![doc(html_root_url = "https://docs.rs/seraphis-generators/latest")]
#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![cfg_attr(docsrs, feature(doc_cfg))]

/// Keccak-256 domain hash.
///
/// The single hash function behind both the hash-to-point preimage and the domain separated
/// derivation of named generators.
pub mod hash;

/// Edwards point decompression and hash-to-point.
///
/// Built on `curve25519-dalek` points and `dalek-ff-group` field elements. Provides the
/// checked/unchecked decompression split and the cofactor-cleared hash-to-point map.
pub mod edwards;

/// The protocol generators G, H, U and X.
///
/// Exactly-once, thread-safe derivation with compact, precomputed and fixed-base table
/// accessors. Debug builds verify every generator against its formula before first use.
pub mod generators;

// Re-export commonly used types for convenience
pub use edwards::{decompress_checked, hash_to_point, hash_to_point_precomputed};
pub use generators::{
    get_G, get_G_precomputed, get_G_table, get_H, get_H_precomputed, get_H_table, get_U,
    get_U_precomputed, get_U_table, get_X, get_X_precomputed, get_X_table, get_x25519_G,
    GeneratorName,
};
pub use hash::keccak256;

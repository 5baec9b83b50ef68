//! Published generator encodings and domain separators.

use curve25519_dalek::{edwards::CompressedEdwardsY, montgomery::MontgomeryPoint};

// Published encodings of the generators. Other implementations of the protocol hard-code the
// same bytes, so these must never change.

/// Standard ed25519 basepoint: y = 4/5, positive x.
pub const G_COMPRESSED: CompressedEdwardsY = CompressedEdwardsY([
    0x58, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66,
    0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66,
]);

/// Pedersen commitment generator: 8 * to_point(keccak(G)).
pub const H_COMPRESSED: CompressedEdwardsY = CompressedEdwardsY([
    0x8b, 0x65, 0x59, 0x70, 0x15, 0x37, 0x99, 0xaf, 0x2a, 0xea, 0xdc, 0x9f, 0xf1, 0xad, 0xd0, 0xea,
    0x6c, 0x72, 0x51, 0xd5, 0x41, 0x54, 0xcf, 0xa9, 0x2c, 0x17, 0x3a, 0x0d, 0xd3, 0x9c, 0x1f, 0x94,
]);

/// Seraphis generator U: hash_to_point(keccak("seraphis_U")).
pub const U_COMPRESSED: CompressedEdwardsY = CompressedEdwardsY([
    0x10, 0x94, 0x8b, 0x00, 0xd2, 0xde, 0x50, 0xb5, 0x76, 0x99, 0x8c, 0x11, 0xe8, 0x3c, 0x59, 0xa7,
    0x96, 0x84, 0xd2, 0x5c, 0x9f, 0x8a, 0x0d, 0xc6, 0x86, 0x45, 0x70, 0xd7, 0x97, 0xb9, 0xc1, 0x6e,
]);

/// Seraphis generator X: hash_to_point(keccak("seraphis_X")).
pub const X_COMPRESSED: CompressedEdwardsY = CompressedEdwardsY([
    0xa4, 0xfb, 0x43, 0xca, 0x69, 0x5e, 0x12, 0x99, 0x88, 0x02, 0xa2, 0x0a, 0x15, 0x8f, 0x12, 0xea,
    0x79, 0x47, 0x4f, 0xb9, 0x01, 0x21, 0x16, 0x95, 0x6a, 0x69, 0x76, 0x7c, 0x4d, 0x41, 0x11, 0x0f,
]);

/// X25519 basepoint, u = 9.
pub const X25519_G: MontgomeryPoint = MontgomeryPoint([
    9, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
]);

/// Domain separator for generator U.
pub const HASH_KEY_SERAPHIS_U: &[u8] = b"seraphis_U";

/// Domain separator for generator X.
pub const HASH_KEY_SERAPHIS_X: &[u8] = b"seraphis_X";

//! Hash-to-point mapping onto the prime-order subgroup of ed25519.
//!
//! `hash_to_point(x) = 8 * map(keccak(x))`, where `map` is the Elligator-style
//! from-field-element construction CryptoNote calls `ge_fromfe_frombytes_vartime`. The map is
//! total over the digest space, so there is no rejection sampling and no error outcome.

use curve25519_dalek::edwards::{CompressedEdwardsY, EdwardsPoint};
use dalek_ff_group::FieldElement;
use ff::{Field, PrimeField};

use crate::edwards::decompress::decompress_checked;
use crate::hash::keccak256;

/// Montgomery curve coefficient of curve25519.
const MONTGOMERY_A: u64 = 486662;

/// (p - 5) / 8 = 2^252 - 3, as little-endian limbs.
const SQRT_RATIO_EXPONENT: [u64; 4] = [
    0xffff_ffff_ffff_fffd,
    0xffff_ffff_ffff_ffff,
    0xffff_ffff_ffff_ffff,
    0x0fff_ffff_ffff_ffff,
];

/// Reads 32 bytes as a little-endian 256-bit integer, reduced mod p.
fn field_element_from_bytes(bytes: &[u8; 32]) -> FieldElement {
    let two_pow_64 = FieldElement::from(u64::MAX) + FieldElement::ONE;
    bytes
        .chunks_exact(8)
        .rev()
        .fold(FieldElement::ZERO, |acc, chunk| {
            let mut limb = [0u8; 8];
            limb.copy_from_slice(chunk);
            acc * two_pow_64 + FieldElement::from(u64::from_le_bytes(limb))
        })
}

/// Maps a 32-byte string to a curve point which may carry a small-order component.
fn map_to_curve(bytes: &[u8; 32]) -> EdwardsPoint {
    let a = FieldElement::from(MONTGOMERY_A);
    let u = field_element_from_bytes(bytes);

    let v = u.square().double();
    let w = v + FieldElement::ONE;
    let x = w.square() - a.square() * v;

    // r = w * x^3 * (w * x^7)^((p - 5) / 8), a square root of w / x up to a factor of sqrt(-1)
    let x3 = x.square() * x;
    let x7 = x3.square() * x;
    let r = w * x3 * (w * x7).pow_vartime(SQRT_RATIO_EXPONENT);
    let rx = r.square() * x;

    let negative = !bool::from((w - rx).is_zero()) && !bool::from((w + rx).is_zero());
    let z = if negative { -a } else { -(a * v) };

    // z + w only vanishes for two field elements u, never for a hash digest in practice
    let y = (z - w) * Option::<FieldElement>::from((z + w).invert()).unwrap_or(FieldElement::ZERO);

    // only y and the sign of x are needed; decompression recovers x
    let mut encoded = y.to_repr();
    encoded[31] |= u8::from(negative) << 7;

    decompress_checked(&CompressedEdwardsY(encoded))
        .expect("from-field-element map always lands on the curve")
}

/// Hashes `input` to a point of the prime-order subgroup, in precomputed form.
pub fn hash_to_point_precomputed(input: &[u8]) -> EdwardsPoint {
    map_to_curve(&keccak256(input)).mul_by_cofactor()
}

/// Hashes `input` to a point of the prime-order subgroup, in compact form.
///
/// Deterministic and total: every input, the empty string included, yields a valid point `P`
/// with `l * P` equal to the identity.
pub fn hash_to_point(input: &[u8]) -> CompressedEdwardsY {
    hash_to_point_precomputed(input).compress()
}

// ------------------------------------------------------------------------
// Tests
// ------------------------------------------------------------------------

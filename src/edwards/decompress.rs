//! Checked and unchecked point decompression.
//!
//! Two operations exist on purpose. [`decompress_checked`] is the general decoder: it only
//! accepts canonical encodings of points on the curve. `decompress_unchecked_preauthorized`
//! skips the canonicality check and is reserved for digests already known to decode, such as
//! the preimage of the `H` generator. It must never be handed untrusted bytes.

use curve25519_dalek::edwards::{CompressedEdwardsY, EdwardsPoint};

/// Decompresses a canonically encoded ed25519 point.
///
/// # Errors
///
/// Returns an error if the bytes do not encode a point on the curve, or if the encoding is not
/// canonical (an unreduced y coordinate, or a set sign bit on x = 0).
pub fn decompress_checked(compressed: &CompressedEdwardsY) -> Result<EdwardsPoint, &'static str> {
    let point = compressed
        .decompress()
        .ok_or("Error::Decompression Failed")?;
    if point.compress() != *compressed {
        return Err("Error::Non-canonical Point Encoding");
    }
    Ok(point)
}

/// Decompresses `compressed` without rejecting non-canonical encodings.
///
/// Only for inputs whose validity is fixed by construction (the `H` preimage). Arbitrary hash
/// output belongs in [`hash_to_point`](super::hash_to_point) instead. Only the generator
/// self-verification needs it, so it is compiled out with it.
#[cfg(any(debug_assertions, feature = "verify-generators"))]
pub(crate) fn decompress_unchecked_preauthorized(
    compressed: &CompressedEdwardsY,
) -> Option<EdwardsPoint> {
    compressed.decompress()
}

// ------------------------------------------------------------------------
// Tests
// ------------------------------------------------------------------------

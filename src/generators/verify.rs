//! Generator self-verification.
//!
//! Only compiled into debug builds or with the `verify-generators` feature. Each published
//! encoding the registry loaded is reproduced from its defining formula and compared bit for bit.
//! Any mismatch means a broken build and panics.
//!
//! G is rebuilt from the field ratio 4/5 and H along both the unchecked protocol path and the
//! checked path. U and X have no second derivation: they go through the same [`hash_to_point`]
//! consumers use, so the comparison with the published bytes is what catches a broken map.

#![allow(non_snake_case)]

use curve25519_dalek::{
    constants::ED25519_BASEPOINT_COMPRESSED, edwards::CompressedEdwardsY, traits::IsIdentity,
};
use dalek_ff_group::FieldElement;
use ff::{Field, PrimeField};
use log::debug;

use crate::{
    edwards::{decompress_checked, decompress_unchecked_preauthorized, hash_to_point},
    generators::{
        constants::{
            G_COMPRESSED, HASH_KEY_SERAPHIS_U, HASH_KEY_SERAPHIS_X, H_COMPRESSED, U_COMPRESSED,
            X_COMPRESSED,
        },
        registry::{GeneratorName, Generators},
    },
    hash::keccak256,
};

/// G = {x, 4/5}, with x positive, so its encoding is the bytes of 4/5 with a clear sign bit.
pub(crate) fn reproduce_G() -> CompressedEdwardsY {
    let five_inv = Option::<FieldElement>::from(FieldElement::from(5u64).invert())
        .expect("5 is invertible mod p");
    CompressedEdwardsY((FieldElement::from(4u64) * five_inv).to_repr())
}

/// H = 8 * decompress(keccak(G)), the protocol formula.
///
/// The digest is read directly as a compressed point instead of going through
/// [`hash_to_point`]. This only works because keccak(G) is known to decode.
pub(crate) fn derive_H(G: &CompressedEdwardsY) -> CompressedEdwardsY {
    let digest = CompressedEdwardsY(keccak256(G.as_bytes()));
    decompress_unchecked_preauthorized(&digest)
        .expect("keccak(G) is a valid point encoding")
        .mul_by_cofactor()
        .compress()
}

/// Same as [`derive_H`], decoded through the checked path.
pub(crate) fn reproduce_H(G: &CompressedEdwardsY) -> CompressedEdwardsY {
    let digest = CompressedEdwardsY(keccak256(G.as_bytes()));
    decompress_checked(&digest)
        .expect("keccak(G) is a canonical point encoding")
        .mul_by_cofactor()
        .compress()
}

/// U or X = hash_to_point(keccak(salt)).
pub(crate) fn reproduce_salted(salt: &[u8]) -> CompressedEdwardsY {
    hash_to_point(&keccak256(salt))
}

/// Panics if any generator in `gens` differs from its reproduction.
pub(crate) fn verify_generators(gens: &Generators) {
    debug!("verifying generators");

    let G = reproduce_G();
    assert_eq!(G, G_COMPRESSED, "invalid G");
    assert_eq!(G, ED25519_BASEPOINT_COMPRESSED, "invalid G");
    assert_eq!(gens.G.compact(), G, "invalid G");

    let H = derive_H(&G);
    assert_eq!(H, reproduce_H(&G), "invalid H");
    assert_eq!(H, H_COMPRESSED, "invalid H");
    assert_eq!(gens.H.compact(), H, "invalid H");

    let U = reproduce_salted(HASH_KEY_SERAPHIS_U);
    assert_eq!(U, U_COMPRESSED, "invalid U");
    assert_eq!(gens.U.compact(), U, "invalid U");

    let X = reproduce_salted(HASH_KEY_SERAPHIS_X);
    assert_eq!(X, X_COMPRESSED, "invalid X");
    assert_eq!(gens.X.compact(), X, "invalid X");

    for (i, name) in GeneratorName::ALL.iter().enumerate() {
        let generator = gens.get(*name);
        assert_eq!(generator.point().compress(), generator.compact(), "invalid {}", name);
        assert!(generator.point().is_torsion_free(), "{} has a torsion component", name);
        assert!(!generator.point().is_identity(), "{} is the identity", name);
        for other in &GeneratorName::ALL[i + 1..] {
            assert_ne!(generator.compact(), gens.get(*other).compact(), "{} == {}", name, other);
        }
    }
}

// ------------------------------------------------------------------------
// Tests
// ------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use crate::generators::registry::generators;

    #[test]
    fn reproduce_G_from_field_ratio_test() {
        assert_eq!(reproduce_G(), G_COMPRESSED);
    }

    #[test]
    fn derive_H_reproduces_constant_test() {
        assert_eq!(derive_H(&G_COMPRESSED), H_COMPRESSED);
    }

    #[test]
    fn reproduce_H_through_checked_path_test() {
        assert_eq!(reproduce_H(&G_COMPRESSED), H_COMPRESSED);
    }

    #[test]
    fn reproduce_salted_test() {
        assert_eq!(reproduce_salted(b"seraphis_U"), U_COMPRESSED);
        assert_eq!(reproduce_salted(b"seraphis_X"), X_COMPRESSED);
    }

    #[test]
    fn verify_registry_test() {
        verify_generators(generators());
    }

    #[test]
    #[should_panic(expected = "invalid H")]
    fn verify_detects_corrupted_generator_test() {
        let mut gens = generators().clone();
        gens.H = gens.U.clone();
        verify_generators(&gens);
    }
}

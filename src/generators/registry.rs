//! Process-wide generator registry.
//!
//! The four generators are built on first access, exactly once, from their published encodings,
//! and are immutable for the rest of the process. Concurrent first callers block on the
//! [`OnceLock`] until the single initialization has finished, so a partially built generator is
//! never observable. Debug builds reproduce every encoding from its formula before first use.

#![allow(non_snake_case)]

use core::fmt;
use std::sync::OnceLock;

use curve25519_dalek::{
    edwards::{CompressedEdwardsY, EdwardsBasepointTable, EdwardsPoint},
    montgomery::MontgomeryPoint,
    traits::BasepointTable,
};
use log::{debug, trace};

use crate::{
    edwards::decompress_checked,
    generators::constants::{G_COMPRESSED, H_COMPRESSED, U_COMPRESSED, X25519_G, X_COMPRESSED},
};

/// Identifies one of the four generators.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum GeneratorName {
    /// Standard ed25519 basepoint.
    G,
    /// Pedersen commitment blinding generator.
    H,
    /// Seraphis key image generator U.
    U,
    /// Seraphis key image generator X.
    X,
}

impl GeneratorName {
    /// Every generator, in registry order.
    pub const ALL: [GeneratorName; 4] =
        [GeneratorName::G, GeneratorName::H, GeneratorName::U, GeneratorName::X];

    /// Short name of the generator.
    pub fn as_str(self) -> &'static str {
        match self {
            GeneratorName::G => "G",
            GeneratorName::H => "H",
            GeneratorName::U => "U",
            GeneratorName::X => "X",
        }
    }
}

impl fmt::Display for GeneratorName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A generator in its compact, precomputed and fixed-base table forms.
///
/// The precomputed point and the table are always built from the compact encoding, so the
/// representations cannot drift apart.
#[derive(Clone)]
pub struct Generator {
    compact: CompressedEdwardsY,
    point: EdwardsPoint,
    table: Box<EdwardsBasepointTable>,
}

impl Generator {
    // Private constructor
    fn from_compact(compact: CompressedEdwardsY) -> Generator {
        let point = decompress_checked(&compact)
            .expect("generator encodings are canonical curve points");
        let table = Box::new(EdwardsBasepointTable::create(&point));
        Generator {
            compact,
            point,
            table,
        }
    }

    /// Compressed 32-byte encoding.
    pub fn compact(&self) -> CompressedEdwardsY {
        self.compact
    }

    /// Extended-coordinates point, ready for scalar multiplication.
    pub fn point(&self) -> EdwardsPoint {
        self.point
    }

    /// Precomputed multiples for fast fixed-base scalar multiplication.
    pub fn table(&self) -> &EdwardsBasepointTable {
        &self.table
    }
}

impl fmt::Debug for Generator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Generator")
            .field("compact", &hex::encode(self.compact.as_bytes()))
            .finish()
    }
}

impl PartialEq for Generator {
    fn eq(&self, other: &Self) -> bool {
        self.compact == other.compact
    }
}

impl Eq for Generator {}

/// The full set of generators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generators {
    pub(crate) G: Generator,
    pub(crate) H: Generator,
    pub(crate) U: Generator,
    pub(crate) X: Generator,
}

impl Generators {
    /// Builds every representation from the published encodings. Prefer [`generators`], which
    /// runs this once per process.
    fn load() -> Generators {
        debug!("loading generators");

        let gens = Generators {
            G: Generator::from_compact(G_COMPRESSED),
            H: Generator::from_compact(H_COMPRESSED),
            U: Generator::from_compact(U_COMPRESSED),
            X: Generator::from_compact(X_COMPRESSED),
        };

        for name in GeneratorName::ALL {
            trace!("generator {}: {}", name, hex::encode(gens.get(name).compact.as_bytes()));
            #[cfg(feature = "debug_print")]
            println!("{}: {}", name, hex::encode(gens.get(name).compact.as_bytes()));
        }

        #[cfg(any(debug_assertions, feature = "verify-generators"))]
        super::verify::verify_generators(&gens);

        debug!("generators ready");
        gens
    }

    /// Returns the generator with the given name.
    pub fn get(&self, name: GeneratorName) -> &Generator {
        match name {
            GeneratorName::G => &self.G,
            GeneratorName::H => &self.H,
            GeneratorName::U => &self.U,
            GeneratorName::X => &self.X,
        }
    }
}

static GENERATORS: OnceLock<Generators> = OnceLock::new();

/// Returns the process-wide generators, building them on first use.
pub fn generators() -> &'static Generators {
    GENERATORS.get_or_init(Generators::load)
}

/// Compact encoding of the basepoint G.
pub fn get_G() -> CompressedEdwardsY {
    generators().G.compact
}

/// Compact encoding of the Pedersen generator H.
pub fn get_H() -> CompressedEdwardsY {
    generators().H.compact
}

/// Compact encoding of the Seraphis generator U.
pub fn get_U() -> CompressedEdwardsY {
    generators().U.compact
}

/// Compact encoding of the Seraphis generator X.
pub fn get_X() -> CompressedEdwardsY {
    generators().X.compact
}

/// G as an extended-coordinates point.
pub fn get_G_precomputed() -> EdwardsPoint {
    generators().G.point
}

/// H as an extended-coordinates point.
pub fn get_H_precomputed() -> EdwardsPoint {
    generators().H.point
}

/// U as an extended-coordinates point.
pub fn get_U_precomputed() -> EdwardsPoint {
    generators().U.point
}

/// X as an extended-coordinates point.
pub fn get_X_precomputed() -> EdwardsPoint {
    generators().X.point
}

/// Fixed-base table for G.
pub fn get_G_table() -> &'static EdwardsBasepointTable {
    generators().G.table()
}

/// Fixed-base table for H.
pub fn get_H_table() -> &'static EdwardsBasepointTable {
    generators().H.table()
}

/// Fixed-base table for U.
pub fn get_U_table() -> &'static EdwardsBasepointTable {
    generators().U.table()
}

/// Fixed-base table for X.
pub fn get_X_table() -> &'static EdwardsBasepointTable {
    generators().X.table()
}

/// X25519 basepoint (u = 9), the Montgomery form of G.
pub fn get_x25519_G() -> MontgomeryPoint {
    X25519_G
}

// ------------------------------------------------------------------------
// Tests
// ------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use crate::{edwards::hash_to_point, hash::keccak256};
    use curve25519_dalek::{constants::ED25519_BASEPOINT_POINT, scalar::Scalar};

    #[test]
    fn get_generators_match_published_constants_test() {
        assert_eq!(
            hex::encode(get_G().as_bytes()),
            "5866666666666666666666666666666666666666666666666666666666666666"
        );
        assert_eq!(
            hex::encode(get_H().as_bytes()),
            "8b655970153799af2aeadc9ff1add0ea6c7251d54154cfa92c173a0dd39c1f94"
        );
        assert_eq!(
            hex::encode(get_U().as_bytes()),
            "10948b00d2de50b576998c11e83c59a79684d25c9f8a0dc6864570d797b9c16e"
        );
        assert_eq!(
            hex::encode(get_X().as_bytes()),
            "a4fb43ca695e12998802a20a158f12ea79474fb9012116956a69767c4d41110f"
        );
        assert_eq!(get_H(), H_COMPRESSED);
        assert_eq!(get_U(), U_COMPRESSED);
        assert_eq!(get_X(), X_COMPRESSED);
    }

    #[test]
    fn repeated_access_is_stable_test() {
        for _ in 0..3 {
            assert_eq!(get_G(), G_COMPRESSED);
            assert_eq!(get_H(), H_COMPRESSED);
            assert!(core::ptr::eq(generators(), generators()));
        }
    }

    #[test]
    fn precomputed_matches_compact_test() {
        for name in GeneratorName::ALL {
            let generator = generators().get(name);
            assert_eq!(generator.point().compress(), generator.compact(), "{}", name);
        }
        assert_eq!(get_G_precomputed().compress(), get_G());
        assert_eq!(get_H_precomputed().compress(), get_H());
        assert_eq!(get_U_precomputed().compress(), get_U());
        assert_eq!(get_X_precomputed().compress(), get_X());
        assert_eq!(get_G_precomputed(), ED25519_BASEPOINT_POINT);
    }

    #[test]
    fn tables_agree_with_points_test() {
        let scalar = Scalar::from(0x1234_5678_9abc_def0u64);
        assert_eq!(&scalar * get_G_table(), scalar * get_G_precomputed());
        assert_eq!(&scalar * get_H_table(), scalar * get_H_precomputed());
        assert_eq!(&scalar * get_U_table(), scalar * get_U_precomputed());
        assert_eq!(&scalar * get_X_table(), scalar * get_X_precomputed());
    }

    #[test]
    fn generators_are_domain_separated_test() {
        let U = get_U();
        let X = get_X();
        assert_ne!(U, X);
        for other in [get_G(), get_H()] {
            assert_ne!(U, other);
            assert_ne!(X, other);
        }
        assert_eq!(hash_to_point(&keccak256(b"seraphis_U")), U);
        assert_ne!(hash_to_point(&keccak256(b"seraphis_V")), U);
    }

    #[test]
    fn x25519_G_is_montgomery_form_of_G_test() {
        assert_eq!(get_x25519_G(), get_G_precomputed().to_montgomery());
        assert_eq!(get_x25519_G().as_bytes()[0], 9);
    }

    #[test]
    fn pedersen_commitment_opens_test() {
        let value = Scalar::from(1000u64);
        let blinding = Scalar::from(77u64);
        let commitment = &value * get_G_table() + &blinding * get_H_table();
        assert_eq!(commitment, value * get_G_precomputed() + blinding * get_H_precomputed());
        let other = (value + Scalar::ONE) * get_G_precomputed() + blinding * get_H_precomputed();
        assert_ne!(commitment, other);
    }
}

//! Domain hash used across the crate.
//!
//! Keccak-256 with the original Keccak padding (not the finalized SHA3-256), as used by the
//! CryptoNote family of protocols for `cn_fast_hash`.

use sha3::{Digest, Keccak256};

/// Length in bytes of a domain hash digest.
pub const HASH_LENGTH: usize = 32;

/// Hashes an arbitrary byte string to a 32-byte Keccak-256 digest.
pub fn keccak256(data: &[u8]) -> [u8; HASH_LENGTH] {
    Keccak256::digest(data).into()
}

// ------------------------------------------------------------------------
// Tests
// ------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn keccak256_empty_test() {
        // Keccak-256 differs from SHA3-256 on the empty string
        assert_eq!(
            hex::encode(keccak256(b"")),
            "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
    }

    #[test]
    fn keccak256_is_deterministic_test() {
        assert_eq!(keccak256(b"seraphis_U"), keccak256(b"seraphis_U"));
        assert_ne!(keccak256(b"seraphis_U"), keccak256(b"seraphis_X"));
    }
}

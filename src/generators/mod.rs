//! Generator registry.
//!
//! Holds the four protocol generators G, H, U and X. They are derived once per process, on
//! first access, and served read-only afterwards in compact, precomputed and fixed-base table
//! forms.

pub mod constants;
pub mod registry;

#[cfg(any(debug_assertions, feature = "verify-generators"))]
mod verify;

// Re-export
pub use self::registry::{
    generators, get_G, get_G_precomputed, get_G_table, get_H, get_H_precomputed, get_H_table,
    get_U, get_U_precomputed, get_U_table, get_X, get_X_precomputed, get_X_table, get_x25519_G,
    Generator, GeneratorName, Generators,
};

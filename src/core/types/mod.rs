//! Value types carried through generation and verification.
//!
//! - [`Salt`] - Random per-hash salt
//! - [`DerivedKey`] - Argon2id output (zeroized, constant-time equality)
//! - [`EncodedHash`] - Parameters, salt and key in `$argon2id$...` form

mod derived_key;
mod encoded_hash;
mod salt;

pub use derived_key::DerivedKey;
pub use encoded_hash::EncodedHash;
pub use salt::Salt;

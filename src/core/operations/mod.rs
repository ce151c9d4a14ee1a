//! Cryptographic operations used by the hasher.
//!
//! - [`kdf`] - Argon2id key derivation
//! - [`random`] - Secure random bytes from the operating system

pub mod kdf;
pub mod random;

pub use kdf::derive_key;
pub use random::fill_random;

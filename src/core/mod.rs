//! Core hashing types and operations.
//!
//! This module provides the fundamental building blocks:
//!
//! - [`error`] - Error types for hashing operations
//! - [`params`] - Cost parameters and decode ceilings
//! - [`header`] - Grammar of the algorithm, version and parameter segments
//! - [`types`] - Salt, derived key and the encoded hash string
//! - [`operations`] - Key derivation and secure randomness
//! - [`hasher`] - The `PasswordHasher` contract and its Argon2id implementation

pub mod error;
pub mod hasher;
pub mod header;
pub mod operations;
pub mod params;
pub mod types;

// Re-export commonly used items
pub use error::{PasshashError, PasshashResult};
pub use hasher::{Argon2idHasher, PasswordHasher, VerifyOutcome};
pub use params::{DecodeLimits, Params};

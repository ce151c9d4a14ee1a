//! Ergonomic layer for password hashing.
//!
//! The prelude module provides re-exports and a builder with preset
//! parameter profiles.
//!
//! # Usage
//!
//! ```rust
//! use passhash::prelude::*;
//! ```

mod builders;

pub use builders::HasherBuilder;

// Re-export core types for convenience
pub use crate::core::error::{PasshashError, PasshashResult};
pub use crate::core::hasher::{Argon2idHasher, PasswordHasher, VerifyOutcome};
pub use crate::core::params::{DecodeLimits, Params};
pub use crate::core::types::EncodedHash;

//! Error types for password hashing operations.
//!
//! This module provides a unified error type for generation and verification.
//! Error messages are intentionally vague and never carry password, salt, or
//! key material.

use thiserror::Error;

/// Errors that can occur when generating or verifying a password hash.
///
/// A wrong password is not an error: [`verify`](crate::PasswordHasher::verify)
/// reports it as `Ok(false)`.
#[derive(Debug, Error)]
pub enum PasshashError {
    /// The operating system's secure random source could not supply bytes.
    #[error("Secure random source unavailable")]
    RandomSourceFailure,

    /// The encoded hash string does not match the expected structure.
    /// Intentionally vague for security.
    #[error("Malformed encoded hash")]
    MalformedHash,

    /// Parameters violate the algorithm bounds or the configured ceiling.
    #[error("Invalid Argon2 parameters: {0}")]
    InvalidParameters(&'static str),

    /// The encoded hash could not be produced from internal data.
    #[error("Hash encoding failed")]
    EncodingFailure,

    /// The Argon2 backend rejected input that passed validation.
    #[error("Key derivation failed")]
    KeyDerivationFailed,
}

/// Result type alias for password hashing operations.
pub type PasshashResult<T> = Result<T, PasshashError>;

//! Password hash generation and verification.
//!
//! [`PasswordHasher`] is the seam an authentication layer depends on;
//! [`Argon2idHasher`] is its implementation.
//!
//! # Example
//!
//! ```rust
//! use passhash::{Argon2idHasher, Params, PasswordHasher};
//!
//! let hasher = Argon2idHasher::new(Params::new(1, 1024, 1, 32, 16).expect("valid params"))
//!     .expect("params within limits");
//!
//! let stored = hasher.generate(b"correct horse battery staple").expect("generate");
//! assert!(hasher.verify(b"correct horse battery staple", &stored).expect("verify"));
//! assert!(!hasher.verify(b"wrong password", &stored).expect("verify"));
//! ```

use crate::core::error::PasshashResult;
use crate::core::operations::derive_key;
use crate::core::params::{DecodeLimits, Params};
use crate::core::types::{EncodedHash, Salt};

/// Generates and verifies encoded password hashes.
pub trait PasswordHasher: Send + Sync {
    /// Hashes `password` under the hasher's current policy.
    ///
    /// # Errors
    ///
    /// Returns `PasshashError::RandomSourceFailure` if no salt can be drawn
    /// and `PasshashError::EncodingFailure` if the result cannot be encoded.
    fn generate(&self, password: &[u8]) -> PasshashResult<String>;

    /// Checks `password` against a previously generated hash.
    ///
    /// Returns `Ok(false)` for a wrong password.
    ///
    /// # Errors
    ///
    /// Returns `PasshashError::MalformedHash` or
    /// `PasshashError::InvalidParameters` if `hash` cannot be decoded.
    fn verify(&self, password: &[u8], hash: &str) -> PasshashResult<bool>;
}

/// Result of [`Argon2idHasher::verify_and_upgrade`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyOutcome {
    /// The password does not match.
    Rejected,
    /// The password matches and the stored hash follows the current policy.
    Verified,
    /// The password matches; the stored hash used outdated parameters and
    /// this replacement was generated under the current policy.
    Rehashed(String),
}

impl VerifyOutcome {
    /// Returns `true` unless the password was rejected.
    #[must_use]
    pub const fn is_verified(&self) -> bool {
        !matches!(self, Self::Rejected)
    }
}

/// Argon2id password hasher.
///
/// Holds the policy used for new hashes and the ceilings applied to stored
/// ones. Verification always runs with the parameters embedded in the stored
/// hash, so hashes created under an older policy keep verifying.
///
/// The hasher is immutable and can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct Argon2idHasher {
    params: Params,
    limits: DecodeLimits,
}

impl Argon2idHasher {
    /// Creates a hasher with the default decode limits.
    ///
    /// # Errors
    ///
    /// Returns `PasshashError::InvalidParameters` if `params` exceeds the
    /// default limits.
    pub fn new(params: Params) -> PasshashResult<Self> {
        Self::with_limits(params, DecodeLimits::default())
    }

    /// Creates a hasher with explicit decode limits.
    ///
    /// # Errors
    ///
    /// Returns `PasshashError::InvalidParameters` if `params` exceeds
    /// `limits`; such a hasher could not verify its own output.
    pub fn with_limits(params: Params, limits: DecodeLimits) -> PasshashResult<Self> {
        limits.check(&params)?;
        Ok(Self { params, limits })
    }

    /// Returns the policy used for new hashes.
    #[must_use]
    pub const fn params(&self) -> &Params {
        &self.params
    }

    /// Returns the ceilings applied when decoding stored hashes.
    #[must_use]
    pub const fn limits(&self) -> &DecodeLimits {
        &self.limits
    }

    /// Reports whether `hash` was created with parameters other than the
    /// current policy.
    ///
    /// # Errors
    ///
    /// Returns the decoding error if `hash` is malformed or out of bounds.
    pub fn needs_rehash(&self, hash: &str) -> PasshashResult<bool> {
        let decoded = self.decode(hash)?;
        Ok(decoded.params() != &self.params)
    }

    /// Verifies `password` and, on success with outdated parameters, returns
    /// a replacement hash under the current policy.
    ///
    /// # Errors
    ///
    /// Returns the decoding error if `hash` is malformed, or a generation
    /// error if the replacement hash cannot be produced.
    pub fn verify_and_upgrade(&self, password: &[u8], hash: &str) -> PasshashResult<VerifyOutcome> {
        let decoded = self.decode(hash)?;

        if !matches_stored(password, &decoded)? {
            return Ok(VerifyOutcome::Rejected);
        }

        if decoded.params() == &self.params {
            return Ok(VerifyOutcome::Verified);
        }

        tracing::debug!(
            m_cost = decoded.params().memory_cost(),
            t_cost = decoded.params().time_cost(),
            p_cost = decoded.params().parallelism(),
            "rehashing password with outdated parameters"
        );
        Ok(VerifyOutcome::Rehashed(self.generate(password)?))
    }

    fn decode(&self, hash: &str) -> PasshashResult<EncodedHash> {
        EncodedHash::decode(hash, &self.limits).map_err(|err| {
            tracing::warn!(error = %err, "stored hash rejected");
            err
        })
    }
}

impl PasswordHasher for Argon2idHasher {
    fn generate(&self, password: &[u8]) -> PasshashResult<String> {
        tracing::debug!(
            m_cost = self.params.memory_cost(),
            t_cost = self.params.time_cost(),
            p_cost = self.params.parallelism(),
            "generating argon2id hash"
        );

        let salt = Salt::generate(self.params.salt_length())?;
        let key = derive_key(password, salt.as_bytes(), &self.params)?;

        EncodedHash::new(self.params, salt, key)?.encode()
    }

    fn verify(&self, password: &[u8], hash: &str) -> PasshashResult<bool> {
        let decoded = self.decode(hash)?;
        matches_stored(password, &decoded)
    }
}

/// Re-derives with the stored salt and parameters and compares in constant
/// time.
fn matches_stored(password: &[u8], stored: &EncodedHash) -> PasshashResult<bool> {
    let params = stored.params();
    tracing::debug!(
        m_cost = params.memory_cost(),
        t_cost = params.time_cost(),
        p_cost = params.parallelism(),
        "verifying argon2id hash"
    );

    let candidate = derive_key(password, stored.salt().as_bytes(), params)?;
    Ok(&candidate == stored.key())
}

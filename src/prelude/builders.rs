//! Builder pattern for configuring a hasher.
//!
//! # Security Profiles
//!
//! | Profile | Memory | Iterations | Lanes | Use Case |
//! |---------|--------|------------|-------|----------|
//! | `new()` | 64 MiB | 10 | 2 | Login policy (default) |
//! | `interactive()` | 64 MiB | 2 | 1 | Fast, interactive logins |
//! | `moderate()` | 256 MiB | 3 | 1 | Balanced security |
//! | `sensitive()` | 1 GiB | 4 | 1 | High-value credentials |
//!
//! # Example
//!
//! ```rust
//! use passhash::prelude::*;
//!
//! // Use a preset profile
//! let hasher = HasherBuilder::interactive()
//!     .try_build()
//!     .expect("preset is valid");
//!
//! // Or customize parameters
//! let hasher = HasherBuilder::new()
//!     .memory_cost(128 * 1024)
//!     .time_cost(3)
//!     .parallelism(4)
//!     .key_length(32)
//!     .try_build()
//!     .expect("valid parameters");
//! ```

use crate::core::error::PasshashResult;
use crate::core::hasher::Argon2idHasher;
use crate::core::params::{DecodeLimits, Params};

/// Builder for [`Argon2idHasher`].
///
/// Values are only validated in [`try_build`](Self::try_build), so setters
/// can be chained in any order.
#[derive(Debug, Clone, Copy)]
pub struct HasherBuilder {
    time_cost: u32,
    memory_cost: u32,
    parallelism: u8,
    key_length: usize,
    salt_length: usize,
    limits: DecodeLimits,
}

impl Default for HasherBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl HasherBuilder {
    /// Creates a builder seeded with [`Params::default`].
    #[must_use]
    pub fn new() -> Self {
        Self::from_params(Params::default())
    }

    /// Interactive profile: Fast enough for user logins.
    ///
    /// - Memory: 64 MiB
    /// - Iterations: 2
    /// - Parallelism: 1
    #[must_use]
    pub fn interactive() -> Self {
        Self::from_params(Params::interactive())
    }

    /// Moderate profile: Balanced security and performance.
    ///
    /// - Memory: 256 MiB
    /// - Iterations: 3
    /// - Parallelism: 1
    #[must_use]
    pub fn moderate() -> Self {
        Self::from_params(Params::moderate())
    }

    /// Sensitive profile: High security, slower verification.
    ///
    /// - Memory: 1 GiB
    /// - Iterations: 4
    /// - Parallelism: 1
    #[must_use]
    pub fn sensitive() -> Self {
        Self::from_params(Params::sensitive())
    }

    /// Creates a builder seeded with existing parameters.
    #[must_use]
    pub fn from_params(params: Params) -> Self {
        Self {
            time_cost: params.time_cost(),
            memory_cost: params.memory_cost(),
            parallelism: params.parallelism(),
            key_length: params.key_length(),
            salt_length: params.salt_length(),
            limits: DecodeLimits::default(),
        }
    }

    /// Sets the number of iterations.
    #[must_use]
    pub const fn time_cost(mut self, time_cost: u32) -> Self {
        self.time_cost = time_cost;
        self
    }

    /// Sets the memory cost in KiB.
    ///
    /// Higher values increase resistance to GPU-based attacks
    /// but require more RAM for every generate and verify call.
    #[must_use]
    pub const fn memory_cost(mut self, memory_cost: u32) -> Self {
        self.memory_cost = memory_cost;
        self
    }

    /// Sets the number of lanes.
    #[must_use]
    pub const fn parallelism(mut self, parallelism: u8) -> Self {
        self.parallelism = parallelism;
        self
    }

    /// Sets the derived-key length in bytes.
    #[must_use]
    pub const fn key_length(mut self, key_length: usize) -> Self {
        self.key_length = key_length;
        self
    }

    /// Sets the salt length in bytes.
    #[must_use]
    pub const fn salt_length(mut self, salt_length: usize) -> Self {
        self.salt_length = salt_length;
        self
    }

    /// Sets the ceilings applied when decoding stored hashes.
    #[must_use]
    pub const fn limits(mut self, limits: DecodeLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Validates the configured values into [`Params`].
    ///
    /// # Errors
    ///
    /// Returns `PasshashError::InvalidParameters` if a value is out of range.
    pub fn to_params(&self) -> PasshashResult<Params> {
        Params::new(
            self.time_cost,
            self.memory_cost,
            self.parallelism,
            self.key_length,
            self.salt_length,
        )
    }

    /// Builds the hasher.
    ///
    /// # Errors
    ///
    /// Returns `PasshashError::InvalidParameters` if a value is out of range
    /// or exceeds the configured limits.
    pub fn try_build(self) -> PasshashResult<Argon2idHasher> {
        Argon2idHasher::with_limits(self.to_params()?, self.limits)
    }
}

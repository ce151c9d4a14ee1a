//! Argon2id cost parameters and decode ceilings.
//!
//! [`Params`] is the hashing policy a hasher is configured with, and also the
//! record reconstructed from every decoded hash string. [`DecodeLimits`] caps
//! what an untrusted string may ask for.
//!
//! # Parameter Selection
//!
//! | Profile | Memory | Iterations | Lanes | Use Case |
//! |---------|--------|------------|-------|----------|
//! | `default()` | 64 MiB | 10 | 2 | Login policy, 64-byte keys |
//! | `interactive()` | 64 MiB | 2 | 1 | Latency-sensitive logins |
//! | `moderate()` | 256 MiB | 3 | 1 | Balanced |
//! | `sensitive()` | 1 GiB | 4 | 1 | High-value credentials |

use crate::core::error::{PasshashError, PasshashResult};

/// One MiB expressed in the KiB unit used by `memory_cost`.
pub const MEBIBYTE_KIB: u32 = 1024;

/// Minimum number of iterations.
pub const MIN_TIME_COST: u32 = 1;

/// Minimum memory per lane in KiB, imposed by Argon2.
pub const MIN_MEMORY_PER_LANE_KIB: u32 = 8;

/// Minimum derived-key length in bytes.
pub const MIN_KEY_LENGTH: usize = 4;

/// Minimum salt length in bytes.
pub const MIN_SALT_LENGTH: usize = 8;

/// Salt length used by every preset (16 bytes).
pub const DEFAULT_SALT_LENGTH: usize = 16;

/// Argon2id cost parameters.
///
/// Fields are private; a `Params` can only be obtained through
/// [`Params::new`], a preset, or decoding, so every instance satisfies the
/// Argon2 bounds.
///
/// # Example
///
/// ```rust
/// use passhash::Params;
///
/// let params = Params::new(3, 64 * 1024, 4, 32, 16).expect("valid params");
/// assert_eq!(params.memory_cost(), 65536);
///
/// // Fewer than 8 KiB per lane is rejected.
/// assert!(Params::new(3, 16, 4, 32, 16).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawParams"))]
pub struct Params {
    time_cost: u32,
    memory_cost: u32,
    parallelism: u8,
    key_length: usize,
    salt_length: usize,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            time_cost: 10,
            memory_cost: 64 * MEBIBYTE_KIB,
            parallelism: 2,
            key_length: 64,
            salt_length: DEFAULT_SALT_LENGTH,
        }
    }
}

impl Params {
    /// Creates validated parameters.
    ///
    /// # Errors
    ///
    /// Returns `PasshashError::InvalidParameters` if any value is zero, if
    /// `memory_cost` is below `8 * parallelism` KiB, or if a length is below
    /// the Argon2 minimum.
    pub fn new(
        time_cost: u32,
        memory_cost: u32,
        parallelism: u8,
        key_length: usize,
        salt_length: usize,
    ) -> PasshashResult<Self> {
        if time_cost < MIN_TIME_COST {
            return Err(PasshashError::InvalidParameters(
                "time cost must be at least 1",
            ));
        }

        if parallelism == 0 {
            return Err(PasshashError::InvalidParameters(
                "parallelism must be at least 1",
            ));
        }

        if memory_cost < MIN_MEMORY_PER_LANE_KIB * u32::from(parallelism) {
            return Err(PasshashError::InvalidParameters(
                "memory cost must be at least 8 KiB per lane",
            ));
        }

        if key_length < MIN_KEY_LENGTH {
            return Err(PasshashError::InvalidParameters(
                "key length must be at least 4 bytes",
            ));
        }

        if u32::try_from(key_length).is_err() {
            return Err(PasshashError::InvalidParameters(
                "key length exceeds the Argon2 maximum",
            ));
        }

        if salt_length < MIN_SALT_LENGTH {
            return Err(PasshashError::InvalidParameters(
                "salt length must be at least 8 bytes",
            ));
        }

        Ok(Self {
            time_cost,
            memory_cost,
            parallelism,
            key_length,
            salt_length,
        })
    }

    /// Interactive profile: 64 MiB, 2 iterations, 1 lane.
    #[must_use]
    pub const fn interactive() -> Self {
        Self::preset(2, 64 * MEBIBYTE_KIB)
    }

    /// Moderate profile: 256 MiB, 3 iterations, 1 lane.
    #[must_use]
    pub const fn moderate() -> Self {
        Self::preset(3, 256 * MEBIBYTE_KIB)
    }

    /// Sensitive profile: 1 GiB, 4 iterations, 1 lane.
    #[must_use]
    pub const fn sensitive() -> Self {
        Self::preset(4, 1024 * MEBIBYTE_KIB)
    }

    const fn preset(time_cost: u32, memory_cost: u32) -> Self {
        Self {
            time_cost,
            memory_cost,
            parallelism: 1,
            key_length: 32,
            salt_length: DEFAULT_SALT_LENGTH,
        }
    }

    /// Number of iterations.
    #[must_use]
    pub const fn time_cost(&self) -> u32 {
        self.time_cost
    }

    /// Working memory in KiB.
    #[must_use]
    pub const fn memory_cost(&self) -> u32 {
        self.memory_cost
    }

    /// Number of lanes.
    #[must_use]
    pub const fn parallelism(&self) -> u8 {
        self.parallelism
    }

    /// Derived-key length in bytes.
    #[must_use]
    pub const fn key_length(&self) -> usize {
        self.key_length
    }

    /// Salt length in bytes.
    #[must_use]
    pub const fn salt_length(&self) -> usize {
        self.salt_length
    }
}

/// Unvalidated mirror of [`Params`] used for deserialization.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawParams {
    time_cost: u32,
    memory_cost: u32,
    parallelism: u8,
    key_length: usize,
    salt_length: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<RawParams> for Params {
    type Error = PasshashError;

    fn try_from(raw: RawParams) -> Result<Self, Self::Error> {
        Self::new(
            raw.time_cost,
            raw.memory_cost,
            raw.parallelism,
            raw.key_length,
            raw.salt_length,
        )
    }
}

/// Upper bounds applied to parameters read from untrusted hash strings.
///
/// A stored hash claiming a huge memory or time cost would otherwise turn
/// every verification into a resource-exhaustion attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DecodeLimits {
    /// Maximum number of iterations.
    pub max_time_cost: u32,
    /// Maximum memory cost in KiB.
    pub max_memory_cost: u32,
    /// Maximum number of lanes.
    pub max_parallelism: u8,
    /// Maximum derived-key length in bytes.
    pub max_key_length: usize,
    /// Maximum salt length in bytes.
    pub max_salt_length: usize,
}

impl Default for DecodeLimits {
    fn default() -> Self {
        Self {
            max_time_cost: 64,
            max_memory_cost: 1024 * MEBIBYTE_KIB,
            max_parallelism: 64,
            max_key_length: 1024,
            max_salt_length: 64,
        }
    }
}

impl DecodeLimits {
    /// Checks `params` against every ceiling.
    ///
    /// # Errors
    ///
    /// Returns `PasshashError::InvalidParameters` naming the first exceeded
    /// ceiling.
    pub fn check(&self, params: &Params) -> PasshashResult<()> {
        if params.time_cost() > self.max_time_cost {
            return Err(PasshashError::InvalidParameters(
                "time cost exceeds the configured ceiling",
            ));
        }
        if params.memory_cost() > self.max_memory_cost {
            return Err(PasshashError::InvalidParameters(
                "memory cost exceeds the configured ceiling",
            ));
        }
        if params.parallelism() > self.max_parallelism {
            return Err(PasshashError::InvalidParameters(
                "parallelism exceeds the configured ceiling",
            ));
        }
        if params.key_length() > self.max_key_length {
            return Err(PasshashError::InvalidParameters(
                "key length exceeds the configured ceiling",
            ));
        }
        if params.salt_length() > self.max_salt_length {
            return Err(PasshashError::InvalidParameters(
                "salt length exceeds the configured ceiling",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params() {
        let params = Params::default();
        assert_eq!(params.time_cost(), 10);
        assert_eq!(params.memory_cost(), 65536);
        assert_eq!(params.parallelism(), 2);
        assert_eq!(params.key_length(), 64);
        assert_eq!(params.salt_length(), 16);
    }

    #[test]
    fn test_presets() {
        let interactive = Params::interactive();
        assert_eq!(interactive.memory_cost(), 64 * 1024);
        assert_eq!(interactive.time_cost(), 2);
        assert_eq!(interactive.parallelism(), 1);

        let moderate = Params::moderate();
        assert_eq!(moderate.memory_cost(), 256 * 1024);
        assert_eq!(moderate.time_cost(), 3);
        assert_eq!(moderate.parallelism(), 1);

        let sensitive = Params::sensitive();
        assert_eq!(sensitive.memory_cost(), 1024 * 1024);
        assert_eq!(sensitive.time_cost(), 4);
        assert_eq!(sensitive.parallelism(), 1);
    }

    #[test]
    fn test_presets_pass_validation() -> PasshashResult<()> {
        for preset in [
            Params::default(),
            Params::interactive(),
            Params::moderate(),
            Params::sensitive(),
        ] {
            let rebuilt = Params::new(
                preset.time_cost(),
                preset.memory_cost(),
                preset.parallelism(),
                preset.key_length(),
                preset.salt_length(),
            )?;
            assert_eq!(rebuilt, preset);
            DecodeLimits::default().check(&preset)?;
        }
        Ok(())
    }

    #[test]
    fn test_zero_time_cost_rejected() {
        let result = Params::new(0, 1024, 1, 32, 16);
        assert!(matches!(result, Err(PasshashError::InvalidParameters(_))));
    }

    #[test]
    fn test_zero_parallelism_rejected() {
        let result = Params::new(1, 1024, 0, 32, 16);
        assert!(matches!(result, Err(PasshashError::InvalidParameters(_))));
    }

    #[test]
    fn test_memory_below_lane_minimum_rejected() {
        let result = Params::new(1, 31, 4, 32, 16);
        assert!(matches!(result, Err(PasshashError::InvalidParameters(_))));

        // Exactly 8 KiB per lane is accepted.
        assert!(Params::new(1, 32, 4, 32, 16).is_ok());
    }

    #[test]
    fn test_short_lengths_rejected() {
        let result = Params::new(1, 1024, 1, 3, 16);
        assert!(matches!(result, Err(PasshashError::InvalidParameters(_))));

        let result = Params::new(1, 1024, 1, 32, 7);
        assert!(matches!(result, Err(PasshashError::InvalidParameters(_))));
    }

    #[test]
    fn test_limits_reject_oversized_costs() -> PasshashResult<()> {
        let limits = DecodeLimits::default();

        let heavy_memory = Params::new(1, 4 * 1024 * 1024, 1, 32, 16)?;
        assert!(matches!(
            limits.check(&heavy_memory),
            Err(PasshashError::InvalidParameters(_))
        ));

        let heavy_time = Params::new(1_000, 1024, 1, 32, 16)?;
        assert!(matches!(
            limits.check(&heavy_time),
            Err(PasshashError::InvalidParameters(_))
        ));

        let wide = Params::new(1, 8 * 255, 255, 32, 16)?;
        assert!(matches!(
            limits.check(&wide),
            Err(PasshashError::InvalidParameters(_))
        ));

        let long_key = Params::new(1, 1024, 1, 4096, 16)?;
        assert!(matches!(
            limits.check(&long_key),
            Err(PasshashError::InvalidParameters(_))
        ));
        Ok(())
    }

    #[test]
    fn test_custom_limits() -> PasshashResult<()> {
        let limits = DecodeLimits {
            max_memory_cost: 4096,
            ..DecodeLimits::default()
        };
        limits.check(&Params::new(2, 4096, 1, 32, 16)?)?;
        assert!(limits.check(&Params::new(2, 4097, 1, 32, 16)?).is_err());
        Ok(())
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_params_deserialize_validates() {
        let json = r#"{"time_cost":3,"memory_cost":4096,"parallelism":2,"key_length":32,"salt_length":16}"#;
        let params: Params = serde_json::from_str(json).expect("valid config");
        assert_eq!(params.memory_cost(), 4096);

        let json = r#"{"time_cost":0,"memory_cost":4096,"parallelism":2,"key_length":32,"salt_length":16}"#;
        assert!(serde_json::from_str::<Params>(json).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_limits_deserialize_defaults_missing_fields() {
        let limits: DecodeLimits =
            serde_json::from_str(r#"{"max_memory_cost":2048}"#).expect("valid config");
        assert_eq!(limits.max_memory_cost, 2048);
        assert_eq!(limits.max_time_cost, DecodeLimits::default().max_time_cost);
    }
}

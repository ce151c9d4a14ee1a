//! `EncodedHash` - The persisted, self-describing hash string.
//!
//! Format: `$argon2id$v=19$m={memory},t={time},p={lanes}${b64(salt)}${b64(key)}`
//!
//! Salt and key use the standard base64 alphabet without padding (PHC string
//! format), so raw bytes can never collide with the `$` delimiter. The string
//! is readable by any PHC-compatible Argon2 implementation.

use core::fmt::{self, Debug, Display, Write};
use core::str::FromStr;

use base64::prelude::*;

use crate::core::error::{PasshashError, PasshashResult};
use crate::core::header::{
    make_header, parse_algorithm, parse_params, parse_version, DELIMITER, SEGMENT_COUNT,
};
use crate::core::params::{DecodeLimits, Params};
use crate::core::types::{DerivedKey, Salt};

/// Parameters, salt and derived key of one stored password hash.
///
/// # Example
///
/// ```rust
/// use passhash::{DerivedKey, EncodedHash, Params, Salt};
///
/// let params = Params::new(1, 1024, 1, 4, 8).expect("valid params");
/// let hash = EncodedHash::new(
///     params,
///     Salt::from(&b"saltsalt"[..]),
///     DerivedKey::from(&[1u8, 2, 3, 4][..]),
/// )
/// .expect("lengths match params");
///
/// let encoded = hash.to_string();
/// assert_eq!(encoded, "$argon2id$v=19$m=1024,t=1,p=1$c2FsdHNhbHQ$AQIDBA");
///
/// let parsed = EncodedHash::try_from(encoded.as_str()).expect("parse should succeed");
/// assert_eq!(parsed, hash);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct EncodedHash {
    params: Params,
    salt: Salt,
    key: DerivedKey,
}

impl EncodedHash {
    /// Bundles parameters with the salt and key they produced.
    ///
    /// # Errors
    ///
    /// Returns `PasshashError::EncodingFailure` if the salt or key length
    /// differs from `params`.
    pub fn new(params: Params, salt: Salt, key: DerivedKey) -> PasshashResult<Self> {
        if salt.len() != params.salt_length() || key.len() != params.key_length() {
            return Err(PasshashError::EncodingFailure);
        }

        Ok(Self { params, salt, key })
    }

    /// Returns the embedded parameters.
    #[must_use]
    pub const fn params(&self) -> &Params {
        &self.params
    }

    /// Returns the embedded salt.
    #[must_use]
    pub const fn salt(&self) -> &Salt {
        &self.salt
    }

    /// Returns the embedded derived key.
    #[must_use]
    pub const fn key(&self) -> &DerivedKey {
        &self.key
    }

    /// Serializes to the canonical string.
    ///
    /// # Errors
    ///
    /// Returns `PasshashError::EncodingFailure` if formatting fails.
    pub fn encode(&self) -> PasshashResult<String> {
        let mut out = String::new();
        write!(out, "{self}").map_err(|_| PasshashError::EncodingFailure)?;
        Ok(out)
    }

    /// Parses an encoded string, rejecting costs above `limits`.
    ///
    /// Structure is checked first; range validation only runs on a
    /// structurally valid string.
    ///
    /// # Errors
    ///
    /// Returns `PasshashError::MalformedHash` for any structural problem and
    /// `PasshashError::InvalidParameters` if the parsed values violate the
    /// Argon2 bounds or `limits`.
    pub fn decode(encoded: &str, limits: &DecodeLimits) -> PasshashResult<Self> {
        let segments: Vec<&str> = encoded.split(DELIMITER).collect();

        if segments.len() != SEGMENT_COUNT {
            return Err(PasshashError::MalformedHash);
        }

        if !segments[0].is_empty() || segments[1..].iter().any(|s| s.is_empty()) {
            return Err(PasshashError::MalformedHash);
        }

        parse_algorithm(segments[1])?;
        parse_version(segments[2])?;
        let (memory_cost, time_cost, parallelism) = parse_params(segments[3])?;

        let salt = BASE64_STANDARD_NO_PAD
            .decode(segments[4])
            .map_err(|_| PasshashError::MalformedHash)?;
        let key = BASE64_STANDARD_NO_PAD
            .decode(segments[5])
            .map_err(|_| PasshashError::MalformedHash)?;

        let params = Params::new(time_cost, memory_cost, parallelism, key.len(), salt.len())?;
        limits.check(&params)?;

        Ok(Self {
            params,
            salt: Salt::from(salt),
            key: DerivedKey::from(key),
        })
    }
}

// =============================================================================
// Display (serialization to the encoded string)
// =============================================================================

impl Display for EncodedHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&make_header(
            self.params.memory_cost(),
            self.params.time_cost(),
            self.params.parallelism(),
        ))?;
        f.write_str(&BASE64_STANDARD_NO_PAD.encode(self.salt.as_bytes()))?;
        f.write_char(DELIMITER)?;
        f.write_str(&BASE64_STANDARD_NO_PAD.encode(self.key.as_bytes()))
    }
}

// =============================================================================
// Debug
// =============================================================================

impl Debug for EncodedHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncodedHash")
            .field("params", &self.params)
            .field("salt_len", &self.salt.len())
            .field("key", &"[REDACTED]")
            .finish()
    }
}

// =============================================================================
// TryFrom / FromStr (parsing with default limits)
// =============================================================================

impl TryFrom<&str> for EncodedHash {
    type Error = PasshashError;

    fn try_from(encoded: &str) -> Result<Self, Self::Error> {
        Self::decode(encoded, &DecodeLimits::default())
    }
}

impl TryFrom<String> for EncodedHash {
    type Error = PasshashError;

    fn try_from(encoded: String) -> Result<Self, Self::Error> {
        Self::try_from(encoded.as_str())
    }
}

impl FromStr for EncodedHash {
    type Err = PasshashError;

    fn from_str(encoded: &str) -> Result<Self, Self::Err> {
        Self::try_from(encoded)
    }
}

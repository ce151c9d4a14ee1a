//! `Salt` - Random bytes mixed into every derivation.

use core::fmt::{self, Debug};

use crate::core::error::PasshashResult;
use crate::core::operations::fill_random;

/// A per-hash salt.
///
/// Salts are not secret, but a fresh one must be drawn for every hash so
/// that equal passwords never produce equal strings.
#[derive(Clone, PartialEq, Eq)]
pub struct Salt {
    bytes: Vec<u8>,
}

impl Salt {
    /// Draws `len` bytes from the OS CSPRNG.
    ///
    /// # Errors
    ///
    /// Returns `PasshashError::RandomSourceFailure` if the OS RNG fails.
    pub fn generate(len: usize) -> PasshashResult<Self> {
        let mut bytes = vec![0u8; len];
        fill_random(&mut bytes)?;
        Ok(Self { bytes })
    }

    /// Returns the salt bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns the salt length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if the salt is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl From<Vec<u8>> for Salt {
    fn from(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }
}

impl From<&[u8]> for Salt {
    fn from(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.to_vec(),
        }
    }
}

impl AsRef<[u8]> for Salt {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl Debug for Salt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Salt").field("len", &self.bytes.len()).finish()
    }
}

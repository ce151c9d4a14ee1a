//! `DerivedKey` - Argon2id output.

use core::fmt::{self, Debug};

use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// The key derived from a password.
///
/// # Security
///
/// - Key material is zeroized on drop
/// - Debug output redacts the key
/// - Equality comparison uses constant-time comparison
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct DerivedKey {
    bytes: Vec<u8>,
}

impl DerivedKey {
    /// Returns a reference to the raw key bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns the key length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if the key is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl From<Vec<u8>> for DerivedKey {
    fn from(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }
}

impl From<&[u8]> for DerivedKey {
    fn from(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.to_vec(),
        }
    }
}

impl AsRef<[u8]> for DerivedKey {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

// =============================================================================
// Debug (security: don't expose key material)
// =============================================================================

impl Debug for DerivedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DerivedKey")
            .field("len", &self.bytes.len())
            .field("key", &"[REDACTED]")
            .finish()
    }
}

// =============================================================================
// PartialEq (constant-time comparison)
// =============================================================================

impl PartialEq for DerivedKey {
    fn eq(&self, other: &Self) -> bool {
        self.bytes.ct_eq(&other.bytes).into()
    }
}

impl Eq for DerivedKey {}

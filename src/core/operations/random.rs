//! Secure random bytes from the operating system.

use rand_core::{OsRng, TryRngCore};

use crate::core::error::{PasshashError, PasshashResult};

/// Fills `buf` from the OS CSPRNG.
///
/// There is no fallback source: if the OS cannot supply randomness the call
/// fails and the caller decides whether to retry.
///
/// # Errors
///
/// Returns `PasshashError::RandomSourceFailure` if the OS RNG fails.
pub fn fill_random(buf: &mut [u8]) -> PasshashResult<()> {
    OsRng.try_fill_bytes(buf).map_err(|err| {
        tracing::error!(error = %err, "OS random source failed");
        PasshashError::RandomSourceFailure
    })
}

//! Argon2id key derivation.
//!
//! Derivation takes only the password and the salt as variable inputs; no
//! secret (pepper) and no associated data are mixed in.

use argon2::{Algorithm, Argon2, ParamsBuilder, Version};

use crate::core::error::{PasshashError, PasshashResult};
use crate::core::params::Params;
use crate::core::types::DerivedKey;

/// Derives a `params.key_length()`-byte key from `password` and `salt`.
///
/// # Arguments
///
/// * `password` - The password bytes
/// * `salt` - The salt; its length need not equal `params.salt_length()`
/// * `params` - Argon2id cost parameters
///
/// # Errors
///
/// Returns `PasshashError::InvalidParameters` if the backend rejects the cost
/// parameters and `PasshashError::KeyDerivationFailed` if hashing itself
/// fails (for instance a salt shorter than 8 bytes).
pub fn derive_key(password: &[u8], salt: &[u8], params: &Params) -> PasshashResult<DerivedKey> {
    let argon2_params = ParamsBuilder::new()
        .m_cost(params.memory_cost())
        .t_cost(params.time_cost())
        .p_cost(u32::from(params.parallelism()))
        .output_len(params.key_length())
        .build()
        .map_err(|_| PasshashError::InvalidParameters("rejected by the Argon2 backend"))?;

    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, argon2_params);

    let mut key = vec![0u8; params.key_length()];
    argon2
        .hash_password_into(password, salt, &mut key)
        .map_err(|_| PasshashError::KeyDerivationFailed)?;

    Ok(DerivedKey::from(key))
}

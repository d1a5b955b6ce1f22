//! Key derivation using Argon2id
//!
//! Derives encryption keys from user passwords using Argon2id,
//! a memory-hard key derivation function resistant to GPU/ASIC attacks.

use argon2::{Algorithm, Argon2, Params, Version};
use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use crate::error::{EncryptxError, EncryptxResult};

/// Size of the random salt in bytes
pub const SALT_SIZE: usize = 16;

/// Size of the derived key in bytes (AES-256)
pub const KEY_SIZE: usize = 32;

/// Default memory cost in KiB (256 MiB)
pub const DEFAULT_MEMORY_COST: u32 = 262_144;

/// Default time cost (iterations)
pub const DEFAULT_TIME_COST: u32 = 6;

/// Default parallelism degree
pub const DEFAULT_PARALLELISM: u32 = 2;

/// Cost parameters for Argon2id
///
/// Envelopes do not record these values, so data encrypted with one set of
/// parameters can only be decrypted with the same set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KdfParams {
    /// Memory cost in KiB
    pub memory_cost: u32,
    /// Time cost (iterations)
    pub time_cost: u32,
    /// Parallelism degree
    pub parallelism: u32,
}

impl Default for KdfParams {
    fn default() -> Self {
        Self {
            memory_cost: DEFAULT_MEMORY_COST,
            time_cost: DEFAULT_TIME_COST,
            parallelism: DEFAULT_PARALLELISM,
        }
    }
}

impl KdfParams {
    /// Create params with specific values
    pub fn new(memory_cost: u32, time_cost: u32, parallelism: u32) -> Self {
        Self {
            memory_cost,
            time_cost,
            parallelism,
        }
    }

    fn to_argon2(self) -> EncryptxResult<Params> {
        Params::new(
            self.memory_cost,
            self.time_cost,
            self.parallelism,
            Some(KEY_SIZE),
        )
        .map_err(|e| EncryptxError::Config(format!("Invalid Argon2 parameters: {}", e)))
    }

    /// Check that Argon2 accepts these parameters
    pub fn validate(&self) -> EncryptxResult<()> {
        self.to_argon2().map(|_| ())
    }
}

/// A derived encryption key, zeroed on drop
pub struct DerivedKey {
    key: Zeroizing<[u8; KEY_SIZE]>,
}

impl DerivedKey {
    /// Get the key bytes
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.key
    }
}

/// Derive an encryption key from a password and salt
///
/// Deterministic: the same password, salt and parameters always yield the
/// same key.
pub fn derive_key(
    password: &str,
    salt: &[u8; SALT_SIZE],
    params: &KdfParams,
) -> EncryptxResult<DerivedKey> {
    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params.to_argon2()?);

    let mut key = Zeroizing::new([0u8; KEY_SIZE]);
    argon2
        .hash_password_into(password.as_bytes(), salt, key.as_mut())
        .map_err(|e| EncryptxError::Crypto(format!("Key derivation failed: {}", e)))?;

    Ok(DerivedKey { key })
}

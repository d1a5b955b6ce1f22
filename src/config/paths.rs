//! Path management for encryptx
//!
//! ## Path Resolution Order
//!
//! 1. `ENCRYPTX_HOME` environment variable (if set)
//! 2. `<home>/.encryptx_pro` as reported by the `directories` crate

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::error::EncryptxError;

/// Environment variable overriding the base directory
pub const HOME_ENV_VAR: &str = "ENCRYPTX_HOME";

const DEFAULT_DIR_NAME: &str = ".encryptx_pro";
const VAULT_FILE_NAME: &str = "vault.json.enc";
const VAULT_TEMP_FILE_NAME: &str = "vault.json";
const SETTINGS_FILE_NAME: &str = "config.json";

/// Manages all paths used by encryptx
#[derive(Debug, Clone)]
pub struct EncryptxPaths {
    /// Base directory for all encryptx data
    base_dir: PathBuf,
}

impl EncryptxPaths {
    /// Create a new EncryptxPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, EncryptxError> {
        let base_dir = match std::env::var_os(HOME_ENV_VAR) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create EncryptxPaths with a custom base directory
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Get the base directory (~/.encryptx_pro/ or the override)
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to the encrypted vault
    pub fn vault_file(&self) -> PathBuf {
        self.base_dir.join(VAULT_FILE_NAME)
    }

    /// Get the path of the transient decrypted vault
    pub fn vault_temp_file(&self) -> PathBuf {
        self.base_dir.join(VAULT_TEMP_FILE_NAME)
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join(SETTINGS_FILE_NAME)
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), EncryptxError> {
        std::fs::create_dir_all(&self.base_dir).map_err(|e| {
            EncryptxError::Io(format!(
                "Failed to create directory {}: {}",
                self.base_dir.display(),
                e
            ))
        })
    }
}

fn resolve_default_path() -> Result<PathBuf, EncryptxError> {
    let dirs = BaseDirs::new()
        .ok_or_else(|| EncryptxError::Config("Could not determine home directory".into()))?;
    Ok(dirs.home_dir().join(DEFAULT_DIR_NAME))
}

//! User settings for encryptx
//!
//! Stored as JSON next to the vault. A missing file means defaults.

use serde::{Deserialize, Serialize};

use super::paths::EncryptxPaths;
use crate::crypto::KdfParams;
use crate::error::EncryptxError;
use crate::storage::file_io::read_json;

/// User settings for encryptx
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Argon2id cost parameters used for every envelope
    #[serde(default)]
    pub kdf: KdfParams,
}

fn default_schema_version() -> u32 {
    1
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            kdf: KdfParams::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, falling back to defaults if the file doesn't exist
    pub fn load(paths: &EncryptxPaths) -> Result<Self, EncryptxError> {
        let settings: Settings = read_json(paths.settings_file())?;
        settings.kdf.validate()?;
        Ok(settings)
    }
}

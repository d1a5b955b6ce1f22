//! Vault data model
//!
//! The plaintext schema persisted inside the encrypted vault file:
//!
//! ```json
//! { "version": 1, "entries": [ {"title": "", "username": "", "password": "", "notes": ""} ] }
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{EncryptxError, EncryptxResult};

/// The only vault schema version this crate reads and writes
pub const VAULT_VERSION: u32 = 1;

/// One credential record
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct Entry {
    pub title: String,
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub notes: String,
}

impl Entry {
    /// Create an entry with empty notes
    pub fn new(
        title: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            username: username.into(),
            password: password.into(),
            notes: String::new(),
        }
    }

    /// Set the notes
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Case-insensitive exact comparison against the title
    pub fn title_matches(&self, title: &str) -> bool {
        self.title.to_lowercase() == title.to_lowercase()
    }
}

// Never print the stored password
impl fmt::Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("title", &self.title)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("notes", &self.notes)
            .finish()
    }
}

/// Everything the vault persists
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaultData {
    #[serde(default = "default_version")]
    pub version: u32,
    /// Insertion order is preserved
    #[serde(default)]
    pub entries: Vec<Entry>,
}

fn default_version() -> u32 {
    VAULT_VERSION
}

impl Default for VaultData {
    fn default() -> Self {
        Self {
            version: VAULT_VERSION,
            entries: Vec::new(),
        }
    }
}

impl VaultData {
    /// Parse a decrypted payload
    pub fn from_json(bytes: &[u8]) -> EncryptxResult<Self> {
        let data: VaultData = serde_json::from_slice(bytes)
            .map_err(|e| EncryptxError::Format(format!("Invalid vault payload: {}", e)))?;

        if data.version != VAULT_VERSION {
            return Err(EncryptxError::Format(format!(
                "Unsupported vault version: {}",
                data.version
            )));
        }

        Ok(data)
    }

    /// Serialize with two-space indentation
    pub fn to_json(&self) -> EncryptxResult<Vec<u8>> {
        Ok(serde_json::to_vec_pretty(self)?)
    }
}

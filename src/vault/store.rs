//! The encrypted credential vault
//!
//! State lives in memory as [`VaultData`] and is persisted through the
//! envelope format. Every `load`/`save` passes the JSON through a plaintext
//! scratch file at the configured temp path; that file never outlives the
//! call that created it. Decryption happens in memory so the scratch file is
//! the only place plaintext touches the disk.
//!
//! There is no locking: two processes saving the same vault race and the
//! last rename wins.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::EncryptxPaths;
use crate::crypto::{decrypt, encrypt_file, KdfParams, SecureBytes, SecureString};
use crate::error::{EncryptxError, EncryptxResult};
use crate::storage::{read_bytes, ScratchFile};

use super::model::{Entry, VaultData};

/// Where a vault lives and how its key is derived
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaultConfig {
    backing_path: PathBuf,
    temp_path: PathBuf,
    kdf: KdfParams,
}

impl VaultConfig {
    /// Explicit backing and temp paths with default key derivation
    pub fn new(backing_path: impl Into<PathBuf>, temp_path: impl Into<PathBuf>) -> Self {
        Self {
            backing_path: backing_path.into(),
            temp_path: temp_path.into(),
            kdf: KdfParams::default(),
        }
    }

    /// The standard file names under a base directory
    pub fn from_paths(paths: &EncryptxPaths) -> Self {
        Self::new(paths.vault_file(), paths.vault_temp_file())
    }

    /// Override the key derivation parameters
    pub fn with_kdf(mut self, kdf: KdfParams) -> Self {
        self.kdf = kdf;
        self
    }

    pub fn backing_path(&self) -> &Path {
        &self.backing_path
    }

    pub fn temp_path(&self) -> &Path {
        &self.temp_path
    }

    pub fn kdf(&self) -> &KdfParams {
        &self.kdf
    }
}

/// An encrypted credential store bound to one password and one set of paths
pub struct Vault {
    password: SecureString,
    config: VaultConfig,
    data: VaultData,
}

impl Vault {
    /// Create a vault handle, creating the parent directories of its files
    ///
    /// Nothing is read from disk until [`Vault::load`] is called.
    pub fn new(password: impl Into<SecureString>, config: VaultConfig) -> EncryptxResult<Self> {
        for path in [config.backing_path(), config.temp_path()] {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent).map_err(|e| {
                    EncryptxError::Io(format!(
                        "Failed to create directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        Ok(Self {
            password: password.into(),
            config,
            data: VaultData::default(),
        })
    }

    /// Create a vault handle and load it
    pub fn open(password: impl Into<SecureString>, config: VaultConfig) -> EncryptxResult<Self> {
        let mut vault = Self::new(password, config)?;
        vault.load()?;
        Ok(vault)
    }

    /// Load the vault from its backing file
    ///
    /// A missing backing file leaves the vault empty and is not an error.
    /// In-memory state is only replaced once the payload has decrypted and
    /// parsed.
    pub fn load(&mut self) -> EncryptxResult<()> {
        let backing = self.config.backing_path();

        let exists = backing.try_exists().map_err(|e| {
            EncryptxError::Io(format!("Failed to access {}: {}", backing.display(), e))
        })?;
        if !exists {
            debug!(path = %backing.display(), "no vault file yet, starting empty");
            return Ok(());
        }

        let scratch = ScratchFile::reserve(self.config.temp_path())?;
        let envelope = read_bytes(backing)?;
        let plaintext = decrypt(&envelope, &self.password, self.config.kdf())?;
        scratch.fill(&plaintext)?;

        let payload = read_bytes(scratch.path())?;
        let data = VaultData::from_json(payload.as_bytes())?;
        drop(scratch);

        debug!(
            path = %backing.display(),
            entries = data.entries.len(),
            "vault loaded"
        );
        self.data = data;
        Ok(())
    }

    /// Encrypt the current state into the backing file
    ///
    /// The backing file is replaced atomically, so an interrupted save leaves
    /// the previous version intact.
    pub fn save(&self) -> EncryptxResult<()> {
        let json = SecureBytes::new(self.data.to_json()?);
        let scratch = ScratchFile::create(self.config.temp_path(), json.as_bytes())?;

        encrypt_file(
            scratch.path(),
            self.config.backing_path(),
            &self.password,
            self.config.kdf(),
        )?;
        drop(scratch);

        info!(
            path = %self.config.backing_path().display(),
            entries = self.data.entries.len(),
            "vault saved"
        );
        Ok(())
    }

    /// Append a new entry; pass `""` for no notes
    ///
    /// Titles are not required to be unique.
    pub fn add_entry(
        &mut self,
        title: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
        notes: impl Into<String>,
    ) {
        self.push_entry(Entry::new(title, username, password).with_notes(notes));
    }

    /// Append an already built entry
    pub fn push_entry(&mut self, entry: Entry) {
        self.data.entries.push(entry);
    }

    /// Remove every entry whose title equals `title` exactly (case-sensitive)
    ///
    /// Returns how many entries were removed.
    pub fn remove_entry(&mut self, title: &str) -> usize {
        let before = self.data.entries.len();
        self.data.entries.retain(|entry| entry.title != title);
        before - self.data.entries.len()
    }

    /// First entry whose title matches `title` ignoring case
    pub fn find_entry(&self, title: &str) -> Option<&Entry> {
        self.data.entries.iter().find(|entry| entry.title_matches(title))
    }

    /// All entries in insertion order
    pub fn get_all(&self) -> &[Entry] {
        &self.data.entries
    }

    pub fn version(&self) -> u32 {
        self.data.version
    }

    pub fn len(&self) -> usize {
        self.data.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.entries.is_empty()
    }
}

impl std::fmt::Debug for Vault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Vault")
            .field("config", &self.config)
            .field("entries", &self.data.entries.len())
            .finish_non_exhaustive()
    }
}

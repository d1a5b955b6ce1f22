//! Scoped plaintext scratch files
//!
//! A [`ScratchFile`] owns a path, and the `.tmp` staging sibling used by
//! atomic writes next to it, for the duration of one operation. Whatever is
//! at either path is removed when the guard goes out of scope. Removal runs
//! on normal return, early return, `?` propagation and unwinding alike.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::{EncryptxError, EncryptxResult};

use super::file_io::{create_private, staging_path};

/// Guard over a transient plaintext file
#[derive(Debug)]
pub struct ScratchFile {
    path: PathBuf,
}

impl ScratchFile {
    /// Claim `path` for a file written later through [`ScratchFile::fill`]
    ///
    /// Anything left behind by an earlier crash, at the path or its staging
    /// sibling, is removed first.
    pub fn reserve(path: impl Into<PathBuf>) -> EncryptxResult<Self> {
        let scratch = Self { path: path.into() };
        for path in scratch.owned_paths() {
            remove_if_present(&path)?;
        }
        Ok(scratch)
    }

    /// Claim `path` and fill it with `contents`
    pub fn create(path: impl Into<PathBuf>, contents: &[u8]) -> EncryptxResult<Self> {
        let scratch = Self::reserve(path)?;
        scratch.fill(contents)?;
        Ok(scratch)
    }

    /// Write `contents` to the guarded path, owner-only on Unix
    pub fn fill(&self, contents: &[u8]) -> EncryptxResult<()> {
        let mut file = create_private(&self.path).map_err(|e| {
            EncryptxError::Io(format!("Failed to create {}: {}", self.path.display(), e))
        })?;
        file.write_all(contents).map_err(|e| {
            EncryptxError::Io(format!("Failed to write {}: {}", self.path.display(), e))
        })
    }

    /// The guarded path
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn owned_paths(&self) -> [PathBuf; 2] {
        [self.path.clone(), staging_path(&self.path)]
    }
}

fn remove_if_present(path: &Path) -> EncryptxResult<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(EncryptxError::Io(format!(
            "Failed to remove {}: {}",
            path.display(),
            e
        ))),
    }
}

impl Drop for ScratchFile {
    fn drop(&mut self) {
        for path in self.owned_paths() {
            if let Err(e) = remove_if_present(&path) {
                warn!(path = %path.display(), error = %e, "scratch file not removed");
            }
        }
    }
}

//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt data on failure.

use std::fs::{self, File, OpenOptions};
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::crypto::SecureBytes;
use crate::error::EncryptxError;

/// Read JSON from a file, returning a default value if file doesn't exist
pub fn read_json<T, P>(path: P) -> Result<T, EncryptxError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(T::default());
    }

    let file = File::open(path)
        .map_err(|e| EncryptxError::Io(format!("Failed to open {}: {}", path.display(), e)))?;

    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .map_err(|e| EncryptxError::Config(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Read an entire file into a zeroizing buffer
pub fn read_bytes<P: AsRef<Path>>(path: P) -> Result<SecureBytes, EncryptxError> {
    let path = path.as_ref();
    fs::read(path)
        .map(SecureBytes::new)
        .map_err(|e| EncryptxError::Io(format!("Failed to read {}: {}", path.display(), e)))
}

/// Sibling path used while a file is being replaced
pub fn staging_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Create a new file readable only by its owner where the platform allows it
pub(crate) fn create_private(path: &Path) -> std::io::Result<File> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    options.open(path)
}

/// Write bytes to a file atomically (write to temp, then rename)
///
/// The destination is either completely written or not modified at all,
/// preventing corruption on crashes or power failures.
pub fn write_bytes_atomic<P: AsRef<Path>>(path: P, data: &[u8]) -> Result<(), EncryptxError> {
    let path = path.as_ref();

    // Ensure parent directory exists
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            EncryptxError::Io(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Same directory as the target so the rename stays on one filesystem
    let temp_path = staging_path(path);

    let result = write_and_sync(&temp_path, data).and_then(|()| {
        fs::rename(&temp_path, path).map_err(|e| {
            EncryptxError::Io(format!(
                "Failed to replace {}: {}",
                path.display(),
                e
            ))
        })
    });

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }

    result
}

fn write_and_sync(path: &Path, data: &[u8]) -> Result<(), EncryptxError> {
    let mut file = create_private(path).map_err(|e| {
        EncryptxError::Io(format!("Failed to create {}: {}", path.display(), e))
    })?;

    file.write_all(data)
        .map_err(|e| EncryptxError::Io(format!("Failed to write {}: {}", path.display(), e)))?;

    // Sync to disk before rename
    file.sync_all()
        .map_err(|e| EncryptxError::Io(format!("Failed to sync {}: {}", path.display(), e)))
}

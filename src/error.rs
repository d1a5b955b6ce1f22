//! Custom error types for encryptx
//!
//! This module defines the error hierarchy for the crate using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for encryptx operations
#[derive(Error, Debug)]
pub enum EncryptxError {
    /// Tag verification failed.
    ///
    /// Covers both a wrong password and corrupted or tampered data. The two
    /// causes share this single variant and message.
    #[error("Authentication failed: wrong password or corrupted data")]
    Authentication,

    /// Malformed envelope or vault payload
    #[error("Format error: {0}")]
    Format(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Cipher failures other than authentication
    #[error("Crypto error: {0}")]
    Crypto(String),

    /// A vault entry lookup found nothing
    #[error("Entry not found: {0}")]
    NotFound(String),

    /// Validation errors for user input
    #[error("Validation error: {0}")]
    Validation(String),
}

impl EncryptxError {
    /// Check if this is an authentication failure
    pub fn is_authentication(&self) -> bool {
        matches!(self, Self::Authentication)
    }

    /// Check if this is a format error
    pub fn is_format(&self) -> bool {
        matches!(self, Self::Format(_))
    }

    /// Check if this is an I/O error
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}

impl From<std::io::Error> for EncryptxError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for EncryptxError {
    fn from(err: serde_json::Error) -> Self {
        Self::Format(err.to_string())
    }
}

/// Result type alias for encryptx operations
pub type EncryptxResult<T> = Result<T, EncryptxError>;

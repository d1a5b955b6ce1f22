//! Configuration module for encryptx
//!
//! This module provides configuration management including:
//! - Base directory resolution
//! - User settings persistence (key derivation cost)

pub mod paths;
pub mod settings;

pub use paths::EncryptxPaths;
pub use settings::Settings;

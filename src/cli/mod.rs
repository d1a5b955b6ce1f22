//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the crypto and vault layers.

pub mod file;
pub mod prompt;
pub mod vault;

pub use file::{handle_decrypt_command, handle_encrypt_command};
pub use vault::{handle_vault_command, VaultCommands};

//! encryptx - password-based file encryption and an encrypted credential vault
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `crypto`: Argon2id key derivation, AES-256-GCM envelopes, secure memory
//! - `storage`: atomic file writes and scoped plaintext scratch files
//! - `vault`: the credential store and its persisted schema
//! - `config`: path resolution and user settings
//! - `error`: custom error types
//! - `cli` / `display`: the command-line front-end
//!
//! # Envelope format
//!
//! ```text
//! offset 0..16   salt
//! offset 16..28  nonce
//! offset 28..end ciphertext || 16-byte tag
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use encryptx::vault::{Vault, VaultConfig};
//!
//! let mut vault = Vault::open("correct horse", VaultConfig::new("vault.json.enc", "vault.json"))?;
//! vault.add_entry("Gmail", "me@gmail.com", "hunter2", "");
//! vault.save()?;
//! ```

pub mod cli;
pub mod config;
pub mod crypto;
pub mod display;
pub mod error;
pub mod storage;
pub mod vault;

pub use crypto::{decrypt, decrypt_file, encrypt, encrypt_file, KdfParams};
pub use error::{EncryptxError, EncryptxResult};
pub use vault::{Entry, Vault, VaultConfig};

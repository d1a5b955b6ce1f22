//! Cryptographic functions for encryptx
//!
//! Provides AES-256-GCM envelopes keyed by Argon2id password derivation,
//! plus zeroizing containers for secrets.

pub mod encryption;
pub mod file;
pub mod key_derivation;
pub mod secure_memory;

pub use encryption::{decrypt, encrypt, Envelope, ENVELOPE_OVERHEAD, HEADER_SIZE, NONCE_SIZE, TAG_SIZE};
pub use file::{decrypt_file, encrypt_file};
pub use key_derivation::{derive_key, DerivedKey, KdfParams, KEY_SIZE, SALT_SIZE};
pub use secure_memory::{SecureBytes, SecureString};

//! Encrypted credential vault
//!
//! - `model`: the persisted JSON schema
//! - `store`: the load/mutate/save lifecycle

pub mod model;
pub mod store;

pub use model::{Entry, VaultData, VAULT_VERSION};
pub use store::{Vault, VaultConfig};

//! Vault CLI commands
//!
//! Implements CLI commands for managing credentials in the encrypted vault.

use clap::Subcommand;

use crate::config::{paths::EncryptxPaths, settings::Settings};
use crate::crypto::SecureString;
use crate::display::{format_entry_detail, format_entry_list};
use crate::error::{EncryptxError, EncryptxResult};
use crate::vault::{Vault, VaultConfig};

use super::prompt::{entry_password, master_password};

/// Vault subcommands
#[derive(Subcommand)]
pub enum VaultCommands {
    /// Add a credential
    Add {
        /// Entry title (need not be unique)
        title: String,
        /// Username or login
        username: String,
        /// Free-form notes
        #[arg(short, long, default_value = "")]
        notes: String,
        /// Entry password (prompted for if omitted)
        #[arg(short, long)]
        password: Option<String>,
    },

    /// List all credentials without their passwords
    #[command(alias = "ls")]
    List,

    /// Show one credential (title match ignores case)
    Get {
        /// Entry title
        title: String,
        /// Print the stored password
        #[arg(short, long)]
        show_password: bool,
    },

    /// Remove every credential with exactly this title
    #[command(alias = "rm")]
    Remove {
        /// Entry title (case-sensitive)
        title: String,
    },
}

/// Handle a vault command
pub fn handle_vault_command(
    paths: &EncryptxPaths,
    settings: &Settings,
    cmd: VaultCommands,
) -> EncryptxResult<()> {
    let config = VaultConfig::from_paths(paths).with_kdf(settings.kdf);

    match cmd {
        VaultCommands::Add {
            title,
            username,
            notes,
            password,
        } => {
            // A vault that doesn't exist yet is about to get its password
            let is_new = !config.backing_path().exists();
            let mut vault = Vault::open(master_password(is_new)?, config)?;

            let secret = match password {
                Some(p) => SecureString::from(p),
                None => entry_password()?,
            };
            vault.add_entry(title.as_str(), username, secret.as_str(), notes);
            vault.save()?;

            println!("Added entry '{}'.", title);
        }

        VaultCommands::List => {
            let vault = Vault::open(master_password(false)?, config)?;
            println!("{}", format_entry_list(vault.get_all()));
        }

        VaultCommands::Get {
            title,
            show_password,
        } => {
            let vault = Vault::open(master_password(false)?, config)?;
            let entry = vault
                .find_entry(&title)
                .ok_or_else(|| EncryptxError::NotFound(title.clone()))?;
            print!("{}", format_entry_detail(entry, show_password));
        }

        VaultCommands::Remove { title } => {
            let mut vault = Vault::open(master_password(false)?, config)?;
            let removed = vault.remove_entry(&title);

            if removed == 0 {
                println!("No entry titled '{}'.", title);
                return Ok(());
            }

            vault.save()?;
            println!(
                "Removed {} {} titled '{}'.",
                removed,
                if removed == 1 { "entry" } else { "entries" },
                title
            );
        }
    }

    Ok(())
}

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use encryptx::cli::{handle_decrypt_command, handle_encrypt_command, handle_vault_command};
use encryptx::config::{paths::EncryptxPaths, settings::Settings};

#[derive(Parser)]
#[command(
    name = "encryptx",
    version,
    about = "Password-based file encryption and an encrypted credential vault",
    long_about = "encryptx encrypts files with AES-256-GCM under an Argon2id-derived key \
                  and keeps credentials in a vault stored in the same format. \
                  Set ENCRYPTX_PASSWORD to skip the interactive password prompt."
)]
struct Cli {
    /// Directory holding the vault and settings
    #[arg(long, env = "ENCRYPTX_HOME", global = true)]
    home: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a file
    Encrypt {
        /// File to encrypt
        input: PathBuf,
        /// Where to write the encrypted file
        output: PathBuf,
    },

    /// Decrypt a file
    Decrypt {
        /// Encrypted file
        input: PathBuf,
        /// Where to write the decrypted file
        output: PathBuf,
    },

    /// Credential vault commands
    #[command(subcommand)]
    Vault(encryptx::cli::VaultCommands),

    /// Show current configuration and paths
    Config,
}

/// Initializes the tracing subscriber, logging to stderr
fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("encryptx={level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let paths = match cli.home {
        Some(dir) => EncryptxPaths::with_base_dir(dir),
        None => EncryptxPaths::new()?,
    };
    let settings = Settings::load(&paths)?;

    match cli.command {
        Commands::Encrypt { input, output } => {
            handle_encrypt_command(&settings, &input, &output)?;
        }
        Commands::Decrypt { input, output } => {
            handle_decrypt_command(&settings, &input, &output)?;
        }
        Commands::Vault(cmd) => {
            paths.ensure_directories()?;
            handle_vault_command(&paths, &settings, cmd)?;
        }
        Commands::Config => {
            println!("encryptx Configuration");
            println!("======================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Vault file:     {}", paths.vault_file().display());
            println!("Temp file:      {}", paths.vault_temp_file().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!();
            println!("Key derivation (Argon2id):");
            println!("  Memory cost: {} KiB", settings.kdf.memory_cost);
            println!("  Time cost:   {}", settings.kdf.time_cost);
            println!("  Parallelism: {}", settings.kdf.parallelism);
        }
    }

    Ok(())
}

//! File encryption CLI commands

use std::path::Path;

use crate::config::settings::Settings;
use crate::crypto::{decrypt_file, encrypt_file};
use crate::error::{EncryptxError, EncryptxResult};

use super::prompt::master_password;

/// Encrypt a file
pub fn handle_encrypt_command(
    settings: &Settings,
    input: &Path,
    output: &Path,
) -> EncryptxResult<()> {
    ensure_input_exists(input)?;
    let password = master_password(true)?;

    encrypt_file(input, output, &password, &settings.kdf)?;
    println!("Encryption complete.");
    Ok(())
}

/// Decrypt a file
pub fn handle_decrypt_command(
    settings: &Settings,
    input: &Path,
    output: &Path,
) -> EncryptxResult<()> {
    ensure_input_exists(input)?;
    let password = master_password(false)?;

    decrypt_file(input, output, &password, &settings.kdf)?;
    println!("Decryption complete.");
    Ok(())
}

fn ensure_input_exists(input: &Path) -> EncryptxResult<()> {
    if input.is_file() {
        Ok(())
    } else {
        Err(EncryptxError::Validation(format!(
            "Input file does not exist: {}",
            input.display()
        )))
    }
}

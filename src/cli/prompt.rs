//! Password acquisition via the ENCRYPTX_PASSWORD environment variable or a TTY prompt

use std::io::IsTerminal;

use crate::crypto::SecureString;
use crate::error::{EncryptxError, EncryptxResult};

/// The environment variable name for providing the master password
pub const PASSWORD_ENV_VAR: &str = "ENCRYPTX_PASSWORD";

/// Get the master password
///
/// Priority:
/// 1. `ENCRYPTX_PASSWORD` environment variable (for scripts)
/// 2. Interactive TTY prompt via `rpassword`, asked twice when `confirm` is set
pub fn master_password(confirm: bool) -> EncryptxResult<SecureString> {
    if let Some(password) = password_from_env() {
        return Ok(password);
    }

    let password = prompt_hidden("Password: ")?;
    if confirm {
        let again = prompt_hidden("Confirm password: ")?;
        if password.as_str() != again.as_str() {
            return Err(EncryptxError::Validation("Passwords do not match".into()));
        }
    }
    Ok(password)
}

/// Prompt for the password stored inside a new vault entry
pub fn entry_password() -> EncryptxResult<SecureString> {
    prompt_hidden("Entry password: ")
}

fn password_from_env() -> Option<SecureString> {
    std::env::var(PASSWORD_ENV_VAR)
        .ok()
        .filter(|p| !p.is_empty())
        .map(SecureString::from)
}

fn prompt_hidden(prompt: &str) -> EncryptxResult<SecureString> {
    if !std::io::stdin().is_terminal() {
        return Err(EncryptxError::Validation(format!(
            "No password provided. Set {} or run interactively.",
            PASSWORD_ENV_VAR
        )));
    }

    let password = SecureString::from(
        rpassword::prompt_password(prompt)
            .map_err(|e| EncryptxError::Io(format!("Failed to read password: {}", e)))?,
    );

    if password.is_empty() {
        return Err(EncryptxError::Validation("Empty password not allowed".into()));
    }
    Ok(password)
}

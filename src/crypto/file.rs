//! Whole-file encryption and decryption
//!
//! The source file is read fully into memory and the result is written
//! atomically, so memory use is proportional to file size.

use std::path::Path;

use tracing::debug;

use crate::error::EncryptxResult;
use crate::storage::file_io::{read_bytes, write_bytes_atomic};

use super::encryption::{decrypt, encrypt};
use super::key_derivation::KdfParams;

/// Encrypt `input` into an envelope written to `output`
pub fn encrypt_file<P, Q>(input: P, output: Q, password: &str, params: &KdfParams) -> EncryptxResult<()>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let (input, output) = (input.as_ref(), output.as_ref());

    let plaintext = read_bytes(input)?;
    let envelope = encrypt(plaintext.as_bytes(), password, params)?;
    write_bytes_atomic(output, &envelope)?;

    debug!(
        input = %input.display(),
        output = %output.display(),
        bytes = envelope.len(),
        "file encrypted"
    );
    Ok(())
}

/// Decrypt the envelope in `input` and write the plaintext to `output`
///
/// `output` is left untouched when authentication fails.
pub fn decrypt_file<P, Q>(input: P, output: Q, password: &str, params: &KdfParams) -> EncryptxResult<()>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let (input, output) = (input.as_ref(), output.as_ref());

    let envelope = read_bytes(input)?;
    let plaintext = decrypt(envelope.as_bytes(), password, params)?;
    write_bytes_atomic(output, plaintext.as_bytes())?;

    debug!(
        input = %input.display(),
        output = %output.display(),
        bytes = plaintext.len(),
        "file decrypted"
    );
    Ok(())
}

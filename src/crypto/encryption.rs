//! AES-256-GCM envelope encryption/decryption
//!
//! An envelope is the self-contained byte layout
//! `salt (16) || nonce (12) || ciphertext || tag (16)`.
//! There is no magic number or version byte. Every encryption generates a
//! fresh salt and nonce, so a key is never used with the same nonce twice.

use aes_gcm::aead::rand_core::RngCore;
use aes_gcm::{
    aead::{Aead, KeyInit, OsRng},
    Aes256Gcm, Nonce,
};

use crate::error::{EncryptxError, EncryptxResult};

use super::key_derivation::{derive_key, KdfParams, SALT_SIZE};
use super::SecureBytes;

/// Size of the AES-GCM nonce in bytes (96 bits)
pub const NONCE_SIZE: usize = 12;

/// Size of the AES-GCM authentication tag in bytes (128 bits)
pub const TAG_SIZE: usize = 16;

/// Length of the salt and nonce prefix
pub const HEADER_SIZE: usize = SALT_SIZE + NONCE_SIZE;

/// Fixed number of bytes an envelope adds to its plaintext
pub const ENVELOPE_OVERHEAD: usize = HEADER_SIZE + TAG_SIZE;

/// Borrowed view over the parts of an envelope
#[derive(Debug, Clone, Copy)]
pub struct Envelope<'a> {
    pub salt: &'a [u8; SALT_SIZE],
    pub nonce: &'a [u8; NONCE_SIZE],
    /// Ciphertext followed by the authentication tag
    pub body: &'a [u8],
}

impl<'a> Envelope<'a> {
    /// Split raw envelope bytes into salt, nonce and body
    ///
    /// Fails with a format error when the input cannot hold a salt and nonce.
    pub fn parse(bytes: &'a [u8]) -> EncryptxResult<Self> {
        if bytes.len() < HEADER_SIZE {
            return Err(EncryptxError::Format(format!(
                "Invalid envelope: expected at least {} bytes, got {}",
                HEADER_SIZE,
                bytes.len()
            )));
        }

        let (salt, rest) = bytes.split_at(SALT_SIZE);
        let (nonce, body) = rest.split_at(NONCE_SIZE);

        Ok(Self {
            // Lengths were checked above
            salt: salt.try_into().map_err(|_| {
                EncryptxError::Format("Invalid envelope salt".to_string())
            })?,
            nonce: nonce.try_into().map_err(|_| {
                EncryptxError::Format("Invalid envelope nonce".to_string())
            })?,
            body,
        })
    }
}

/// Encrypt plaintext under a password
///
/// Generates a random salt and nonce for each call and returns
/// `salt || nonce || ciphertext || tag`.
pub fn encrypt(plaintext: &[u8], password: &str, params: &KdfParams) -> EncryptxResult<Vec<u8>> {
    let mut salt = [0u8; SALT_SIZE];
    OsRng.fill_bytes(&mut salt);
    let mut nonce_bytes = [0u8; NONCE_SIZE];
    OsRng.fill_bytes(&mut nonce_bytes);

    let key = derive_key(password, &salt, params)?;
    let cipher = Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|e| EncryptxError::Crypto(format!("Failed to create cipher: {}", e)))?;

    let ciphertext = cipher
        .encrypt(Nonce::from_slice(&nonce_bytes), plaintext)
        .map_err(|e| EncryptxError::Crypto(format!("Encryption failed: {}", e)))?;

    let mut envelope = Vec::with_capacity(HEADER_SIZE + ciphertext.len());
    envelope.extend_from_slice(&salt);
    envelope.extend_from_slice(&nonce_bytes);
    envelope.extend_from_slice(&ciphertext);

    Ok(envelope)
}

/// Decrypt an envelope produced by [`encrypt`]
///
/// A wrong password and a corrupted envelope both fail with
/// [`EncryptxError::Authentication`].
pub fn decrypt(envelope: &[u8], password: &str, params: &KdfParams) -> EncryptxResult<SecureBytes> {
    let envelope = Envelope::parse(envelope)?;

    // Runs for every well-formed header, including bodies shorter than a tag
    let key = derive_key(password, envelope.salt, params)?;
    let cipher = Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|e| EncryptxError::Crypto(format!("Failed to create cipher: {}", e)))?;

    let plaintext = cipher
        .decrypt(Nonce::from_slice(envelope.nonce), envelope.body)
        .map_err(|_| EncryptxError::Authentication)?;

    Ok(SecureBytes::new(plaintext))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PASSWORD: &str = "StrongTestPassword123!";

    fn params() -> KdfParams {
        KdfParams::new(64, 1, 1)
    }

    fn round_trip(plaintext: &[u8]) -> Vec<u8> {
        let envelope = encrypt(plaintext, PASSWORD, &params()).unwrap();
        decrypt(&envelope, PASSWORD, &params()).unwrap().as_bytes().to_vec()
    }

    #[test]
    fn test_round_trip_short_text() {
        assert_eq!(round_trip(b"Short text"), b"Short text");
    }

    #[test]
    fn test_round_trip_empty() {
        assert_eq!(round_trip(b""), b"");
    }

    #[test]
    fn test_round_trip_unicode() {
        let text = "🚀🔒🔥 Unicode text".as_bytes();
        assert_eq!(round_trip(text), text);
    }

    #[test]
    fn test_round_trip_large_random_binary() {
        let mut data = vec![0u8; 256 * 1024];
        OsRng.fill_bytes(&mut data);
        assert_eq!(round_trip(&data), data);
    }

    #[test]
    fn test_envelope_layout_and_overhead() {
        let plaintext = b"hello";
        let envelope = encrypt(plaintext, PASSWORD, &params()).unwrap();
        assert_eq!(envelope.len(), plaintext.len() + ENVELOPE_OVERHEAD);

        let parsed = Envelope::parse(&envelope).unwrap();
        assert_eq!(parsed.salt.as_slice(), &envelope[..16]);
        assert_eq!(parsed.nonce.as_slice(), &envelope[16..28]);
        assert_eq!(parsed.body.len(), plaintext.len() + TAG_SIZE);
    }

    #[test]
    fn test_same_input_encrypts_differently() {
        let e1 = encrypt(b"Same content", PASSWORD, &params()).unwrap();
        let e2 = encrypt(b"Same content", PASSWORD, &params()).unwrap();

        assert_ne!(e1, e2);
        assert_ne!(e1[..SALT_SIZE], e2[..SALT_SIZE]);
        assert_ne!(e1[SALT_SIZE..HEADER_SIZE], e2[SALT_SIZE..HEADER_SIZE]);
    }

    #[test]
    fn test_wrong_password_fails_authentication() {
        let envelope = encrypt(b"Secret data", PASSWORD, &params()).unwrap();
        let err = decrypt(&envelope, "WrongPassword", &params()).unwrap_err();
        assert!(err.is_authentication());
    }

    #[test]
    fn test_any_bit_flip_fails_authentication() {
        let envelope = encrypt(b"tamper", PASSWORD, &params()).unwrap();

        for byte in 0..envelope.len() {
            for bit in 0..8 {
                let mut tampered = envelope.clone();
                tampered[byte] ^= 1 << bit;
                let err = decrypt(&tampered, PASSWORD, &params()).unwrap_err();
                assert!(
                    err.is_authentication(),
                    "byte {} bit {} produced {:?}",
                    byte,
                    bit,
                    err
                );
            }
        }
    }

    #[test]
    fn test_short_envelope_is_format_error() {
        for len in [0, 1, 16, HEADER_SIZE - 1] {
            let err = decrypt(&vec![0u8; len], PASSWORD, &params()).unwrap_err();
            assert!(err.is_format(), "length {} gave {:?}", len, err);
        }
    }

    #[test]
    fn test_truncated_tag_fails_authentication() {
        let envelope = encrypt(b"data", PASSWORD, &params()).unwrap();
        let err = decrypt(&envelope[..HEADER_SIZE + 3], PASSWORD, &params()).unwrap_err();
        assert!(err.is_authentication());

        let err = decrypt(&envelope[..HEADER_SIZE], PASSWORD, &params()).unwrap_err();
        assert!(err.is_authentication());
    }

    #[test]
    fn test_mismatched_params_fail_authentication() {
        let envelope = encrypt(b"data", PASSWORD, &params()).unwrap();
        let err = decrypt(&envelope, PASSWORD, &KdfParams::new(128, 1, 1)).unwrap_err();
        assert!(err.is_authentication());
    }
}

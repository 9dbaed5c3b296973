//! Generic password-based GCM sealing over any 128-bit block cipher
//!
//! Cipher payload layout, shared by every registered algorithm:
//!
//! ```text
//! nonce (NONCE_SIZE) || ciphertext + tag || salt (SALT_SIZE)
//! ```
//!
//! A fresh salt and a fresh nonce are drawn for each encryption.

use aes_gcm::aead::consts::U12;
use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{AesGcm, Nonce};

use crate::crypto::key_derivation::{derive_key, generate_salt, DerivedKey, SALT_SIZE};
use crate::crypto::rng;
use crate::error::{KryptError, KryptResult};

/// Size of the GCM nonce in bytes (96 bits)
pub const NONCE_SIZE: usize = 12;

/// Size of the GCM authentication tag in bytes
pub const TAG_SIZE: usize = 16;

/// Build the GCM instance for block cipher `B` from a derived key
fn gcm_for<B>(key: &DerivedKey) -> KryptResult<AesGcm<B, U12>>
where
    B: KeyInit,
    AesGcm<B, U12>: From<B>,
{
    let block = B::new_from_slice(key.as_bytes())
        .map_err(|e| KryptError::KeyDerivation(format!("key rejected by block cipher: {}", e)))?;
    Ok(AesGcm::from(block))
}

/// Encrypt `plaintext` with block cipher `B` in GCM mode
pub fn seal_with<B>(plaintext: &[u8], password: &[u8]) -> KryptResult<Vec<u8>>
where
    B: KeyInit,
    AesGcm<B, U12>: Aead<NonceSize = U12> + From<B>,
{
    let salt = generate_salt()?;
    let key = derive_key(password, &salt)?;
    let cipher = gcm_for::<B>(&key)?;

    let nonce_bytes: [u8; NONCE_SIZE] = rng::random_array()?;
    let nonce = Nonce::<U12>::from_slice(&nonce_bytes);

    // Only fails if the plaintext exceeds the GCM length limit
    let sealed = cipher
        .encrypt(nonce, plaintext)
        .map_err(|_| KryptError::PlaintextTooLarge)?;

    let mut payload = Vec::with_capacity(NONCE_SIZE + sealed.len() + SALT_SIZE);
    payload.extend_from_slice(&nonce_bytes);
    payload.extend_from_slice(&sealed);
    payload.extend_from_slice(&salt);
    Ok(payload)
}

/// Decrypt a payload produced by [`seal_with`] for the same block cipher
pub fn open_with<B>(payload: &[u8], password: &[u8]) -> KryptResult<Vec<u8>>
where
    B: KeyInit,
    AesGcm<B, U12>: Aead<NonceSize = U12> + From<B>,
{
    if payload.len() < NONCE_SIZE + SALT_SIZE {
        return Err(KryptError::MalformedCiphertext);
    }

    let (rest, salt) = payload.split_at(payload.len() - SALT_SIZE);
    let (nonce_bytes, sealed) = rest.split_at(NONCE_SIZE);

    let key = derive_key(password, salt)?;
    let cipher = gcm_for::<B>(&key)?;
    let nonce = Nonce::<U12>::from_slice(nonce_bytes);

    cipher
        .decrypt(nonce, sealed)
        .map_err(|_| KryptError::Authentication)
}

#[cfg(test)]
mod tests {
    use super::*;
    use aes_gcm::aes::Aes256;

    #[test]
    fn test_payload_layout() {
        let plaintext = b"Hello, World!";
        let payload = seal_with::<Aes256>(plaintext, b"pw").unwrap();
        assert_eq!(payload.len(), NONCE_SIZE + plaintext.len() + TAG_SIZE + SALT_SIZE);
    }

    #[test]
    fn test_empty_plaintext_payload_is_minimal_plus_tag() {
        let payload = seal_with::<Aes256>(b"", b"pw").unwrap();
        assert_eq!(payload.len(), NONCE_SIZE + TAG_SIZE + SALT_SIZE);
        assert!(open_with::<Aes256>(&payload, b"pw").unwrap().is_empty());
    }

    #[test]
    fn test_short_payload_is_malformed() {
        let result = open_with::<Aes256>(&[0u8; NONCE_SIZE + SALT_SIZE - 1], b"pw");
        assert_eq!(result, Err(KryptError::MalformedCiphertext));
    }

    #[test]
    fn test_payload_without_tag_fails_authentication() {
        let result = open_with::<Aes256>(&[0u8; NONCE_SIZE + SALT_SIZE], b"pw");
        assert_eq!(result, Err(KryptError::Authentication));
    }

    #[test]
    fn test_altered_salt_fails() {
        let mut payload = seal_with::<Aes256>(b"data", b"pw").unwrap();
        let last = payload.len() - 1;
        payload[last] ^= 0x01;
        assert_eq!(open_with::<Aes256>(&payload, b"pw"), Err(KryptError::Authentication));
    }

    #[test]
    fn test_different_nonces() {
        let first = seal_with::<Aes256>(b"same", b"pw").unwrap();
        let second = seal_with::<Aes256>(b"same", b"pw").unwrap();
        assert_ne!(first[..NONCE_SIZE], second[..NONCE_SIZE]);
        assert_ne!(first, second);
    }
}

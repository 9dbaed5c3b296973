//! Key derivation using PBKDF2-HMAC-SHA256
//!
//! Stretches a password and a per-encryption random salt into the 256-bit
//! key every cipher uses. The salt travels in the clear at the end of the
//! cipher payload; the key itself is never stored.

use hmac::Hmac;
use pbkdf2::pbkdf2;
use sha2::Sha256;
use zeroize::Zeroizing;

use crate::error::{KryptError, KryptResult};

use super::rng;

/// Length of the salt drawn for every encryption, in bytes.
///
/// Unrelated to the GCM nonce length even though both are 12.
pub const SALT_SIZE: usize = 12;

/// Length of the derived key (256 bits)
pub const KEY_SIZE: usize = 32;

/// PBKDF2 work factor
pub const PBKDF2_ITERATIONS: u32 = 4096;

/// Salt for a single encryption
pub type Salt = [u8; SALT_SIZE];

/// A derived encryption key, zeroed on drop
pub struct DerivedKey {
    key: Zeroizing<[u8; KEY_SIZE]>,
}

impl DerivedKey {
    /// Get the key bytes
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.key
    }
}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("DerivedKey([REDACTED])")
    }
}

/// Draw a fresh random salt
pub fn generate_salt() -> KryptResult<Salt> {
    rng::random_array()
}

/// Derive an encryption key from a password and salt
///
/// Deterministic for identical inputs. The salt must be at least
/// [`SALT_SIZE`] bytes.
pub fn derive_key(password: &[u8], salt: &[u8]) -> KryptResult<DerivedKey> {
    if salt.len() < SALT_SIZE {
        return Err(KryptError::KeyDerivation(format!(
            "salt too short: expected at least {} bytes, got {}",
            SALT_SIZE,
            salt.len()
        )));
    }

    let mut key = Zeroizing::new([0u8; KEY_SIZE]);
    pbkdf2::<Hmac<Sha256>>(password, salt, PBKDF2_ITERATIONS, key.as_mut())
        .map_err(|e| KryptError::KeyDerivation(format!("PBKDF2 failed: {}", e)))?;

    Ok(DerivedKey { key })
}

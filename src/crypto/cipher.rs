//! Cipher trait and the persisted cipher identifier
//!
//! Every algorithm krypt can seal with implements [`Cipher`]. The
//! [`CipherId`] of the algorithm is written into byte 1 of every envelope,
//! so its numeric values are permanent.

use std::fmt;

use crate::error::{KryptError, KryptResult};

/// Identifier of a cipher, persisted as a single byte
///
/// Once a value is assigned it is never reused for another algorithm;
/// blobs sealed under a value must stay decryptable with that algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CipherId {
    /// Never registered, never written by `seal`
    Unset = 0,
    /// AES-256 in GCM mode
    Aes256 = 1,
    /// Twofish (256-bit key) in GCM mode
    Twofish = 2,
    /// Serpent (256-bit key) in GCM mode
    Serpent = 3,
}

impl CipherId {
    /// The byte written into envelope headers
    pub const fn as_byte(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for CipherId {
    type Error = KryptError;

    fn try_from(value: u8) -> KryptResult<Self> {
        match value {
            0 => Ok(Self::Unset),
            1 => Ok(Self::Aes256),
            2 => Ok(Self::Twofish),
            3 => Ok(Self::Serpent),
            other => Err(KryptError::UnknownCipherType(other)),
        }
    }
}

impl From<CipherId> for u8 {
    fn from(id: CipherId) -> Self {
        id.as_byte()
    }
}

impl fmt::Display for CipherId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unset => "unset",
            Self::Aes256 => "AES256",
            Self::Twofish => "TWOFISH",
            Self::Serpent => "SERPENT",
        };
        f.write_str(name)
    }
}

/// A password-based authenticated encryption algorithm.
///
/// Implementations are stateless. `encrypt` returns the cipher payload
/// `nonce || ciphertext+tag || salt`, which `decrypt` of the same
/// implementation must accept.
pub trait Cipher: Send + Sync {
    /// Name used to select the cipher (exact match)
    fn name(&self) -> &'static str;

    /// Human-readable description for listings
    fn description(&self) -> &'static str;

    /// Identifier stored in the envelope header
    fn identifier(&self) -> CipherId;

    /// Encrypt `plaintext` under a key derived from `password` and a fresh salt
    fn encrypt(&self, plaintext: &[u8], password: &[u8]) -> KryptResult<Vec<u8>>;

    /// Decrypt a payload produced by [`encrypt`](Self::encrypt)
    fn decrypt(&self, payload: &[u8], password: &[u8]) -> KryptResult<Vec<u8>>;
}

impl fmt::Debug for dyn Cipher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cipher")
            .field("name", &self.name())
            .field("identifier", &self.identifier())
            .finish()
    }
}

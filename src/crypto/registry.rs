//! Read-only registry of the ciphers krypt can seal with
//!
//! Both lookups are derived from one ordered list, fixed at compile time.
//! Nothing mutates it, so concurrent lookups need no synchronization.

use crate::error::{KryptError, KryptResult};

use super::cipher::{Cipher, CipherId};
use super::ciphers::{Aes256Cipher, SerpentCipher, TwofishCipher};

/// Registered ciphers in listing order
static CIPHERS: [&dyn Cipher; 3] = [&Aes256Cipher, &TwofishCipher, &SerpentCipher];

/// Name and description of a registered cipher, for discovery output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CipherInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub identifier: CipherId,
}

/// Resolve a cipher by its identifier
pub fn resolve_by_id(id: CipherId) -> KryptResult<&'static dyn Cipher> {
    CIPHERS
        .iter()
        .copied()
        .find(|cipher| cipher.identifier() == id)
        .ok_or(KryptError::UnknownCipherType(id.as_byte()))
}

/// Resolve a cipher from a raw header byte
pub fn resolve_by_byte(byte: u8) -> KryptResult<&'static dyn Cipher> {
    resolve_by_id(CipherId::try_from(byte)?)
}

/// Resolve a cipher by name
///
/// Matching is exact: no case folding and no whitespace trimming.
pub fn resolve_by_name(name: &str) -> KryptResult<&'static dyn Cipher> {
    CIPHERS
        .iter()
        .copied()
        .find(|cipher| cipher.name() == name)
        .ok_or_else(|| KryptError::UnknownCipherName(name.to_string()))
}

/// All registered ciphers, in registration order
pub fn list_all() -> Vec<CipherInfo> {
    CIPHERS
        .iter()
        .map(|cipher| CipherInfo {
            name: cipher.name(),
            description: cipher.description(),
            identifier: cipher.identifier(),
        })
        .collect()
}

//! AES-256-GCM cipher

use aes_gcm::aes::Aes256;

use super::gcm::{open_with, seal_with};
use crate::crypto::cipher::{Cipher, CipherId};
use crate::error::KryptResult;

/// Name used to select AES-256-GCM
pub const AES256_NAME: &str = "AES256";

/// Seals with AES-256 in GCM mode. This both hides the content of the data
/// and detects any alteration of it.
#[derive(Debug, Clone, Copy, Default)]
pub struct Aes256Cipher;

impl Cipher for Aes256Cipher {
    fn name(&self) -> &'static str {
        AES256_NAME
    }

    fn description(&self) -> &'static str {
        "AES256-GCM cipher"
    }

    fn identifier(&self) -> CipherId {
        CipherId::Aes256
    }

    fn encrypt(&self, plaintext: &[u8], password: &[u8]) -> KryptResult<Vec<u8>> {
        seal_with::<Aes256>(plaintext, password)
    }

    fn decrypt(&self, payload: &[u8], password: &[u8]) -> KryptResult<Vec<u8>> {
        open_with::<Aes256>(payload, password)
    }
}

//! Twofish-GCM cipher

use ::twofish::Twofish;

use super::gcm::{open_with, seal_with};
use crate::crypto::cipher::{Cipher, CipherId};
use crate::error::KryptResult;

/// Name used to select Twofish-GCM
pub const TWOFISH_NAME: &str = "TWOFISH";

/// Seals with Twofish (256-bit key) in GCM mode
#[derive(Debug, Clone, Copy, Default)]
pub struct TwofishCipher;

impl Cipher for TwofishCipher {
    fn name(&self) -> &'static str {
        TWOFISH_NAME
    }

    fn description(&self) -> &'static str {
        "Twofish-GCM cipher"
    }

    fn identifier(&self) -> CipherId {
        CipherId::Twofish
    }

    fn encrypt(&self, plaintext: &[u8], password: &[u8]) -> KryptResult<Vec<u8>> {
        seal_with::<Twofish>(plaintext, password)
    }

    fn decrypt(&self, payload: &[u8], password: &[u8]) -> KryptResult<Vec<u8>> {
        open_with::<Twofish>(payload, password)
    }
}

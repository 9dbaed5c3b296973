//! Serpent-GCM cipher

use ::serpent::Serpent;

use super::gcm::{open_with, seal_with};
use crate::crypto::cipher::{Cipher, CipherId};
use crate::error::KryptResult;

/// Name used to select Serpent-GCM
pub const SERPENT_NAME: &str = "SERPENT";

/// Seals with Serpent (256-bit key) in GCM mode
#[derive(Debug, Clone, Copy, Default)]
pub struct SerpentCipher;

impl Cipher for SerpentCipher {
    fn name(&self) -> &'static str {
        SERPENT_NAME
    }

    fn description(&self) -> &'static str {
        "Serpent-GCM cipher"
    }

    fn identifier(&self) -> CipherId {
        CipherId::Serpent
    }

    fn encrypt(&self, plaintext: &[u8], password: &[u8]) -> KryptResult<Vec<u8>> {
        seal_with::<Serpent>(plaintext, password)
    }

    fn decrypt(&self, payload: &[u8], password: &[u8]) -> KryptResult<Vec<u8>> {
        open_with::<Serpent>(payload, password)
    }
}

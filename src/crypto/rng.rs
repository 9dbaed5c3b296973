//! Secure randomness for salts and nonces
//!
//! Everything random in a sealed blob comes from the operating system RNG.
//! A failing RNG is reported, never papered over with weaker bytes.

use aes_gcm::aead::rand_core::RngCore;
use aes_gcm::aead::OsRng;

use crate::error::{KryptError, KryptResult};

/// Fill `dest` from the OS RNG
pub fn fill_random(dest: &mut [u8]) -> KryptResult<()> {
    OsRng
        .try_fill_bytes(dest)
        .map_err(|e| KryptError::RandomSource(e.to_string()))
}

/// Produce a fresh array of `N` random bytes
pub fn random_array<const N: usize>() -> KryptResult<[u8; N]> {
    let mut bytes = [0u8; N];
    fill_random(&mut bytes)?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_arrays_differ() {
        let a: [u8; 32] = random_array().unwrap();
        let b: [u8; 32] = random_array().unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_fill_empty_slice() {
        let mut empty: [u8; 0] = [];
        assert!(fill_random(&mut empty).is_ok());
    }
}

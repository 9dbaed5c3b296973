//! Versioned envelope around a cipher payload
//!
//! Wire format:
//!
//! ```text
//! byte 0       : format version (FORMAT_VERSION)
//! byte 1       : cipher identifier
//! bytes 2..N-1 : cipher payload
//! ```
//!
//! The header is all a decryptor needs to pick the right algorithm; there is
//! no separate metadata.

use crate::error::{KryptError, KryptResult};

use super::cipher::CipherId;
use super::registry;

/// The only envelope format version this build reads or writes
pub const FORMAT_VERSION: u8 = 1;

/// Length of the envelope header in bytes
pub const HEADER_SIZE: usize = 2;

/// A parsed envelope borrowing its payload from the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Envelope<'a> {
    /// Cipher that produced the payload (always registered)
    pub cipher: CipherId,
    /// Opaque cipher payload, never empty
    pub payload: &'a [u8],
}

/// Prefix `payload` with the current format version and `cipher`
pub fn encode(cipher: CipherId, payload: &[u8]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(HEADER_SIZE + payload.len());
    bytes.push(FORMAT_VERSION);
    bytes.push(cipher.as_byte());
    bytes.extend_from_slice(payload);
    bytes
}

/// Parse the envelope header of `bytes`
///
/// Checks run in order: length, then version, then cipher.
pub fn decode(bytes: &[u8]) -> KryptResult<Envelope<'_>> {
    if bytes.len() <= HEADER_SIZE {
        return Err(KryptError::MalformedEnvelope);
    }

    let version = bytes[0];
    if version != FORMAT_VERSION {
        return Err(KryptError::UnsupportedVersion(version));
    }

    let cipher_byte = bytes[1];
    let cipher = registry::resolve_by_byte(cipher_byte)
        .map_err(|_| KryptError::UnsupportedCipher(cipher_byte))?
        .identifier();

    Ok(Envelope {
        cipher,
        payload: &bytes[HEADER_SIZE..],
    })
}

/// Check whether `bytes` carry a readable krypt header
///
/// Only the header is inspected; this says nothing about whether the
/// payload decrypts.
pub fn is_sealed(bytes: &[u8]) -> bool {
    decode(bytes).is_ok()
}

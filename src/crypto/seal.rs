//! Seal and unseal: the two operations the rest of krypt calls
//!
//! Each call is an independent, all-or-nothing, in-memory transform. A
//! failure is returned immediately and never retried.

use crate::error::KryptResult;

use super::cipher::CipherId;
use super::envelope;
use super::registry;

/// Encrypt `plaintext` with the cipher `cipher` and wrap it in an envelope
///
/// The plaintext is never inspected, so any byte sequence (including one
/// that is itself an envelope) round-trips.
pub fn seal_data(cipher: CipherId, password: &[u8], plaintext: &[u8]) -> KryptResult<Vec<u8>> {
    let cipher = registry::resolve_by_id(cipher)?;
    let payload = cipher.encrypt(plaintext, password)?;
    Ok(envelope::encode(cipher.identifier(), &payload))
}

/// Recover the plaintext of an envelope produced by [`seal_data`]
///
/// Envelope errors (see [`KryptError::is_not_sealed`](crate::KryptError::is_not_sealed))
/// mean the input is not krypt data; cipher errors mean it is, but the
/// password is wrong or the data was altered.
pub fn unseal_data(password: &[u8], sealed: &[u8]) -> KryptResult<Vec<u8>> {
    let envelope = envelope::decode(sealed)?;
    let cipher = registry::resolve_by_id(envelope.cipher)?;
    cipher.decrypt(envelope.payload, password)
}

/// Unseal with `old_password`, then seal the plaintext again with
/// `new_password` under `cipher`
pub fn reseal_data(
    old_password: &[u8],
    new_password: &[u8],
    cipher: CipherId,
    sealed: &[u8],
) -> KryptResult<Vec<u8>> {
    let plaintext = zeroize::Zeroizing::new(unseal_data(old_password, sealed)?);
    seal_data(cipher, new_password, &plaintext)
}

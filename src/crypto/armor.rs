//! Base64 text armor for sealed data
//!
//! Lets a sealed file travel through text-only channels. Reading accepts
//! both the armored and the binary form.

use std::borrow::Cow;

use base64::{engine::general_purpose::STANDARD, Engine};

use super::ciphers::{NONCE_SIZE, TAG_SIZE};
use super::envelope::{FORMAT_VERSION, HEADER_SIZE};
use super::key_derivation::SALT_SIZE;
use super::secure_memory::trim_whitespace;

/// Smallest envelope any registered cipher produces (empty plaintext)
const MIN_SEALED_SIZE: usize = HEADER_SIZE + NONCE_SIZE + TAG_SIZE + SALT_SIZE;

/// Encode sealed bytes as base64 text with a trailing newline
pub fn armor(sealed: &[u8]) -> Vec<u8> {
    let mut text = STANDARD.encode(sealed).into_bytes();
    text.push(b'\n');
    text
}

/// Undo [`armor`] when `data` is armored text, otherwise return it unchanged
///
/// A binary envelope starts with the format version byte, which is never a
/// base64 character, so the two forms cannot be confused. Text only counts
/// as armored when it decodes to something that could be an envelope: long
/// enough to hold an empty sealed payload and starting with the format
/// version. Anything else is passed through and fails later as a bad
/// envelope.
pub fn dearmor(data: &[u8]) -> Cow<'_, [u8]> {
    if data.first() == Some(&FORMAT_VERSION) {
        return Cow::Borrowed(data);
    }

    let trimmed = trim_whitespace(data);
    if trimmed.is_empty() {
        return Cow::Borrowed(data);
    }

    match STANDARD.decode(trimmed) {
        Ok(decoded)
            if decoded.len() >= MIN_SEALED_SIZE && decoded.first() == Some(&FORMAT_VERSION) =>
        {
            Cow::Owned(decoded)
        }
        _ => Cow::Borrowed(data),
    }
}

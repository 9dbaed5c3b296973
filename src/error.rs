//! Custom error types for krypt
//!
//! Every failure in the envelope core and in the file layer around it is a
//! variant of [`KryptError`], so callers can match on the kind directly.

use thiserror::Error;

/// The main error type for krypt operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KryptError {
    /// No registered cipher has this name (names match exactly)
    #[error("Unknown cipher name: {0}")]
    UnknownCipherName(String),

    /// No registered cipher has this identifier
    #[error("Unknown cipher type: {0}")]
    UnknownCipherType(u8),

    /// Input is too short to hold a header and a payload
    #[error("Malformed envelope: krypt header or payload missing")]
    MalformedEnvelope,

    /// Header carries a format version this build cannot read
    #[error("Unsupported krypt version: {0}")]
    UnsupportedVersion(u8),

    /// Header names a cipher that is not registered
    #[error("Unsupported cipher: {0}")]
    UnsupportedCipher(u8),

    /// Cipher payload is too short to hold a nonce and a salt
    #[error("Malformed ciphertext")]
    MalformedCiphertext,

    /// Plaintext exceeds what one GCM message can hold
    #[error("Plaintext too large to encrypt")]
    PlaintextTooLarge,

    /// Tag verification failed: wrong password or tampered data
    #[error("Decryption failed: invalid password or corrupted data")]
    Authentication,

    /// The secure random source could not produce bytes
    #[error("Random source failure: {0}")]
    RandomSource(String),

    /// Key derivation rejected its inputs
    #[error("Key derivation failure: {0}")]
    KeyDerivation(String),

    /// Refusing to seal data that already carries a krypt header
    #[error("Data is already encrypted: {0}")]
    AlreadySealed(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Password could not be obtained
    #[error("Password error: {0}")]
    Password(String),

    /// Editor could not be found or run
    #[error("Editor error: {0}")]
    Editor(String),
}

impl KryptError {
    /// Check if the input was rejected before any decryption was attempted,
    /// i.e. it is not krypt data at all
    pub fn is_not_sealed(&self) -> bool {
        matches!(
            self,
            Self::MalformedEnvelope | Self::UnsupportedVersion(_) | Self::UnsupportedCipher(_)
        )
    }

    /// Check if this is a cipher-level failure on krypt data
    pub fn is_decrypt_failure(&self) -> bool {
        matches!(self, Self::Authentication | Self::MalformedCiphertext)
    }

    /// Check if this is an "already encrypted" refusal
    pub fn is_already_sealed(&self) -> bool {
        matches!(self, Self::AlreadySealed(_))
    }
}

impl From<std::io::Error> for KryptError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_yaml::Error> for KryptError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result type alias for krypt operations
pub type KryptResult<T> = Result<T, KryptError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = KryptError::UnknownCipherName("ROT13".into());
        assert_eq!(err.to_string(), "Unknown cipher name: ROT13");

        let err = KryptError::UnsupportedVersion(255);
        assert_eq!(err.to_string(), "Unsupported krypt version: 255");
    }

    #[test]
    fn test_envelope_errors_are_not_sealed() {
        assert!(KryptError::MalformedEnvelope.is_not_sealed());
        assert!(KryptError::UnsupportedVersion(2).is_not_sealed());
        assert!(KryptError::UnsupportedCipher(9).is_not_sealed());
        assert!(!KryptError::Authentication.is_not_sealed());
    }

    #[test]
    fn test_cipher_errors_are_decrypt_failures() {
        assert!(KryptError::Authentication.is_decrypt_failure());
        assert!(KryptError::MalformedCiphertext.is_decrypt_failure());
        assert!(!KryptError::MalformedEnvelope.is_decrypt_failure());
    }

    #[test]
    fn test_oversized_plaintext_is_an_encrypt_error() {
        let err = KryptError::PlaintextTooLarge;
        assert_eq!(err.to_string(), "Plaintext too large to encrypt");
        assert!(!err.is_decrypt_failure());
        assert!(!err.is_not_sealed());
        assert_ne!(err, KryptError::MalformedCiphertext);
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let krypt_err: KryptError = io_err.into();
        assert!(matches!(krypt_err, KryptError::Io(_)));
    }
}

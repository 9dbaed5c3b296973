//! Secure memory handling for passwords
//!
//! Passwords are held as raw bytes that are wiped on drop and never
//! printed.

use std::fmt;
use std::ops::Deref;

use zeroize::{Zeroize, ZeroizeOnDrop};

/// A password (or other secret byte string) that zeros its contents on drop
#[derive(Clone, Default, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SecretBytes {
    inner: Vec<u8>,
}

impl SecretBytes {
    /// Create new SecretBytes
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            inner: bytes.into(),
        }
    }

    /// Get the bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.inner
    }

    /// Get the length
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Copy with surrounding ASCII whitespace removed
    pub fn trimmed(&self) -> Self {
        Self::new(trim_whitespace(&self.inner))
    }
}

impl Deref for SecretBytes {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl AsRef<[u8]> for SecretBytes {
    fn as_ref(&self) -> &[u8] {
        &self.inner
    }
}

impl From<String> for SecretBytes {
    fn from(s: String) -> Self {
        Self::new(s.into_bytes())
    }
}

impl From<&str> for SecretBytes {
    fn from(s: &str) -> Self {
        Self::new(s.as_bytes())
    }
}

impl From<Vec<u8>> for SecretBytes {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

// Don't print the contents in Debug output
impl fmt::Debug for SecretBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretBytes")
            .field("len", &self.inner.len())
            .finish()
    }
}

// Don't print the contents in Display output
impl fmt::Display for SecretBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED {} bytes]", self.inner.len())
    }
}

/// Strip leading and trailing ASCII whitespace
pub(crate) fn trim_whitespace(data: &[u8]) -> &[u8] {
    let start = data
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(data.len());
    let end = data
        .iter()
        .rposition(|b| !b.is_ascii_whitespace())
        .map_or(start, |i| i + 1);
    &data[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secret_bytes_creation() {
        let s = SecretBytes::new(b"test".to_vec());
        assert_eq!(s.as_bytes(), b"test");
        assert_eq!(s.len(), 4);
    }

    #[test]
    fn test_secret_bytes_from_str() {
        let s: SecretBytes = "test".into();
        assert_eq!(s.as_bytes(), b"test");
    }

    #[test]
    fn test_trimmed() {
        let s: SecretBytes = "  geronimo\n".into();
        assert_eq!(s.trimmed().as_bytes(), b"geronimo");
    }

    #[test]
    fn test_secret_bytes_debug() {
        let s = SecretBytes::from("secret");
        let debug = format!("{:?}", s);
        assert!(!debug.contains("secret"));
        assert!(debug.contains("SecretBytes"));
    }

    #[test]
    fn test_secret_bytes_display() {
        let s = SecretBytes::from("secret");
        let display = format!("{}", s);
        assert!(!display.contains("secret"));
        assert!(display.contains("REDACTED"));
    }

    #[test]
    fn test_zeroize_clears() {
        let mut s = SecretBytes::from("secret");
        s.zeroize();
        assert!(s.is_empty());
    }
}

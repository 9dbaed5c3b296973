//! Registered cipher implementations
//!
//! All of them run the same GCM construction from [`gcm`]; they differ only
//! in the underlying 128-bit block cipher.

pub mod aes256;
pub mod gcm;
pub mod serpent;
pub mod twofish;

pub use aes256::{Aes256Cipher, AES256_NAME};
pub use gcm::{NONCE_SIZE, TAG_SIZE};
pub use self::serpent::{SerpentCipher, SERPENT_NAME};
pub use self::twofish::{TwofishCipher, TWOFISH_NAME};

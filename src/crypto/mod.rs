//! Cryptographic core of krypt
//!
//! PBKDF2-HMAC-SHA256 key derivation, three interchangeable GCM ciphers
//! behind the [`Cipher`] trait, a static registry of them, and the
//! versioned envelope that records which one sealed a blob.
//!
//! Nothing in here reads files, prompts, or logs.

pub mod armor;
pub mod cipher;
pub mod ciphers;
pub mod envelope;
pub mod key_derivation;
pub mod registry;
pub mod rng;
pub mod seal;
pub mod secure_memory;

pub use cipher::{Cipher, CipherId};
pub use envelope::{Envelope, FORMAT_VERSION};
pub use key_derivation::{derive_key, DerivedKey, KEY_SIZE, PBKDF2_ITERATIONS, SALT_SIZE};
pub use registry::CipherInfo;
pub use seal::{reseal_data, seal_data, unseal_data};
pub use secure_memory::SecretBytes;

//! krypt - password-based file encryption
//!
//! This library provides the core functionality for the krypt command line
//! tool. Data is sealed with a password into a small self-describing
//! envelope that records the format version and the cipher used, so it can
//! be unsealed later without any other metadata.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `crypto`: Key derivation, ciphers, registry and the envelope format
//! - `error`: Custom error types
//! - `config`: Config file discovery and settings
//! - `storage`: Sealing and unsealing files in place
//! - `cli`: Command handlers for the `krypt` binary
//! - `display`: Terminal output formatting
//!
//! # Example
//!
//! ```rust
//! use krypt::crypto::{seal_data, unseal_data, CipherId};
//!
//! let sealed = seal_data(CipherId::Aes256, b"geronimo", b"attack at dawn")?;
//! assert_eq!(unseal_data(b"geronimo", &sealed)?, b"attack at dawn");
//! # Ok::<(), krypt::KryptError>(())
//! ```

pub mod cli;
pub mod config;
pub mod crypto;
pub mod display;
pub mod error;
pub mod storage;

pub use crypto::{reseal_data, seal_data, unseal_data, CipherId};
pub use error::{KryptError, KryptResult};

//! Display formatting for terminal output

pub mod cipher;

pub use cipher::format_cipher_list;

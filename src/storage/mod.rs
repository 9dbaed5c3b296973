//! Storage layer for krypt
//!
//! Reads and rewrites files in place. Every write goes through an atomic
//! temp-file-and-rename, so a failed operation leaves the file as it was.

pub mod file_io;

pub use file_io::{
    is_sealed_file, open_sealed, read_file, read_sealed, reseal_file, seal_file, unseal_file,
    write_file_atomic, write_sealed, OpenedFile,
};

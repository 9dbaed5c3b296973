//! `krypt seal`: encrypt files in place

use std::path::PathBuf;

use clap::Args;
use tracing::debug;

use super::password::{resolve_password, PasswordArgs, PasswordSource};
use super::{resolve_cipher, BatchOutcome};
use crate::config::Settings;
use crate::error::KryptResult;
use crate::storage;

/// Arguments for `krypt seal`
#[derive(Args, Debug, Clone)]
pub struct SealArgs {
    /// The cipher to encrypt with. Use the list command for a full list.
    #[arg(short = 'i', long, env = "KRYPT_CIPHER", value_name = "CIPHER")]
    pub cipher: Option<String>,

    #[command(flatten)]
    pub password: PasswordArgs,

    /// Write the sealed file as base64 text
    #[arg(short = 't', long)]
    pub encode_text: bool,

    /// Seal files even if they are already sealed
    #[arg(long)]
    pub force: bool,

    /// Files to seal
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,
}

/// Seal every file, continuing past failures
pub fn handle_seal_command(settings: &Settings, args: SealArgs) -> KryptResult<BatchOutcome> {
    let cipher = resolve_cipher(args.cipher.as_deref(), settings)?;
    let source = PasswordSource::from_args(&args.password, settings.password_file.as_deref());
    let password = resolve_password(&source.confirmed())?;
    let encode_text = args.encode_text || settings.encode_text;

    let mut outcome = BatchOutcome::default();
    for file in &args.files {
        debug!("Encrypting {}", file.display());
        let result = storage::seal_file(file, cipher, &password, encode_text, args.force);
        outcome.record("encrypt", file, result);
    }

    Ok(outcome)
}

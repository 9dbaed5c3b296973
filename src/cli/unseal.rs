//! `krypt unseal`: decrypt files in place

use std::path::PathBuf;

use clap::Args;
use tracing::debug;

use super::password::{resolve_password, PasswordArgs, PasswordSource};
use super::BatchOutcome;
use crate::config::Settings;
use crate::error::KryptResult;
use crate::storage;

/// Arguments for `krypt unseal`
#[derive(Args, Debug, Clone)]
pub struct UnsealArgs {
    #[command(flatten)]
    pub password: PasswordArgs,

    /// Files to unseal
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,
}

/// Unseal every file, continuing past failures
pub fn handle_unseal_command(settings: &Settings, args: UnsealArgs) -> KryptResult<BatchOutcome> {
    let source = PasswordSource::from_args(&args.password, settings.password_file.as_deref());
    let password = resolve_password(&source)?;

    let mut outcome = BatchOutcome::default();
    for file in &args.files {
        debug!("Decrypting {}", file.display());
        outcome.record("decrypt", file, storage::unseal_file(file, &password));
    }

    Ok(outcome)
}

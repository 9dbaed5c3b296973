//! `krypt reseal`: change the password and/or cipher of sealed files

use std::path::PathBuf;

use clap::Args;
use tracing::debug;

use super::password::{resolve_password, PasswordArgs, PasswordSource};
use super::{resolve_cipher, BatchOutcome};
use crate::config::Settings;
use crate::error::KryptResult;
use crate::storage;

/// Arguments for `krypt reseal`
#[derive(Args, Debug, Clone)]
pub struct ResealArgs {
    /// The cipher to encrypt with. Use the list command for a full list.
    #[arg(short = 'i', long, env = "KRYPT_CIPHER", value_name = "CIPHER")]
    pub cipher: Option<String>,

    /// New password options
    #[command(flatten)]
    pub password: PasswordArgs,

    /// The old password file to decrypt with
    #[arg(
        short = 'o',
        long = "old-password-file",
        env = "KRYPT_OLD_PASSWORD_FILE",
        value_name = "FILE"
    )]
    pub old_password_file: Option<PathBuf>,

    /// The old password
    #[arg(long, env = "KRYPT_OLD_PASSWORD", hide = true, hide_env_values = true)]
    pub old_password: Option<String>,

    /// Files to re-seal
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,
}

/// Re-seal every file under the new password and cipher, continuing past failures
pub fn handle_reseal_command(settings: &Settings, args: ResealArgs) -> KryptResult<BatchOutcome> {
    let cipher = resolve_cipher(args.cipher.as_deref(), settings)?;

    let old_source = PasswordSource {
        label: "old-password",
        value: args.old_password.as_deref(),
        file: args
            .old_password_file
            .as_deref()
            .or(settings.old_password_file.as_deref()),
        prompt: "Enter old password: ",
        confirm: false,
    };
    let old_password = resolve_password(&old_source)?;

    let new_source = PasswordSource {
        prompt: "Enter new password: ",
        ..PasswordSource::from_args(&args.password, settings.password_file.as_deref()).confirmed()
    };
    let new_password = resolve_password(&new_source)?;

    let mut outcome = BatchOutcome::default();
    for file in &args.files {
        debug!("reseal {}", file.display());
        let result = storage::reseal_file(
            file,
            &old_password,
            &new_password,
            cipher,
            settings.encode_text,
        );
        outcome.record("reseal", file, result);
    }

    Ok(outcome)
}

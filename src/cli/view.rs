//! `krypt view`: read a sealed file in an editor without changing it

use std::path::PathBuf;

use clap::Args;
use tracing::debug;

use super::editor::{edit_contents, resolve_editor};
use super::password::{resolve_password, PasswordArgs, PasswordSource};
use super::{report_failure, BatchOutcome};
use crate::config::Settings;
use crate::error::KryptResult;
use crate::storage;

/// Arguments for `krypt view`
#[derive(Args, Debug, Clone)]
pub struct ViewArgs {
    /// The editor to use
    #[arg(short = 'e', long, env = "KRYPT_EDITOR")]
    pub editor: Option<String>,

    #[command(flatten)]
    pub password: PasswordArgs,

    /// File to view
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

/// Decrypt to a temp file, open it, then throw any changes away
pub fn handle_view_command(settings: &Settings, args: ViewArgs) -> KryptResult<BatchOutcome> {
    let source = PasswordSource::from_args(&args.password, settings.password_file.as_deref());
    let password = resolve_password(&source)?;
    let editor = resolve_editor(args.editor.as_deref(), settings)?;

    let mut outcome = BatchOutcome::default();
    let plaintext = match storage::read_sealed(&args.file, &password) {
        Ok(plaintext) => plaintext,
        Err(err) => {
            report_failure("decrypt", &args.file, &err);
            outcome.failed += 1;
            return Ok(outcome);
        }
    };

    if edit_contents(&editor, &plaintext)?.is_none() {
        debug!("editor exited with an error");
    }

    outcome.succeeded += 1;
    Ok(outcome)
}

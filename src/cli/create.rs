//! `krypt create`: write a new sealed file from an editor session

use std::path::PathBuf;

use clap::Args;

use super::editor::{edit_contents, resolve_editor};
use super::password::{resolve_password, PasswordArgs, PasswordSource};
use super::{resolve_cipher, BatchOutcome};
use crate::config::Settings;
use crate::error::{KryptError, KryptResult};
use crate::storage;

/// Arguments for `krypt create`
#[derive(Args, Debug, Clone)]
pub struct CreateArgs {
    /// The editor to use
    #[arg(short = 'e', long, env = "KRYPT_EDITOR")]
    pub editor: Option<String>,

    /// The cipher to encrypt with. Use the list command for a full list.
    #[arg(short = 'i', long, env = "KRYPT_CIPHER", value_name = "CIPHER")]
    pub cipher: Option<String>,

    #[command(flatten)]
    pub password: PasswordArgs,

    /// File to create
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

/// Open an empty buffer in the editor and seal whatever is saved to a new file
pub fn handle_create_command(settings: &Settings, args: CreateArgs) -> KryptResult<BatchOutcome> {
    if args.file.exists() {
        return Err(KryptError::Io(format!(
            "File already exists, will not overwrite: {}",
            args.file.display()
        )));
    }

    let cipher = resolve_cipher(args.cipher.as_deref(), settings)?;
    let source = PasswordSource::from_args(&args.password, settings.password_file.as_deref());
    let password = resolve_password(&source.confirmed())?;
    let editor = resolve_editor(args.editor.as_deref(), settings)?;

    let mut outcome = BatchOutcome::default();
    let Some(content) = edit_contents(&editor, b"")? else {
        eprintln!("Error while editing file '{}'", args.file.display());
        outcome.failed += 1;
        return Ok(outcome);
    };

    let result = storage::write_sealed(
        &args.file,
        cipher,
        &password,
        &content,
        settings.encode_text,
    );
    outcome.record("encrypt", &args.file, result);
    Ok(outcome)
}

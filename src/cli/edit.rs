//! `krypt edit`: decrypt, edit and re-seal a file

use std::path::PathBuf;

use clap::Args;
use tracing::debug;

use super::editor::{edit_contents, resolve_editor};
use super::password::{resolve_password, PasswordArgs, PasswordSource};
use super::{report_failure, resolve_cipher, BatchOutcome};
use crate::config::Settings;
use crate::error::KryptResult;
use crate::storage;

/// Arguments for `krypt edit`
#[derive(Args, Debug, Clone)]
pub struct EditArgs {
    /// The editor to use
    #[arg(short = 'e', long, env = "KRYPT_EDITOR")]
    pub editor: Option<String>,

    /// The cipher to re-seal with (defaults to the file's current cipher)
    #[arg(short = 'i', long, env = "KRYPT_CIPHER", value_name = "CIPHER")]
    pub cipher: Option<String>,

    #[command(flatten)]
    pub password: PasswordArgs,

    /// File to edit
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

/// Edit a sealed file; it is only rewritten when the content changed
pub fn handle_edit_command(settings: &Settings, args: EditArgs) -> KryptResult<BatchOutcome> {
    let explicit_cipher = args.cipher.is_some() || settings.cipher.is_some();
    let cipher = resolve_cipher(args.cipher.as_deref(), settings)?;
    let source = PasswordSource::from_args(&args.password, settings.password_file.as_deref());
    let password = resolve_password(&source)?;
    let editor = resolve_editor(args.editor.as_deref(), settings)?;

    let mut outcome = BatchOutcome::default();
    let opened = match storage::open_sealed(&args.file, &password) {
        Ok(opened) => opened,
        Err(err) => {
            report_failure("decrypt", &args.file, &err);
            outcome.failed += 1;
            return Ok(outcome);
        }
    };

    let edited = match edit_contents(&editor, &opened.plaintext)? {
        Some(edited) => edited,
        None => {
            eprintln!("Error while editing file '{}'", args.file.display());
            outcome.failed += 1;
            return Ok(outcome);
        }
    };

    if *edited == *opened.plaintext {
        println!("File contents have not changed, not modifying");
        outcome.succeeded += 1;
        return Ok(outcome);
    }

    let cipher = if explicit_cipher { cipher } else { opened.cipher };
    debug!("re-sealing {} with {}", args.file.display(), cipher);

    let result = storage::write_sealed(
        &args.file,
        cipher,
        &password,
        &edited,
        opened.encode_text || settings.encode_text,
    );
    outcome.record("encrypt", &args.file, result);
    Ok(outcome)
}

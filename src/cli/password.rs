//! Password sourcing for CLI commands
//!
//! A password comes from, in order: an explicit value (`--password` or
//! `KRYPT_PASSWORD`), a password file, or an interactive prompt.

use std::path::{Path, PathBuf};

use clap::Args;
use tracing::debug;

use crate::crypto::SecretBytes;
use crate::error::{KryptError, KryptResult};

/// Password options shared by every command that needs a password
#[derive(Args, Debug, Clone, Default)]
pub struct PasswordArgs {
    /// The password file
    #[arg(
        short = 'p',
        long = "password-file",
        env = "KRYPT_PASSWORD_FILE",
        value_name = "FILE"
    )]
    pub password_file: Option<PathBuf>,

    /// The password (prefer a password file or the prompt)
    #[arg(long, env = "KRYPT_PASSWORD", hide = true, hide_env_values = true)]
    pub password: Option<String>,
}

/// Where to look for one password, and how to ask for it
#[derive(Debug, Clone, Copy)]
pub struct PasswordSource<'a> {
    /// Label used in log and error messages
    pub label: &'a str,
    pub value: Option<&'a str>,
    pub file: Option<&'a Path>,
    /// Prompt shown when neither a value nor a file is available
    pub prompt: &'a str,
    /// Ask twice when prompting (for passwords that will seal data)
    pub confirm: bool,
}

impl<'a> PasswordSource<'a> {
    /// Source for the main password, falling back to the configured password file
    pub fn from_args(args: &'a PasswordArgs, config_file: Option<&'a Path>) -> Self {
        Self {
            label: "password",
            value: args.password.as_deref(),
            file: args.password_file.as_deref().or(config_file),
            prompt: "Enter password: ",
            confirm: false,
        }
    }

    /// Require confirmation when prompting
    pub fn confirmed(mut self) -> Self {
        self.confirm = true;
        self
    }
}

/// Resolve a password from `source`
///
/// A value that is blank after trimming is ignored. A password file that is
/// missing, unreadable or empty is an error rather than a reason to prompt.
pub fn resolve_password(source: &PasswordSource<'_>) -> KryptResult<SecretBytes> {
    if let Some(value) = source.value.filter(|v| !v.trim().is_empty()) {
        debug!("{} src: cli", source.label);
        return Ok(SecretBytes::from(value));
    }

    if let Some(path) = source.file {
        debug!("{}-file: {}", source.label, path.display());
        return read_password_file(source.label, path);
    }

    prompt_password(source)
}

/// Read a password from a file, trimming surrounding whitespace
pub fn read_password_file(label: &str, path: &Path) -> KryptResult<SecretBytes> {
    if !path.exists() {
        return Err(KryptError::Password(format!(
            "{}-file: does not exist (\"{}\")",
            label,
            path.display()
        )));
    }

    let contents = SecretBytes::new(std::fs::read(path).map_err(|e| {
        KryptError::Password(format!(
            "{}-file: could not open (\"{}\"): {}",
            label,
            path.display(),
            e
        ))
    })?);

    let password = contents.trimmed();
    if password.is_empty() {
        return Err(KryptError::Password(format!(
            "{}-file: file is empty (\"{}\")",
            label,
            path.display()
        )));
    }

    Ok(password)
}

/// Prompt until a non-empty password is entered (hidden input)
fn prompt_password(source: &PasswordSource<'_>) -> KryptResult<SecretBytes> {
    loop {
        let first = read_hidden(source.prompt)?;
        if first.is_empty() {
            eprintln!("Password is not long enough");
            continue;
        }

        if !source.confirm {
            return Ok(first);
        }

        let second = read_hidden("Confirm password: ")?;
        if first != second {
            eprintln!("Passwords do not match. Please try again.");
            continue;
        }

        return Ok(first);
    }
}

fn read_hidden(prompt: &str) -> KryptResult<SecretBytes> {
    let input = rpassword::prompt_password(prompt)
        .map_err(|e| KryptError::Password(format!("Failed to read password: {}", e)))?;
    Ok(SecretBytes::from(input).trimmed())
}

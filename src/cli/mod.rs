//! CLI command handlers
//!
//! This module contains the implementation of the `krypt` subcommands,
//! bridging the clap argument parsing with the storage layer.

pub mod create;
pub mod edit;
pub mod editor;
pub mod list;
pub mod password;
pub mod reseal;
pub mod seal;
pub mod unseal;
pub mod view;

use std::path::Path;

use tracing::debug;

pub use create::{handle_create_command, CreateArgs};
pub use edit::{handle_edit_command, EditArgs};
pub use list::handle_list_command;
pub use password::PasswordArgs;
pub use reseal::{handle_reseal_command, ResealArgs};
pub use seal::{handle_seal_command, SealArgs};
pub use unseal::{handle_unseal_command, UnsealArgs};
pub use view::{handle_view_command, ViewArgs};

use crate::config::Settings;
use crate::crypto::{registry, CipherId};
use crate::error::{KryptError, KryptResult};

/// Tally of a command run over one or more files
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchOutcome {
    pub succeeded: usize,
    pub failed: usize,
}

impl BatchOutcome {
    /// Count a per-file result, reporting a failure on stderr
    pub fn record(&mut self, action: &str, file: &Path, result: KryptResult<()>) {
        match result {
            Ok(()) => self.succeeded += 1,
            Err(err) => {
                report_failure(action, file, &err);
                self.failed += 1;
            }
        }
    }

    /// True when no file failed
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}

/// Print a per-file failure the way users expect to read it
pub fn report_failure(action: &str, file: &Path, err: &KryptError) {
    eprintln!("{}", failure_message(action, file, err));
    debug!("{:?}", err);
}

fn failure_message(action: &str, file: &Path, err: &KryptError) -> String {
    if err.is_not_sealed() {
        format!("{}: File is not encrypted, cannot decrypt", file.display())
    } else if err.is_already_sealed() {
        format!(
            "{}: File is already encrypted, will not encrypt again",
            file.display()
        )
    } else if err.is_decrypt_failure() {
        // Whatever the command, a cipher failure means the file could not be opened
        format!("Could not decrypt {}: {}", file.display(), err)
    } else {
        format!("Could not {} {}: {}", action, file.display(), err)
    }
}

/// Resolve the cipher to seal with from a flag, the config file or the default
pub fn resolve_cipher(flag: Option<&str>, settings: &Settings) -> KryptResult<CipherId> {
    let name = settings.cipher_name(flag);
    let cipher = registry::resolve_by_name(&name)?;
    debug!("cipher: '{}'", cipher.name());
    Ok(cipher.identifier())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_cipher() {
        let settings = Settings::default();
        assert_eq!(resolve_cipher(None, &settings).unwrap(), CipherId::Aes256);
        assert_eq!(
            resolve_cipher(Some("SERPENT"), &settings).unwrap(),
            CipherId::Serpent
        );
        assert_eq!(
            resolve_cipher(Some("serpent"), &settings),
            Err(KryptError::UnknownCipherName("serpent".into()))
        );
    }

    #[test]
    fn test_resolve_cipher_from_config() {
        let settings = Settings {
            cipher: Some("TWOFISH\n".into()),
            ..Default::default()
        };
        assert_eq!(resolve_cipher(None, &settings).unwrap(), CipherId::Twofish);
    }

    #[test]
    fn test_failure_messages() {
        let file = Path::new("notes.txt");
        assert_eq!(
            failure_message("view", file, &KryptError::MalformedEnvelope),
            "notes.txt: File is not encrypted, cannot decrypt"
        );
        assert_eq!(
            failure_message("seal", file, &KryptError::AlreadySealed("notes.txt".into())),
            "notes.txt: File is already encrypted, will not encrypt again"
        );
        assert_eq!(
            failure_message("reseal", file, &KryptError::Authentication),
            "Could not decrypt notes.txt: Decryption failed: invalid password or corrupted data"
        );
        assert_eq!(
            failure_message("edit", file, &KryptError::MalformedCiphertext),
            "Could not decrypt notes.txt: Malformed ciphertext"
        );
        assert_eq!(
            failure_message("seal", file, &KryptError::Io("disk full".into())),
            "Could not seal notes.txt: I/O error: disk full"
        );
    }

    #[test]
    fn test_batch_outcome() {
        let mut outcome = BatchOutcome::default();
        outcome.record("seal", Path::new("a"), Ok(()));
        assert!(outcome.is_success());

        outcome.record("seal", Path::new("b"), Err(KryptError::Authentication));
        assert_eq!(
            outcome,
            BatchOutcome {
                succeeded: 1,
                failed: 1
            }
        );
        assert!(!outcome.is_success());
    }
}

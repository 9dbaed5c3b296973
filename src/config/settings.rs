//! User settings for krypt
//!
//! Optional defaults read from `config.yml`. Every value can be overridden
//! by a command-line flag or an environment variable.
//!
//! ```yaml
//! cipher: TWOFISH
//! editor: nano
//! password-file: ~/.krypt-password
//! old-password-file: ~/.krypt-old-password
//! encode-text: false
//! ```
//!
//! A leading `~` in a password file path is the user's home directory.

use std::path::{Path, PathBuf};

use directories::BaseDirs;
use serde::Deserialize;

use super::paths::KryptPaths;
use crate::crypto::ciphers::AES256_NAME;
use crate::error::{KryptError, KryptResult};

/// Settings loaded from the config file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Settings {
    /// Cipher used when sealing
    #[serde(default)]
    pub cipher: Option<String>,

    /// Editor for create/edit/view
    #[serde(default)]
    pub editor: Option<String>,

    /// File holding the password
    #[serde(default)]
    pub password_file: Option<PathBuf>,

    /// File holding the previous password, for reseal
    #[serde(default)]
    pub old_password_file: Option<PathBuf>,

    /// Write sealed files as base64 text
    #[serde(default)]
    pub encode_text: bool,

    /// File these settings were read from
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

impl Settings {
    /// Load settings from the first config file found, or defaults if none exists
    pub fn load(paths: &KryptPaths) -> KryptResult<Self> {
        match paths.config_file()? {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load settings from a specific file
    pub fn load_from(path: &Path) -> KryptResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            KryptError::Io(format!("Failed to read config file {}: {}", path.display(), e))
        })?;

        // An empty file is a valid, empty config
        let mut settings: Settings = if contents.trim().is_empty() {
            Settings::default()
        } else {
            serde_yaml::from_str(&contents).map_err(|e| {
                KryptError::Config(format!(
                    "Failed to parse config file {}: {}",
                    path.display(),
                    e
                ))
            })?
        };

        settings.password_file = settings.password_file.map(expand_home);
        settings.old_password_file = settings.old_password_file.map(expand_home);
        settings.source = Some(path.to_path_buf());
        Ok(settings)
    }

    /// Cipher name to seal with: `flag` if given, else the configured one, else AES256
    ///
    /// Surrounding whitespace is trimmed; case is preserved.
    pub fn cipher_name(&self, flag: Option<&str>) -> String {
        flag.or(self.cipher.as_deref())
            .unwrap_or(AES256_NAME)
            .trim()
            .to_string()
    }
}

/// Replace a leading `~` component with the home directory
fn expand_home(path: PathBuf) -> PathBuf {
    let home = match BaseDirs::new() {
        Some(base) => base.home_dir().to_path_buf(),
        None => return path,
    };

    match path.strip_prefix("~") {
        Ok(rest) => home.join(rest),
        Err(_) => path,
    }
}

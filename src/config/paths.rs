//! Config file location for krypt
//!
//! ## Search order
//!
//! 1. `--config PATH` (must exist)
//! 2. `./config.yml`
//! 3. `<user config dir>/krypt/config.yml` (`~/.config/krypt` on Linux)
//! 4. `/etc/krypt/config.yml` (Unix only)
//!
//! The first file that exists wins. No file at all means built-in defaults.

use std::path::PathBuf;

use directories::BaseDirs;

use crate::error::{KryptError, KryptResult};

/// File name looked up in each search directory
pub const CONFIG_FILE_NAME: &str = "config.yml";

/// Application directory name under the user and system config roots
const APP_DIR_NAME: &str = "krypt";

/// Candidate locations for the config file
#[derive(Debug, Clone)]
pub struct KryptPaths {
    explicit: Option<PathBuf>,
    search_dirs: Vec<PathBuf>,
}

impl KryptPaths {
    /// Create the default search list, with an optional explicit config file
    pub fn new(explicit: Option<PathBuf>) -> Self {
        let mut search_dirs = vec![PathBuf::from(".")];

        if let Some(base) = BaseDirs::new() {
            search_dirs.push(base.config_dir().join(APP_DIR_NAME));
        }

        #[cfg(unix)]
        search_dirs.push(PathBuf::from("/etc").join(APP_DIR_NAME));

        Self {
            explicit,
            search_dirs,
        }
    }

    /// Create KryptPaths searching only the given directories (useful for testing)
    pub fn with_search_dirs(search_dirs: Vec<PathBuf>) -> Self {
        Self {
            explicit: None,
            search_dirs,
        }
    }

    /// Candidate config files in search order
    pub fn candidates(&self) -> Vec<PathBuf> {
        self.search_dirs
            .iter()
            .map(|dir| dir.join(CONFIG_FILE_NAME))
            .collect()
    }

    /// Resolve the config file to load
    ///
    /// An explicit path that does not exist is an error; a missing file in
    /// the search directories is not.
    pub fn config_file(&self) -> KryptResult<Option<PathBuf>> {
        if let Some(explicit) = &self.explicit {
            if !explicit.is_file() {
                return Err(KryptError::Config(format!(
                    "config file not found: {}",
                    explicit.display()
                )));
            }
            return Ok(Some(explicit.clone()));
        }

        Ok(self.candidates().into_iter().find(|path| path.is_file()))
    }
}

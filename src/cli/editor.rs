//! External editor sessions for create, edit and view
//!
//! Plaintext is handed to the editor through a temp file that is removed
//! when the session ends, whatever the editor's exit status.

use std::io::Write;
use std::process::Command;

use tracing::debug;
use zeroize::Zeroizing;

use crate::config::Settings;
use crate::error::{KryptError, KryptResult};

/// Editors tried, in order, when none is configured
const KNOWN_EDITORS: [&str; 3] = ["vim", "vi", "nano"];

/// Pick the editor to run
///
/// Order: `flag` (`--editor` or `KRYPT_EDITOR`), the config file, `$EDITOR`,
/// then the first of vim, vi and nano found on `PATH`.
pub fn resolve_editor(flag: Option<&str>, settings: &Settings) -> KryptResult<String> {
    let configured = flag
        .map(str::to_string)
        .or_else(|| settings.editor.clone())
        .or_else(|| std::env::var("EDITOR").ok())
        .filter(|editor| !editor.trim().is_empty());

    if let Some(editor) = configured {
        debug!("editor: '{}'", editor);
        return Ok(editor);
    }

    for known in KNOWN_EDITORS {
        if let Ok(path) = which::which(known) {
            debug!("editor: '{}'", path.display());
            return Ok(path.to_string_lossy().into_owned());
        }
    }

    Err(KryptError::Editor(
        "No editor found, please specify an editor".to_string(),
    ))
}

/// Open `content` in `editor` and return what the user saved
///
/// `editor` may carry arguments (`"code --wait"`); the temp file path is
/// appended last. Returns `None` when the editor exits unsuccessfully.
pub fn edit_contents(editor: &str, content: &[u8]) -> KryptResult<Option<Zeroizing<Vec<u8>>>> {
    let mut parts = editor.split_whitespace();
    let program = parts
        .next()
        .ok_or_else(|| KryptError::Editor("Editor command is empty".to_string()))?;

    let mut temp_file = tempfile::Builder::new()
        .prefix("krypt")
        .tempfile()
        .map_err(|e| KryptError::Editor(format!("creating tempfile: {}", e)))?;
    debug!("tmpfile: {}", temp_file.path().display());

    temp_file
        .write_all(content)
        .and_then(|_| temp_file.flush())
        .map_err(|e| KryptError::Editor(format!("writing to tempfile failed: {}", e)))?;

    let status = Command::new(program)
        .args(parts)
        .arg(temp_file.path())
        .status()
        .map_err(|e| KryptError::Editor(format!("editor start failed: {}", e)))?;

    if !status.success() {
        debug!("editor returns failure: {}", status);
        return Ok(None);
    }

    debug!("editor returns success");
    // Re-read by path: some editors replace the file instead of writing into it
    let edited = std::fs::read(temp_file.path())
        .map_err(|e| KryptError::Editor(format!("reading tempfile failed: {}", e)))?;
    Ok(Some(Zeroizing::new(edited)))
}

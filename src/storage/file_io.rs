//! File I/O for sealed files, with atomic writes
//!
//! Files are always rewritten through a temp file in the same directory, so a
//! crash mid-write leaves either the old contents or the new, never a mix.

use std::borrow::Cow;
use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use zeroize::Zeroizing;

use crate::crypto::{armor, envelope, reseal_data, seal_data, unseal_data, CipherId};
use crate::error::{KryptError, KryptResult};

/// Read a whole file
pub fn read_file<P: AsRef<Path>>(path: P) -> KryptResult<Vec<u8>> {
    let path = path.as_ref();
    fs::read(path).map_err(|e| KryptError::Io(format!("Failed to read {}: {}", path.display(), e)))
}

/// Write bytes to a file atomically (write to temp, then rename)
///
/// The temp file is created exclusively with owner-only permissions. When the
/// target already exists its permissions carry over to the new file,
/// otherwise the new file stays owner-only.
pub fn write_file_atomic<P: AsRef<Path>>(path: P, data: &[u8]) -> KryptResult<()> {
    let path = path.as_ref();

    // Same directory as the target, so the rename cannot cross filesystems
    let dir = match path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => {
            fs::create_dir_all(parent).map_err(|e| {
                KryptError::Io(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
            parent
        }
        None => Path::new("."),
    };

    let permissions = fs::metadata(path).ok().map(|m| m.permissions());

    // Removed on drop unless persisted
    let mut temp = NamedTempFile::new_in(dir)
        .map_err(|e| KryptError::Io(format!("Failed to create temp file: {}", e)))?;

    temp.write_all(data)
        .map_err(|e| KryptError::Io(format!("Failed to write data: {}", e)))?;
    temp.flush()
        .map_err(|e| KryptError::Io(format!("Failed to flush data: {}", e)))?;

    // Sync to disk before rename
    temp.as_file()
        .sync_all()
        .map_err(|e| KryptError::Io(format!("Failed to sync data: {}", e)))?;

    if let Some(permissions) = permissions {
        temp.as_file()
            .set_permissions(permissions)
            .map_err(|e| KryptError::Io(format!("Failed to set permissions: {}", e)))?;
    }

    temp.persist(path)
        .map_err(|e| KryptError::Io(format!("Failed to rename temp file: {}", e.error)))?;
    Ok(())
}

/// Check if a file starts with a readable krypt header, in binary or text form
pub fn is_sealed_file<P: AsRef<Path>>(path: P) -> KryptResult<bool> {
    let data = read_file(path)?;
    Ok(envelope::is_sealed(&armor::dearmor(&data)))
}

/// A sealed file that has been read and unsealed
#[derive(Debug)]
pub struct OpenedFile {
    pub plaintext: Zeroizing<Vec<u8>>,
    /// Cipher named in the file's header
    pub cipher: CipherId,
    /// Whether the file was stored as base64 text
    pub encode_text: bool,
}

/// Read and unseal a file, keeping what is needed to write it back the same way
pub fn open_sealed<P: AsRef<Path>>(path: P, password: &[u8]) -> KryptResult<OpenedFile> {
    let data = read_file(path)?;
    let sealed = armor::dearmor(&data);
    let cipher = envelope::decode(&sealed)?.cipher;
    let plaintext = Zeroizing::new(unseal_data(password, &sealed)?);

    Ok(OpenedFile {
        plaintext,
        cipher,
        encode_text: matches!(sealed, Cow::Owned(_)),
    })
}

/// Read and unseal a file, returning its plaintext
pub fn read_sealed<P: AsRef<Path>>(path: P, password: &[u8]) -> KryptResult<Zeroizing<Vec<u8>>> {
    open_sealed(path, password).map(|opened| opened.plaintext)
}

/// Seal `plaintext` and write it to `path`, as base64 text when `encode_text` is set
pub fn write_sealed<P: AsRef<Path>>(
    path: P,
    cipher: CipherId,
    password: &[u8],
    plaintext: &[u8],
    encode_text: bool,
) -> KryptResult<()> {
    let sealed = seal_data(cipher, password, plaintext)?;
    write_sealed_bytes(path.as_ref(), &sealed, encode_text)
}

fn write_sealed_bytes(path: &Path, sealed: &[u8], encode_text: bool) -> KryptResult<()> {
    if encode_text {
        write_file_atomic(path, &armor::armor(sealed))
    } else {
        write_file_atomic(path, sealed)
    }
}

/// Seal a file in place
///
/// A file that already carries a krypt header is refused with
/// [`KryptError::AlreadySealed`] unless `force` is set.
pub fn seal_file<P: AsRef<Path>>(
    path: P,
    cipher: CipherId,
    password: &[u8],
    encode_text: bool,
    force: bool,
) -> KryptResult<()> {
    let path = path.as_ref();
    let plaintext = Zeroizing::new(read_file(path)?);

    if !force && envelope::is_sealed(&armor::dearmor(&plaintext)) {
        return Err(KryptError::AlreadySealed(path.display().to_string()));
    }

    write_sealed(path, cipher, password, &plaintext, encode_text)
}

/// Unseal a file in place
pub fn unseal_file<P: AsRef<Path>>(path: P, password: &[u8]) -> KryptResult<()> {
    let path = path.as_ref();
    let plaintext = read_sealed(path, password)?;
    write_file_atomic(path, &plaintext)
}

/// Re-seal a file in place under a new password and cipher
///
/// The text/binary form of the file is kept unless `encode_text` asks for text.
pub fn reseal_file<P: AsRef<Path>>(
    path: P,
    old_password: &[u8],
    new_password: &[u8],
    cipher: CipherId,
    encode_text: bool,
) -> KryptResult<()> {
    let path = path.as_ref();
    let data = read_file(path)?;
    let sealed = armor::dearmor(&data);
    let was_text = matches!(sealed, Cow::Owned(_));

    let resealed = reseal_data(old_password, new_password, cipher, &sealed)?;
    write_sealed_bytes(path, &resealed, encode_text || was_text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn plain_file(dir: &TempDir, contents: &[u8]) -> PathBuf {
        let path = dir.path().join("secret.txt");
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data.bin");

        write_file_atomic(&path, b"\x00\x01binary").unwrap();
        assert_eq!(read_file(&path).unwrap(), b"\x00\x01binary");
    }

    #[test]
    fn test_atomic_write_no_temp_file_left() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data.bin");

        write_file_atomic(&path, b"contents").unwrap();
        write_file_atomic(&path, b"new contents").unwrap();

        let names: Vec<_> = fs::read_dir(temp_dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("data.bin")]);
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("data.bin");

        write_file_atomic(&path, b"contents").unwrap();
        assert!(path.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_write_preserves_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let path = plain_file(&temp_dir, b"contents");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o600)).unwrap();

        write_file_atomic(&path, b"new contents").unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[cfg(unix)]
    #[test]
    fn test_new_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("fresh.bin");

        write_file_atomic(&path, b"contents").unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[cfg(unix)]
    #[test]
    fn test_unseal_ignores_symlink_at_old_temp_name() {
        let temp_dir = TempDir::new().unwrap();
        let elsewhere = TempDir::new().unwrap();
        let victim = elsewhere.path().join("victim");
        fs::write(&victim, b"untouched").unwrap();

        let path = plain_file(&temp_dir, b"top secret");
        seal_file(&path, CipherId::Aes256, b"pw", false, false).unwrap();
        std::os::unix::fs::symlink(&victim, temp_dir.path().join("secret.txt.krypt.tmp"))
            .unwrap();

        unseal_file(&path, b"pw").unwrap();

        assert_eq!(fs::read(&victim).unwrap(), b"untouched");
        assert!(!fs::symlink_metadata(&path).unwrap().file_type().is_symlink());
        assert_eq!(read_file(&path).unwrap(), b"top secret");
    }

    #[test]
    fn test_read_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let result = read_file(temp_dir.path().join("missing"));
        assert!(matches!(result, Err(KryptError::Io(_))));
    }

    #[test]
    fn test_seal_and_unseal_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = plain_file(&temp_dir, b"top secret");

        seal_file(&path, CipherId::Serpent, b"pw", false, false).unwrap();
        let sealed = read_file(&path).unwrap();
        assert_eq!(sealed[0], envelope::FORMAT_VERSION);
        assert_eq!(sealed[1], CipherId::Serpent.as_byte());
        assert!(is_sealed_file(&path).unwrap());

        unseal_file(&path, b"pw").unwrap();
        assert_eq!(read_file(&path).unwrap(), b"top secret");
        assert!(!is_sealed_file(&path).unwrap());
    }

    #[test]
    fn test_seal_file_as_text() {
        let temp_dir = TempDir::new().unwrap();
        let path = plain_file(&temp_dir, b"top secret");

        seal_file(&path, CipherId::Aes256, b"pw", true, false).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.ends_with('\n'));
        assert!(is_sealed_file(&path).unwrap());

        assert_eq!(read_sealed(&path, b"pw").unwrap().as_slice(), b"top secret");
    }

    #[test]
    fn test_seal_file_refuses_sealed_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = plain_file(&temp_dir, b"top secret");

        seal_file(&path, CipherId::Aes256, b"pw", false, false).unwrap();
        let before = read_file(&path).unwrap();

        let err = seal_file(&path, CipherId::Aes256, b"pw", false, false).unwrap_err();
        assert!(err.is_already_sealed());
        assert_eq!(read_file(&path).unwrap(), before);

        // Forced, the sealed bytes become the plaintext of a new envelope
        seal_file(&path, CipherId::Aes256, b"pw", false, true).unwrap();
        assert_eq!(read_sealed(&path, b"pw").unwrap().as_slice(), before.as_slice());
    }

    #[test]
    fn test_open_sealed_reports_cipher_and_form() {
        let temp_dir = TempDir::new().unwrap();
        let path = plain_file(&temp_dir, b"top secret");
        seal_file(&path, CipherId::Twofish, b"pw", true, false).unwrap();

        let opened = open_sealed(&path, b"pw").unwrap();
        assert_eq!(opened.plaintext.as_slice(), b"top secret");
        assert_eq!(opened.cipher, CipherId::Twofish);
        assert!(opened.encode_text);
    }

    #[test]
    fn test_unseal_plain_file_is_not_sealed() {
        let temp_dir = TempDir::new().unwrap();
        let path = plain_file(&temp_dir, b"just some notes");

        let err = unseal_file(&path, b"pw").unwrap_err();
        assert!(err.is_not_sealed());
        assert_eq!(read_file(&path).unwrap(), b"just some notes");
    }

    #[test]
    fn test_short_base64_file_is_plain_text() {
        let temp_dir = TempDir::new().unwrap();
        let path = plain_file(&temp_dir, b"AQIDBAUG\n");

        assert!(!is_sealed_file(&path).unwrap());
        assert!(unseal_file(&path, b"pw").unwrap_err().is_not_sealed());

        seal_file(&path, CipherId::Aes256, b"pw", false, false).unwrap();
        assert_eq!(read_sealed(&path, b"pw").unwrap().as_slice(), b"AQIDBAUG\n");
    }

    #[test]
    fn test_unseal_wrong_password_leaves_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = plain_file(&temp_dir, b"top secret");
        seal_file(&path, CipherId::Twofish, b"pw", false, false).unwrap();
        let before = read_file(&path).unwrap();

        assert_eq!(unseal_file(&path, b"nope"), Err(KryptError::Authentication));
        assert_eq!(read_file(&path).unwrap(), before);
    }

    #[test]
    fn test_reseal_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = plain_file(&temp_dir, b"top secret");
        seal_file(&path, CipherId::Aes256, b"old", false, false).unwrap();

        reseal_file(&path, b"old", b"new", CipherId::Serpent, false).unwrap();

        assert_eq!(read_file(&path).unwrap()[1], CipherId::Serpent.as_byte());
        assert_eq!(read_sealed(&path, b"new").unwrap().as_slice(), b"top secret");
        assert_eq!(
            read_sealed(&path, b"old").unwrap_err(),
            KryptError::Authentication
        );
    }

    #[test]
    fn test_reseal_keeps_text_form() {
        let temp_dir = TempDir::new().unwrap();
        let path = plain_file(&temp_dir, b"top secret");
        seal_file(&path, CipherId::Aes256, b"old", true, false).unwrap();

        reseal_file(&path, b"old", b"new", CipherId::Aes256, false).unwrap();

        let data = read_file(&path).unwrap();
        assert_ne!(data[0], envelope::FORMAT_VERSION);
        assert_eq!(read_sealed(&path, b"new").unwrap().as_slice(), b"top secret");
    }
}

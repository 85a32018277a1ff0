//! Key location storage.
//!
//! A key location is a directory holding an armored key pair as
//! `pri_key.key` and `pub_key.key`.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::core::constants::{ARCHIVE_DIR, PRIVATE_KEY_FILE, PUBLIC_KEY_FILE};
use crate::core::types::ArmoredKey;
use crate::error::KeyringError;

/// An armored OpenPGP key pair.
#[derive(Clone, PartialEq, Eq)]
pub struct KeyPair {
    /// Armored secret key block, protected by the owner's passphrase.
    pub private: ArmoredKey,
    /// Armored public certificate.
    pub public: ArmoredKey,
}

impl std::fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyPair")
            .field("private", &"<redacted>")
            .field("public", &self.public)
            .finish()
    }
}

/// Path of the private key file inside `dir`.
pub fn private_key_path(dir: &Path) -> PathBuf {
    dir.join(PRIVATE_KEY_FILE)
}

/// Path of the public key file inside `dir`.
pub fn public_key_path(dir: &Path) -> PathBuf {
    dir.join(PUBLIC_KEY_FILE)
}

/// Write a key pair into `dir`, creating the directory if needed.
///
/// A pair already in `dir` is moved to `archive/<timestamp>/` first. The
/// private key file is restricted to 0600 on Unix.
///
/// # Errors
///
/// Returns `KeyringError::Write` if the directory or either file cannot be
/// written.
pub fn store(dir: &Path, keys: &KeyPair) -> Result<(), KeyringError> {
    debug!(dir = %dir.display(), "storing key pair");

    fs::create_dir_all(dir).map_err(|source| KeyringError::Write {
        path: dir.to_path_buf(),
        source,
    })?;
    archive(dir)?;

    let private_path = private_key_path(dir);
    write_file(&private_path, &keys.private)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&private_path, fs::Permissions::from_mode(0o600)).map_err(
            |source| KeyringError::Write {
                path: private_path.clone(),
                source,
            },
        )?;
    }

    write_file(&public_key_path(dir), &keys.public)
}

/// Load the key pair stored in `dir`.
///
/// # Errors
///
/// Returns `KeyringError::MissingKeys` if either key file is absent, or
/// `KeyringError::Read` if a file exists but cannot be read.
pub fn load(dir: &Path) -> Result<KeyPair, KeyringError> {
    debug!(dir = %dir.display(), "loading key pair");

    if !has_keys(dir) {
        return Err(KeyringError::MissingKeys(dir.to_path_buf()));
    }

    Ok(KeyPair {
        private: read_file(&private_key_path(dir))?,
        public: read_file(&public_key_path(dir))?,
    })
}

/// Move an existing key pair in `dir` aside, returning where it went.
///
/// Returns `Ok(None)` when `dir` holds no key files.
pub fn archive(dir: &Path) -> Result<Option<PathBuf>, KeyringError> {
    let present: Vec<PathBuf> = [private_key_path(dir), public_key_path(dir)]
        .into_iter()
        .filter(|p| p.is_file())
        .collect();
    if present.is_empty() {
        return Ok(None);
    }

    let timestamp = chrono::Utc::now().format("%Y%m%d_%H%M%S%.3f");
    let target = unused_dir(dir.join(ARCHIVE_DIR).join(timestamp.to_string()));
    fs::create_dir_all(&target).map_err(|source| KeyringError::Write {
        path: target.clone(),
        source,
    })?;

    for path in present {
        let Some(name) = path.file_name() else {
            continue;
        };
        fs::rename(&path, target.join(name)).map_err(|source| KeyringError::Write {
            path: path.clone(),
            source,
        })?;
    }

    info!(archive = %target.display(), "archived previous key pair");
    Ok(Some(target))
}

/// Check whether `dir` holds both key files.
pub fn has_keys(dir: &Path) -> bool {
    private_key_path(dir).is_file() && public_key_path(dir).is_file()
}

fn write_file(path: &Path, contents: &str) -> Result<(), KeyringError> {
    fs::write(path, contents).map_err(|source| KeyringError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn read_file(path: &Path) -> Result<String, KeyringError> {
    fs::read_to_string(path).map_err(|source| KeyringError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// `base`, or `base-1`, `base-2`, ... if it is taken.
fn unused_dir(base: PathBuf) -> PathBuf {
    if !base.exists() {
        return base;
    }
    let name = base
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    (1..)
        .map(|n| base.with_file_name(format!("{name}-{n}")))
        .find(|candidate| !candidate.exists())
        .unwrap_or(base)
}

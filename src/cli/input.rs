//! Gathering operation inputs.
//!
//! Resolves the message, key and passphrase for a command from flags, files,
//! piped stdin, the active key location, or an interactive prompt.

use std::io::{self, IsTerminal, Read};
use std::path::Path;

use dialoguer::Password;
use tracing::debug;

use crate::cli::MessageArgs;
use crate::core::config::Config;
use crate::core::keyring;
use crate::core::types::{ArmoredKey, Passphrase};
use crate::error::{Error, KeyringError, Result};

/// Which half of the active key pair a command needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyRole {
    Public,
    Private,
}

/// Resolve the message text.
///
/// Order: positional argument, `--input` file, piped stdin. On an
/// interactive terminal with neither, the message is empty, which the
/// operation reports as blank.
pub fn message(args: &MessageArgs) -> Result<String> {
    if let Some(text) = &args.message {
        return Ok(text.clone());
    }
    if let Some(file) = &args.input {
        debug!(path = %file.display(), "reading message from file");
        return std::fs::read_to_string(file).map_err(|source| Error::Input {
            path: file.to_path_buf(),
            source,
        });
    }
    if !io::stdin().is_terminal() {
        debug!("reading message from stdin");
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }
    Ok(String::new())
}

/// Resolve the armored key: `--key` file, else the active key location.
///
/// With neither, the key is empty and the operation reports a blank key,
/// after its blank-message check.
pub fn key(args: &MessageArgs, role: KeyRole) -> Result<ArmoredKey> {
    if let Some(file) = &args.key {
        debug!(path = %file.display(), "reading key from file");
        return read_key_file(file);
    }

    let config = Config::load()?;
    let Some(dir) = config.key_location() else {
        debug!("no key given and no active key location");
        return Ok(ArmoredKey::new());
    };
    let pair = keyring::load(dir)?;
    debug!(dir = %dir.display(), ?role, "using active key location");

    Ok(match role {
        KeyRole::Public => pair.public,
        KeyRole::Private => pair.private,
    })
}

/// Resolve the passphrase for unlocking a private key.
///
/// Uses `--passphrase` / `PGPEED_PASSPHRASE` when given, else a hidden
/// prompt on a terminal, else an empty passphrase.
pub fn passphrase(given: Option<String>) -> Result<Passphrase> {
    if let Some(value) = given {
        return Ok(Passphrase::new(value));
    }
    if io::stdin().is_terminal() {
        let value = Password::new()
            .with_prompt("Passphrase")
            .allow_empty_password(true)
            .interact()?;
        return Ok(Passphrase::new(value));
    }
    Ok(Passphrase::default())
}

/// Prompt twice for a new passphrase.
pub fn new_passphrase(given: Option<String>) -> Result<Passphrase> {
    if let Some(value) = given {
        return Ok(Passphrase::new(value));
    }
    if io::stdin().is_terminal() {
        let value = Password::new()
            .with_prompt("Passphrase")
            .with_confirmation("Confirm passphrase", "passphrases don't match")
            .interact()?;
        return Ok(Passphrase::new(value));
    }
    Ok(Passphrase::default())
}

fn read_key_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| {
        KeyringError::Read {
            path: path.to_path_buf(),
            source,
        }
        .into()
    })
}

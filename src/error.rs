//! Error types.
//!
//! Every failure the crate can produce is one of the enums below, collected
//! under [`Error`]. Expected, user-facing conditions of an operation are not
//! errors: they are [`OperationOutcome`](crate::core::outcome::OperationOutcome)
//! values. Only a non-success outcome that reaches the shell is lifted into
//! [`Error::Rejected`] so it can set the exit code.

use std::path::PathBuf;

use thiserror::Error;

use crate::core::outcome::OperationOutcome;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Validation(#[from] ValidationFailure),

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Keyring(#[from] KeyringError),

    /// An operation finished with a non-success outcome.
    #[error("{0}")]
    Rejected(OperationOutcome),

    #[error("failed to read {}: {source}", path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration file errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[source] toml::ser::Error),

    #[error("missing config field: {field}")]
    MissingField { field: &'static str },

    #[error("no home directory found")]
    NoHome,

    #[error("no key location set")]
    NoKeyLocation,
}

/// Reason a key-generation request was rejected.
///
/// Variants are listed in the order the rules are evaluated.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationFailure {
    #[error("name must be at least 3 characters")]
    NameTooShort,

    #[error("email must look like name@domain.tld")]
    EmailMalformed,

    #[error("passphrase must be at least 8 characters")]
    PassphraseTooShort,

    #[error("passphrase must contain an upper-case letter")]
    PassphraseMissingUppercase,

    #[error("passphrase must contain a lower-case letter")]
    PassphraseMissingLowercase,

    #[error("passphrase must contain a special character")]
    PassphraseMissingSpecial,

    #[error("output location cannot be blank")]
    OutputDirectoryBlank,

    #[error("output location is not a writable directory")]
    OutputDirectoryUnusable,
}

/// Errors raised by an OpenPGP engine.
///
/// The first five variants are the conditions callers are expected to
/// distinguish; the rest carry unexpected failures through unchanged.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("invalid key: {0}")]
    InvalidKey(String),

    #[error("key has no usable {0} key")]
    NoUsableKey(&'static str),

    #[error("passphrase does not unlock the secret key")]
    WrongPassphrase,

    #[error("input is not an OpenPGP message")]
    NotPgp,

    #[error("no signature made by the supplied key")]
    BadSignature,

    #[error(transparent)]
    Keyring(#[from] KeyringError),

    #[error("openpgp: {0}")]
    Backend(#[from] anyhow::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Key location errors.
#[derive(Error, Debug)]
pub enum KeyringError {
    #[error("no key pair found in {}", .0.display())]
    MissingKeys(PathBuf),

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

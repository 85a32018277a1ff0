//! Operation outcomes.
//!
//! Every encrypt, decrypt, sign or verify request ends in exactly one
//! [`OperationOutcome`]. Its `Display` form is the status string shown to the
//! user; for a success it is the payload itself.

use std::fmt;

use crate::core::constants::status;

/// The kind of operation requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Encrypt,
    Decrypt,
    Sign,
    Verify,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Encrypt => "encrypt",
            Self::Decrypt => "decrypt",
            Self::Sign => "sign",
            Self::Verify => "verify",
        })
    }
}

/// Result of one operation, as seen by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationOutcome {
    /// Armored ciphertext, recovered plaintext, signed message, or the
    /// verification notice.
    Success(String),
    /// The message field was blank.
    Blank,
    /// The key field was blank.
    BlankKey,
    /// The key field did not hold a usable OpenPGP key.
    InvalidKey,
    /// A passphrase was required but none was supplied.
    MissingPassphrase,
    /// The passphrase did not unlock the secret key.
    WrongPassphrase,
    /// The input was not an OpenPGP message.
    NotPgpContent,
    /// No signature in the message was made by the supplied key.
    NotVerified,
}

impl OperationOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// The payload of a successful outcome.
    pub fn into_payload(self) -> Option<String> {
        match self {
            Self::Success(payload) => Some(payload),
            _ => None,
        }
    }

    /// Short machine-friendly name, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Success(_) => "success",
            Self::Blank => "blank",
            Self::BlankKey => "blank_key",
            Self::InvalidKey => "invalid_key",
            Self::MissingPassphrase => "missing_passphrase",
            Self::WrongPassphrase => "wrong_passphrase",
            Self::NotPgpContent => "not_pgp",
            Self::NotVerified => "not_verified",
        }
    }
}

impl fmt::Display for OperationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(payload) => f.write_str(payload),
            Self::Blank => f.write_str(status::MESSAGE_BLANK),
            Self::BlankKey => f.write_str(status::KEY_BLANK),
            Self::InvalidKey => f.write_str(status::KEY_INVALID),
            Self::MissingPassphrase => f.write_str(status::PASSPHRASE_MISSING),
            Self::WrongPassphrase => f.write_str(status::PASSPHRASE_WRONG),
            Self::NotPgpContent => f.write_str(status::NOT_PGP),
            Self::NotVerified => f.write_str(status::NOT_VERIFIED),
        }
    }
}

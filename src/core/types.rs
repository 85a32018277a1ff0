//! Type aliases for domain concepts.
//!
//! Provides semantic type aliases to make function signatures more descriptive.

/// An ASCII-armored OpenPGP key block (public certificate or secret key).
pub type ArmoredKey = String;

/// An ASCII-armored OpenPGP message (encrypted or signed).
pub type ArmoredMessage = String;

/// A passphrase held by the caller; wiped from memory on drop.
pub type Passphrase = zeroize::Zeroizing<String>;

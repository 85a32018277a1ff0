//! OpenPGP engine abstraction.
//!
//! All cryptography is delegated to an [`Engine`]. The operation layer only
//! parses keys through it (cheap, no secret material touched) and then hands
//! over well-formed requests.
//!
//! ## Backends
//!
//! - **sequoia**: Default, always available. Built on `sequoia-openpgp` with
//!   the pure-Rust crypto backend.
//!
//! ## Adding a New Backend
//!
//! 1. Implement the `Engine` trait
//! 2. Add the implementation in a new file next to `sequoia.rs`
//! 3. Report failures with the matching `EngineError` kind so callers can
//!    tell a wrong passphrase from a malformed message

use crate::core::keyring::KeyPair;
use crate::core::types::ArmoredMessage;
use crate::core::validation::KeyGenerationRequest;
use crate::error::EngineError;

mod sequoia;

pub use sequoia::Sequoia;

/// OpenPGP engine trait.
///
/// Keys are parsed once into backend-specific types and then passed by
/// reference to the operations.
pub trait Engine {
    /// A parsed public certificate.
    type PublicKey;

    /// A parsed certificate carrying secret key material.
    type SecretKey;

    /// Parse an armored public key.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidKey` if the text is not a valid OpenPGP
    /// certificate.
    fn parse_public_key(&self, armored: &str) -> Result<Self::PublicKey, EngineError>;

    /// Parse an armored secret key.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidKey` if the text is not a valid OpenPGP
    /// certificate or carries no secret key material.
    fn parse_secret_key(&self, armored: &str) -> Result<Self::SecretKey, EngineError>;

    /// Generate a passphrase-protected key pair and write it to the request's
    /// output directory as `pri_key.key` / `pub_key.key`.
    fn generate_key(&self, request: &KeyGenerationRequest) -> Result<KeyPair, EngineError>;

    /// Encrypt `plaintext` for `recipient`, returning an armored message.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::NoUsableKey` if the certificate has no usable
    /// encryption key.
    fn encrypt(
        &self,
        plaintext: &str,
        recipient: &Self::PublicKey,
    ) -> Result<ArmoredMessage, EngineError>;

    /// Decrypt an armored message.
    ///
    /// # Errors
    ///
    /// - `EngineError::NotPgp` if `ciphertext` is not an OpenPGP message
    /// - `EngineError::WrongPassphrase` if `passphrase` does not unlock the key
    fn decrypt(
        &self,
        ciphertext: &str,
        key: &Self::SecretKey,
        passphrase: &str,
    ) -> Result<String, EngineError>;

    /// Produce a cleartext-signed message.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::WrongPassphrase` if `passphrase` does not unlock
    /// the signing key.
    fn sign(
        &self,
        message: &str,
        key: &Self::SecretKey,
        passphrase: &str,
    ) -> Result<ArmoredMessage, EngineError>;

    /// Verify a signed message against `signer`, returning the signed content.
    ///
    /// # Errors
    ///
    /// - `EngineError::NotPgp` if `signed` is not an OpenPGP message
    /// - `EngineError::BadSignature` if no signature by `signer` checks out
    fn verify(&self, signed: &str, signer: &Self::PublicKey) -> Result<String, EngineError>;

    /// Backend name for display/logging.
    fn name(&self) -> &'static str;
}

//! Operation result mapping.
//!
//! Each operation runs in two phases:
//!
//! 1. **Pre-checks** that never call into the engine's cryptography: blank
//!    message, blank key, blank passphrase, and a key that does not parse.
//! 2. **Delegation** to the engine, translating only the error kinds that are
//!    expected for that operation into an [`OperationOutcome`]. Any other
//!    engine error is returned as `Err` rather than guessed at.

use tracing::debug;

use crate::core::constants::status;
use crate::core::engine::Engine;
use crate::core::keyring::KeyPair;
use crate::core::outcome::{Operation, OperationOutcome};
use crate::core::validation::{validate, KeyGenerationRequest};
use crate::error::{EngineError, Result};

/// Validate a request and, if it passes, generate and store a key pair.
///
/// # Errors
///
/// Returns `Error::Validation` with the first violated rule without
/// touching the engine, or `Error::Engine` if generation fails.
pub fn generate_key<E: Engine + ?Sized>(
    engine: &E,
    request: &KeyGenerationRequest,
) -> Result<KeyPair> {
    if let Err(failure) = validate(request) {
        debug!(reason = ?failure, "key generation request rejected");
        return Err(failure.into());
    }

    debug!(engine = engine.name(), "generating key pair");
    Ok(engine.generate_key(request)?)
}

/// Encrypt `message` for the holder of `public_key`.
///
/// Success carries the armored ciphertext.
pub fn encrypt<E: Engine + ?Sized>(
    engine: &E,
    message: &str,
    public_key: &str,
) -> Result<OperationOutcome> {
    logged(Operation::Encrypt, encrypt_outcome(engine, message, public_key))
}

/// Decrypt `message` with `secret_key` unlocked by `passphrase`.
///
/// Success carries the recovered plaintext.
pub fn decrypt<E: Engine + ?Sized>(
    engine: &E,
    message: &str,
    secret_key: &str,
    passphrase: &str,
) -> Result<OperationOutcome> {
    logged(Operation::Decrypt, decrypt_outcome(engine, message, secret_key, passphrase))
}

/// Sign `message` with `secret_key` unlocked by `passphrase`.
///
/// Success carries the cleartext-signed message.
pub fn sign<E: Engine + ?Sized>(
    engine: &E,
    message: &str,
    secret_key: &str,
    passphrase: &str,
) -> Result<OperationOutcome> {
    logged(Operation::Sign, sign_outcome(engine, message, secret_key, passphrase))
}

/// Verify that `message` was signed by the holder of `public_key`.
///
/// Success carries the verification notice, not the signed content.
pub fn verify<E: Engine + ?Sized>(
    engine: &E,
    message: &str,
    public_key: &str,
) -> Result<OperationOutcome> {
    logged(Operation::Verify, verify_outcome(engine, message, public_key))
}

fn encrypt_outcome<E: Engine + ?Sized>(
    engine: &E,
    message: &str,
    public_key: &str,
) -> Result<OperationOutcome> {
    if is_blank(message) {
        return Ok(OperationOutcome::Blank);
    }
    if is_blank(public_key) {
        return Ok(OperationOutcome::BlankKey);
    }
    let recipient = match engine.parse_public_key(public_key) {
        Ok(cert) => cert,
        Err(e) => return rejected_key(e),
    };

    match engine.encrypt(message, &recipient) {
        Ok(ciphertext) => Ok(OperationOutcome::Success(ciphertext)),
        Err(EngineError::NoUsableKey(_)) => Ok(OperationOutcome::InvalidKey),
        Err(e) => Err(e.into()),
    }
}

fn decrypt_outcome<E: Engine + ?Sized>(
    engine: &E,
    message: &str,
    secret_key: &str,
    passphrase: &str,
) -> Result<OperationOutcome> {
    if is_blank(message) {
        return Ok(OperationOutcome::Blank);
    }
    if is_blank(secret_key) {
        return Ok(OperationOutcome::BlankKey);
    }
    if passphrase.is_empty() {
        return Ok(OperationOutcome::MissingPassphrase);
    }
    let key = match engine.parse_secret_key(secret_key) {
        Ok(key) => key,
        Err(e) => return rejected_key(e),
    };

    match engine.decrypt(message, &key, passphrase) {
        Ok(plaintext) => Ok(OperationOutcome::Success(plaintext)),
        Err(EngineError::WrongPassphrase) => Ok(OperationOutcome::WrongPassphrase),
        Err(EngineError::NotPgp) => Ok(OperationOutcome::NotPgpContent),
        Err(EngineError::NoUsableKey(_)) => Ok(OperationOutcome::InvalidKey),
        Err(e) => Err(e.into()),
    }
}

fn sign_outcome<E: Engine + ?Sized>(
    engine: &E,
    message: &str,
    secret_key: &str,
    passphrase: &str,
) -> Result<OperationOutcome> {
    if is_blank(message) {
        return Ok(OperationOutcome::Blank);
    }
    if is_blank(secret_key) {
        return Ok(OperationOutcome::BlankKey);
    }
    if passphrase.is_empty() {
        return Ok(OperationOutcome::MissingPassphrase);
    }
    let key = match engine.parse_secret_key(secret_key) {
        Ok(key) => key,
        Err(e) => return rejected_key(e),
    };

    match engine.sign(message, &key, passphrase) {
        Ok(signed) => Ok(OperationOutcome::Success(signed)),
        Err(EngineError::WrongPassphrase) => Ok(OperationOutcome::WrongPassphrase),
        Err(EngineError::NoUsableKey(_)) => Ok(OperationOutcome::InvalidKey),
        Err(e) => Err(e.into()),
    }
}

fn verify_outcome<E: Engine + ?Sized>(
    engine: &E,
    message: &str,
    public_key: &str,
) -> Result<OperationOutcome> {
    if is_blank(message) {
        return Ok(OperationOutcome::Blank);
    }
    if is_blank(public_key) {
        return Ok(OperationOutcome::BlankKey);
    }
    let signer = match engine.parse_public_key(public_key) {
        Ok(cert) => cert,
        Err(e) => return rejected_key(e),
    };

    match engine.verify(message, &signer) {
        Ok(_content) => Ok(OperationOutcome::Success(status::VERIFIED.to_string())),
        Err(EngineError::NotPgp) => Ok(OperationOutcome::NotPgpContent),
        Err(EngineError::BadSignature) => Ok(OperationOutcome::NotVerified),
        Err(e) => Err(e.into()),
    }
}

fn is_blank(field: &str) -> bool {
    field.trim().is_empty()
}

/// Map a key parse failure: an invalid key is an outcome, anything else is
/// an error.
fn rejected_key(e: EngineError) -> Result<OperationOutcome> {
    match e {
        EngineError::InvalidKey(reason) => {
            debug!(%reason, "key rejected");
            Ok(OperationOutcome::InvalidKey)
        }
        other => Err(other.into()),
    }
}

fn logged(op: Operation, outcome: Result<OperationOutcome>) -> Result<OperationOutcome> {
    match &outcome {
        Ok(o) => debug!(operation = %op, outcome = o.kind(), "operation finished"),
        Err(e) => debug!(operation = %op, error = %e, "operation failed"),
    }
    outcome
}

//! Sequoia engine implementation.
//!
//! Provides key generation, encryption, decryption, signing and verification
//! using `sequoia-openpgp` with Cv25519 keys and ASCII armor.

use std::cell::Cell;
use std::io::{Read, Write};

use openpgp::armor::{Kind as ArmorKind, Writer as ArmorWriter};
use openpgp::cert::prelude::*;
use openpgp::crypto::{self, Password, SessionKey};
use openpgp::packet::{PKESK, SKESK};
use openpgp::parse::stream::{
    DecryptionHelper, DecryptorBuilder, MessageLayer, MessageStructure, VerificationHelper,
    VerifierBuilder,
};
use openpgp::parse::Parse;
use openpgp::policy::StandardPolicy;
use openpgp::serialize::stream::{Armorer, Encryptor, LiteralWriter, Message, Recipient, Signer};
use openpgp::serialize::Serialize;
use openpgp::types::SymmetricAlgorithm;
use openpgp::{Cert, KeyHandle, PacketPile};
use sequoia_openpgp as openpgp;
use tracing::trace;

use super::Engine;
use crate::core::keyring::{self, KeyPair};
use crate::core::validation::KeyGenerationRequest;
use crate::error::EngineError;

/// OpenPGP engine backed by sequoia.
pub struct Sequoia {
    policy: StandardPolicy<'static>,
}

impl Sequoia {
    pub fn new() -> Self {
        Self {
            policy: StandardPolicy::new(),
        }
    }

    /// Parse a certificate and check it is usable under the standard policy.
    fn parse_cert(&self, armored: &str) -> Result<Cert, EngineError> {
        let cert = Cert::from_bytes(armored.trim().as_bytes())
            .map_err(|e| EngineError::InvalidKey(e.to_string()))?;
        cert.with_policy(&self.policy, None)
            .map_err(|e| EngineError::InvalidKey(e.to_string()))?;
        Ok(cert)
    }

    /// Unlock every usable secret key of `cert` for `purpose`.
    fn unlock(
        &self,
        cert: &Cert,
        passphrase: &str,
        purpose: Purpose,
    ) -> Result<Vec<crypto::KeyPair>, EngineError> {
        let keys = cert
            .keys()
            .secret()
            .with_policy(&self.policy, None)
            .supported()
            .alive()
            .revoked(false);
        let keys: Vec<_> = match purpose {
            Purpose::Decryption => keys.for_transport_encryption().collect(),
            Purpose::Signing => keys.for_signing().collect(),
        };
        if keys.is_empty() {
            return Err(EngineError::NoUsableKey(purpose.as_str()));
        }

        let password = Password::from(passphrase.to_owned());
        let mut pairs = Vec::with_capacity(keys.len());
        for ka in keys {
            let mut key = ka.key().clone();
            if key.secret().is_encrypted() {
                key = key
                    .decrypt_secret(&password)
                    .map_err(|_| EngineError::WrongPassphrase)?;
            }
            pairs.push(key.into_keypair()?);
        }
        Ok(pairs)
    }
}

impl Default for Sequoia {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for Sequoia {
    type PublicKey = Cert;
    type SecretKey = Cert;

    fn name(&self) -> &'static str {
        "sequoia"
    }

    fn parse_public_key(&self, armored: &str) -> Result<Cert, EngineError> {
        self.parse_cert(armored)
    }

    fn parse_secret_key(&self, armored: &str) -> Result<Cert, EngineError> {
        let cert = self.parse_cert(armored)?;
        if !cert.is_tsk() {
            return Err(EngineError::InvalidKey(
                "no secret key material".to_string(),
            ));
        }
        Ok(cert)
    }

    fn generate_key(&self, request: &KeyGenerationRequest) -> Result<KeyPair, EngineError> {
        let dir = request.target_directory();
        trace!(dir = %dir.display(), "generating key pair");

        let (cert, _revocation) = CertBuilder::general_purpose(Some(request.user_id()))
            .set_cipher_suite(CipherSuite::Cv25519)
            .set_password(Some(Password::from(request.passphrase.as_str().to_owned())))
            .generate()?;

        let keys = KeyPair {
            private: armor(&cert, true)?,
            public: armor(&cert, false)?,
        };
        keyring::store(&dir, &keys)?;

        trace!(fingerprint = %cert.fingerprint(), "generated key pair");
        Ok(keys)
    }

    fn encrypt(&self, plaintext: &str, recipient: &Cert) -> Result<String, EngineError> {
        trace!(plaintext_len = plaintext.len(), "encrypting");

        let recipients: Vec<Recipient<'_>> = recipient
            .keys()
            .with_policy(&self.policy, None)
            .supported()
            .alive()
            .revoked(false)
            .for_transport_encryption()
            .map(|key| key.into())
            .collect();
        if recipients.is_empty() {
            return Err(EngineError::NoUsableKey("encryption"));
        }

        let mut sink = Vec::new();
        let message = Message::new(&mut sink);
        let message = Armorer::new(message).build()?;
        let message = Encryptor::for_recipients(message, recipients).build()?;
        let mut message = LiteralWriter::new(message).build()?;
        message.write_all(plaintext.as_bytes())?;
        message.finalize()?;

        trace!(ciphertext_len = sink.len(), "encrypted");
        Ok(String::from_utf8(sink)?)
    }

    fn decrypt(
        &self,
        ciphertext: &str,
        key: &Cert,
        passphrase: &str,
    ) -> Result<String, EngineError> {
        trace!(ciphertext_len = ciphertext.len(), "decrypting");

        let bytes = ciphertext.trim().as_bytes();
        if PacketPile::from_bytes(bytes).is_err() {
            return Err(EngineError::NotPgp);
        }

        let helper = Unlocked {
            cert: key.clone(),
            keypairs: self.unlock(key, passphrase, Purpose::Decryption)?,
        };
        let mut decryptor = DecryptorBuilder::from_bytes(bytes)
            .and_then(|builder| builder.with_policy(&self.policy, None, helper))
            .map_err(classify)?;

        let mut plaintext = Vec::new();
        decryptor.read_to_end(&mut plaintext).map_err(classify_io)?;

        trace!(plaintext_len = plaintext.len(), "decrypted");
        Ok(String::from_utf8(plaintext)?)
    }

    fn sign(&self, message: &str, key: &Cert, passphrase: &str) -> Result<String, EngineError> {
        trace!(message_len = message.len(), "signing");

        let keypair = self
            .unlock(key, passphrase, Purpose::Signing)?
            .into_iter()
            .next()
            .ok_or(EngineError::NoUsableKey("signing"))?;

        let mut sink = Vec::new();
        let writer = Message::new(&mut sink);
        let mut signer = Signer::new(writer, keypair)?.cleartext().build()?;
        signer.write_all(message.as_bytes())?;
        signer.finalize()?;

        trace!(signed_len = sink.len(), "signed");
        Ok(String::from_utf8(sink)?)
    }

    fn verify(&self, signed: &str, signer: &Cert) -> Result<String, EngineError> {
        trace!(signed_len = signed.len(), "verifying");

        let verdict = Cell::new(Verdict::Unchecked);
        let helper = SignedBy {
            cert: signer,
            verdict: &verdict,
        };

        let result = VerifierBuilder::from_bytes(signed.trim().as_bytes())
            .and_then(|builder| builder.with_policy(&self.policy, None, helper))
            .and_then(|mut verifier| {
                let mut content = Vec::new();
                verifier.read_to_end(&mut content)?;
                Ok(content)
            });

        trace!(verdict = ?verdict.get(), "verification finished");
        match (result, verdict.get()) {
            (Ok(content), Verdict::Good) => Ok(String::from_utf8(content)?),
            (Err(e), Verdict::Good) => Err(e.into()),
            (_, Verdict::Bad) => Err(EngineError::BadSignature),
            // Parsing never got as far as the signatures.
            (Err(_), Verdict::Unchecked) => Err(EngineError::NotPgp),
            (Ok(_), Verdict::Unchecked) => Err(EngineError::BadSignature),
        }
    }
}

/// What an unlocked key will be used for.
#[derive(Debug, Clone, Copy)]
enum Purpose {
    Decryption,
    Signing,
}

impl Purpose {
    fn as_str(self) -> &'static str {
        match self {
            Self::Decryption => "decryption",
            Self::Signing => "signing",
        }
    }
}

/// Armor a certificate, with its secret parts when `secret` is set.
fn armor(cert: &Cert, secret: bool) -> Result<String, EngineError> {
    let kind = if secret {
        ArmorKind::SecretKey
    } else {
        ArmorKind::PublicKey
    };
    let mut writer = ArmorWriter::new(Vec::new(), kind)?;
    if secret {
        cert.as_tsk().serialize(&mut writer)?;
    } else {
        cert.serialize(&mut writer)?;
    }
    Ok(String::from_utf8(writer.finalize()?)?)
}

/// Recover an `EngineError` raised inside a sequoia helper, and treat
/// OpenPGP data that is not a message (a key block, a cleartext signature)
/// as `NotPgp`.
fn classify(e: anyhow::Error) -> EngineError {
    if e.chain().any(is_malformed_cause) {
        return EngineError::NotPgp;
    }
    match e.downcast::<EngineError>() {
        Ok(kind) => kind,
        Err(e) => EngineError::Backend(e),
    }
}

fn classify_io(e: std::io::Error) -> EngineError {
    if is_malformed_cause(&e) {
        EngineError::NotPgp
    } else {
        EngineError::Io(e)
    }
}

/// Malformed-message errors arrive either as `openpgp::Error` or as an
/// `InvalidData` io error wrapping one, depending on where parsing stopped.
fn is_malformed_cause(cause: &(dyn std::error::Error + 'static)) -> bool {
    if let Some(e) = cause.downcast_ref::<openpgp::Error>() {
        return matches!(
            e,
            openpgp::Error::MalformedMessage(_) | openpgp::Error::MalformedPacket(_)
        );
    }
    if let Some(e) = cause.downcast_ref::<std::io::Error>() {
        if e.kind() == std::io::ErrorKind::InvalidData {
            return true;
        }
        return e
            .get_ref()
            .is_some_and(|inner| is_malformed_cause(inner));
    }
    false
}

/// Decryption helper holding already-unlocked key pairs.
struct Unlocked {
    cert: Cert,
    keypairs: Vec<crypto::KeyPair>,
}

impl VerificationHelper for Unlocked {
    fn get_certs(&mut self, _ids: &[KeyHandle]) -> openpgp::Result<Vec<Cert>> {
        Ok(Vec::new())
    }

    fn check(&mut self, _structure: MessageStructure) -> openpgp::Result<()> {
        Ok(())
    }
}

impl DecryptionHelper for Unlocked {
    fn decrypt(
        &mut self,
        pkesks: &[PKESK],
        _skesks: &[SKESK],
        sym_algo: Option<SymmetricAlgorithm>,
        decrypt: &mut dyn FnMut(Option<SymmetricAlgorithm>, &SessionKey) -> bool,
    ) -> openpgp::Result<Option<Cert>> {
        for pkesk in pkesks {
            for keypair in self.keypairs.iter_mut() {
                if let Some((algo, session_key)) = pkesk.decrypt(keypair, sym_algo) {
                    if decrypt(algo, &session_key) {
                        return Ok(Some(self.cert.clone()));
                    }
                }
            }
        }
        // Not addressed to this key.
        Err(EngineError::NoUsableKey("decryption").into())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verdict {
    Unchecked,
    Good,
    Bad,
}

/// Verification helper accepting signatures from exactly one certificate.
struct SignedBy<'a> {
    cert: &'a Cert,
    verdict: &'a Cell<Verdict>,
}

impl VerificationHelper for SignedBy<'_> {
    fn get_certs(&mut self, _ids: &[KeyHandle]) -> openpgp::Result<Vec<Cert>> {
        Ok(vec![self.cert.clone()])
    }

    fn check(&mut self, structure: MessageStructure) -> openpgp::Result<()> {
        let good = structure.iter().any(|layer| match layer {
            MessageLayer::SignatureGroup { results } => results.iter().any(|r| r.is_ok()),
            _ => false,
        });

        if good {
            self.verdict.set(Verdict::Good);
            Ok(())
        } else {
            self.verdict.set(Verdict::Bad);
            Err(EngineError::BadSignature.into())
        }
    }
}

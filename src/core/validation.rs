//! Input validation for key generation.
//!
//! Checks a [`KeyGenerationRequest`] against the key policy before any key
//! material is created. Rules run in a fixed order and stop at the first
//! failure, so the reported reason is deterministic.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::core::constants::{MIN_NAME_LEN, MIN_PASSPHRASE_LEN};
use crate::core::types::Passphrase;
use crate::error::ValidationFailure;

/// Outcome of [`validate`]: `Ok(())` or the first violated rule.
pub type ValidationResult = std::result::Result<(), ValidationFailure>;

/// Everything needed to generate a key pair.
#[derive(Clone)]
pub struct KeyGenerationRequest {
    pub name: String,
    pub email: String,
    pub passphrase: Passphrase,
    pub output_directory: PathBuf,
}

impl KeyGenerationRequest {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        passphrase: impl Into<String>,
        output_directory: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            passphrase: Passphrase::new(passphrase.into()),
            output_directory: output_directory.into(),
        }
    }

    /// User id in the conventional `Name <email>` form.
    pub fn user_id(&self) -> String {
        format!("{} <{}>", self.name.trim(), self.email.trim())
    }

    /// Output directory with surrounding whitespace removed.
    pub fn target_directory(&self) -> PathBuf {
        trimmed(&self.output_directory)
    }
}

fn trimmed(path: &Path) -> PathBuf {
    match path.to_str() {
        Some(s) => PathBuf::from(s.trim()),
        None => path.to_path_buf(),
    }
}

impl fmt::Debug for KeyGenerationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyGenerationRequest")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("passphrase", &"<redacted>")
            .field("output_directory", &self.output_directory)
            .finish()
    }
}

/// Validate a key-generation request.
///
/// Rules, in order:
/// 1. name is at least 3 characters
/// 2. email has the `local@domain.tld` shape
/// 3. passphrase is at least 8 characters
/// 4. passphrase has an upper-case letter
/// 5. passphrase has a lower-case letter
/// 6. passphrase has a character outside `[A-Za-z0-9]`
/// 7. output directory is non-blank and writable (or creatable)
///
/// Reads filesystem metadata for rule 7 but never writes.
pub fn validate(request: &KeyGenerationRequest) -> ValidationResult {
    validate_name(&request.name)?;
    validate_email(&request.email)?;
    validate_passphrase(&request.passphrase)?;
    validate_output_directory(&request.output_directory)
}

/// Validate a key owner's name.
pub fn validate_name(name: &str) -> ValidationResult {
    if name.trim().chars().count() < MIN_NAME_LEN {
        return Err(ValidationFailure::NameTooShort);
    }
    Ok(())
}

/// Validate an email address shape.
///
/// Accepts `local@domain.tld`: exactly one `@`, a non-empty local part, and a
/// domain made of at least two non-empty dot-separated labels. Whitespace
/// anywhere inside the address is rejected.
pub fn validate_email(email: &str) -> ValidationResult {
    let email = email.trim();
    if email.is_empty() || email.chars().any(char::is_whitespace) {
        return Err(ValidationFailure::EmailMalformed);
    }

    let Some((local, domain)) = email.split_once('@') else {
        return Err(ValidationFailure::EmailMalformed);
    };
    if local.is_empty() || domain.contains('@') {
        return Err(ValidationFailure::EmailMalformed);
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 || labels.iter().any(|label| label.is_empty()) {
        return Err(ValidationFailure::EmailMalformed);
    }

    Ok(())
}

/// Validate passphrase length and character classes.
pub fn validate_passphrase(passphrase: &str) -> ValidationResult {
    if passphrase.chars().count() < MIN_PASSPHRASE_LEN {
        return Err(ValidationFailure::PassphraseTooShort);
    }
    if !passphrase.chars().any(char::is_uppercase) {
        return Err(ValidationFailure::PassphraseMissingUppercase);
    }
    if !passphrase.chars().any(char::is_lowercase) {
        return Err(ValidationFailure::PassphraseMissingLowercase);
    }
    if passphrase.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ValidationFailure::PassphraseMissingSpecial);
    }
    Ok(())
}

/// Validate the directory keys will be written to.
///
/// A missing directory is fine as long as its nearest existing ancestor is a
/// writable directory, since the engine creates it.
pub fn validate_output_directory(dir: &Path) -> ValidationResult {
    let dir = trimmed(dir);
    if dir.as_os_str().is_empty() {
        return Err(ValidationFailure::OutputDirectoryBlank);
    }

    let existing = dir
        .ancestors()
        .find(|p| !p.as_os_str().is_empty() && p.exists());

    // A relative path with no existing component resolves under the cwd.
    let existing = match existing {
        Some(p) => p.to_path_buf(),
        None => PathBuf::from("."),
    };

    match std::fs::metadata(&existing) {
        Ok(meta) if meta.is_dir() && !meta.permissions().readonly() => Ok(()),
        _ => Err(ValidationFailure::OutputDirectoryUnusable),
    }
}

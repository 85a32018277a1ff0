//! Constants used throughout pgpeed.
//!
//! Centralizes file names, policy thresholds and status strings.

/// Private key file written into a key location.
pub const PRIVATE_KEY_FILE: &str = "pri_key.key";

/// Public key file written into a key location.
pub const PUBLIC_KEY_FILE: &str = "pub_key.key";

/// Subdirectory of a key location holding replaced key pairs.
pub const ARCHIVE_DIR: &str = "archive";

/// Configuration directory relative to HOME (~/.pgpeed).
pub const CONFIG_DIR: &str = ".pgpeed";

/// Configuration file name inside [`CONFIG_DIR`].
pub const CONFIG_FILE: &str = "config.toml";

/// Minimum length of a key owner's name.
pub const MIN_NAME_LEN: usize = 3;

/// Minimum passphrase length, in characters.
pub const MIN_PASSPHRASE_LEN: usize = 8;

/// Environment variable holding the passphrase for non-interactive use.
pub const PASSPHRASE_ENV: &str = "PGPEED_PASSPHRASE";

/// Status strings shown for each non-payload outcome.
pub mod status {
    pub const MESSAGE_BLANK: &str = "Message Blank";
    pub const KEY_BLANK: &str = "Key blank - please enter a valid key";
    pub const KEY_INVALID: &str = "Key invalid - please enter a valid key";
    pub const PASSPHRASE_MISSING: &str = "You have not supplied a passphrase";
    pub const PASSPHRASE_WRONG: &str = "Passphrase Error";
    pub const NOT_PGP: &str = "Message not PGP error (possibly plain text)";
    pub const VERIFIED: &str =
        "Message verified... It was created by the owner of this public key.";
    pub const NOT_VERIFIED: &str =
        "Message not verified... It was not created by the owner of this public key.";
}

//! Configuration file management.
//!
//! Handles reading and writing `~/.pgpeed/config.toml`, which records the
//! active key location.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::constants;
use crate::core::keyring;
use crate::error::{ConfigError, KeyringError, Result};

/// User configuration stored in `~/.pgpeed/config.toml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Metadata about the configuration file
    pub pgpeed: Meta,
    /// Key location settings
    #[serde(default)]
    pub keys: Keys,
}

/// Metadata section of the configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    /// Version of pgpeed that last wrote the file
    pub version: String,
}

/// `[keys]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keys {
    /// Directory holding `pri_key.key` and `pub_key.key`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<PathBuf>,
}

impl Config {
    /// Create a new configuration with the current version and no key location
    pub fn new() -> Self {
        Self {
            pgpeed: Meta {
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            keys: Keys::default(),
        }
    }

    /// Path to the configuration file under the user's home directory
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NoHome` if the home directory cannot be found.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::NoHome)?;
        Ok(home.join(constants::CONFIG_DIR).join(constants::CONFIG_FILE))
    }

    /// Load the user configuration, or defaults if there is none yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load configuration from an explicit path.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if the TOML is malformed, or
    /// `ConfigError::MissingField` if the version is empty.
    pub fn load_from(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading config");

        if !path.exists() {
            debug!("no config file, using defaults");
            return Ok(Self::new());
        }
        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let config: Self = toml::from_str(&contents).map_err(ConfigError::Parse)?;

        if config.pgpeed.version.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "version" }.into());
        }

        debug!(key_location = ?config.keys.location, "config loaded");
        Ok(config)
    }

    /// Save the user configuration.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    /// Save configuration to an explicit path, creating its directory.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        debug!(path = %path.display(), "saving config");

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        std::fs::write(path, contents)?;

        Ok(())
    }

    /// The active key location, if one has been set.
    pub fn key_location(&self) -> Option<&Path> {
        self.keys.location.as_deref()
    }

    /// The active key location, or an error telling the user to set one.
    pub fn require_key_location(&self) -> Result<&Path> {
        self.key_location()
            .ok_or_else(|| ConfigError::NoKeyLocation.into())
    }

    /// Record `dir` as the active key location.
    ///
    /// # Errors
    ///
    /// Returns `KeyringError::MissingKeys` if `dir` does not hold a key pair.
    pub fn set_key_location(&mut self, dir: &Path) -> Result<()> {
        if !keyring::has_keys(dir) {
            return Err(KeyringError::MissingKeys(dir.to_path_buf()).into());
        }
        let dir = std::fs::canonicalize(dir)?;
        debug!(dir = %dir.display(), "key location set");
        self.keys.location = Some(dir);
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

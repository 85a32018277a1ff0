//! Generate command.
//!
//! Creates a passphrase-protected key pair and, unless told otherwise, makes
//! its directory the active key location.

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use dialoguer::Input;
use tracing::info;

use crate::cli::{input, output};
use crate::core::config::Config;
use crate::core::constants::CONFIG_DIR;
use crate::core::engine::Sequoia;
use crate::core::keyring;
use crate::core::operations;
use crate::core::validation::KeyGenerationRequest;
use crate::error::{ConfigError, Result};

/// Generate a key pair.
pub fn execute(
    name: Option<String>,
    email: Option<String>,
    directory: Option<PathBuf>,
    passphrase: Option<String>,
    no_activate: bool,
) -> Result<()> {
    let interactive = io::stdin().is_terminal();

    let name = match name {
        Some(n) => n,
        None if interactive => Input::<String>::new()
            .with_prompt("Name")
            .default(whoami::realname())
            .interact_text()?,
        None => String::new(),
    };

    let email = match email {
        Some(e) => e,
        None if interactive => Input::<String>::new().with_prompt("Email").interact_text()?,
        None => String::new(),
    };

    let directory = match directory {
        Some(d) => d,
        None => {
            let default = default_directory()?;
            if interactive {
                let chosen = Input::<String>::new()
                    .with_prompt("Key directory")
                    .default(default.display().to_string())
                    .interact_text()?;
                PathBuf::from(chosen)
            } else {
                default
            }
        }
    };

    let passphrase = input::new_passphrase(passphrase)?;
    let request = KeyGenerationRequest {
        name,
        email,
        passphrase,
        output_directory: directory,
    };
    info!(user_id = %request.user_id(), "generating key pair");

    let dir = request.target_directory();
    let replacing = keyring::has_keys(&dir);
    operations::generate_key(&Sequoia::new(), &request)?;

    if replacing {
        output::warn("previous key pair moved to the archive/ subdirectory");
    }
    output::success("key pair generated");
    output::blank();
    output::kv("user id    ", request.user_id());
    output::kv("private key", output::path(&keyring::private_key_path(&dir)));
    output::kv("public key ", output::path(&keyring::public_key_path(&dir)));

    if no_activate {
        output::blank();
        output::hint(&format!("run: pgpeed keys use {}", dir.display()));
        return Ok(());
    }

    let mut config = Config::load()?;
    config.set_key_location(&dir)?;
    config.save()?;
    output::kv("active     ", "yes");

    Ok(())
}

/// `~/.pgpeed/keys`, used when no directory is given.
fn default_directory() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or(ConfigError::NoHome)?;
    Ok(home.join(CONFIG_DIR).join("keys"))
}

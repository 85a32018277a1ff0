//! Keys command - manage the active key location.

use std::path::Path;

use tracing::info;

use crate::cli::output;
use crate::core::config::Config;
use crate::core::keyring;
use crate::error::Result;

/// Make `dir` the active key location.
pub fn use_location(dir: &Path) -> Result<()> {
    info!(dir = %dir.display(), "setting key location");

    let mut config = Config::load()?;
    config.set_key_location(dir)?;
    config.save()?;

    if let Some(location) = config.key_location() {
        output::success(&format!("using keys in {}", output::path(location)));
    }
    Ok(())
}

/// Print the active public (or private) key.
pub fn show(private: bool, json: bool) -> Result<()> {
    let config = Config::load()?;
    let dir = config.require_key_location()?;
    let pair = keyring::load(dir)?;

    let (file, key) = if private {
        (keyring::private_key_path(dir), pair.private)
    } else {
        (keyring::public_key_path(dir), pair.public)
    };

    if json {
        let modified = std::fs::metadata(&file)?
            .modified()
            .ok()
            .map(|t| chrono::DateTime::<chrono::Utc>::from(t).to_rfc3339());
        let result = serde_json::json!({
            "location": dir,
            "file": file,
            "kind": if private { "private" } else { "public" },
            "modified": modified,
            "key": key,
        });
        output::data(&serde_json::to_string_pretty(&result)?);
    } else {
        output::data(key.trim_end());
    }

    Ok(())
}

/// Print the active key location.
pub fn path() -> Result<()> {
    let config = Config::load()?;
    output::data(&config.require_key_location()?.display().to_string());
    Ok(())
}

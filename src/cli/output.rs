//! Shared CLI output helpers.
//!
//! Payloads (ciphertext, plaintext, signed messages, keys) go to stdout
//! unadorned so they can be piped. Everything else is styled and, apart from
//! success lines, written to stderr.
//!
//! Color scheme (respects NO_COLOR):
//! - Green: success
//! - Red: errors and rejected operations
//! - Yellow: warnings
//! - Cyan: paths, commands, hints
//! - Dimmed: labels

use console::style;
use std::fmt::Display;
use std::io::Write;
use std::path::Path;

use crate::core::outcome::OperationOutcome;
use crate::error::{Error, Result};

/// Check if color output is disabled via NO_COLOR env var.
fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

/// Print a success message with checkmark (green).
///
/// Example: `✓ key pair generated`
pub fn success(msg: &str) {
    if colors_enabled() {
        println!("{} {}", style("✓").green(), msg);
    } else {
        println!("✓ {}", msg);
    }
}

/// Print an error message to stderr (red).
///
/// Example: `✗ Passphrase Error`
pub fn error(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("✗").red(), msg);
    } else {
        eprintln!("✗ {}", msg);
    }
}

/// Print a warning message to stderr (yellow).
pub fn warn(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("⚠").yellow(), msg);
    } else {
        eprintln!("⚠ {}", msg);
    }
}

/// Print a hint message to stderr (cyan).
///
/// Example: `→ run: pgpeed generate`
pub fn hint(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("→").cyan(), style(msg).cyan());
    } else {
        eprintln!("→ {}", msg);
    }
}

/// Print a key-value pair (label dimmed).
pub fn kv(label: &str, value: impl Display) {
    if colors_enabled() {
        println!("  {}  {}", style(label).dim(), style(value).bold());
    } else {
        println!("  {}  {}", label, value);
    }
}

pub fn blank() {
    println!();
}

/// Format a path in cyan for inline use.
pub fn path(p: &Path) -> String {
    if colors_enabled() {
        style(p.display()).cyan().to_string()
    } else {
        p.display().to_string()
    }
}

/// Print raw data to stdout, no styling.
pub fn data(value: &str) {
    println!("{}", value);
}

/// Emit an operation outcome.
///
/// A success writes its payload to `destination` byte for byte, or to
/// stdout with a trailing newline. Any other
/// outcome becomes [`Error::Rejected`], which `main` prints to stderr.
pub fn outcome(outcome: OperationOutcome, destination: Option<&Path>) -> Result<()> {
    let payload = match outcome {
        OperationOutcome::Success(payload) => payload,
        rejected => return Err(Error::Rejected(rejected)),
    };

    match destination {
        Some(file) => {
            std::fs::write(file, payload)?;
            success(&format!("written to {}", path(file)));
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(ensure_newline(payload).as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

fn ensure_newline(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}

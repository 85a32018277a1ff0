//! Decrypt command.

use std::path::Path;

use tracing::info;

use crate::cli::input::{self, KeyRole};
use crate::cli::{output, MessageArgs};
use crate::core::engine::Sequoia;
use crate::core::operations;
use crate::error::Result;

/// Decrypt a message with the given (or active) private key.
pub fn execute(
    args: MessageArgs,
    passphrase: Option<String>,
    destination: Option<&Path>,
) -> Result<()> {
    info!("decrypting message");

    let message = input::message(&args)?;
    let secret_key = input::key(&args, KeyRole::Private)?;
    let passphrase = input::passphrase(passphrase)?;

    let outcome = operations::decrypt(&Sequoia::new(), &message, &secret_key, &passphrase)?;
    output::outcome(outcome, destination)
}

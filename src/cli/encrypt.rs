//! Encrypt command.

use std::path::Path;

use tracing::info;

use crate::cli::input::{self, KeyRole};
use crate::cli::{output, MessageArgs};
use crate::core::engine::Sequoia;
use crate::core::operations;
use crate::error::Result;

/// Encrypt a message for the given (or active) public key.
pub fn execute(args: MessageArgs, destination: Option<&Path>) -> Result<()> {
    info!("encrypting message");

    let message = input::message(&args)?;
    let public_key = input::key(&args, KeyRole::Public)?;

    let outcome = operations::encrypt(&Sequoia::new(), &message, &public_key)?;
    output::outcome(outcome, destination)
}

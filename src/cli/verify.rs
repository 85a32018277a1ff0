//! Verify command.

use tracing::info;

use crate::cli::input::{self, KeyRole};
use crate::cli::{output, MessageArgs};
use crate::core::engine::Sequoia;
use crate::core::operations;
use crate::error::Result;

/// Check a signed message against the given (or active) public key.
pub fn execute(args: MessageArgs) -> Result<()> {
    info!("verifying message");

    let message = input::message(&args)?;
    let public_key = input::key(&args, KeyRole::Public)?;

    let outcome = operations::verify(&Sequoia::new(), &message, &public_key)?;
    output::outcome(outcome, None)
}

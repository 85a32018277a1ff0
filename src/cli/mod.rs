//! Command-line interface.

pub mod completions;
pub mod decrypt;
pub mod encrypt;
pub mod generate;
pub mod input;
pub mod keys;
pub mod output;
pub mod sign;
pub mod verify;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::core::constants::PASSPHRASE_ENV;

/// pgpeed - OpenPGP for text messages.
#[derive(Parser)]
#[command(
    name = "pgpeed",
    about = "Generate OpenPGP keys and encrypt, decrypt, sign and verify text messages",
    version
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Generate a passphrase-protected key pair
    Generate {
        /// Your name (at least 3 characters)
        #[arg(short, long)]
        name: Option<String>,
        /// Your email address
        #[arg(short, long)]
        email: Option<String>,
        /// Directory to write pri_key.key and pub_key.key into
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[command(flatten)]
        passphrase: PassphraseArg,
        /// Don't make the new keys the active key location
        #[arg(long)]
        no_activate: bool,
    },

    /// Encrypt a message for a public key
    Encrypt {
        #[command(flatten)]
        message: MessageArgs,
        /// Write the result to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Decrypt a message with your private key
    Decrypt {
        #[command(flatten)]
        message: MessageArgs,
        #[command(flatten)]
        passphrase: PassphraseArg,
        /// Write the result to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Sign a message with your private key
    Sign {
        #[command(flatten)]
        message: MessageArgs,
        #[command(flatten)]
        passphrase: PassphraseArg,
        /// Write the result to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Verify a signed message against a public key
    Verify {
        #[command(flatten)]
        message: MessageArgs,
    },

    /// Manage the active key location
    Keys {
        #[command(subcommand)]
        action: KeysAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Where an operation reads its message and key from.
#[derive(Args, Debug, Default)]
pub struct MessageArgs {
    /// Message text (reads --input or piped stdin when omitted)
    #[arg(allow_hyphen_values = true)]
    pub message: Option<String>,
    /// Read the message from a file
    #[arg(short, long, conflicts_with = "message")]
    pub input: Option<PathBuf>,
    /// Armored key file (defaults to the active key location)
    #[arg(short, long)]
    pub key: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub struct PassphraseArg {
    /// Key passphrase (prompted for when omitted on a terminal)
    #[arg(long = "passphrase", env = PASSPHRASE_ENV, hide_env_values = true)]
    pub value: Option<String>,
}

/// Key location subcommands.
#[derive(Subcommand)]
pub enum KeysAction {
    /// Make a directory holding pri_key.key and pub_key.key the active location
    Use {
        /// Key directory
        dir: PathBuf,
    },

    /// Print the active public key
    Show {
        /// Print the private key instead
        #[arg(long)]
        private: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the active key location
    Path,
}

/// Execute a command.
pub fn execute(command: Command) -> crate::error::Result<()> {
    use Command::*;

    match command {
        Generate {
            name,
            email,
            output,
            passphrase,
            no_activate,
        } => generate::execute(name, email, output, passphrase.value, no_activate),
        Encrypt { message, output } => encrypt::execute(message, output.as_deref()),
        Decrypt {
            message,
            passphrase,
            output,
        } => decrypt::execute(message, passphrase.value, output.as_deref()),
        Sign {
            message,
            passphrase,
            output,
        } => sign::execute(message, passphrase.value, output.as_deref()),
        Verify { message } => verify::execute(message),
        Keys { action } => match action {
            KeysAction::Use { dir } => keys::use_location(&dir),
            KeysAction::Show { private, json } => keys::show(private, json),
            KeysAction::Path => keys::path(),
        },
        Completions { shell } => completions::execute(shell),
    }
}

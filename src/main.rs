//! pgpeed - OpenPGP for text messages.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use pgpeed::cli::output;
use pgpeed::cli::{execute, Cli};
use pgpeed::core::outcome::OperationOutcome;
use pgpeed::error::{ConfigError, Error, KeyringError};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = execute(cli.command) {
        output::error(&e.to_string());
        if let Some(hint) = hint(&e) {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}

/// Install the tracing subscriber.
///
/// `PGPEED_LOG` overrides the filter; `PGPEED_LOG_FORMAT=json` switches to
/// one JSON object per line. Logs always go to stderr.
fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_env("PGPEED_LOG").unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("pgpeed=debug")
        } else {
            EnvFilter::new("pgpeed=warn")
        }
    });

    let json = std::env::var("PGPEED_LOG_FORMAT").is_ok_and(|f| f.eq_ignore_ascii_case("json"));
    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .without_time()
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

fn hint(e: &Error) -> Option<&'static str> {
    match e {
        Error::Config(ConfigError::NoKeyLocation) => {
            Some("run: pgpeed generate, or pgpeed keys use <DIR>, or pass --key <FILE>")
        }
        Error::Keyring(KeyringError::MissingKeys(_)) => {
            Some("a key location must contain pri_key.key and pub_key.key")
        }
        Error::Rejected(OperationOutcome::BlankKey) => {
            Some("pass --key <FILE>, or run: pgpeed keys use <DIR>")
        }
        Error::Rejected(OperationOutcome::MissingPassphrase) => {
            Some("set PGPEED_PASSPHRASE or pass --passphrase")
        }
        Error::Validation(_) => Some("run: pgpeed generate --help"),
        _ => None,
    }
}

//! pgpeed - OpenPGP key generation, encryption, decryption, signing and
//! verification for text messages.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── generate      # Key pair generation
//! │   ├── encrypt       # Encrypt / decrypt / sign / verify commands
//! │   ├── decrypt
//! │   ├── sign
//! │   ├── verify
//! │   ├── keys          # Active key location
//! │   ├── input         # Message, key and passphrase resolution
//! │   ├── output        # Terminal output helpers
//! │   └── completions   # Shell completions
//! └── core/             # Library
//!     ├── validation    # Key generation request rules
//!     ├── operations    # Pre-checks and outcome mapping
//!     ├── outcome       # Operation outcomes and status strings
//!     ├── engine/       # OpenPGP engines
//!     │   ├── mod       # Engine trait
//!     │   └── sequoia   # sequoia-openpgp implementation
//!     ├── keyring       # pri_key.key / pub_key.key directories
//!     └── config        # ~/.pgpeed/config.toml
//! ```
//!
//! # Example
//!
//! ```no_run
//! use pgpeed::core::engine::Sequoia;
//! use pgpeed::core::operations;
//!
//! # fn main() -> pgpeed::error::Result<()> {
//! let engine = Sequoia::new();
//! let public_key = std::fs::read_to_string("pub_key.key")?;
//! let outcome = operations::encrypt(&engine, "hello", &public_key)?;
//! println!("{}", outcome);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod core;
pub mod error;

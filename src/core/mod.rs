//! Core library components.
//!
//! Input validation, the OpenPGP engine seam, operation result mapping and
//! key/config persistence. Nothing in here prints or prompts.

pub mod config;
pub mod constants;
pub mod engine;
pub mod keyring;
pub mod operations;
pub mod outcome;
pub mod types;
pub mod validation;

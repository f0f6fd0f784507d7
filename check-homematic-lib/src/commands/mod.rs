//! Command-line interface and orchestration for check-homematic
//!
//! This module implements the CLI commands and ties the device state, the device
//! checks and the configuration together into a monitoring plugin.
//!
//! # Implementation Model
//!
//! ## Commands
//!
//! - **check**: Load a device state document, find the named device, run the check
//!   for its kind and print the status line. The process exit code is the status code.
//! - **init**: Generate a default configuration file with example thresholds
//! - **validate**: Check configuration file syntax and threshold validity
//!
//! ## Execution Flow
//!
//! The `run` function parses command-line arguments using clap and routes
//! to the appropriate command handler. All output goes through a [`Host`],
//! which lets tests capture the status line and the exit code.
//!
//! Thresholds come from a TOML file with one table per measured quantity
//! (`[temperature]`, `[humidity]`), each with optional `warning` and `critical`
//! ranges. Ranges given on the command line replace the configured ones.

mod check;
mod common;
mod config;
mod host;
mod init;
mod run;
mod validate;

#[cfg(test)]
pub use host::TestHost;

pub use check::{CheckArgs, check_device};
pub use host::Host;
pub use init::{InitArgs, init_config};
pub use run::run;
pub use validate::{ValidateArgs, validate_config};

//! # anstable CLI
//!
//! Operational front end for the synthetic slot-table generator.
//!
//! # Commands
//!
//! - `anstable generate` - Generate a batch and write it as JSON, CSV or a summary
//! - `anstable verify --input <file>` - Check every table of a JSON batch file
//! - `anstable stats` - Generate a batch and print per-table run statistics
//!
//! Configuration is layered: defaults, then a TOML file (`--config`), then
//! `ANSTABLE_*` environment variables, then command-line flags.

pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use error::{CliError, Result};

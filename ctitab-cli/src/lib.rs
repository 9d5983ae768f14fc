//! ctitab CLI library
//!
//! This library provides the command-line interface for structuring the BSI
//! threat-intelligence group tables.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;

pub use error::{CliError, CliResult};

//! Wordcensus CLI library
//!
//! This library provides the command-line interface for the wordcensus
//! corpus word-tallying tool.

pub mod cli;
pub mod error;
pub mod output;

pub use cli::Cli;
pub use error::{CliError, CliResult};

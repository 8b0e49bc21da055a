//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Input directory missing or not a directory
    DirectoryNotFound(String),
    /// Words-of-interest file could not be loaded
    WordListError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::DirectoryNotFound(path) => write!(f, "Directory not found: {path}"),
            CliError::WordListError(msg) => write!(f, "Word list error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

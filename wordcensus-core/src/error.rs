//! Core error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while scanning and summarizing a corpus
#[derive(Error, Debug)]
pub enum CoreError {
    /// File-extension specifier is not letters-only (optionally `.`/`*.` prefixed)
    #[error("invalid file extension format: {spec:?} (expected e.g. txt, .jpeg, *.png)")]
    InvalidExtensionFormat {
        /// The rejected specifier as given
        spec: String,
    },

    /// A discovered document could not be opened or read; the run aborts
    #[error("failed to read document {path}: {source}")]
    DocumentReadFailure {
        /// Path of the unreadable document
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// A requested word of interest never appeared in any document
    #[error("word of interest {word:?} was not found in any document")]
    UnknownInterestWord {
        /// The normalized word that missed
        word: String,
    },

    /// Glob-level failure while listing the directory
    #[error("failed to scan directory with pattern {pattern:?}: {source}")]
    InvalidPattern {
        /// The glob pattern that failed
        pattern: String,
        /// Underlying glob error
        source: glob::PatternError,
    },
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

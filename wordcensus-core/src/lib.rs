//! Corpus word tallying for wordcensus
//!
//! This crate scans plain-text documents and builds a per-word summary: total
//! occurrence count, the documents each word appeared in, and the sentence
//! fragments containing it. Tokenization is case-insensitive and
//! punctuation-stripped; sentences are split on the literal period; repeated
//! words merge across files. The whole pipeline is single-pass and sequential.

#![warn(missing_docs)]

pub mod aggregator;
pub mod discovery;
pub mod error;
pub mod interest;
pub mod tokenizer;

// Re-export key types
pub use aggregator::{summarize, Summary, WordStats};
pub use discovery::{find_documents, parse_extension};
pub use error::{CoreError, Result};
pub use interest::load_words_of_interest;
pub use tokenizer::normalize_word;

use std::path::Path;

/// Discover matching documents under `dir` and summarize them in one step.
pub fn summarize_directory(dir: &Path, ext_spec: &str) -> Result<Summary> {
    let files = find_documents(dir, ext_spec)?;
    summarize(&files)
}

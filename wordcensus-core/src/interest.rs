//! Words-of-interest loading

use crate::error::{CoreError, Result};
use crate::tokenizer::normalize_word;
use std::fs;
use std::path::Path;

/// Load the words of interest from a newline-delimited file.
///
/// Each line is trimmed and normalized with the same rule the tokenizer uses,
/// so the returned words are valid [`crate::Summary`] keys. Blank lines are
/// skipped.
pub fn load_words_of_interest(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path).map_err(|source| CoreError::DocumentReadFailure {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(normalize_word)
        .collect())
}

//! Document discovery by file extension

use crate::error::{CoreError, Result};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Accepted specifier forms: `txt`, `.txt`, `*.txt` — letters only.
fn extension_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\*?\.?([A-Za-z]+)$").expect("extension pattern is valid"))
}

/// Extract the bare extension letters from a specifier.
///
/// `txt`, `.txt`, and `*.txt` all yield `txt`; anything else (for example
/// `..jpeg` or `tar.gz`) is rejected with [`CoreError::InvalidExtensionFormat`].
pub fn parse_extension(spec: &str) -> Result<&str> {
    extension_pattern()
        .captures(spec)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .ok_or_else(|| CoreError::InvalidExtensionFormat {
            spec: spec.to_string(),
        })
}

/// List the files in `dir` matching the extension specifier.
///
/// Paths are returned in the order the glob walk yields them; this crate does
/// not impose its own ordering. An empty match set is not an error — it simply
/// produces an empty summary downstream.
pub fn find_documents(dir: &Path, ext_spec: &str) -> Result<Vec<PathBuf>> {
    let letters = parse_extension(ext_spec)?;
    let pattern = dir.join(format!("*.{letters}")).to_string_lossy().into_owned();

    let entries = glob::glob(&pattern).map_err(|source| CoreError::InvalidPattern {
        pattern: pattern.clone(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| {
            let path = e.path().to_path_buf();
            CoreError::DocumentReadFailure {
                path,
                source: e.into_error(),
            }
        })?;
        if path.is_file() {
            files.push(path);
        }
    }
    Ok(files)
}

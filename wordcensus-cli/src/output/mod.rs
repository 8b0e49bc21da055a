//! Output formatting module

use anyhow::Result;
use wordcensus_core::WordStats;

/// Separator placed between distinct sentences in a report cell
pub const SENTENCE_SEPARATOR: &str = " |\n";

/// Trait for report formatters
pub trait OutputFormatter {
    /// Format one word's statistics into the report
    fn format_entry(&mut self, word: &str, stats: &WordStats) -> Result<()>;

    /// Finalize output (e.g., draw the table, close the JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

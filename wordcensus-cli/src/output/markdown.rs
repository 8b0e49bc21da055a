//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;
use wordcensus_core::WordStats;

/// Markdown formatter - outputs the summary as a pipe table
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    word_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            word_count: 0,
        }
    }
}

/// Escape pipe characters so cell content cannot break the table
fn escape_cell(content: &str) -> String {
    content.replace('|', "\\|")
}

impl<W: Write> OutputFormatter for MarkdownFormatter<W> {
    fn format_entry(&mut self, word: &str, stats: &WordStats) -> Result<()> {
        if self.word_count == 0 {
            writeln!(self.writer, "| Word | Count | Documents | Sentences |")?;
            writeln!(self.writer, "|------|-------|-----------|-----------|")?;
        }
        self.word_count += 1;
        writeln!(
            self.writer,
            "| {} | {} | {} | {} |",
            escape_cell(word),
            stats.count,
            escape_cell(&stats.documents.join(" ")),
            escape_cell(&stats.sentences.join("<br>")),
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total words: {}*", self.word_count)?;
        self.writer.flush()?;
        Ok(())
    }
}

//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use wordcensus_core::WordStats;

/// JSON formatter - outputs the summary as a JSON array of rows
pub struct JsonFormatter<W: Write> {
    writer: W,
    rows: Vec<ReportRow>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize)]
pub struct ReportRow {
    /// The normalized word
    pub word: String,
    /// Total occurrences across the corpus
    pub count: usize,
    /// Documents the word appeared in
    pub documents: Vec<String>,
    /// Sentences containing the word
    pub sentences: Vec<String>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            rows: Vec::new(),
        }
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn format_entry(&mut self, word: &str, stats: &WordStats) -> Result<()> {
        self.rows.push(ReportRow {
            word: word.to_string(),
            count: stats.count,
            documents: stats.documents.clone(),
            sentences: stats.sentences.clone(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.rows)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outputs_array_of_rows() {
        let mut formatter = JsonFormatter::new(Vec::new());
        let stats = WordStats {
            count: 2,
            documents: vec!["doc1.txt".into()],
            sentences: vec!["the alpine club".into()],
        };
        formatter.format_entry("Alpine", &stats).unwrap();
        formatter.finish().unwrap();

        let out = String::from_utf8(formatter.writer).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed[0]["word"], "Alpine");
        assert_eq!(parsed[0]["count"], 2);
        assert_eq!(parsed[0]["documents"][0], "doc1.txt");
        assert_eq!(parsed[0]["sentences"][0], "the alpine club");
    }

    #[test]
    fn empty_report_is_an_empty_array() {
        let mut formatter = JsonFormatter::new(Vec::new());
        formatter.finish().unwrap();

        let out = String::from_utf8(formatter.writer).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed, serde_json::json!([]));
    }
}

//! Plain text table formatter

use super::{OutputFormatter, SENTENCE_SEPARATOR};
use anyhow::Result;
use std::io::{self, Write};
use wordcensus_core::WordStats;

const HEADERS: [&str; 4] = ["Word", "Count", "Documents", "Sentences"];

/// Text formatter - renders the summary as a bordered table.
///
/// Rows are buffered so column widths can be computed over the whole report;
/// the table is drawn in [`OutputFormatter::finish`]. Multi-sentence cells span
/// multiple terminal lines, one sentence per line.
pub struct TextFormatter<W: Write> {
    writer: W,
    rows: Vec<[String; 4]>,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            rows: Vec::new(),
        }
    }

    fn column_widths(&self) -> [usize; 4] {
        let mut widths = [0usize; 4];
        for (i, header) in HEADERS.iter().enumerate() {
            widths[i] = header.chars().count();
        }
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                for line in cell.split('\n') {
                    widths[i] = widths[i].max(line.chars().count());
                }
            }
        }
        widths
    }

    fn write_separator(&mut self, widths: &[usize; 4]) -> io::Result<()> {
        let mut line = String::from("+");
        for width in widths {
            line.push_str(&"-".repeat(width + 2));
            line.push('+');
        }
        writeln!(self.writer, "{line}")
    }

    fn write_row(&mut self, cells: &[String; 4], widths: &[usize; 4]) -> io::Result<()> {
        let height = cells
            .iter()
            .map(|cell| cell.split('\n').count())
            .max()
            .unwrap_or(1);

        for line_idx in 0..height {
            let mut line = String::from("|");
            for (i, cell) in cells.iter().enumerate() {
                let content = cell.split('\n').nth(line_idx).unwrap_or("");
                let pad = widths[i] - content.chars().count();
                line.push(' ');
                line.push_str(content);
                line.push_str(&" ".repeat(pad + 1));
                line.push('|');
            }
            writeln!(self.writer, "{line}")?;
        }
        Ok(())
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn format_entry(&mut self, word: &str, stats: &WordStats) -> Result<()> {
        self.rows.push([
            word.to_string(),
            stats.count.to_string(),
            stats.documents.join(" "),
            stats.sentences.join(SENTENCE_SEPARATOR),
        ]);
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        let widths = self.column_widths();

        self.write_separator(&widths)?;
        let headers = HEADERS.map(String::from);
        self.write_row(&headers, &widths)?;
        self.write_separator(&widths)?;
        let rows = std::mem::take(&mut self.rows);
        for row in &rows {
            self.write_row(row, &widths)?;
        }
        self.write_separator(&widths)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(count: usize, documents: &[&str], sentences: &[&str]) -> WordStats {
        WordStats {
            count,
            documents: documents.iter().map(|s| s.to_string()).collect(),
            sentences: sentences.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn render(entries: &[(&str, WordStats)]) -> String {
        let mut formatter = TextFormatter::new(Vec::new());
        for (word, stats) in entries {
            formatter.format_entry(word, stats).unwrap();
        }
        formatter.finish().unwrap();
        String::from_utf8(formatter.writer).unwrap()
    }

    #[test]
    fn empty_summary_renders_header_only_table() {
        let out = render(&[]);
        assert!(out.contains("| Word "));
        assert!(out.contains("| Count "));
        assert!(out.contains("| Documents "));
        assert!(out.contains("| Sentences "));
        // header block plus closing border, nothing else
        assert_eq!(out.lines().count(), 4);
    }

    #[test]
    fn single_row_is_aligned() {
        let out = render(&[(
            "Alpine",
            stats(2, &["doc1.txt"], &["Welcome to The Alpine Club"]),
        )]);
        assert!(out.contains("| Alpine "));
        assert!(out.contains("| 2 "));
        assert!(out.contains("| doc1.txt "));
        assert!(out.contains("| Welcome to The Alpine Club "));
        // every line has the same display width
        let widths: Vec<usize> = out.lines().map(|l| l.chars().count()).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn multiple_sentences_span_multiple_lines() {
        let out = render(&[(
            "Economic",
            stats(
                2,
                &["doc1.txt", "doc2.txt"],
                &["measure economic strength", "engine of economic growth"],
            ),
        )]);
        assert!(out.contains("measure economic strength |"));
        assert!(out.contains("engine of economic growth"));
        assert!(out.contains("doc1.txt doc2.txt"));
    }
}

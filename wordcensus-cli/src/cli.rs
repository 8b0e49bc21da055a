//! Command-line argument handling and report execution

use crate::error::{CliError, CliResult};
use crate::output::{JsonFormatter, MarkdownFormatter, OutputFormatter, TextFormatter};
use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use wordcensus_core::{find_documents, load_words_of_interest, summarize, Summary};

/// Scan a directory of plain-text documents and report, per word, the total
/// occurrence count, the documents it appeared in, and the sentences
/// containing it.
#[derive(Debug, Parser)]
#[command(name = "wordcensus", version)]
pub struct Cli {
    /// Directory containing the documents to scan
    #[arg(short, long, value_name = "DIR")]
    pub dir: PathBuf,

    /// Document file extension (accepted forms: txt, .txt, *.txt)
    #[arg(short, long, value_name = "EXT", default_value = "txt")]
    pub ext: String,

    /// Words-of-interest file, one word per line (default: report every word)
    #[arg(short, long, value_name = "FILE")]
    pub words: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Bordered plain-text table
    Text,
    /// JSON array of report rows
    Json,
    /// Markdown pipe table
    Markdown,
}

impl Cli {
    /// Execute the report run
    pub fn execute(&self) -> CliResult<()> {
        self.init_logging();

        log::info!("Starting corpus scan");
        log::debug!("Arguments: {:?}", self);

        if !self.dir.is_dir() {
            return Err(CliError::DirectoryNotFound(self.dir.display().to_string()).into());
        }

        let files = find_documents(&self.dir, &self.ext)
            .with_context(|| format!("Failed to discover documents in {}", self.dir.display()))?;
        log::info!("Discovered {} document(s)", files.len());

        let summary = summarize(&files).context("Failed to summarize corpus")?;
        log::info!("Summary holds {} distinct word(s)", summary.len());

        let words_of_interest = match &self.words {
            Some(path) => Some(load_words_of_interest(path).map_err(|e| {
                CliError::WordListError(format!("{}: {e}", path.display()))
            })?),
            None => None,
        };

        let writer = self.open_writer()?;
        let mut formatter = self.make_formatter(writer);
        render_report(formatter.as_mut(), &summary, words_of_interest.as_deref())
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .init();
        }
    }

    fn open_writer(&self) -> Result<Box<dyn Write>> {
        match &self.output {
            Some(path) => {
                let file = File::create(path).with_context(|| {
                    format!("Failed to create output file {}", path.display())
                })?;
                Ok(Box::new(file))
            }
            None => Ok(Box::new(io::stdout())),
        }
    }

    fn make_formatter(&self, writer: Box<dyn Write>) -> Box<dyn OutputFormatter> {
        match self.format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        }
    }
}

/// Feed the summary through a formatter, optionally restricted to a word list.
///
/// A requested word that never appeared in any document fails the run; the
/// summary lookup raises the error rather than padding the report with zeros.
fn render_report(
    formatter: &mut dyn OutputFormatter,
    summary: &Summary,
    words_of_interest: Option<&[String]>,
) -> Result<()> {
    match words_of_interest {
        Some(words) => {
            for word in words {
                let stats = summary.require(word)?;
                formatter.format_entry(word, stats)?;
            }
        }
        None => {
            for (word, stats) in summary.iter() {
                formatter.format_entry(word, stats)?;
            }
        }
    }
    formatter.finish()
}

//! wordcensus binary entry point

use clap::Parser;
use wordcensus_cli::Cli;

fn main() -> anyhow::Result<()> {
    Cli::parse().execute()
}

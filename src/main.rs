//! CLI entry point for the grid image splitter

use clap::Parser;
use gridsplit::io::cli::{Cli, FileProcessor};

fn main() -> gridsplit::Result<()> {
    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()
}

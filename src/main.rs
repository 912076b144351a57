//! CLI entry point for the straight-line shape cutter

use clap::Parser;
use mirrorcut::io::cli::{Cli, FileProcessor};

fn main() -> mirrorcut::Result<()> {
    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()
}

//! CLI entry point for the exhaustive rectangle packer

use clap::Parser;
use rectpack::io::cli::{Cli, PuzzleProcessor};

fn main() -> rectpack::Result<()> {
    let cli = Cli::parse();
    let processor = PuzzleProcessor::new(cli);
    processor.install_logger();
    processor.process()
}

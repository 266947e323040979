//! CLI entry point for the pointillist renderer

use clap::Parser;
use pointillize::io::cli::{Cli, FileProcessor};

fn main() -> pointillize::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()
}

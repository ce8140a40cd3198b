//! CLI entry point for growing images from sample color statistics

use clap::Parser;
use markov_painting::io::cli::{Cli, FileProcessor};

fn main() -> markov_painting::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()
}

//! CLI entry point for maze generation

use clap::Parser;
use mazebuilder::io::cli::{Cli, RunProcessor};
use mazebuilder::io::logging::init_logging;

fn main() -> mazebuilder::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let mut processor = RunProcessor::new(cli);
    tracing::info!(seed = processor.seed(), "starting generation");
    processor.process()?;
    Ok(())
}

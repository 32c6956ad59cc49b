//! CLI entry point for the edge-matching tile puzzle solver

use clap::Parser;
use edgetile::io::cli::{Cli, PuzzleRunner};

fn main() -> edgetile::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();
    let runner = PuzzleRunner::new(cli);
    runner.run().map(|_| ())
}

//! CLI entry point for generating and editing isometric city grids

use clap::Parser;
use citygrid::io::cli::{Cli, CityRunner};

fn main() -> citygrid::Result<()> {
    let cli = Cli::parse();
    let default_filter = if cli.quiet { "warn" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let runner = CityRunner::new(cli);
    runner.run()?;
    Ok(())
}

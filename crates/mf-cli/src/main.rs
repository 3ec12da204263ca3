//! migfmt CLI - upgrade legacy schema_migrations tables to the per-migration format

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod context;
mod logging;

use cli::Cli;
use commands::{cleanup, ensure, ls, status};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.global.verbose);

    match &cli.command {
        cli::Commands::Ensure(args) => ensure::execute(args, &cli.global),
        cli::Commands::Cleanup => cleanup::execute(&cli.global),
        cli::Commands::Status(args) => status::execute(args, &cli.global),
        cli::Commands::Ls(args) => ls::execute(args, &cli.global),
    }
}

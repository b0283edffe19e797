//! intelcard - CLI entry point

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use commands::Context;
use intelcard::Config;

/// Environment variable holding the log filter (e.g. `intelcard=debug`).
const LOG_ENV: &str = "INTELCARD_LOG";

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // Logs go to stderr; stdout carries command output
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

#[cfg(not(tarpaulin_include))]
fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let format = cli.format.unwrap_or(config.output.format);
    let ctx = Context { config, format };

    match cli.command {
        Commands::Card { file } => commands::card::handle(&file, &ctx),
        Commands::Minutes { file, part } => commands::minutes::handle(&file, part, &ctx),
        Commands::Split { file } => commands::split::handle(&file, &ctx),
        Commands::Decode { file, copy } => commands::decode::handle(&file, copy, &ctx),
        Commands::Meeting { internal, external } => {
            commands::meeting::handle(&internal, &external, &ctx)
        }
        Commands::Batch { kind, files } => commands::batch::handle(kind, &files, &ctx),
        Commands::Rules => commands::rules::handle(&ctx),
    }
}

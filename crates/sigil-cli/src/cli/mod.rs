//! CLI argument parsing and command dispatch.

pub mod args;
pub mod commands;

use anyhow::Result;
use args::{Cli, Commands};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Run the CLI application.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let ctx = commands::Context {
        verbose: cli.verbose,
    };

    match cli.command {
        Commands::Collect(args) => commands::collect::execute(&ctx, args).await,
        Commands::Submit(args) => commands::submit::execute(&ctx, args).await,
    }
}

/// Logging goes to stderr so piped JSON output stays clean.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

//! Envy CLI - configuration file templates with per-environment variables
//!
//! This is the main entry point for the Envy command-line interface.

mod cli;
mod commands;
mod output;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI args
    let cli = Cli::parse();

    // Initialize tracing
    init_tracing(cli.verbose, cli.quiet);

    // Run command
    match cli.command {
        Commands::Init(args) => commands::init::run(args, cli.dir.as_deref()).await,
        Commands::Add(args) => commands::add::run(args, cli.dir.as_deref()).await,
        Commands::List(args) => commands::list::run(args, cli.dir.as_deref()).await,
        Commands::Vars(args) => commands::vars::run(args, cli.dir.as_deref()).await,
        Commands::Check(args) => commands::check::run(args, cli.dir.as_deref()).await,
        Commands::Generate(args) => commands::generate::run(args, cli.dir.as_deref()).await,
    }
}

/// Initialize tracing with appropriate verbosity
fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("info"),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

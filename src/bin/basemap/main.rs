//! Basemap CLI - a workspace manager for geospatial analysis projects

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Parse CLI
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("basemap=debug")
    } else {
        EnvFilter::new("basemap=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    // Execute command
    match cli.command {
        Commands::New(args) => commands::new::execute(args),
        Commands::Init(args) => commands::init::execute(args),
        Commands::Ensure(args) => commands::ensure::execute(args),
        Commands::Ls(args) => commands::ls::execute(args),
        Commands::Convert(args) => commands::convert::execute(args),
        Commands::Status(args) => commands::status::execute(args),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}

//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// Basemap - A workspace manager for geospatial analysis projects
#[derive(Parser)]
#[command(name = "basemap")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new basemap workspace
    New(NewArgs),

    /// Initialize a basemap workspace in an existing directory
    Init(InitArgs),

    /// Create any missing workspace directories
    Ensure(EnsureArgs),

    /// List available vector files
    Ls(LsArgs),

    /// Load a vector file and save it under data/processed
    Convert(ConvertArgs),

    /// Show the state of the workspace tree
    Status(StatusArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args)]
pub struct NewArgs {
    /// Project name
    pub name: String,

    /// Directory to create the workspace in (defaults to name)
    #[arg(long)]
    pub path: Option<PathBuf>,
}

#[derive(Args)]
pub struct InitArgs {
    /// Project name (defaults to directory name)
    #[arg(long)]
    pub name: Option<String>,

    /// Directory to initialize (defaults to current directory)
    pub path: Option<PathBuf>,
}

#[derive(Args)]
pub struct EnsureArgs {}

#[derive(Args)]
pub struct LsArgs {
    /// Print absolute paths instead of root-relative ones
    #[arg(long)]
    pub absolute: bool,
}

#[derive(Args)]
pub struct ConvertArgs {
    /// Filename to load from the raw vector directories
    pub filename: String,

    /// Sub-format directory to load from (shapefile or geojson);
    /// probes all vector directories when omitted
    #[arg(long)]
    pub from: Option<String>,

    /// Output format (shapefile or geojson); falls back to the manifest,
    /// then settings, then geojson
    #[arg(long)]
    pub to: Option<String>,

    /// Output name (defaults to the input file stem)
    #[arg(long)]
    pub out: Option<String>,
}

#[derive(Args)]
pub struct StatusArgs {}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

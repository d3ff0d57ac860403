//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use logsift_query::StrategyKind;
use std::path::PathBuf;

/// logsift - compile log filters into Elasticsearch queries
#[derive(Parser, Debug)]
#[command(name = "logsift")]
#[command(author = "Pegasus Heavy Industries LLC")]
#[command(version)]
#[command(about = "logsift - compile log filters into Elasticsearch queries", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build a boolean query from filter expressions
    Build(BuildArgs),

    /// Write a default logsift.toml
    Init(InitArgs),

    /// Display version information
    Version,
}

// =============================================================================
// Build Command
// =============================================================================

/// Arguments for the `build` command
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Match strategy: all, any or none (overrides the config file)
    #[arg(short, long, value_parser = clap::value_parser!(StrategyKind))]
    pub strategy: Option<StrategyKind>,

    /// Filter expression; repeat for several entities
    #[arg(short, long = "expr", value_name = "EXPR")]
    pub exprs: Vec<String>,

    /// JSON file holding an array of entities (`-` reads stdin)
    #[arg(long, value_name = "FILE")]
    pub entities: Option<PathBuf>,

    /// Path to config file (defaults to ./logsift.toml when present)
    #[arg(short, long, env = "LOGSIFT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print the query on a single line
    #[arg(long)]
    pub compact: bool,
}

// =============================================================================
// Init Command
// =============================================================================

/// Arguments for the `init` command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to write logsift.toml into
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Default match strategy written to the config
    #[arg(short, long, default_value = "none", value_parser = clap::value_parser!(StrategyKind))]
    pub strategy: StrategyKind,

    /// Overwrite an existing config file
    #[arg(short, long)]
    pub force: bool,
}

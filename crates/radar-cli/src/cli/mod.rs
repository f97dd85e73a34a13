//! Command-line interface definition for radar.
//!
//! # Command Structure
//!
//! - `radar graph` - Scan a repository, build the import graph, print a summary
//! - `radar impact` - List the files that depend on a set of changed files

mod commands;
mod validation;

use clap::Parser;
use std::path::PathBuf;

pub use commands::{Command, GraphArgs, ImpactArgs, ScanArgs};
pub use validation::{parse_glob, parse_positive};

/// Radar - file dependency graphs and change blast radius
#[derive(Parser, Debug)]
#[command(
    name = "radar",
    version,
    about = "File dependency graphs and change blast radius for Python and JS/TS repositories",
    long_about = "Radar scans a repository, extracts import statements from Python and\n\
                  JavaScript/TypeScript files, resolves them to repository files and builds\n\
                  a file-level dependency graph. The graph can be exported, or walked backwards\n\
                  from a set of changed files to estimate what a change touches."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Path to a config file (defaults to radar.toml in the repository root)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

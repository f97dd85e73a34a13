use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::cli::validation::{parse_glob, parse_positive};

/// Available radar subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build the dependency graph of a repository
    ///
    /// Scans the repository, resolves every import it can and prints a
    /// summary. Use --json or --dot to write the graph itself.
    Graph(GraphArgs),

    /// Estimate the blast radius of changed files
    ///
    /// Builds the graph and walks it backwards from the given files, listing
    /// every file that imports them directly or transitively together with
    /// the depth at which it was reached.
    Impact(ImpactArgs),
}

/// Repository scanning options shared by all commands.
///
/// Every field is optional on the command line so that values from
/// radar.toml or RADAR_* variables are only overridden when a flag is given.
#[derive(Args, Debug, Clone, Default)]
pub struct ScanArgs {
    /// Repository root to scan
    #[arg(short, long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Only scan paths matching this glob (repeatable)
    ///
    /// A glob without '*' is treated as a directory: `--include src`
    /// scans everything under src/.
    #[arg(short, long = "include", value_name = "GLOB", value_parser = parse_glob)]
    pub include: Vec<String>,

    /// Skip paths matching this glob (repeatable)
    #[arg(short, long = "exclude", value_name = "GLOB", value_parser = parse_glob)]
    pub exclude: Vec<String>,

    /// Maximum number of files to scan (clamped to 200..=50000)
    #[arg(long, value_name = "N")]
    pub max_files: Option<usize>,

    /// Number of worker threads (defaults to one per core)
    #[arg(short, long, value_name = "N", value_parser = parse_positive)]
    pub jobs: Option<usize>,

    /// Scan files even if .gitignore excludes them
    #[arg(long)]
    pub no_gitignore: bool,

    /// Log scan and build statistics
    #[arg(long)]
    pub debug: bool,
}

/// Arguments for the graph command
#[derive(Args, Debug, Clone)]
pub struct GraphArgs {
    #[command(flatten)]
    pub scan: ScanArgs,

    /// Write the graph as JSON ({ nodes, edges }) to this file
    #[arg(long, value_name = "PATH")]
    pub json: Option<PathBuf>,

    /// Write the graph in Graphviz DOT format to this file
    #[arg(long, value_name = "PATH")]
    pub dot: Option<PathBuf>,
}

/// Arguments for the impact command
#[derive(Args, Debug, Clone)]
pub struct ImpactArgs {
    /// Changed files, relative to the repository root
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<String>,

    /// How many import hops to follow (clamped to 1..=12)
    #[arg(short = 'd', long, value_name = "N")]
    pub max_depth: Option<usize>,

    /// Print the report as JSON on stdout
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub scan: ScanArgs,
}

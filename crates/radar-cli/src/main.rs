//! Radar CLI - file dependency graphs and change blast radius.
//!
//! This is the main entry point for the `radar` binary. It handles command-line
//! argument parsing, logging initialization, and command dispatch.

use clap::Parser;
use miette::Result;
use radar_cli::{cli, commands, error, logger, ui};

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();

    let no_color = args.no_color || !logger::should_use_colors();
    logger::init_logger(args.verbose, args.quiet, no_color);
    ui::init_colors(no_color);

    let config_path = args.config.as_deref();
    let result = match args.command {
        cli::Command::Graph(graph_args) => commands::graph_execute(graph_args, config_path).await,
        cli::Command::Impact(impact_args) => {
            commands::impact_execute(impact_args, config_path).await
        }
    };

    result.map_err(error::cli_error_to_miette)
}

//! Miette diagnostic conversion for CLI errors.

use miette::Report;

use crate::error::CliError;

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Config(e) => miette::miette!("Configuration error: {}", e),
        CliError::Graph(radar_graph::Error::Scan(msg)) => miette::miette!(
            "Repository scan failed: {}\n\nHint: Check --root and your include/exclude globs",
            msg
        ),
        CliError::Graph(radar_graph::Error::WorkerPool(msg)) => miette::miette!(
            "Could not start worker threads: {}\n\nHint: Lower --jobs or leave it unset",
            msg
        ),
        _ => miette::miette!("{}", err),
    }
}

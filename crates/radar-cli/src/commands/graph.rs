//! Graph command implementation.

use crate::cli::GraphArgs;
use crate::commands::utils::{self, LoadedGraph};
use crate::config::ConfigOverrides;
use crate::error::{Result, ResultExt};
use crate::ui;
use std::path::Path;

/// Execute the graph command.
///
/// # Process
///
/// 1. Load configuration and build the graph
/// 2. Print a summary to stderr
/// 3. Write the JSON and DOT exports when requested
pub async fn execute(args: GraphArgs, config_path: Option<&Path>) -> Result<()> {
    let overrides = ConfigOverrides::from_scan_args(&args.scan);
    let loaded = utils::load_graph(&overrides, config_path).await?;

    ui::print_graph_summary(&loaded.scan, &loaded.result, loaded.elapsed);
    if loaded.config.debug {
        report_dropped_imports(&loaded);
    }

    if let Some(path) = &args.json {
        let json = loaded.result.graph.to_json().context("Failed to serialize graph")?;
        utils::write_output(path, json).await?;
        ui::success(&format!("Wrote graph JSON to {}", path.display()));
    }

    if let Some(path) = &args.dot {
        utils::write_output(path, loaded.result.graph.to_dot_format()).await?;
        ui::success(&format!("Wrote graph DOT to {}", path.display()));
    }

    Ok(())
}

fn report_dropped_imports(loaded: &LoadedGraph) {
    for dep in &loaded.result.externals {
        ui::info(&format!(
            "external {} ({} importers)",
            dep.specifier,
            dep.importers.len()
        ));
    }
    for import in &loaded.result.unresolved {
        ui::info(&format!("unresolved {} in {}", import.specifier, import.importer));
    }
}

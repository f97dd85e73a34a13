//! Impact command implementation.
//!
//! Walks the graph backwards from the changed files and lists every file
//! that imports one of them, directly or through other files, up to the
//! configured depth.

use crate::cli::ImpactArgs;
use crate::commands::utils;
use crate::config::ConfigOverrides;
use crate::error::Result;
use crate::ui;
use radar_graph::{FilePath, Reach};
use serde::Serialize;
use std::path::Path;

/// JSON shape of `radar impact --json`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ImpactReport<'a> {
    changed: &'a [FilePath],
    /// Changed files that are not part of the graph.
    missing: &'a [FilePath],
    max_depth: usize,
    impacted: &'a [Reach],
    total: usize,
}

/// Execute the impact command.
pub async fn execute(args: ImpactArgs, config_path: Option<&Path>) -> Result<()> {
    let overrides = ConfigOverrides::from_scan_args(&args.scan).with_max_depth(args.max_depth);
    let loaded = utils::load_graph(&overrides, config_path).await?;
    let graph = &loaded.result.graph;

    let mut changed: Vec<FilePath> = Vec::with_capacity(args.files.len());
    for raw in &args.files {
        let id = utils::file_id(raw, &loaded.root)?;
        if !changed.contains(&id) {
            changed.push(id);
        }
    }

    let (known, missing): (Vec<FilePath>, Vec<FilePath>) = changed
        .into_iter()
        .partition(|path| graph.contains(path.as_str()));
    for path in &missing {
        ui::warning(&format!("Changed file is not part of the graph: {path}"));
    }

    let max_depth = loaded.config.max_depth;
    let impacted = graph.dependents_within(&known, max_depth);

    if args.json {
        let report = ImpactReport {
            changed: &known,
            missing: &missing,
            max_depth,
            impacted: &impacted,
            total: impacted.len(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for reach in &impacted {
        println!("{:>3}  {}", reach.depth, reach.path);
    }
    ui::print_impact_summary(known.len(), impacted.len(), max_depth, loaded.elapsed);

    Ok(())
}

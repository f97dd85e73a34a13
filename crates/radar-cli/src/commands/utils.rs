//! Shared utilities for command implementations.

use crate::config::{ConfigOverrides, RadarConfig};
use crate::error::{CliError, Result, ResultExt};
use crate::ui;
use radar_graph::{BuildResult, FilePath, GraphBuilder, NativeRuntime, ScanOutcome, scan_repository};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::info;

/// Resolve a path relative to a working directory.
///
/// If the path is absolute, returns it unchanged. Otherwise, joins it with
/// the working directory.
pub fn resolve_path(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else if path == Path::new(".") {
        cwd.to_path_buf()
    } else {
        cwd.join(path)
    }
}

/// Validate that the repository root is an existing directory.
pub fn validate_root(root: &Path) -> Result<()> {
    if !root.exists() {
        return Err(CliError::FileNotFound(root.to_path_buf()));
    }

    if !root.is_dir() {
        return Err(CliError::InvalidArgument(format!(
            "Repository root is not a directory: {}",
            root.display()
        )));
    }

    Ok(())
}

/// Everything a command needs after the graph has been built.
#[derive(Debug)]
pub struct LoadedGraph {
    /// Validated configuration.
    pub config: RadarConfig,
    /// Absolute repository root.
    pub root: PathBuf,
    pub scan: ScanOutcome,
    pub result: BuildResult,
    /// Time spent scanning and building.
    pub elapsed: Duration,
}

/// Load configuration, scan the repository and build its graph.
///
/// Clamp warnings from validation are printed before the scan starts. The
/// scan and build run on the blocking pool since both are CPU and disk bound.
pub async fn load_graph(overrides: &ConfigOverrides, config_path: Option<&Path>) -> Result<LoadedGraph> {
    let mut config = RadarConfig::load(overrides, config_path)?;
    for warning in config.validate()? {
        ui::warning(&warning);
    }

    let cwd = std::env::current_dir()?;
    let root = resolve_path(&config.root, &cwd);
    validate_root(&root)?;
    ui::debug(&format!("Repository root: {}", root.display()));

    let started = Instant::now();
    let (scan, result) = tokio::task::spawn_blocking({
        let root = root.clone();
        let config = config.clone();
        move || scan_and_build(&root, &config)
    })
    .await
    .map_err(|e| CliError::Custom(format!("Graph build task failed: {e}")))??;

    Ok(LoadedGraph {
        config,
        root,
        scan,
        result,
        elapsed: started.elapsed(),
    })
}

fn scan_and_build(root: &Path, config: &RadarConfig) -> radar_graph::Result<(ScanOutcome, BuildResult)> {
    let scan = scan_repository(root, &config.scan_options())?;
    info!("Scanned {} source files under {}", scan.files.len(), root.display());

    let result = GraphBuilder::new(NativeRuntime::new(root))
        .debug(config.debug)
        .jobs(config.jobs)
        .build(scan.files.iter().cloned())?;

    Ok((scan, result))
}

/// Turn a user-supplied file argument into a graph identifier.
///
/// Relative arguments are taken as repository-relative; absolute ones must
/// lie under `root`.
pub fn file_id(raw: &str, root: &Path) -> Result<FilePath> {
    let path = Path::new(raw);
    let id = if path.is_absolute() {
        FilePath::from_relative(path, root)
    } else {
        FilePath::new(raw)
    };
    id.map_err(|e| CliError::InvalidArgument(format!("'{raw}': {e}")))
}

/// Write command output, creating parent directories as needed.
pub async fn write_output(path: &Path, contents: String) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await.with_path(parent)?;
    }
    tokio::fs::write(path, contents)
        .await
        .with_path(path)
        .with_hint("Check that the output location is writable")
}

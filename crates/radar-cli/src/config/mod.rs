//! Configuration for radar with multi-source loading.
//!
//! Merges settings from CLI args, environment variables, and `radar.toml`.
//! Priority: CLI > Environment > File > Defaults

mod defaults;
mod loading;
mod tests;
mod validation;

use radar_graph::ScanOptions;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use defaults::*;
pub use loading::CONFIG_FILE_NAME;

/// Radar configuration - loaded from radar.toml, RADAR_* variables or CLI args.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadarConfig {
    /// Repository root to scan
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Include globs; empty means everything
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub include: Vec<String>,

    /// Exclude globs
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<String>,

    /// Scan cap
    #[serde(default = "default_max_files")]
    pub max_files: usize,

    /// Hops followed by `impact`
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    /// Worker threads; rayon's default when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jobs: Option<usize>,

    /// Honor .gitignore and friends while scanning
    #[serde(default = "default_respect_gitignore")]
    pub respect_gitignore: bool,

    /// Log scan capping and build statistics
    #[serde(default)]
    pub debug: bool,
}

/// Values given explicitly on the command line.
///
/// Unset fields are skipped when serialized, so merging this on top of the
/// other sources only replaces what the user actually passed.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_files: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jobs: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub respect_gitignore: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<bool>,
}

impl ConfigOverrides {
    /// Collect overrides from the shared scan flags.
    pub fn from_scan_args(args: &crate::cli::ScanArgs) -> Self {
        Self {
            root: args.root.clone(),
            include: (!args.include.is_empty()).then(|| args.include.clone()),
            exclude: (!args.exclude.is_empty()).then(|| args.exclude.clone()),
            max_files: args.max_files,
            max_depth: None,
            jobs: args.jobs,
            respect_gitignore: args.no_gitignore.then_some(false),
            debug: args.debug.then_some(true),
        }
    }

    /// Add the `--max-depth` flag.
    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for RadarConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            include: Vec::new(),
            exclude: Vec::new(),
            max_files: default_max_files(),
            max_depth: default_max_depth(),
            jobs: None,
            respect_gitignore: default_respect_gitignore(),
            debug: false,
        }
    }
}

impl RadarConfig {
    /// Scanner options derived from this configuration.
    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            include: self.include.clone(),
            exclude: self.exclude.clone(),
            max_files: self.max_files,
            respect_gitignore: self.respect_gitignore,
            debug: self.debug,
        }
    }
}

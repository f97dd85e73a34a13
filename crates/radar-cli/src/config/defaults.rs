use std::path::PathBuf;

/// Default scan cap.
pub const DEFAULT_MAX_FILES: usize = radar_graph::DEFAULT_MAX_FILES;
/// Smallest accepted scan cap.
pub const MIN_MAX_FILES: usize = 200;
/// Largest accepted scan cap.
pub const MAX_MAX_FILES: usize = 50_000;

/// Default traversal depth for `impact`.
pub const DEFAULT_MAX_DEPTH: usize = 4;
/// Smallest accepted traversal depth.
pub const MIN_MAX_DEPTH: usize = 1;
/// Largest accepted traversal depth.
pub const MAX_MAX_DEPTH: usize = 12;

pub fn default_root() -> PathBuf {
    PathBuf::from(".")
}

pub fn default_max_files() -> usize {
    DEFAULT_MAX_FILES
}

pub fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

pub fn default_respect_gitignore() -> bool {
    true
}

//! # radar-graph
//!
//! File-level dependency graphs for Python and JavaScript/TypeScript
//! repositories, built from raw source text.
//!
//! ## Overview
//!
//! The crate answers one question cheaply: *which files import which?* It
//! does so without a parser. Import statements are recognized by a small set
//! of text patterns, resolved against the repository's own file set using
//! each ecosystem's module rules, and recorded in a graph that can be walked
//! in both directions.
//!
//! ```text
//!  scan_repository ──▶ candidates ──▶ GraphBuilder
//!                                         │
//!                   ┌─────────────────────┼─────────────────────┐
//!                   ▼                     ▼                     ▼
//!             Runtime::read       extract_imports        Resolver::resolve
//!                                                               │
//!                                     Local / External / Unresolved
//!                                                               │
//!                                                               ▼
//!                                            DependencyGraph + BuildStats
//! ```
//!
//! Nothing in a build is fatal at the file level: an unreadable file is
//! skipped, an import that cannot be matched is counted and dropped.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use radar_graph::{GraphBuilder, NativeRuntime, ScanOptions, scan_repository};
//!
//! # fn main() -> radar_graph::Result<()> {
//! let root = Path::new(".");
//! let scan = scan_repository(root, &ScanOptions::default())?;
//!
//! let result = GraphBuilder::new(NativeRuntime::new(root))
//!     .debug(true)
//!     .build(scan.files)?;
//!
//! for path in result.graph.nodes() {
//!     println!("{path}: {} dependents", result.graph.in_neighbors(path.as_str()).len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod external_dep;
pub mod extract;
mod file_path;
pub mod graph;
mod language;
pub mod resolve;
pub mod runtime;
pub mod scan;
pub mod statistics;

pub use builder::{BuildResult, GraphBuilder, build_graph};
pub use external_dep::{ExternalDependency, UnresolvedImport};
pub use extract::{extract_ecmascript_imports, extract_imports, extract_python_imports};
pub use file_path::{FilePath, FilePathError};
pub use graph::{DependencyGraph, GraphEdge, GraphExport, Reach};
pub use language::{ECMASCRIPT_EXTENSIONS, LanguageFamily, PYTHON_EXTENSION};
pub use resolve::{ModuleIndex, Resolution, Resolver};
pub use runtime::{MemoryRuntime, NativeRuntime, Runtime, RuntimeError, RuntimeResult};
pub use scan::{DEFAULT_MAX_FILES, ScanOptions, ScanOutcome, scan_repository};
pub use statistics::BuildStats;

/// Error type for graph operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The repository could not be scanned.
    #[error("Scan failed: {0}")]
    Scan(String),

    /// A path could not be turned into a graph identifier.
    #[error("Invalid path: {0}")]
    InvalidPath(#[from] FilePathError),

    /// The worker pool could not be created.
    #[error("Worker pool error: {0}")]
    WorkerPool(String),

    /// Graph export could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for graph operations.
pub type Result<T> = std::result::Result<T, Error>;

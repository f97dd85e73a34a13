//! File-level dependency graph.
//!
//! A general directed graph keyed by [`FilePath`](crate::FilePath). Forward
//! edges point from importer to imported file; the reverse map answers "who
//! imports this file" in constant time. Both maps are only touched through
//! the mutation methods, which keep them exact mirrors of each other.

mod mutations;
mod queries;
mod serialization;
mod store;
mod traversal;

pub use serialization::{GraphEdge, GraphExport};
pub use store::DependencyGraph;
pub use traversal::Reach;

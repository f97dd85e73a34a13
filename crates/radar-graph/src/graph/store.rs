use indexmap::{IndexMap, IndexSet};

use crate::FilePath;

pub(super) type EdgeMap = IndexMap<FilePath, IndexSet<FilePath>>;

/// Bidirectional file dependency graph.
///
/// Every node has an entry (possibly empty) in both edge maps, and every
/// path stored as an edge endpoint is itself a node. Iteration follows
/// insertion order, so a graph built from the same inputs always lists its
/// nodes and edges the same way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyGraph {
    /// Importer -> imported files.
    pub(super) forward: EdgeMap,
    /// Imported file -> importers.
    pub(super) reverse: EdgeMap,
}

impl DependencyGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a graph with every path seeded as an isolated node.
    pub fn with_nodes<I>(paths: I) -> Self
    where
        I: IntoIterator<Item = FilePath>,
    {
        let mut graph = Self::new();
        for path in paths {
            graph.add_node(path);
        }
        graph
    }
}

//! Query methods for DependencyGraph.
//!
//! Unknown paths are never an error: they have no neighbors and degree `0`.

use super::store::DependencyGraph;
use crate::FilePath;

impl DependencyGraph {
    /// Files imported by `path`, in insertion order.
    pub fn out_neighbors(&self, path: &str) -> Vec<&FilePath> {
        self.forward
            .get(path)
            .map(|targets| targets.iter().collect())
            .unwrap_or_default()
    }

    /// Files importing `path`, in insertion order.
    pub fn in_neighbors(&self, path: &str) -> Vec<&FilePath> {
        self.reverse
            .get(path)
            .map(|sources| sources.iter().collect())
            .unwrap_or_default()
    }

    /// `|out_neighbors| + |in_neighbors|`; a self-loop counts on both sides.
    pub fn degree(&self, path: &str) -> usize {
        self.out_degree(path) + self.in_degree(path)
    }

    pub fn out_degree(&self, path: &str) -> usize {
        self.forward.get(path).map_or(0, |targets| targets.len())
    }

    pub fn in_degree(&self, path: &str) -> usize {
        self.reverse.get(path).map_or(0, |sources| sources.len())
    }

    /// Total number of distinct directed edges.
    pub fn edge_count(&self) -> usize {
        self.forward.values().map(|targets| targets.len()).sum()
    }

    /// Number of known files.
    pub fn node_count(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// Whether `path` is a node of the graph.
    pub fn contains(&self, path: &str) -> bool {
        self.forward.contains_key(path)
    }

    /// Whether the edge `from -> to` exists.
    pub fn has_edge(&self, from: &str, to: &str) -> bool {
        self.forward
            .get(from)
            .is_some_and(|targets| targets.contains(to))
    }

    /// All nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &FilePath> {
        self.forward.keys()
    }

    /// All edges as `(from, to)` pairs, grouped by importer.
    pub fn edges(&self) -> impl Iterator<Item = (&FilePath, &FilePath)> {
        self.forward
            .iter()
            .flat_map(|(from, targets)| targets.iter().map(move |to| (from, to)))
    }

    /// Nodes with no edges in either direction.
    pub fn isolated_nodes(&self) -> Vec<&FilePath> {
        self.nodes().filter(|node| self.degree(node.as_str()) == 0).collect()
    }
}

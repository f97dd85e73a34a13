//! Mutation methods for DependencyGraph.

use super::store::DependencyGraph;
use crate::FilePath;

impl DependencyGraph {
    /// Ensure `path` is a node. Idempotent.
    pub fn add_node(&mut self, path: FilePath) {
        if self.forward.contains_key(&path) {
            return;
        }
        self.forward.entry(path.clone()).or_default();
        self.reverse.entry(path).or_default();
    }

    /// Add the directed edge `from -> to`, creating both endpoints as needed.
    ///
    /// Returns `true` when the edge was not present before. Self-loops are
    /// stored like any other edge.
    pub fn add_edge(&mut self, from: FilePath, to: FilePath) -> bool {
        self.add_node(from.clone());
        self.add_node(to.clone());

        let inserted = self
            .forward
            .get_mut(&from)
            .is_some_and(|targets| targets.insert(to.clone()));

        if let Some(sources) = self.reverse.get_mut(&to) {
            sources.insert(from);
        }

        inserted
    }

    /// Add edges from one importer to several targets.
    pub fn add_edges<I>(&mut self, from: &FilePath, targets: I)
    where
        I: IntoIterator<Item = FilePath>,
    {
        for target in targets {
            self.add_edge(from.clone(), target);
        }
    }

    /// Union `other` into this graph.
    ///
    /// Node and edge sets become the set-union of both graphs, so merging
    /// partial graphs built in any order yields the same node and edge sets.
    pub fn merge(&mut self, other: DependencyGraph) {
        for (from, targets) in other.forward {
            self.add_node(from.clone());
            for to in targets {
                self.add_edge(from.clone(), to);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(raw: &str) -> FilePath {
        FilePath::new(raw).unwrap()
    }

    #[test]
    fn add_node_is_idempotent() {
        let mut graph = DependencyGraph::new();
        graph.add_node(path("a.ts"));
        graph.add_node(path("a.ts"));
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn add_edge_creates_endpoints() {
        let mut graph = DependencyGraph::new();
        assert!(graph.add_edge(path("a.ts"), path("b.ts")));
        assert!(graph.contains("a.ts"));
        assert!(graph.contains("b.ts"));
        assert_eq!(graph.out_neighbors("a.ts"), vec![&path("b.ts")]);
        assert_eq!(graph.in_neighbors("b.ts"), vec![&path("a.ts")]);
    }

    #[test]
    fn add_edge_twice_keeps_sets() {
        let mut graph = DependencyGraph::new();
        assert!(graph.add_edge(path("a.ts"), path("b.ts")));
        assert!(!graph.add_edge(path("a.ts"), path("b.ts")));
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.out_neighbors("a.ts").len(), 1);
        assert_eq!(graph.in_neighbors("b.ts").len(), 1);
    }

    #[test]
    fn self_loop_is_stored() {
        let mut graph = DependencyGraph::new();
        graph.add_edge(path("a.py"), path("a.py"));
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.degree("a.py"), 2);
        assert_eq!(graph.out_neighbors("a.py"), graph.in_neighbors("a.py"));
    }

    #[test]
    fn merge_is_union() {
        let mut left = DependencyGraph::with_nodes([path("lonely.ts")]);
        left.add_edge(path("a.ts"), path("b.ts"));

        let mut right = DependencyGraph::new();
        right.add_edge(path("a.ts"), path("b.ts"));
        right.add_edge(path("b.ts"), path("c.ts"));

        left.merge(right);
        assert_eq!(left.node_count(), 4);
        assert_eq!(left.edge_count(), 2);
        assert_eq!(left.in_neighbors("c.ts"), vec![&path("b.ts")]);
    }
}

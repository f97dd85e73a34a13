//! Depth-bounded reach over the dependency graph.
//!
//! Breadth-first, so every reached file is reported with the smallest number
//! of edges separating it from the seed set. Cycles terminate because each
//! file is visited once.

use std::collections::VecDeque;

use indexmap::IndexMap;
use rustc_hash::FxHashSet as HashSet;
use serde::Serialize;

use super::store::{DependencyGraph, EdgeMap};
use crate::FilePath;

/// A file reached from the seed set and its distance from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reach {
    pub path: FilePath,
    pub depth: usize,
}

impl DependencyGraph {
    /// Files that transitively import any of `seeds`, up to `max_depth` hops.
    ///
    /// Seeds themselves are not reported. Seeds unknown to the graph are
    /// ignored. Results are ordered by depth, then discovery order.
    pub fn dependents_within<'a, I>(&self, seeds: I, max_depth: usize) -> Vec<Reach>
    where
        I: IntoIterator<Item = &'a FilePath>,
    {
        bfs(&self.reverse, seeds, max_depth)
    }

    /// Files transitively imported by any of `seeds`, up to `max_depth` hops.
    pub fn dependencies_within<'a, I>(&self, seeds: I, max_depth: usize) -> Vec<Reach>
    where
        I: IntoIterator<Item = &'a FilePath>,
    {
        bfs(&self.forward, seeds, max_depth)
    }
}

fn bfs<'a, I>(edges: &EdgeMap, seeds: I, max_depth: usize) -> Vec<Reach>
where
    I: IntoIterator<Item = &'a FilePath>,
{
    let mut visited: HashSet<&FilePath> = HashSet::default();
    let mut queue: VecDeque<(&FilePath, usize)> = VecDeque::new();

    for seed in seeds {
        if let Some((key, _)) = edges.get_key_value(seed.as_str()) {
            if visited.insert(key) {
                queue.push_back((key, 0));
            }
        }
    }

    let mut reached: IndexMap<&FilePath, usize> = IndexMap::new();
    while let Some((current, depth)) = queue.pop_front() {
        if depth == max_depth {
            continue;
        }
        let Some(next) = edges.get(current) else {
            continue;
        };
        for neighbor in next {
            if visited.insert(neighbor) {
                reached.insert(neighbor, depth + 1);
                queue.push_back((neighbor, depth + 1));
            }
        }
    }

    reached
        .into_iter()
        .map(|(path, depth)| Reach {
            path: path.clone(),
            depth,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(raw: &str) -> FilePath {
        FilePath::new(raw).unwrap()
    }

    /// `app -> service -> model`, `cli -> service`, `test -> app`.
    fn layered() -> DependencyGraph {
        let mut graph = DependencyGraph::new();
        graph.add_edge(path("app.py"), path("service.py"));
        graph.add_edge(path("service.py"), path("model.py"));
        graph.add_edge(path("cli.py"), path("service.py"));
        graph.add_edge(path("test_app.py"), path("app.py"));
        graph
    }

    fn summary(reach: &[Reach]) -> Vec<(&str, usize)> {
        reach.iter().map(|r| (r.path.as_str(), r.depth)).collect()
    }

    #[test]
    fn dependents_by_depth() {
        let graph = layered();
        let reach = graph.dependents_within([&path("model.py")], 4);
        assert_eq!(
            summary(&reach),
            vec![("service.py", 1), ("app.py", 2), ("cli.py", 2), ("test_app.py", 3)]
        );
    }

    #[test]
    fn depth_limit_stops_expansion() {
        let graph = layered();
        let reach = graph.dependents_within([&path("model.py")], 2);
        assert_eq!(summary(&reach), vec![("service.py", 1), ("app.py", 2), ("cli.py", 2)]);
        assert!(graph.dependents_within([&path("model.py")], 0).is_empty());
    }

    #[test]
    fn dependencies_follow_forward_edges() {
        let graph = layered();
        let reach = graph.dependencies_within([&path("test_app.py")], 10);
        assert_eq!(
            summary(&reach),
            vec![("app.py", 1), ("service.py", 2), ("model.py", 3)]
        );
    }

    #[test]
    fn cycles_terminate_and_seeds_are_excluded() {
        let mut graph = DependencyGraph::new();
        graph.add_edge(path("a.ts"), path("b.ts"));
        graph.add_edge(path("b.ts"), path("a.ts"));
        graph.add_edge(path("c.ts"), path("c.ts"));

        let reach = graph.dependents_within([&path("a.ts")], 12);
        assert_eq!(summary(&reach), vec![("b.ts", 1)]);
        assert!(graph.dependents_within([&path("c.ts")], 12).is_empty());
    }

    #[test]
    fn multiple_seeds_take_minimum_depth() {
        let graph = layered();
        let reach = graph.dependents_within([&path("model.py"), &path("app.py")], 4);
        assert_eq!(
            summary(&reach),
            vec![("service.py", 1), ("test_app.py", 1), ("cli.py", 2)]
        );
    }

    #[test]
    fn unknown_seed_is_ignored() {
        let graph = layered();
        assert!(graph.dependents_within([&path("ghost.py")], 4).is_empty());
    }
}

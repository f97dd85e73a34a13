//! Graph construction.
//!
//! A build runs in two phases. First the whole candidate set is seeded into
//! the graph and the [`Resolver`] is built, since any file may import any
//! other. Then every file is read, scanned and resolved independently on the
//! rayon pool; the per-file outcomes are applied to the graph in candidate
//! order, so two builds over the same inputs produce identical graphs.

use indexmap::{IndexMap, IndexSet};
use rayon::prelude::*;
use tracing::{debug, info, trace};

use crate::external_dep::{ExternalDependency, UnresolvedImport};
use crate::extract::extract_imports;
use crate::graph::DependencyGraph;
use crate::resolve::{Resolution, Resolver};
use crate::runtime::Runtime;
use crate::statistics::BuildStats;
use crate::{Error, FilePath, LanguageFamily, Result};

/// Final product of a build: the graph plus its counters.
#[derive(Debug, Clone, Default)]
pub struct BuildResult {
    pub graph: DependencyGraph,
    pub stats: BuildStats,
    /// Distinct external specifiers, in first-seen order.
    pub externals: Vec<ExternalDependency>,
    /// Internal-looking specifiers that matched nothing, in discovery order.
    pub unresolved: Vec<UnresolvedImport>,
}

/// Builds a [`DependencyGraph`] from candidate files.
///
/// ```rust
/// use radar_graph::{FilePath, GraphBuilder, MemoryRuntime};
///
/// # fn main() -> radar_graph::Result<()> {
/// let a = FilePath::new("src/a.ts")?;
/// let b = FilePath::new("src/b.ts")?;
/// let runtime = MemoryRuntime::new()
///     .with_file(a.clone(), "import { b } from './b';\nimport React from 'react';\n")
///     .with_file(b.clone(), "export const b = 1;\n");
///
/// let result = GraphBuilder::new(runtime).build([a, b])?;
/// assert!(result.graph.has_edge("src/a.ts", "src/b.ts"));
/// assert_eq!(result.stats.parsed_files, 2);
/// assert_eq!(result.stats.external_imports, 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct GraphBuilder<R> {
    runtime: R,
    debug: bool,
    jobs: Option<usize>,
}

impl<R: Runtime> GraphBuilder<R> {
    pub fn new(runtime: R) -> Self {
        Self {
            runtime,
            debug: false,
            jobs: None,
        }
    }

    /// Emit a one-line summary of the counters when the build finishes.
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Run the per-file phase on a dedicated pool of `jobs` threads instead
    /// of the global rayon pool.
    pub fn jobs(mut self, jobs: Option<usize>) -> Self {
        self.jobs = jobs;
        self
    }

    /// Build the graph for `candidates`.
    ///
    /// Duplicate candidates are ignored. Per-file and per-import problems
    /// never fail the build; only creating the worker pool can.
    pub fn build<I>(&self, candidates: I) -> Result<BuildResult>
    where
        I: IntoIterator<Item = FilePath>,
    {
        let candidates: Vec<FilePath> = candidates
            .into_iter()
            .collect::<IndexSet<_>>()
            .into_iter()
            .collect();

        let resolver = Resolver::new(&candidates);
        let outcomes = match self.jobs {
            Some(threads) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .thread_name(|index| format!("radar-graph-{index}"))
                    .build()
                    .map_err(|e| Error::WorkerPool(e.to_string()))?;
                pool.install(|| self.process_all(&candidates, &resolver))
            }
            None => self.process_all(&candidates, &resolver),
        };

        let result = assemble(candidates, outcomes);
        if self.debug {
            info!(
                "Graph build: parsedFiles={} external={} unresolved={}",
                result.stats.parsed_files,
                result.stats.external_imports,
                result.stats.unresolved_imports
            );
        }
        Ok(result)
    }

    fn process_all(&self, candidates: &[FilePath], resolver: &Resolver) -> Vec<Option<FileOutcome>> {
        candidates
            .par_iter()
            .map(|path| self.process_file(path, resolver))
            .collect()
    }

    /// Read, scan and resolve one file. `None` means the file was skipped.
    fn process_file(&self, path: &FilePath, resolver: &Resolver) -> Option<FileOutcome> {
        let Some(family) = LanguageFamily::from_path(path) else {
            debug!(file = %path, "skipping file with unrecognized extension");
            return None;
        };

        let source = match self.runtime.read_file(path) {
            Ok(source) => source,
            Err(e) => {
                debug!(file = %path, error = %e, "skipping unreadable file");
                return None;
            }
        };

        let mut outcome = FileOutcome::default();
        outcome.stats.record_parsed();

        for specifier in extract_imports(&source, family) {
            let resolution = resolver.resolve(path, &specifier, family);
            trace!(file = %path, specifier = %specifier, ?resolution, "classified import");
            match resolution {
                Resolution::Local(target) => outcome.edges.push(target),
                Resolution::External => {
                    outcome.stats.record_external();
                    outcome.externals.push(specifier);
                }
                Resolution::Unresolved => {
                    outcome.stats.record_unresolved();
                    outcome.unresolved.push(specifier);
                }
            }
        }

        Some(outcome)
    }
}

/// Everything one file contributes to the build.
#[derive(Debug, Default)]
struct FileOutcome {
    edges: Vec<FilePath>,
    externals: Vec<String>,
    unresolved: Vec<String>,
    stats: BuildStats,
}

fn assemble(candidates: Vec<FilePath>, outcomes: Vec<Option<FileOutcome>>) -> BuildResult {
    let mut graph = DependencyGraph::with_nodes(candidates.iter().cloned());
    let mut externals: IndexMap<String, ExternalDependency> = IndexMap::new();
    let mut unresolved = Vec::new();
    let mut stats = BuildStats::default();

    for (importer, outcome) in candidates.into_iter().zip(outcomes) {
        let Some(outcome) = outcome else {
            continue;
        };

        stats += outcome.stats;
        graph.add_edges(&importer, outcome.edges);

        for specifier in outcome.externals {
            externals
                .entry(specifier.clone())
                .or_insert_with(|| ExternalDependency::new(specifier))
                .push_importer(importer.clone());
        }
        unresolved.extend(outcome.unresolved.into_iter().map(|specifier| UnresolvedImport {
            importer: importer.clone(),
            specifier,
        }));
    }

    BuildResult {
        graph,
        stats,
        externals: externals.into_values().collect(),
        unresolved,
    }
}

/// Build a graph with default settings.
pub fn build_graph<R, I>(runtime: R, candidates: I, debug: bool) -> Result<BuildResult>
where
    R: Runtime,
    I: IntoIterator<Item = FilePath>,
{
    GraphBuilder::new(runtime).debug(debug).build(candidates)
}

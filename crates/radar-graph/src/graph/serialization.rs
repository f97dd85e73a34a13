//! Serialization methods for DependencyGraph.

use serde::{Deserialize, Serialize};

use super::store::DependencyGraph;
use crate::{FilePath, Result};

/// One directed edge of an exported graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub from: FilePath,
    pub to: FilePath,
}

/// Plain node/edge listing of a graph, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphExport {
    pub nodes: Vec<FilePath>,
    pub edges: Vec<GraphEdge>,
}

/// Helper to escape labels for DOT format.
fn escape_label(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}

impl DependencyGraph {
    /// Snapshot the graph as node and edge lists.
    pub fn export(&self) -> GraphExport {
        GraphExport {
            nodes: self.nodes().cloned().collect(),
            edges: self
                .edges()
                .map(|(from, to)| GraphEdge {
                    from: from.clone(),
                    to: to.clone(),
                })
                .collect(),
        }
    }

    /// Rebuild a graph from an export. Edge endpoints missing from `nodes`
    /// are added as nodes.
    pub fn from_export(export: GraphExport) -> Self {
        let mut graph = Self::with_nodes(export.nodes);
        for edge in export.edges {
            graph.add_edge(edge.from, edge.to);
        }
        graph
    }

    /// Export the graph to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.export())?)
    }

    /// Export the graph as DOT format for visualization.
    pub fn to_dot_format(&self) -> String {
        let mut output = String::from("digraph Dependencies {\n");

        for node in self.nodes() {
            output.push_str("    \"");
            output.push_str(&escape_label(node.as_str()));
            output.push_str("\";\n");
        }

        for (from, to) in self.edges() {
            output.push_str("    \"");
            output.push_str(&escape_label(from.as_str()));
            output.push_str("\" -> \"");
            output.push_str(&escape_label(to.as_str()));
            output.push_str("\";\n");
        }

        output.push_str("}\n");
        output
    }
}

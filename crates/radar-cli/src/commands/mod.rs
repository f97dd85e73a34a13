//! Command implementations.
//!
//! Both commands share the same front half ([`utils::load_graph`]): load and
//! validate the configuration, scan the repository and build the graph.

pub mod graph;
pub mod impact;
pub mod utils;

pub use graph::execute as graph_execute;
pub use impact::execute as impact_execute;

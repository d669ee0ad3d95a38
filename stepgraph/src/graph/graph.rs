//! Immutable graph definition: nodes, default edges, entry node.

use std::collections::HashMap;
use std::sync::Arc;

use crate::graph::node::NodeFn;

/// A registered graph: write-once, shared read-only across runs.
///
/// Built by `GraphStore::register` from a validated [`GraphBuilder`]; every
/// edge endpoint and the entry node are known to exist in `nodes`.
///
/// [`GraphBuilder`]: crate::graph::GraphBuilder
pub struct Graph {
    id: String,
    nodes: HashMap<String, Arc<dyn NodeFn>>,
    /// Default successor per node; absence means "no default successor".
    edges: HashMap<String, String>,
    entry: String,
}

impl Graph {
    pub(crate) fn new(
        id: String,
        nodes: HashMap<String, Arc<dyn NodeFn>>,
        edges: HashMap<String, String>,
        entry: String,
    ) -> Self {
        Self {
            id,
            nodes,
            edges,
            entry,
        }
    }

    /// Opaque identifier assigned at registration.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The node where every run of this graph starts.
    pub fn entry(&self) -> &str {
        &self.entry
    }

    /// Looks up a node's function by name.
    pub fn node(&self, name: &str) -> Option<&Arc<dyn NodeFn>> {
        self.nodes.get(name)
    }

    /// The static default successor of `name`, if it has one.
    pub fn successor(&self, name: &str) -> Option<&str> {
        self.edges.get(name).map(String::as_str)
    }
}

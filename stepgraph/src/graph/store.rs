//! In-memory graph store keyed by opaque identifier.

use std::sync::Arc;

use dashmap::DashMap;
use uuid::Uuid;

use crate::error::RegistrationError;
use crate::graph::builder::GraphBuilder;
use crate::graph::graph::Graph;

/// Repository of registered graphs.
///
/// Graphs are write-once: `register` stores an immutable snapshot under a
/// fresh UUID and there is no update or delete. Lookups return shared
/// `Arc<Graph>` handles, so concurrent runs read the same definition without
/// locking.
///
/// **In-Memory**: definitions live for the process lifetime and are lost on
/// restart.
#[derive(Default)]
pub struct GraphStore {
    graphs: DashMap<String, Arc<Graph>>,
}

impl GraphStore {
    pub fn new() -> Self {
        Self {
            graphs: DashMap::new(),
        }
    }

    /// Validates the builder and stores the graph. Every call creates a new
    /// graph, even with contents identical to an earlier registration.
    pub fn register(&self, builder: GraphBuilder) -> Result<String, RegistrationError> {
        let (entry, nodes, edges) = builder.validate()?;
        let graph_id = Uuid::new_v4().to_string();
        let graph = Graph::new(graph_id.clone(), nodes, edges, entry);
        self.graphs.insert(graph_id.clone(), Arc::new(graph));
        Ok(graph_id)
    }

    /// Read-only retrieval; `None` for unknown identifiers.
    pub fn get(&self, graph_id: &str) -> Option<Arc<Graph>> {
        self.graphs.get(graph_id).map(|entry| entry.value().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{FnNode, Next, NodeFn};
    use crate::state::{State, StatePatch};

    fn noop() -> Arc<dyn NodeFn> {
        Arc::new(FnNode::new(|_state: &State| {
            Ok((StatePatch::new(), Next::Continue))
        }))
    }

    fn single_node_builder() -> GraphBuilder {
        GraphBuilder::new("only").add_node("only", noop())
    }

    /// **Scenario**: register returns an id under which get finds the graph,
    /// with entry and edges intact.
    #[test]
    fn register_then_get_round_trip() {
        let store = GraphStore::new();
        let id = store
            .register(
                GraphBuilder::new("a")
                    .add_node("a", noop())
                    .add_node("b", noop())
                    .add_edge("a", "b"),
            )
            .expect("valid graph");
        let graph = store.get(&id).expect("registered graph");
        assert_eq!(graph.id(), id);
        assert_eq!(graph.entry(), "a");
        assert_eq!(graph.successor("a"), Some("b"));
        assert_eq!(graph.successor("b"), None);
    }

    /// **Scenario**: get with an unknown id returns None, not a default.
    #[test]
    fn get_unknown_id_returns_none() {
        let store = GraphStore::new();
        assert!(store.get("no-such-graph").is_none());
    }

    /// **Scenario**: Registering identical contents twice yields two distinct
    /// graphs; there is no deduplication.
    #[test]
    fn register_never_deduplicates() {
        let store = GraphStore::new();
        let first = store.register(single_node_builder()).unwrap();
        let second = store.register(single_node_builder()).unwrap();
        assert_ne!(first, second);
        assert!(store.get(&first).is_some());
        assert!(store.get(&second).is_some());
    }

    /// **Scenario**: An invalid builder is rejected and nothing is stored.
    #[test]
    fn register_rejects_invalid_builder() {
        let store = GraphStore::new();
        let result = store.register(GraphBuilder::new("missing"));
        assert!(result.is_err());
    }
}

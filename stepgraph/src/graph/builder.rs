//! Graph builder: collect nodes and edges, validated at registration.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::RegistrationError;
use crate::graph::node::NodeFn;

/// Builder for a graph definition.
///
/// Add nodes with `add_node`, default successors with `add_edge(from, to)`,
/// then hand the builder to `GraphStore::register` (or
/// `Engine::register_graph`), which validates it and stores an immutable
/// snapshot. A node has at most one default successor; adding a second edge
/// for the same source replaces the first.
pub struct GraphBuilder {
    entry: String,
    nodes: HashMap<String, Arc<dyn NodeFn>>,
    edges: HashMap<String, String>,
}

impl GraphBuilder {
    /// Creates a builder with the designated entry node. The entry must be
    /// registered via `add_node` before the builder is accepted.
    pub fn new(entry: impl Into<String>) -> Self {
        Self {
            entry: entry.into(),
            nodes: HashMap::new(),
            edges: HashMap::new(),
        }
    }

    /// Adds a node; names are unique, re-adding a name replaces the function.
    pub fn add_node(mut self, name: impl Into<String>, node: Arc<dyn NodeFn>) -> Self {
        self.nodes.insert(name.into(), node);
        self
    }

    /// Sets `to` as the default successor of `from`.
    pub fn add_edge(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.edges.insert(from.into(), to.into());
        self
    }

    /// Checks that the entry node and every edge endpoint exist, then
    /// releases the parts for storage.
    pub(crate) fn validate(
        self,
    ) -> Result<
        (
            String,
            HashMap<String, Arc<dyn NodeFn>>,
            HashMap<String, String>,
        ),
        RegistrationError,
    > {
        if !self.nodes.contains_key(&self.entry) {
            return Err(RegistrationError::UnknownEntryNode(self.entry));
        }
        for (from, to) in &self.edges {
            if !self.nodes.contains_key(from) {
                return Err(RegistrationError::UnknownEdgeSource(from.clone()));
            }
            if !self.nodes.contains_key(to) {
                return Err(RegistrationError::UnknownEdgeTarget(to.clone()));
            }
        }
        Ok((self.entry, self.nodes, self.edges))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RegistrationError;
    use crate::graph::{FnNode, Next};
    use crate::state::{State, StatePatch};

    fn noop() -> Arc<dyn NodeFn> {
        Arc::new(FnNode::new(|_state: &State| {
            Ok((StatePatch::new(), Next::Continue))
        }))
    }

    /// **Scenario**: A builder whose entry was never added fails validation
    /// with UnknownEntryNode.
    #[test]
    fn validate_rejects_missing_entry() {
        let builder = GraphBuilder::new("start").add_node("other", noop());
        match builder.validate() {
            Err(RegistrationError::UnknownEntryNode(name)) => assert_eq!(name, "start"),
            other => panic!("expected UnknownEntryNode, got {:?}", other.map(|_| ())),
        }
    }

    /// **Scenario**: An edge pointing at an unregistered node fails with
    /// UnknownEdgeTarget; an edge starting at one fails with
    /// UnknownEdgeSource.
    #[test]
    fn validate_rejects_dangling_edges() {
        let builder = GraphBuilder::new("a")
            .add_node("a", noop())
            .add_edge("a", "ghost");
        match builder.validate() {
            Err(RegistrationError::UnknownEdgeTarget(name)) => assert_eq!(name, "ghost"),
            other => panic!("expected UnknownEdgeTarget, got {:?}", other.map(|_| ())),
        }

        let builder = GraphBuilder::new("a")
            .add_node("a", noop())
            .add_edge("ghost", "a");
        match builder.validate() {
            Err(RegistrationError::UnknownEdgeSource(name)) => assert_eq!(name, "ghost"),
            other => panic!("expected UnknownEdgeSource, got {:?}", other.map(|_| ())),
        }
    }

    /// **Scenario**: A well-formed builder validates and keeps its edge map.
    #[test]
    fn validate_accepts_well_formed_graph() {
        let builder = GraphBuilder::new("a")
            .add_node("a", noop())
            .add_node("b", noop())
            .add_edge("a", "b");
        let (entry, nodes, edges) = builder.validate().expect("valid graph");
        assert_eq!(entry, "a");
        assert_eq!(nodes.len(), 2);
        assert_eq!(edges.get("a").map(String::as_str), Some("b"));
    }
}

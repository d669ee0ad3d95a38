//! Engine and node-function error types.

use thiserror::Error;

/// Error raised by a node function while executing one step.
///
/// Node functions are trusted to be total over the keys they read; a missing
/// key is a caller/configuration error surfaced as [`NodeError::MissingKey`].
#[derive(Debug, Error)]
pub enum NodeError {
    /// The function read a state key that no earlier node produced.
    #[error("missing state key: {key}")]
    MissingKey { key: String },

    /// Any other step failure, with a message.
    #[error("node failed: {0}")]
    Failed(String),
}

/// Graph registration error.
///
/// Returned by `GraphStore::register` / `Engine::register_graph`. Validation
/// is eager: the entry node and both endpoints of every static edge must
/// name a registered node, so only dynamic override targets can fail later.
#[derive(Debug, Error)]
pub enum RegistrationError {
    /// The declared entry node is not in the node map.
    #[error("entry node not found: {0}")]
    UnknownEntryNode(String),

    /// A static edge starts at a node that is not in the node map.
    #[error("edge source not found: {0}")]
    UnknownEdgeSource(String),

    /// A static edge points at a node that is not in the node map.
    #[error("edge target not found: {0}")]
    UnknownEdgeTarget(String),
}

/// Run execution error.
///
/// Returned by `Engine::execute` and the lookup operations. On any mid-run
/// failure the run record keeps its partial state and log with `finished`
/// still false.
#[derive(Debug, Error)]
pub enum EngineError {
    /// No graph registered under this identifier.
    #[error("graph not found: {0}")]
    GraphNotFound(String),

    /// No run started under this identifier.
    #[error("run not found: {0}")]
    RunNotFound(String),

    /// The run already finished; a completed run is frozen and cannot be
    /// executed again.
    #[error("run already finished: {0}")]
    AlreadyFinished(String),

    /// A dynamic override named a node absent from the graph.
    #[error("unknown node: {node}")]
    UnknownNode { node: String },

    /// The traversal did not halt within the configured step budget.
    #[error("step limit exceeded after {limit} steps")]
    StepLimitExceeded { limit: usize },

    /// A node function returned an error; the step was not merged.
    #[error("node '{node}' failed")]
    NodeFailed {
        node: String,
        #[source]
        source: NodeError,
    },
}

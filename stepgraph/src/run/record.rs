//! Per-run execution record.

use serde::Serialize;

use crate::state::State;

/// One traversal instance of a graph: its state, trace log, position and
/// completion flag.
///
/// Mutated exclusively by the engine while the run executes; once `finished`
/// is true the record is frozen. Serializable so a transport layer can
/// expose it verbatim for status polling.
#[derive(Debug, Clone, Serialize)]
pub struct RunRecord {
    /// Identifier of the graph this run executes (non-owning).
    pub graph_id: String,
    /// Accumulated state, merged patch by patch.
    pub state: State,
    /// Node last entered; `None` before execution starts.
    pub current_node: Option<String>,
    /// Append-only trace, one `"enter <node>"` entry per node entered, in
    /// execution order.
    pub log: Vec<String>,
    /// True once the traversal halted.
    pub finished: bool,
}

impl RunRecord {
    pub(crate) fn new(graph_id: String, initial_state: State) -> Self {
        Self {
            graph_id,
            state: initial_state,
            current_node: None,
            log: Vec::new(),
            finished: false,
        }
    }
}

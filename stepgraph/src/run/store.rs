//! In-memory run store keyed by opaque identifier.

use dashmap::DashMap;
use uuid::Uuid;

use crate::run::record::RunRecord;
use crate::state::State;

/// Repository of run records.
///
/// `get` returns a snapshot clone, so pollers observe in-flight progress
/// without holding any lock while a traversal executes. The engine persists
/// progress with `put` after each step; a run record must not be driven by
/// more than one traversal at a time (caller contract).
///
/// **In-Memory**: records live for the process lifetime.
#[derive(Default)]
pub struct RunStore {
    runs: DashMap<String, RunRecord>,
}

impl RunStore {
    pub fn new() -> Self {
        Self {
            runs: DashMap::new(),
        }
    }

    /// Allocates a new run for `graph_id` with `initial_state` copied in,
    /// an empty log and `finished = false`. Does not execute.
    pub fn create(&self, graph_id: impl Into<String>, initial_state: State) -> String {
        let run_id = Uuid::new_v4().to_string();
        self.runs
            .insert(run_id.clone(), RunRecord::new(graph_id.into(), initial_state));
        run_id
    }

    /// Snapshot of the full record; `None` for unknown identifiers.
    pub fn get(&self, run_id: &str) -> Option<RunRecord> {
        self.runs.get(run_id).map(|entry| entry.value().clone())
    }

    /// Writes back an updated record. Used by the engine between steps and
    /// at termination.
    pub(crate) fn put(&self, run_id: &str, record: RunRecord) {
        self.runs.insert(run_id.to_string(), record);
    }
}

//! Execution engine: bounded traversal of a registered graph for one run.
//!
//! The engine is a facade over injected [`GraphStore`] and [`RunStore`]
//! repositories; it owns no hidden process-wide state. `execute` drives a
//! single run to completion on the calling task, persisting the record after
//! every step so status polling observes in-flight progress.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::error::{EngineError, RegistrationError};
use crate::graph::{GraphBuilder, GraphStore, Next};
use crate::run::{RunRecord, RunStore};
use crate::state::{merge_patch, State};

/// Step budget applied when none is configured. Converts a never-clearing
/// override loop into a [`EngineError::StepLimitExceeded`] instead of an
/// unbounded blocking call.
pub const DEFAULT_MAX_STEPS: usize = 1000;

/// Workflow engine over shared graph and run repositories.
///
/// **Interaction**: a transport layer calls `register_graph`, `start_run`,
/// `execute` and `run_state`; the stores can also be shared with other
/// engines or inspected directly in tests.
pub struct Engine {
    graphs: Arc<GraphStore>,
    runs: Arc<RunStore>,
    max_steps: usize,
}

impl Engine {
    /// Creates an engine over the given repositories with the default step
    /// budget.
    pub fn new(graphs: Arc<GraphStore>, runs: Arc<RunStore>) -> Self {
        Self {
            graphs,
            runs,
            max_steps: DEFAULT_MAX_STEPS,
        }
    }

    /// Replaces the per-run step budget.
    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }

    /// Validates and stores a graph definition; returns its identifier.
    pub fn register_graph(&self, builder: GraphBuilder) -> Result<String, RegistrationError> {
        self.graphs.register(builder)
    }

    /// Allocates a run of `graph_id` with `initial_state`. Does not execute.
    ///
    /// Fails with [`EngineError::GraphNotFound`] for an unknown graph, so a
    /// bad identifier surfaces here rather than at the first `execute`.
    pub fn start_run(&self, graph_id: &str, initial_state: State) -> Result<String, EngineError> {
        if self.graphs.get(graph_id).is_none() {
            return Err(EngineError::GraphNotFound(graph_id.to_string()));
        }
        let run_id = self.runs.create(graph_id, initial_state);
        debug!(graph_id, run_id = %run_id, "run started");
        Ok(run_id)
    }

    /// Full run record for status polling, including in-flight progress.
    pub fn run_state(&self, run_id: &str) -> Result<RunRecord, EngineError> {
        self.runs
            .get(run_id)
            .ok_or_else(|| EngineError::RunNotFound(run_id.to_string()))
    }

    /// Runs the traversal to completion and returns the final state and
    /// trace log.
    ///
    /// Starts at the graph's entry node; after each step the node's patch is
    /// merged into the run state and the returned [`Next`] directive picks
    /// the following node (`Continue` follows the static edge or halts,
    /// `Node(name)` jumps there, `Halt` stops). A finished run is rejected
    /// with [`EngineError::AlreadyFinished`].
    ///
    /// On a mid-run failure (`NodeFailed`, `UnknownNode`,
    /// `StepLimitExceeded`) the record keeps its partial state and log with
    /// `finished` still false; there is no resume — a later `execute`
    /// restarts from the entry node against that record.
    pub async fn execute(&self, run_id: &str) -> Result<(State, Vec<String>), EngineError> {
        let mut record = self
            .runs
            .get(run_id)
            .ok_or_else(|| EngineError::RunNotFound(run_id.to_string()))?;
        if record.finished {
            return Err(EngineError::AlreadyFinished(run_id.to_string()));
        }
        let graph = self
            .graphs
            .get(&record.graph_id)
            .ok_or_else(|| EngineError::GraphNotFound(record.graph_id.clone()))?;

        let mut current = graph.entry().to_string();
        let mut steps = 0usize;

        loop {
            if steps >= self.max_steps {
                warn!(run_id, limit = self.max_steps, "step limit exceeded");
                self.runs.put(run_id, record);
                return Err(EngineError::StepLimitExceeded {
                    limit: self.max_steps,
                });
            }
            steps += 1;

            // Static edges and the entry node were validated at registration;
            // only a dynamic override can name a node that does not exist.
            let node = match graph.node(&current) {
                Some(node) => node.clone(),
                None => {
                    warn!(run_id, node = current.as_str(), "unknown node");
                    self.runs.put(run_id, record);
                    return Err(EngineError::UnknownNode { node: current });
                }
            };

            debug!(run_id, node = current.as_str(), step = steps, "entering node");
            record.current_node = Some(current.clone());
            record.log.push(format!("enter {current}"));

            let (patch, next) = match node.run(&record.state).await {
                Ok(output) => output,
                Err(source) => {
                    warn!(run_id, node = current.as_str(), error = %source, "node failed");
                    self.runs.put(run_id, record);
                    return Err(EngineError::NodeFailed {
                        node: current,
                        source,
                    });
                }
            };
            merge_patch(&mut record.state, patch);
            self.runs.put(run_id, record.clone());

            match next {
                Next::Node(target) => current = target,
                Next::Continue => match graph.successor(&current) {
                    Some(successor) => current = successor.to_string(),
                    None => break,
                },
                Next::Halt => break,
            }
        }

        record.finished = true;
        self.runs.put(run_id, record.clone());
        info!(run_id, steps, "run halted");
        Ok((record.state, record.log))
    }
}

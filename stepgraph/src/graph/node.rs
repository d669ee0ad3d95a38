//! Node function trait and a closure adapter.

use async_trait::async_trait;

use crate::error::NodeError;
use crate::graph::Next;
use crate::state::{State, StatePatch};

/// One named unit of work in a graph.
///
/// Receives a read-only view of the run state and returns a patch to merge
/// plus a [`Next`] directive. The engine never inspects what the function
/// reads or writes beyond merging the patch.
///
/// **Interaction**: stored as `Arc<dyn NodeFn>` in a graph; invoked by the
/// engine once per step.
#[async_trait]
pub trait NodeFn: Send + Sync {
    async fn run(&self, state: &State) -> Result<(StatePatch, Next), NodeError>;
}

/// Adapts a plain function or closure to [`NodeFn`], so a name-to-function
/// directory owned by a transport layer can register entries without
/// defining a struct per node.
pub struct FnNode<F>(F);

impl<F> FnNode<F>
where
    F: Fn(&State) -> Result<(StatePatch, Next), NodeError> + Send + Sync,
{
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

#[async_trait]
impl<F> NodeFn for FnNode<F>
where
    F: Fn(&State) -> Result<(StatePatch, Next), NodeError> + Send + Sync,
{
    async fn run(&self, state: &State) -> Result<(StatePatch, Next), NodeError> {
        (self.0)(state)
    }
}

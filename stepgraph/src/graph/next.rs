//! Transition directive returned by node functions.

/// What to do after a node's patch has been merged.
///
/// Control flow is carried here, not inside the state mapping, so a data key
/// can never be misread as a transition target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Next {
    /// Follow the current node's static edge; halt if it has none.
    Continue,
    /// Transition to the named node, superseding any static edge. Naming the
    /// current node expresses a loop/retry.
    Node(String),
    /// Stop the run regardless of edges.
    Halt,
}

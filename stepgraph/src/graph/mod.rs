//! Graph definitions: named nodes, default edges, explicit entry node.
//!
//! Build with [`GraphBuilder`] (`add_node` / `add_edge`), register through
//! [`GraphStore`] to obtain an identifier, then start runs against it. Node
//! functions implement [`NodeFn`] and return a state patch plus a [`Next`]
//! directive.

mod builder;
#[allow(clippy::module_inception)]
mod graph;
mod next;
mod node;
mod store;

pub use builder::GraphBuilder;
pub use graph::Graph;
pub use next::Next;
pub use node::{FnNode, NodeFn};
pub use store::GraphStore;

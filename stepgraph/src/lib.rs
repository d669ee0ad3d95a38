//! # stepgraph
//!
//! A minimal workflow engine: register directed graphs of named processing
//! steps, start runs against them, and execute each run to completion while
//! recording a trace of visited nodes. **State-in, patch-out**: every node
//! function receives the run's state (an open, string-keyed JSON mapping)
//! and returns a partial mapping to merge plus a transition directive.
//!
//! ## Design Principles
//!
//! - **Opaque state**: the engine never reads state contents; control flow
//!   travels in the typed [`Next`] directive, not in a reserved state key.
//! - **Explicit entry node**: graphs declare where runs start instead of
//!   relying on insertion order.
//! - **Injected repositories**: [`GraphStore`] and [`RunStore`] are plain
//!   objects handed to the [`Engine`], not ambient singletons, so tests and
//!   transports can own their lifecycle.
//! - **Bounded execution**: a configurable step budget turns a
//!   never-clearing override loop into [`EngineError::StepLimitExceeded`].
//!
//! ## Main Modules
//!
//! - [`graph`]: [`GraphBuilder`], [`Graph`], [`GraphStore`], [`NodeFn`],
//!   [`Next`] — define and register graphs.
//! - [`run`]: [`RunRecord`], [`RunStore`] — per-run bookkeeping.
//! - [`engine`]: [`Engine`] — the traversal loop.
//! - [`state`]: [`State`], [`StatePatch`], [`merge_patch`].
//! - [`error`]: [`EngineError`], [`NodeError`], [`RegistrationError`].
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use serde_json::json;
//! use stepgraph::{
//!     Engine, FnNode, GraphBuilder, GraphStore, Next, RunStore, State, StatePatch,
//! };
//!
//! # #[tokio::main]
//! # async fn main() {
//! let engine = Engine::new(Arc::new(GraphStore::new()), Arc::new(RunStore::new()));
//!
//! let count = Arc::new(FnNode::new(|state: &State| {
//!     let text = state["text"].as_str().unwrap_or_default();
//!     let mut patch = StatePatch::new();
//!     patch.insert("words".into(), json!(text.split_whitespace().count()));
//!     Ok((patch, Next::Continue))
//! }));
//!
//! let graph_id = engine
//!     .register_graph(GraphBuilder::new("count").add_node("count", count))
//!     .unwrap();
//! let run_id = engine
//!     .start_run(&graph_id, json!({"text": "two words"}).as_object().unwrap().clone())
//!     .unwrap();
//! let (state, log) = engine.execute(&run_id).await.unwrap();
//! assert_eq!(state["words"], json!(2));
//! assert_eq!(log, vec!["enter count".to_string()]);
//! # }
//! ```
//!
//! Concrete node functions (the name-to-function directory) and any HTTP
//! transport live outside this crate; the engine only sees `Arc<dyn NodeFn>`
//! values.

pub mod engine;
pub mod error;
pub mod graph;
pub mod run;
pub mod state;

pub use engine::{Engine, DEFAULT_MAX_STEPS};
pub use error::{EngineError, NodeError, RegistrationError};
pub use graph::{FnNode, Graph, GraphBuilder, GraphStore, Next, NodeFn};
pub use run::{RunRecord, RunStore};
pub use state::{merge_patch, State, StatePatch};

//! Core graph data model
//!
//! This module implements the directed, weighted graph:
//! - Immutable nodes carrying a value, compared by identity
//! - Directed edges carrying a weight, parallel edges allowed
//! - An in-memory store with an outgoing-edge adjacency index

pub mod config;
pub mod edge;
pub mod node;
pub mod store;
pub mod types;
pub mod weight;

// Re-export main types
pub use config::{GraphConfig, PathStrategy};
pub use edge::Edge;
pub use node::Node;
pub use store::{GraphError, GraphResult, GraphStore};
pub use types::{EdgeId, NodeId};
pub use weight::Weight;

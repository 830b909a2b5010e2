//! Weighted Digraph
//!
//! A generic, in-memory directed graph with weighted edges.
//!
//! # Architecture
//!
//! - [`graph`]: nodes, edges, weights and the [`GraphStore`] holding them
//! - [`loader`]: strategies producing the initial contents of a store
//! - [`algo`]: lazy depth-first and breadth-first traversal, and shortest path
//!
//! Nodes and edges are immutable and compared by identity, not by value. Two
//! nodes carrying the same value are still two different nodes, and any
//! number of edges may connect the same pair of nodes.
//!
//! ## Example Usage
//!
//! ```rust
//! use weighted_digraph::algo::{bfs, shortest_path};
//! use weighted_digraph::loader::ListLoader;
//! use weighted_digraph::GraphStore;
//!
//! let loader = ListLoader::from_adjacency(vec![
//!     ("home", vec![("work", 12u32), ("gym", 4)]),
//!     ("gym", vec![("work", 5)]),
//!     ("work", vec![]),
//! ])
//! .unwrap();
//! let store = GraphStore::from_loader(&loader);
//!
//! let home = store.find_node(&"home");
//! let work = store.find_node(&"work");
//!
//! // Traversals are lazy iterators
//! let reachable = bfs(&store, home).filter_map(Result::ok).count();
//! assert_eq!(reachable, 3);
//!
//! let route = shortest_path(&store, home, work).unwrap();
//! assert_eq!(route.weight, 9);
//! assert_eq!(route.len(), 3);
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod graph;
pub mod loader;

// Re-export main types for convenience
pub use graph::{
    Edge, EdgeId, GraphConfig, GraphError, GraphResult, GraphStore, Node, NodeId, PathStrategy,
    Weight,
};

pub use loader::{CopyLoader, GraphLoader, ListLoader, MatrixLoader, NullLoader};

pub use algo::PathResult;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}

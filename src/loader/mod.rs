//! Graph loaders
//!
//! A loader produces the initial node and edge collections used to seed a
//! [`GraphStore`](crate::graph::GraphStore). Four strategies are provided:
//!
//! - [`NullLoader`]: nothing
//! - [`CopyLoader`]: a shallow snapshot of another graph
//! - [`ListLoader`]: adjacency lists
//! - [`MatrixLoader`]: a square weight matrix

pub mod copy;
pub mod list;
pub mod matrix;
pub mod null;

pub use copy::CopyLoader;
pub use list::ListLoader;
pub use matrix::MatrixLoader;
pub use null::NullLoader;

use crate::graph::{Edge, Node};

/// Source of an initial (nodes, edges) snapshot
pub trait GraphLoader<V, W> {
    /// Nodes to seed the graph with
    fn nodes(&self) -> &[Node<V>];

    /// Edges to seed the graph with
    fn edges(&self) -> &[Edge<V, W>];
}

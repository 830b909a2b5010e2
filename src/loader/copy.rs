//! Snapshot of an existing graph

use super::GraphLoader;
use crate::graph::{Edge, GraphStore, Node};
use tracing::debug;

/// Loader holding a shallow copy of another graph's nodes and edges
///
/// The snapshot shares identities with the source graph, so a store built
/// from it contains the very same nodes and edges, while mutations on either
/// store leave the other untouched.
#[derive(Debug, Clone)]
pub struct CopyLoader<V, W> {
    nodes: Vec<Node<V>>,
    edges: Vec<Edge<V, W>>,
}

impl<V, W: Clone> CopyLoader<V, W> {
    pub fn new(source: &GraphStore<V, W>) -> Self {
        let nodes: Vec<Node<V>> = source.nodes().cloned().collect();
        let edges: Vec<Edge<V, W>> = source.edges().cloned().collect();
        debug!(
            "Snapshotted {} nodes and {} edges for copy",
            nodes.len(),
            edges.len()
        );
        CopyLoader { nodes, edges }
    }
}

impl<V, W> GraphLoader<V, W> for CopyLoader<V, W> {
    fn nodes(&self) -> &[Node<V>] {
        &self.nodes
    }

    fn edges(&self) -> &[Edge<V, W>] {
        &self.edges
    }
}

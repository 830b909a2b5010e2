//! Edge implementation for the weighted graph
//!
//! Edges are directed (`from` -> `to`) and carry a weight. Like nodes they are
//! immutable and compared by identity, so several edges between the same pair
//! of nodes can coexist.

use super::node::Node;
use super::types::{EdgeId, NodeId};
use std::fmt;

/// A directed, weighted edge
pub struct Edge<V, W> {
    /// Identity of this edge
    id: EdgeId,

    /// Source node (edge goes FROM this node)
    from: Node<V>,

    /// Target node (edge goes TO this node)
    to: Node<V>,

    /// Weight of the connection
    weight: W,
}

impl<V, W> Edge<V, W> {
    /// Create a new directed edge with a fresh identity
    ///
    /// No validation happens here: self-loops and any weight are accepted.
    pub fn new(from: &Node<V>, to: &Node<V>, weight: W) -> Self {
        Edge {
            id: EdgeId::next(),
            from: from.clone(),
            to: to.clone(),
            weight,
        }
    }

    pub fn id(&self) -> EdgeId {
        self.id
    }

    pub fn from(&self) -> &Node<V> {
        &self.from
    }

    pub fn to(&self) -> &Node<V> {
        &self.to
    }

    pub fn weight(&self) -> &W {
        &self.weight
    }

    /// Check if this edge goes FROM a specific node
    pub fn starts_from(&self, node: NodeId) -> bool {
        self.from.id() == node
    }

    /// Check if this edge goes TO a specific node
    pub fn ends_at(&self, node: NodeId) -> bool {
        self.to.id() == node
    }

    pub fn is_self_loop(&self) -> bool {
        self.from.id() == self.to.id()
    }
}

impl<V, W: Clone> Clone for Edge<V, W> {
    fn clone(&self) -> Self {
        Edge {
            id: self.id,
            from: self.from.clone(),
            to: self.to.clone(),
            weight: self.weight.clone(),
        }
    }
}

impl<V: fmt::Debug, W: fmt::Debug> fmt::Debug for Edge<V, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Edge")
            .field("id", &self.id.as_u64())
            .field("from", self.from.value())
            .field("to", self.to.value())
            .field("weight", &self.weight)
            .finish()
    }
}

impl<V, W> PartialEq for Edge<V, W> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<V, W> Eq for Edge<V, W> {}

impl<V, W> std::hash::Hash for Edge<V, W> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

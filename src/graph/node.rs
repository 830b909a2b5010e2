//! Node implementation for the weighted graph
//!
//! A node is an immutable holder for a value. Its identity is the [`NodeId`]
//! assigned at construction; two nodes with equal values are still different
//! vertices.

use super::types::NodeId;
use std::fmt;
use std::sync::Arc;

/// A vertex in the graph
///
/// Cloning a `Node` produces another handle to the same vertex (same id,
/// shared value). Use [`Node::new`] to create a new vertex.
pub struct Node<V> {
    /// Identity of this vertex
    id: NodeId,

    /// Value carried by this vertex
    value: Arc<V>,
}

impl<V> Node<V> {
    /// Create a new vertex with a fresh identity
    pub fn new(value: V) -> Self {
        Node {
            id: NodeId::next(),
            value: Arc::new(value),
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    /// Check whether this node carries a value equal to `value`
    pub fn has_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        *self.value == *value
    }
}

impl<V> Clone for Node<V> {
    fn clone(&self) -> Self {
        Node {
            id: self.id,
            value: Arc::clone(&self.value),
        }
    }
}

impl<V: fmt::Debug> fmt::Debug for Node<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("id", &self.id.as_u64())
            .field("value", &*self.value)
            .finish()
    }
}

impl<V> PartialEq for Node<V> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<V> Eq for Node<V> {}

impl<V> std::hash::Hash for Node<V> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

//! Identity handles for graph elements
//!
//! Nodes and edges are compared by identity, never by the value they carry.
//! Every `Node` / `Edge` constructed in the process draws a fresh id from a
//! global counter, so two nodes holding equal values stay distinguishable and
//! a node shared between several stores keeps one identity everywhere.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_NODE_ID: AtomicU64 = AtomicU64::new(1);
static NEXT_EDGE_ID: AtomicU64 = AtomicU64::new(1);

/// Unique identifier for a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct NodeId(u64);

impl NodeId {
    /// Allocate the next unused node id
    pub(crate) fn next() -> Self {
        NodeId(NEXT_NODE_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

/// Unique identifier for an edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct EdgeId(u64);

impl EdgeId {
    /// Allocate the next unused edge id
    pub(crate) fn next() -> Self {
        EdgeId(NEXT_EDGE_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EdgeId({})", self.0)
    }
}

//! In-memory graph storage implementation
//!
//! Owns the node set, the edge set, and the adjacency index derived from them:
//! - nodes: NodeId -> Node (insertion ordered)
//! - edges: EdgeId -> Edge (insertion ordered)
//! - adjacency: NodeId -> {EdgeId} (outgoing edges of each source node)
//!
//! Edge endpoints are not validated against the node set. An edge whose
//! source is not a member is still indexed under that source.

use super::config::GraphConfig;
use super::edge::Edge;
use super::node::Node;
use super::types::{EdgeId, NodeId};
use crate::loader::GraphLoader;
use indexmap::{IndexMap, IndexSet};
use rustc_hash::{FxBuildHasher, FxHashMap};
use thiserror::Error;
use tracing::{debug, trace};

pub(crate) type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;
pub(crate) type FxIndexSet<T> = IndexSet<T, FxBuildHasher>;

/// Errors that can occur during graph operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("Origin node {0} does not exist in the graph")]
    InvalidOrigin(NodeId),

    #[error("Path source node {0} does not exist in the graph")]
    InvalidPathSource(NodeId),

    #[error("Path target node {0} does not exist in the graph")]
    InvalidPathTarget(NodeId),

    #[error("Neighbor {0} is not a key of the adjacency list")]
    UnknownNeighbor(String),

    #[error("Weight matrix has {rows} rows, expected {nodes}")]
    MatrixRows { rows: usize, nodes: usize },

    #[error("Weight matrix row {row} has {len} columns, expected {nodes}")]
    MatrixColumns { row: usize, len: usize, nodes: usize },
}

pub type GraphResult<T> = Result<T, GraphError>;

/// In-memory directed, weighted graph
///
/// `V` is the value carried by each node, `W` the edge weight. Nodes and edges
/// are tracked by identity; equal values never collapse into one vertex.
#[derive(Debug)]
pub struct GraphStore<V, W> {
    /// Store configuration
    config: GraphConfig,

    /// Member nodes
    nodes: FxIndexMap<NodeId, Node<V>>,

    /// Member edges
    edges: FxIndexMap<EdgeId, Edge<V, W>>,

    /// Outgoing edges for each source node
    adjacency: FxHashMap<NodeId, FxIndexSet<EdgeId>>,
}

impl<V, W> GraphStore<V, W> {
    /// Create a new empty graph store
    pub fn new() -> Self {
        Self::with_config(GraphConfig::default())
    }

    /// Create a new empty graph store with the given configuration
    pub fn with_config(config: GraphConfig) -> Self {
        GraphStore {
            nodes: IndexMap::with_capacity_and_hasher(config.node_capacity, FxBuildHasher),
            edges: IndexMap::with_capacity_and_hasher(config.edge_capacity, FxBuildHasher),
            adjacency: FxHashMap::with_capacity_and_hasher(config.node_capacity, FxBuildHasher),
            config,
        }
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Create a node holding `value` and add it to the graph
    ///
    /// Always succeeds: equal values produce distinct vertices.
    pub fn add_node(&mut self, value: V) -> Node<V> {
        let node = Node::new(value);
        self.adjacency.entry(node.id()).or_default();
        self.nodes.insert(node.id(), node.clone());
        trace!("Added node {}", node.id());
        node
    }

    /// Add an existing node to the graph
    ///
    /// Returns `None` if this node is already a member.
    pub fn insert_node(&mut self, node: Node<V>) -> Option<Node<V>> {
        if self.nodes.contains_key(&node.id()) {
            debug!("Node {} already present, ignoring insert", node.id());
            return None;
        }
        self.adjacency.entry(node.id()).or_default();
        self.nodes.insert(node.id(), node.clone());
        trace!("Inserted node {}", node.id());
        Some(node)
    }

    /// Remove a node from the node set
    ///
    /// Edges touching the node and its adjacency bucket are left in place.
    pub fn remove_node(&mut self, node: &Node<V>) -> bool {
        let removed = self.nodes.shift_remove(&node.id()).is_some();
        if removed {
            trace!("Removed node {}", node.id());
        }
        removed
    }

    /// Remove an edge from the edge set and from its source's bucket
    pub fn remove_edge(&mut self, edge: &Edge<V, W>) -> bool {
        if self.edges.shift_remove(&edge.id()).is_none() {
            return false;
        }
        if let Some(bucket) = self.adjacency.get_mut(&edge.from().id()) {
            bucket.shift_remove(&edge.id());
        }
        trace!("Removed edge {}", edge.id());
        true
    }

    /// Get all edges leaving `node`
    ///
    /// Empty for `None` or for a node with no bucket; never an error.
    pub fn edges_from(&self, node: Option<&Node<V>>) -> Vec<&Edge<V, W>> {
        match node {
            Some(node) => self.outgoing(node.id()).collect(),
            None => Vec::new(),
        }
    }

    /// Outgoing edges of a node id, in insertion order
    pub(crate) fn outgoing(&self, id: NodeId) -> impl Iterator<Item = &Edge<V, W>> + '_ {
        self.adjacency
            .get(&id)
            .into_iter()
            .flat_map(move |bucket| bucket.iter().filter_map(move |eid| self.edges.get(eid)))
    }

    /// Find the first node (in insertion order) carrying `value`
    pub fn find_node(&self, value: &V) -> Option<&Node<V>>
    where
        V: PartialEq,
    {
        self.nodes.values().find(|node| node.has_value(value))
    }

    /// Look up a member node by id
    pub fn get_node(&self, id: NodeId) -> Option<&Node<V>> {
        self.nodes.get(&id)
    }

    /// Look up a member edge by id
    pub fn get_edge(&self, id: EdgeId) -> Option<&Edge<V, W>> {
        self.edges.get(&id)
    }

    pub fn contains_node(&self, node: &Node<V>) -> bool {
        self.nodes.contains_key(&node.id())
    }

    pub fn contains_edge(&self, edge: &Edge<V, W>) -> bool {
        self.edges.contains_key(&edge.id())
    }

    /// All member nodes, in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &Node<V>> {
        self.nodes.values()
    }

    /// All member edges, in insertion order
    pub fn edges(&self) -> impl Iterator<Item = &Edge<V, W>> {
        self.edges.values()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    /// Rebuild the whole adjacency index from the current edge set
    fn rebuild_adjacency(&mut self) {
        self.adjacency.clear();
        for id in self.nodes.keys() {
            self.adjacency.insert(*id, FxIndexSet::default());
        }
        for (edge_id, edge) in &self.edges {
            self.adjacency
                .entry(edge.from().id())
                .or_default()
                .insert(*edge_id);
        }
    }
}

impl<V, W: Clone> GraphStore<V, W> {
    /// Create a graph seeded from a loader
    pub fn from_loader<L>(loader: &L) -> Self
    where
        L: GraphLoader<V, W> + ?Sized,
    {
        Self::with_loader(loader, GraphConfig::default())
    }

    /// Create a graph seeded from a loader with the given configuration
    ///
    /// Nodes and edges are shared with the loader (same identities). The
    /// adjacency index is built once after everything is loaded.
    pub fn with_loader<L>(loader: &L, config: GraphConfig) -> Self
    where
        L: GraphLoader<V, W> + ?Sized,
    {
        let mut store = Self::with_config(config);
        for node in loader.nodes() {
            store.nodes.entry(node.id()).or_insert_with(|| node.clone());
        }
        for edge in loader.edges() {
            store.edges.entry(edge.id()).or_insert_with(|| edge.clone());
        }
        store.rebuild_adjacency();

        debug!(
            "Loaded graph with {} nodes and {} edges",
            store.nodes.len(),
            store.edges.len()
        );
        store
    }

    /// Create a new edge between two nodes and add it to the graph
    pub fn add_edge(&mut self, from: &Node<V>, to: &Node<V>, weight: W) -> Edge<V, W> {
        let edge = Edge::new(from, to, weight);
        self.index_edge(edge.clone());
        edge
    }

    /// Create an edge between the first nodes carrying `from` and `to`
    ///
    /// Returns `None` if either value has no matching node.
    pub fn add_edge_by_value(&mut self, from: &V, to: &V, weight: W) -> Option<Edge<V, W>>
    where
        V: PartialEq,
    {
        let from = self.find_node(from)?.clone();
        let to = self.find_node(to)?.clone();
        Some(self.add_edge(&from, &to, weight))
    }

    /// Add an existing edge to the graph
    ///
    /// Returns `None` if this edge is already a member.
    pub fn insert_edge(&mut self, edge: Edge<V, W>) -> Option<Edge<V, W>> {
        if self.edges.contains_key(&edge.id()) {
            debug!("Edge {} already present, ignoring insert", edge.id());
            return None;
        }
        self.index_edge(edge.clone());
        Some(edge)
    }

    fn index_edge(&mut self, edge: Edge<V, W>) {
        let edge_id = edge.id();
        let source = edge.from().id();
        self.adjacency.entry(source).or_default().insert(edge_id);
        self.edges.insert(edge_id, edge);
        trace!("Added edge {} from {}", edge_id, source);
    }
}

impl<V, W> Default for GraphStore<V, W> {
    fn default() -> Self {
        Self::new()
    }
}

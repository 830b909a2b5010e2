//! Adjacency-matrix loader

use super::GraphLoader;
use crate::graph::{Edge, GraphError, GraphResult, Node, Weight};
use tracing::debug;

/// Loader built from a square weight matrix
///
/// Row `i` is the source and column `j` the destination: cell `(i, j)` yields
/// an edge `nodes[i] -> nodes[j]` unless it holds `W::zero()`. The matrix
/// need not be symmetric.
#[derive(Debug, Clone)]
pub struct MatrixLoader<V, W> {
    nodes: Vec<Node<V>>,
    edges: Vec<Edge<V, W>>,
}

impl<V, W: Weight> MatrixLoader<V, W> {
    /// Create one node per value, index-aligned with the matrix
    pub fn from_values(
        values: impl IntoIterator<Item = V>,
        matrix: Vec<Vec<W>>,
    ) -> GraphResult<Self> {
        Self::from_nodes(values.into_iter().map(Node::new), matrix)
    }

    /// Use pre-built nodes, index-aligned with the matrix
    pub fn from_nodes(
        nodes: impl IntoIterator<Item = Node<V>>,
        matrix: Vec<Vec<W>>,
    ) -> GraphResult<Self> {
        let nodes: Vec<Node<V>> = nodes.into_iter().collect();
        let size = nodes.len();

        if matrix.len() != size {
            return Err(GraphError::MatrixRows {
                rows: matrix.len(),
                nodes: size,
            });
        }
        if let Some((row, cells)) = matrix.iter().enumerate().find(|(_, r)| r.len() != size) {
            return Err(GraphError::MatrixColumns {
                row,
                len: cells.len(),
                nodes: size,
            });
        }

        let mut edges = Vec::new();
        for (i, row) in matrix.into_iter().enumerate() {
            for (j, weight) in row.into_iter().enumerate() {
                if weight.is_zero() {
                    continue;
                }
                edges.push(Edge::new(&nodes[i], &nodes[j], weight));
            }
        }

        debug!("Built {} edges from {}x{} weight matrix", edges.len(), size, size);
        Ok(MatrixLoader { nodes, edges })
    }
}

impl<V, W> GraphLoader<V, W> for MatrixLoader<V, W> {
    fn nodes(&self) -> &[Node<V>] {
        &self.nodes
    }

    fn edges(&self) -> &[Edge<V, W>] {
        &self.edges
    }
}

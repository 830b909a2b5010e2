//! Adjacency-list loader

use super::GraphLoader;
use crate::graph::store::FxIndexMap;
use crate::graph::{Edge, GraphError, GraphResult, Node};
use std::fmt::Debug;
use std::hash::Hash;
use tracing::debug;

/// Loader built from adjacency lists
#[derive(Debug, Clone)]
pub struct ListLoader<V, W> {
    nodes: Vec<Node<V>>,
    edges: Vec<Edge<V, W>>,
}

impl<V, W> ListLoader<V, W> {
    /// Use pre-built node and edge collections as they are
    pub fn from_parts(
        nodes: impl IntoIterator<Item = Node<V>>,
        edges: impl IntoIterator<Item = Edge<V, W>>,
    ) -> Self {
        ListLoader {
            nodes: nodes.into_iter().collect(),
            edges: edges.into_iter().collect(),
        }
    }

    /// Use pre-built nodes, each paired with its outgoing edges
    pub fn from_node_edges<I, E>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Node<V>, E)>,
        E: IntoIterator<Item = Edge<V, W>>,
    {
        let mut nodes = Vec::new();
        let mut edges = Vec::new();
        for (node, node_edges) in entries {
            nodes.push(node);
            edges.extend(node_edges);
        }
        ListLoader { nodes, edges }
    }

    /// Build nodes and edges from `value -> [(neighbor value, weight)]` lists
    ///
    /// One node is created per distinct key. Each listed neighbor must itself
    /// be a key, otherwise `GraphError::UnknownNeighbor` is returned.
    pub fn from_adjacency<I, N>(adjacency: I) -> GraphResult<Self>
    where
        V: Hash + Eq + Clone + Debug,
        I: IntoIterator<Item = (V, N)>,
        N: IntoIterator<Item = (V, W)>,
    {
        let entries: Vec<(V, N)> = adjacency.into_iter().collect();

        let mut by_value: FxIndexMap<V, Node<V>> = FxIndexMap::default();
        for (value, _) in &entries {
            by_value
                .entry(value.clone())
                .or_insert_with(|| Node::new(value.clone()));
        }

        let mut edges = Vec::new();
        for (value, neighbors) in entries {
            let from = &by_value[&value];
            for (neighbor, weight) in neighbors {
                let to = by_value
                    .get(&neighbor)
                    .ok_or_else(|| GraphError::UnknownNeighbor(format!("{:?}", neighbor)))?;
                edges.push(Edge::new(from, to, weight));
            }
        }

        debug!(
            "Built {} nodes and {} edges from adjacency lists",
            by_value.len(),
            edges.len()
        );
        Ok(ListLoader {
            nodes: by_value.into_values().collect(),
            edges,
        })
    }
}

impl<V, W> GraphLoader<V, W> for ListLoader<V, W> {
    fn nodes(&self) -> &[Node<V>] {
        &self.nodes
    }

    fn edges(&self) -> &[Edge<V, W>] {
        &self.edges
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_adjacency() {
        let loader = ListLoader::from_adjacency(vec![
            ('A', vec![('B', 100u32)]),
            ('B', vec![('C', 50)]),
            ('C', vec![('A', 10), ('A', 20)]),
        ])
        .unwrap();

        assert_eq!(loader.nodes().len(), 3);
        assert_eq!(loader.edges().len(), 4);

        let c_to_a: Vec<_> = loader
            .edges()
            .iter()
            .filter(|e| *e.from().value() == 'C' && *e.to().value() == 'A')
            .collect();
        assert_eq!(c_to_a.len(), 2);
        assert_ne!(c_to_a[0], c_to_a[1]);
    }

    #[test]
    fn test_neighbors_resolve_to_key_nodes() {
        let loader =
            ListLoader::from_adjacency(vec![('A', vec![('B', 1u32)]), ('B', vec![])]).unwrap();

        let edge = &loader.edges()[0];
        assert!(loader.nodes().contains(edge.from()));
        assert!(loader.nodes().contains(edge.to()));
    }

    #[test]
    fn test_unknown_neighbor_is_rejected() {
        let result = ListLoader::from_adjacency(vec![('A', vec![('Z', 1u32)])]);
        assert_eq!(
            result.unwrap_err(),
            GraphError::UnknownNeighbor("'Z'".to_string())
        );
    }

    #[test]
    fn test_repeated_keys_share_a_node() {
        let loader = ListLoader::from_adjacency(vec![
            ('A', vec![('B', 1u32)]),
            ('B', vec![]),
            ('A', vec![('B', 2)]),
        ])
        .unwrap();

        assert_eq!(loader.nodes().len(), 2);
        assert_eq!(loader.edges().len(), 2);
        assert_eq!(loader.edges()[0].from(), loader.edges()[1].from());
    }

    #[test]
    fn test_from_parts() {
        let a = Node::new('A');
        let b = Node::new('B');
        let edge = Edge::new(&a, &b, 3u32);

        let loader = ListLoader::from_parts(vec![a.clone(), b.clone()], vec![edge.clone()]);

        assert_eq!(loader.nodes(), &[a, b]);
        assert_eq!(loader.edges(), &[edge]);
    }

    #[test]
    fn test_from_node_edges() {
        let a = Node::new('A');
        let b = Node::new('B');
        let ab = Edge::new(&a, &b, 1u32);
        let ba = Edge::new(&b, &a, 2u32);

        let loader = ListLoader::from_node_edges(vec![
            (a.clone(), vec![ab.clone()]),
            (b.clone(), vec![ba.clone()]),
        ]);

        assert_eq!(loader.nodes(), &[a, b]);
        assert_eq!(loader.edges(), &[ab, ba]);
    }
}

//! Graph store configuration

use serde::{Deserialize, Serialize};

/// Relaxation strategy used by shortest-path queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathStrategy {
    /// Unordered pending set, re-relaxing nodes until a fixpoint is reached
    #[default]
    Worklist,
    /// Binary-heap Dijkstra, each node settled in ascending weight order
    PriorityQueue,
}

/// Graph store configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Initial node capacity
    pub node_capacity: usize,
    /// Initial edge capacity
    pub edge_capacity: usize,
    /// Default strategy for `algo::shortest_path`
    pub path_strategy: PathStrategy,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            node_capacity: 16,
            edge_capacity: 32,
            path_strategy: PathStrategy::Worklist,
        }
    }
}

impl GraphConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(mut self, nodes: usize, edges: usize) -> Self {
        self.node_capacity = nodes;
        self.edge_capacity = edges;
        self
    }

    pub fn with_path_strategy(mut self, strategy: PathStrategy) -> Self {
        self.path_strategy = strategy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GraphConfig::default();
        assert_eq!(config.node_capacity, 16);
        assert_eq!(config.edge_capacity, 32);
        assert_eq!(config.path_strategy, PathStrategy::Worklist);
    }

    #[test]
    fn test_builder() {
        let config = GraphConfig::new()
            .with_capacity(128, 512)
            .with_path_strategy(PathStrategy::PriorityQueue);
        assert_eq!(config.node_capacity, 128);
        assert_eq!(config.edge_capacity, 512);
        assert_eq!(config.path_strategy, PathStrategy::PriorityQueue);
    }

    #[test]
    fn test_config_from_json() {
        let config: GraphConfig =
            serde_json::from_str(r#"{ "path_strategy": "priority_queue" }"#).unwrap();
        assert_eq!(config.path_strategy, PathStrategy::PriorityQueue);
        assert_eq!(config.node_capacity, 16);

        let round = serde_json::to_string(&config).unwrap();
        assert!(round.contains("priority_queue"));
    }
}

//! Graph algorithms module
//!
//! Traversals and shortest path over a [`GraphStore`](crate::graph::GraphStore).
//! Algorithms are free functions borrowing the store; none of them mutate it.

pub mod pathfinding;
pub mod traversal;

// Re-export algorithms
pub use pathfinding::{shortest_path, shortest_path_with, PathResult};
pub use traversal::{
    bfs, bfs_from_value, bfs_search, bfs_search_values, dfs, dfs_from_value, dfs_search,
    dfs_search_values, BreadthFirst, DepthFirst, Frontier, Search, Traversal,
};

//! Pathfinding algorithms
//!
//! Single-source shortest path between two nodes of a [`GraphStore`]. Two
//! relaxation strategies are available (see [`PathStrategy`]); both produce
//! the same path weight on graphs with non-negative weights.
//!
//! Negative edges are not supported and are skipped during relaxation.

use crate::graph::{GraphError, GraphResult, GraphStore, Node, NodeId, PathStrategy, Weight};
use crate::graph::store::FxIndexMap;
use rustc_hash::FxHashMap;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use tracing::{debug, trace};

/// Result of a shortest-path query
#[derive(Debug, Clone)]
pub struct PathResult<V, W> {
    /// Nodes from source to target; `None` when an endpoint was missing
    pub path: Option<Vec<Node<V>>>,
    /// Total weight of `path`
    pub weight: W,
    /// False when the target could not be reached from the source
    pub reached: bool,
}

impl<V, W: Weight> PathResult<V, W> {
    fn none() -> Self {
        PathResult {
            path: None,
            weight: W::zero(),
            reached: false,
        }
    }

    /// Path nodes, empty when there is no path
    pub fn nodes(&self) -> &[Node<V>] {
        self.path.as_deref().unwrap_or(&[])
    }

    /// Number of nodes along the path
    pub fn len(&self) -> usize {
        self.nodes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes().is_empty()
    }
}

/// Best known way to reach a node
struct Best<'a, V, W> {
    weight: W,
    via: Option<&'a Node<V>>,
}

type BestMap<'a, V, W> = FxHashMap<NodeId, Best<'a, V, W>>;

/// Shortest path using the store's configured strategy
///
/// - `None` for either endpoint gives `path: None` and a zero weight.
/// - An endpoint that is not a member of the store is an error.
/// - An unreachable target gives `path: [to]`, zero weight, `reached: false`.
pub fn shortest_path<V, W: Weight>(
    store: &GraphStore<V, W>,
    from: Option<&Node<V>>,
    to: Option<&Node<V>>,
) -> GraphResult<PathResult<V, W>> {
    shortest_path_with(store, from, to, store.config().path_strategy)
}

/// Shortest path using an explicit relaxation strategy
pub fn shortest_path_with<V, W: Weight>(
    store: &GraphStore<V, W>,
    from: Option<&Node<V>>,
    to: Option<&Node<V>>,
    strategy: PathStrategy,
) -> GraphResult<PathResult<V, W>> {
    let (Some(from), Some(to)) = (from, to) else {
        return Ok(PathResult::none());
    };

    let source = store
        .get_node(from.id())
        .ok_or(GraphError::InvalidPathSource(from.id()))?;
    let target = store
        .get_node(to.id())
        .ok_or(GraphError::InvalidPathTarget(to.id()))?;

    let best = match strategy {
        PathStrategy::Worklist => relax_worklist(store, source),
        PathStrategy::PriorityQueue => relax_heap(store, source, target.id()),
    };

    Ok(reconstruct(&best, source, target))
}

/// Whether an edge of this weight may take part in a path
fn usable<W: Weight>(weight: &W) -> bool {
    if weight.lighter_than(&W::zero()) {
        trace!("Skipping negative edge weight {:?}", weight);
        return false;
    }
    true
}

/// Unordered pending set, re-relaxing until no node is pending
fn relax_worklist<'a, V, W: Weight>(
    store: &'a GraphStore<V, W>,
    source: &'a Node<V>,
) -> BestMap<'a, V, W> {
    let mut best: BestMap<'a, V, W> = FxHashMap::default();
    let mut pending: FxIndexMap<NodeId, &'a Node<V>> = FxIndexMap::default();
    let mut updates = 0usize;

    best.insert(
        source.id(),
        Best {
            weight: W::zero(),
            via: None,
        },
    );
    pending.insert(source.id(), source);

    while let Some((id, node)) = pending.pop() {
        let Some(base) = best.get(&id).map(|b| b.weight.clone()) else {
            continue;
        };

        for edge in store.outgoing(id) {
            if !usable(edge.weight()) {
                continue;
            }
            let candidate = base.combine(edge.weight());
            let next = edge.to();
            let improves = best
                .get(&next.id())
                .map_or(true, |current| candidate.lighter_than(&current.weight));
            if improves {
                best.insert(
                    next.id(),
                    Best {
                        weight: candidate,
                        via: Some(node),
                    },
                );
                pending.insert(next.id(), next);
                updates += 1;
            }
        }
    }

    debug!("Worklist relaxation settled {} nodes after {} updates", best.len(), updates);
    best
}

/// State for Dijkstra priority queue
struct State<'a, V, W> {
    weight: W,
    node: &'a Node<V>,
}

// Rust's BinaryHeap is max-heap, so we implement Ord reversed for min-heap behavior
impl<V, W: Weight> Ord for State<'_, V, W> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.weight.partial_cmp(&self.weight).unwrap_or(Ordering::Equal)
    }
}

impl<V, W: Weight> PartialOrd for State<'_, V, W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V, W: Weight> PartialEq for State<'_, V, W> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<V, W: Weight> Eq for State<'_, V, W> {}

/// Binary-heap Dijkstra, stopping once the target is settled
fn relax_heap<'a, V, W: Weight>(
    store: &'a GraphStore<V, W>,
    source: &'a Node<V>,
    target: NodeId,
) -> BestMap<'a, V, W> {
    let mut best: BestMap<'a, V, W> = FxHashMap::default();
    let mut heap = BinaryHeap::new();
    let mut settled = 0usize;

    best.insert(
        source.id(),
        Best {
            weight: W::zero(),
            via: None,
        },
    );
    heap.push(State {
        weight: W::zero(),
        node: source,
    });

    while let Some(State { weight, node }) = heap.pop() {
        // Skip stale entries: a lighter route was found after this push
        if best
            .get(&node.id())
            .is_some_and(|current| current.weight.lighter_than(&weight))
        {
            continue;
        }
        settled += 1;
        if node.id() == target {
            break;
        }

        for edge in store.outgoing(node.id()) {
            if !usable(edge.weight()) {
                continue;
            }
            let candidate = weight.combine(edge.weight());
            let next = edge.to();
            let improves = best
                .get(&next.id())
                .map_or(true, |current| candidate.lighter_than(&current.weight));
            if improves {
                best.insert(
                    next.id(),
                    Best {
                        weight: candidate.clone(),
                        via: Some(node),
                    },
                );
                heap.push(State {
                    weight: candidate,
                    node: next,
                });
            }
        }
    }

    debug!("Dijkstra settled {} nodes", settled);
    best
}

/// Walk predecessors back from `target` to build the path
fn reconstruct<V, W: Weight>(
    best: &BestMap<'_, V, W>,
    source: &Node<V>,
    target: &Node<V>,
) -> PathResult<V, W> {
    let Some(entry) = best.get(&target.id()) else {
        debug!("Node {} is unreachable from {}", target.id(), source.id());
        return PathResult {
            path: Some(vec![target.clone()]),
            weight: W::zero(),
            reached: false,
        };
    };

    let mut path = vec![target.clone()];
    let mut via = entry.via;
    while let Some(node) = via {
        debug_assert!(
            path.len() <= best.len(),
            "predecessor cycle through {}",
            node.id()
        );
        if path.len() > best.len() {
            break;
        }
        path.push(node.clone());
        via = best.get(&node.id()).and_then(|b| b.via);
    }
    path.reverse();

    PathResult {
        path: Some(path),
        weight: entry.weight.clone(),
        reached: true,
    }
}

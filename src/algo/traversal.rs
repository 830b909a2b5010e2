//! Graph traversal
//!
//! Depth-first and breadth-first walks over a [`GraphStore`], exposed as lazy
//! iterators. Nothing happens until the iterator is advanced; stopping early
//! is simply not pulling more items.
//!
//! Items are `GraphResult<&Node>`. A traversal started from a node that is not
//! a member of the store yields a single `Err(GraphError::InvalidOrigin)` on
//! its first step and then ends.

use crate::graph::{GraphError, GraphResult, GraphStore, Node, NodeId};
use rustc_hash::FxHashSet;
use std::collections::VecDeque;
use std::iter::FusedIterator;
use tracing::debug;

/// Pending-node container deciding the visiting order
pub trait Frontier<T>: Default {
    fn put(&mut self, item: T);
    fn take(&mut self) -> Option<T>;
}

/// Last in, first out: depth-first order
impl<T> Frontier<T> for Vec<T> {
    fn put(&mut self, item: T) {
        self.push(item);
    }

    fn take(&mut self) -> Option<T> {
        self.pop()
    }
}

/// First in, first out: breadth-first order
impl<T> Frontier<T> for VecDeque<T> {
    fn put(&mut self, item: T) {
        self.push_back(item);
    }

    fn take(&mut self) -> Option<T> {
        self.pop_front()
    }
}

/// Lazy walk over every node reachable from an origin, each visited once
pub struct Traversal<'a, V, W, F> {
    store: &'a GraphStore<V, W>,
    /// Origin not yet checked for membership; consumed by the first step
    origin: Option<NodeId>,
    frontier: F,
    visited: FxHashSet<NodeId>,
}

/// Depth-first traversal (explicit stack)
pub type DepthFirst<'a, V, W> = Traversal<'a, V, W, Vec<&'a Node<V>>>;

/// Breadth-first traversal (explicit queue)
pub type BreadthFirst<'a, V, W> = Traversal<'a, V, W, VecDeque<&'a Node<V>>>;

impl<'a, V, W, F> Traversal<'a, V, W, F>
where
    F: Frontier<&'a Node<V>>,
{
    fn new(store: &'a GraphStore<V, W>, origin: Option<NodeId>) -> Self {
        Traversal {
            store,
            origin,
            frontier: F::default(),
            visited: FxHashSet::default(),
        }
    }
}

impl<'a, V, W, F> Iterator for Traversal<'a, V, W, F>
where
    F: Frontier<&'a Node<V>>,
{
    type Item = GraphResult<&'a Node<V>>;

    fn next(&mut self) -> Option<Self::Item> {
        let store = self.store;
        if let Some(origin) = self.origin.take() {
            match store.get_node(origin) {
                Some(node) => self.frontier.put(node),
                None => {
                    debug!("Traversal origin {} does not exist in the graph", origin);
                    return Some(Err(GraphError::InvalidOrigin(origin)));
                }
            }
        }

        while let Some(node) = self.frontier.take() {
            if !self.visited.insert(node.id()) {
                continue;
            }
            for edge in store.outgoing(node.id()) {
                if !self.visited.contains(&edge.to().id()) {
                    self.frontier.put(edge.to());
                }
            }
            return Some(Ok(node));
        }

        None
    }
}

impl<'a, V, W, F> FusedIterator for Traversal<'a, V, W, F> where
    F: Frontier<&'a Node<V>>
{
}

/// Traversal that stops right after yielding its target
///
/// If the target is never reached the whole reachable set is yielded; check
/// whether the last item is the target to know if the search succeeded.
pub struct Search<I> {
    inner: I,
    target: Option<NodeId>,
    found: bool,
}

impl<I> Search<I> {
    fn new(inner: I, target: Option<NodeId>) -> Self {
        Search {
            inner,
            target,
            found: false,
        }
    }
}

impl<'a, V: 'a, I> Iterator for Search<I>
where
    I: Iterator<Item = GraphResult<&'a Node<V>>>,
{
    type Item = GraphResult<&'a Node<V>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.found {
            return None;
        }
        let item = self.inner.next()?;
        if let Ok(node) = &item {
            self.found = Some(node.id()) == self.target;
        }
        Some(item)
    }
}

impl<'a, V: 'a, I> FusedIterator for Search<I> where
    I: FusedIterator<Item = GraphResult<&'a Node<V>>>
{
}

/// Depth-first traversal from `origin`
///
/// `None` yields nothing.
pub fn dfs<'a, V, W>(
    store: &'a GraphStore<V, W>,
    origin: Option<&Node<V>>,
) -> DepthFirst<'a, V, W> {
    Traversal::new(store, origin.map(Node::id))
}

/// Breadth-first traversal from `origin`
///
/// `None` yields nothing.
pub fn bfs<'a, V, W>(
    store: &'a GraphStore<V, W>,
    origin: Option<&Node<V>>,
) -> BreadthFirst<'a, V, W> {
    Traversal::new(store, origin.map(Node::id))
}

/// Depth-first traversal from `origin`, stopping at `target`
pub fn dfs_search<'a, V, W>(
    store: &'a GraphStore<V, W>,
    origin: Option<&Node<V>>,
    target: Option<&Node<V>>,
) -> Search<DepthFirst<'a, V, W>> {
    Search::new(dfs(store, origin), target.map(Node::id))
}

/// Breadth-first traversal from `origin`, stopping at `target`
pub fn bfs_search<'a, V, W>(
    store: &'a GraphStore<V, W>,
    origin: Option<&Node<V>>,
    target: Option<&Node<V>>,
) -> Search<BreadthFirst<'a, V, W>> {
    Search::new(bfs(store, origin), target.map(Node::id))
}

/// Depth-first traversal from the first node carrying `value`
///
/// Yields nothing if no node carries `value`.
pub fn dfs_from_value<'a, V: PartialEq, W>(
    store: &'a GraphStore<V, W>,
    value: &V,
) -> DepthFirst<'a, V, W> {
    dfs(store, store.find_node(value))
}

/// Breadth-first traversal from the first node carrying `value`
///
/// Yields nothing if no node carries `value`.
pub fn bfs_from_value<'a, V: PartialEq, W>(
    store: &'a GraphStore<V, W>,
    value: &V,
) -> BreadthFirst<'a, V, W> {
    bfs(store, store.find_node(value))
}

/// Depth-first search between the first nodes carrying `origin` and `target`
///
/// Yields nothing if either value has no node.
pub fn dfs_search_values<'a, V: PartialEq, W>(
    store: &'a GraphStore<V, W>,
    origin: &V,
    target: &V,
) -> Search<DepthFirst<'a, V, W>> {
    let (origin, target) = resolve_pair(store, origin, target);
    dfs_search(store, origin, target)
}

/// Breadth-first search between the first nodes carrying `origin` and `target`
///
/// Yields nothing if either value has no node.
pub fn bfs_search_values<'a, V: PartialEq, W>(
    store: &'a GraphStore<V, W>,
    origin: &V,
    target: &V,
) -> Search<BreadthFirst<'a, V, W>> {
    let (origin, target) = resolve_pair(store, origin, target);
    bfs_search(store, origin, target)
}

fn resolve_pair<'a, V: PartialEq, W>(
    store: &'a GraphStore<V, W>,
    origin: &V,
    target: &V,
) -> (Option<&'a Node<V>>, Option<&'a Node<V>>) {
    match (store.find_node(origin), store.find_node(target)) {
        (Some(origin), Some(target)) => (Some(origin), Some(target)),
        _ => (None, None),
    }
}

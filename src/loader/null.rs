//! Empty loader

use super::GraphLoader;
use crate::graph::{Edge, Node};
use std::marker::PhantomData;

/// Loader producing no nodes and no edges
#[derive(Debug, Clone)]
pub struct NullLoader<V, W> {
    _marker: PhantomData<fn() -> (V, W)>,
}

impl<V, W> NullLoader<V, W> {
    pub fn new() -> Self {
        NullLoader {
            _marker: PhantomData,
        }
    }
}

impl<V, W> Default for NullLoader<V, W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, W> GraphLoader<V, W> for NullLoader<V, W> {
    fn nodes(&self) -> &[Node<V>] {
        &[]
    }

    fn edges(&self) -> &[Edge<V, W>] {
        &[]
    }
}

//! Directed, weighted graph storage
//!
//! Vertices map to an adjacency table of `neighbor -> weight`. Both levels are
//! insertion ordered, so every traversal over the store is reproducible for a
//! given insertion history.

use crate::error::{GraphError, Result};
use crate::graph::observer::{GraphObserver, ObserverRegistry};
use crate::graph::types::Vertex;
use indexmap::IndexMap;
use std::rc::Rc;

/// Directed weighted graph with an attached observer registry
#[derive(Debug, Clone)]
pub struct WeightedGraph<V> {
    adjacency: IndexMap<V, IndexMap<V, u64>>,
    observers: ObserverRegistry<V>,
}

impl<V: Vertex> WeightedGraph<V> {
    pub fn new() -> Self {
        Self {
            adjacency: IndexMap::new(),
            observers: ObserverRegistry::new(),
        }
    }

    /// Register an observer for every subsequent algorithm run
    ///
    /// The caller keeps its own handle; the graph only holds a shared
    /// reference for notification.
    pub fn add_observer(&mut self, observer: Rc<dyn GraphObserver<V>>) {
        self.observers.register(observer);
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    pub(crate) fn observers(&self) -> &ObserverRegistry<V> {
        &self.observers
    }

    /// Insert a vertex with no outgoing edges
    pub fn add_vertex(&mut self, vertex: V) -> Result<()> {
        if self.adjacency.contains_key(&vertex) {
            return Err(GraphError::duplicate_vertex(&vertex));
        }
        self.adjacency.insert(vertex, IndexMap::new());
        Ok(())
    }

    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// Record a directed edge, replacing the weight of an existing one
    ///
    /// Both endpoints must already exist and the weight must be non-negative.
    /// Nothing is modified unless every check passes.
    pub fn add_edge(&mut self, from: &V, to: &V, weight: i64) -> Result<()> {
        self.ensure_vertex(from)?;
        self.ensure_vertex(to)?;
        let weight = u64::try_from(weight).map_err(|_| GraphError::InvalidWeight { weight })?;

        if let Some(edges) = self.adjacency.get_mut(from) {
            edges.insert(to.clone(), weight);
        }
        Ok(())
    }

    /// Weight of the `from -> to` edge, or `None` when there is no such edge
    pub fn get_weight(&self, from: &V, to: &V) -> Result<Option<u64>> {
        self.ensure_vertex(from)?;
        self.ensure_vertex(to)?;
        Ok(self
            .adjacency
            .get(from)
            .and_then(|edges| edges.get(to))
            .copied())
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(IndexMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Vertices in insertion order
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.adjacency.keys()
    }

    /// Outgoing `(neighbor, weight)` pairs in edge insertion order
    ///
    /// Unknown vertices have no neighbors.
    pub fn neighbors<'a>(&'a self, vertex: &V) -> impl Iterator<Item = (&'a V, u64)> + 'a {
        self.adjacency
            .get(vertex)
            .into_iter()
            .flat_map(|edges| edges.iter().map(|(to, weight)| (to, *weight)))
    }

    pub(crate) fn ensure_vertex(&self, vertex: &V) -> Result<()> {
        if self.contains_vertex(vertex) {
            Ok(())
        } else {
            Err(GraphError::unknown_vertex(vertex))
        }
    }
}

impl<V: Vertex> Default for WeightedGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}

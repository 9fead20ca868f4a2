//! Observer protocol for algorithm progress
//!
//! Algorithms never print or collect results themselves. They drive an
//! [`ObserverRegistry`] through a fixed notification sequence:
//!
//! 1. `on_algorithm_begun` once, before any vertex is touched
//! 2. `on_visit` once per settled vertex
//! 3. `on_search_concluded` (BFS/DFS) right after the end vertex is visited
//! 4. `on_vertex_finalized` (Dijkstra) as each vertex enters the finished set
//! 5. `on_shortest_path_computed` (Dijkstra) once, with the start-to-end path
//!
//! Observers are invoked synchronously, in registration order.

use crate::graph::types::{AlgorithmKind, Cost};
use serde::Serialize;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Sink for algorithm notifications
///
/// Every callback defaults to a no-op so implementors only override what
/// they care about. Callbacks cannot influence the running algorithm.
pub trait GraphObserver<V> {
    fn on_algorithm_begun(&self, _kind: AlgorithmKind) {}

    fn on_visit(&self, _vertex: &V) {}

    fn on_search_concluded(&self) {}

    fn on_vertex_finalized(&self, _vertex: &V, _cost: Cost) {}

    fn on_shortest_path_computed(&self, _path: &[V]) {}
}

/// Ordered collection of observers attached to a graph
pub struct ObserverRegistry<V> {
    observers: Vec<Rc<dyn GraphObserver<V>>>,
}

impl<V> ObserverRegistry<V> {
    pub fn new() -> Self {
        Self {
            observers: Vec::new(),
        }
    }

    /// Append an observer; it will be notified after all earlier ones
    pub fn register(&mut self, observer: Rc<dyn GraphObserver<V>>) {
        self.observers.push(observer);
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    pub(crate) fn algorithm_begun(&self, kind: AlgorithmKind) {
        for observer in &self.observers {
            observer.on_algorithm_begun(kind);
        }
    }

    pub(crate) fn visit(&self, vertex: &V) {
        for observer in &self.observers {
            observer.on_visit(vertex);
        }
    }

    pub(crate) fn search_concluded(&self) {
        for observer in &self.observers {
            observer.on_search_concluded();
        }
    }

    pub(crate) fn vertex_finalized(&self, vertex: &V, cost: Cost) {
        for observer in &self.observers {
            observer.on_vertex_finalized(vertex, cost);
        }
    }

    pub(crate) fn shortest_path_computed(&self, path: &[V]) {
        for observer in &self.observers {
            observer.on_shortest_path_computed(path);
        }
    }
}

impl<V> Default for ObserverRegistry<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Clone for ObserverRegistry<V> {
    fn clone(&self) -> Self {
        Self {
            observers: self.observers.clone(),
        }
    }
}

impl<V> fmt::Debug for ObserverRegistry<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("observers", &self.observers.len())
            .finish()
    }
}

/// A single recorded notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Notification<V> {
    AlgorithmBegun { algorithm: AlgorithmKind },
    Visit { vertex: V },
    SearchConcluded,
    VertexFinalized { vertex: V, cost: Cost },
    ShortestPathComputed { path: Vec<V> },
}

/// Observer that records every notification it receives, in order
#[derive(Debug)]
pub struct NotificationLog<V> {
    events: RefCell<Vec<Notification<V>>>,
}

impl<V: Clone> NotificationLog<V> {
    pub fn new() -> Self {
        Self {
            events: RefCell::new(Vec::new()),
        }
    }

    /// Snapshot of everything recorded so far
    pub fn events(&self) -> Vec<Notification<V>> {
        self.events.borrow().clone()
    }

    /// Drain the log, leaving it empty for the next run
    pub fn take(&self) -> Vec<Notification<V>> {
        self.events.take()
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    /// Vertices passed to `on_visit`, in order
    pub fn visited(&self) -> Vec<V> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                Notification::Visit { vertex } => Some(vertex.clone()),
                _ => None,
            })
            .collect()
    }

    /// `(vertex, cost)` pairs passed to `on_vertex_finalized`, in order
    pub fn finalized(&self) -> Vec<(V, Cost)> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                Notification::VertexFinalized { vertex, cost } => Some((vertex.clone(), *cost)),
                _ => None,
            })
            .collect()
    }

    fn push(&self, event: Notification<V>) {
        self.events.borrow_mut().push(event);
    }
}

impl<V: Clone> Default for NotificationLog<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone> GraphObserver<V> for NotificationLog<V> {
    fn on_algorithm_begun(&self, kind: AlgorithmKind) {
        self.push(Notification::AlgorithmBegun { algorithm: kind });
    }

    fn on_visit(&self, vertex: &V) {
        self.push(Notification::Visit {
            vertex: vertex.clone(),
        });
    }

    fn on_search_concluded(&self) {
        self.push(Notification::SearchConcluded);
    }

    fn on_vertex_finalized(&self, vertex: &V, cost: Cost) {
        self.push(Notification::VertexFinalized {
            vertex: vertex.clone(),
            cost,
        });
    }

    fn on_shortest_path_computed(&self, path: &[V]) {
        self.push(Notification::ShortestPathComputed {
            path: path.to_vec(),
        });
    }
}

/// Observer that forwards notifications to `tracing` at trace level
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl<V: fmt::Debug> GraphObserver<V> for TracingObserver {
    fn on_algorithm_begun(&self, kind: AlgorithmKind) {
        tracing::trace!(algorithm = %kind, "algorithm_begun");
    }

    fn on_visit(&self, vertex: &V) {
        tracing::trace!(vertex = ?vertex, "visit");
    }

    fn on_search_concluded(&self) {
        tracing::trace!("search_concluded");
    }

    fn on_vertex_finalized(&self, vertex: &V, cost: Cost) {
        tracing::trace!(vertex = ?vertex, cost, "vertex_finalized");
    }

    fn on_shortest_path_computed(&self, path: &[V]) {
        tracing::trace!(path = ?path, hops = path.len().saturating_sub(1), "shortest_path_computed");
    }
}

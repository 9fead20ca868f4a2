//! Single-source shortest paths
//!
//! Vertex selection is a linear scan over the unfinished vertices rather than
//! a priority queue. The graphs this engine targets are maze-sized, and the
//! observable contract (vertices finalized in non-decreasing cost order) is
//! the same either way.

use crate::error::{GraphError, Result};
use crate::graph::types::{AlgorithmKind, Cost, ShortestPath, Vertex};
use crate::graph::WeightedGraph;
use std::collections::{HashMap, HashSet};

/// State tracked during a Dijkstra run
///
/// A vertex without a `cost` entry has infinite cost.
struct DijkstraState<V> {
    cost: HashMap<V, Cost>,
    predecessor: HashMap<V, V>,
    finished: HashSet<V>,
}

impl<V: Vertex> DijkstraState<V> {
    fn new(start: &V) -> Self {
        let mut cost = HashMap::new();
        let mut predecessor = HashMap::new();
        cost.insert(start.clone(), 0);
        predecessor.insert(start.clone(), start.clone());
        Self {
            cost,
            predecessor,
            finished: HashSet::new(),
        }
    }

    /// Cheapest unfinished vertex with a finite cost
    ///
    /// Ties go to the vertex inserted into the graph first. `None` means every
    /// unfinished vertex is unreachable.
    fn select_min(&self, graph: &WeightedGraph<V>) -> Option<(V, Cost)> {
        let mut best: Option<(&V, Cost)> = None;
        for vertex in graph.vertices() {
            if self.finished.contains(vertex) {
                continue;
            }
            if let Some(&cost) = self.cost.get(vertex) {
                if best.is_none_or(|(_, best_cost)| cost < best_cost) {
                    best = Some((vertex, cost));
                }
            }
        }
        best.map(|(vertex, cost)| (vertex.clone(), cost))
    }

    /// Lower the cost of unfinished neighbors reachable through `selected`
    fn relax(&mut self, graph: &WeightedGraph<V>, selected: &V, selected_cost: Cost) {
        for (neighbor, weight) in graph.neighbors(selected) {
            if self.finished.contains(neighbor) {
                continue;
            }
            let candidate = selected_cost.saturating_add(weight);
            let improves = self
                .cost
                .get(neighbor)
                .is_none_or(|&current| candidate < current);
            if improves {
                self.cost.insert(neighbor.clone(), candidate);
                self.predecessor.insert(neighbor.clone(), selected.clone());
            }
        }
    }

    /// Walk predecessors from `end` back to `start`
    ///
    /// The walk is bounded by `limit` steps, so a chain that never reaches
    /// `start` fails instead of looping.
    fn reconstruct(&self, start: &V, end: &V, limit: usize) -> Result<ShortestPath<V>> {
        if !self.finished.contains(end) {
            return Err(GraphError::no_path(start, end));
        }
        let cost = self
            .cost
            .get(end)
            .copied()
            .ok_or_else(|| GraphError::no_path(start, end))?;

        let mut vertices = vec![end.clone()];
        let mut current = end;
        while current != start {
            let previous = self
                .predecessor
                .get(current)
                .ok_or_else(|| GraphError::no_path(start, end))?;
            if vertices.len() >= limit {
                return Err(GraphError::no_path(start, end));
            }
            vertices.push(previous.clone());
            current = previous;
        }
        vertices.reverse();

        Ok(ShortestPath { vertices, cost })
    }
}

/// Dijkstra's algorithm from `start` over the whole graph
///
/// Every vertex reachable from `start` is finalized, in cost order, whether or
/// not it lies on the way to `end`. Afterwards the cheapest `start -> end`
/// path is reported through `on_shortest_path_computed` and returned.
///
/// Vertices unreachable from `start` are never finalized. If `end` is one of
/// them the run fails with [`GraphError::NoPathExists`] and no path is
/// reported.
#[tracing::instrument(skip_all, fields(start = ?start, end = ?end, vertices = graph.vertex_count()))]
pub fn dijkstra_shortest_path<V: Vertex>(
    graph: &WeightedGraph<V>,
    start: &V,
    end: &V,
) -> Result<ShortestPath<V>> {
    graph.ensure_vertex(start)?;
    graph.ensure_vertex(end)?;

    let observers = graph.observers();
    observers.algorithm_begun(AlgorithmKind::Dijkstra);

    let mut state = DijkstraState::new(start);

    for _ in 0..graph.vertex_count() {
        let Some((selected, cost)) = state.select_min(graph) else {
            tracing::debug!(
                unreachable = graph.vertex_count() - state.finished.len(),
                "remaining vertices unreachable"
            );
            break;
        };

        state.finished.insert(selected.clone());
        observers.vertex_finalized(&selected, cost);
        state.relax(graph, &selected, cost);
    }

    let path = state.reconstruct(start, end, graph.vertex_count())?;
    tracing::debug!(cost = path.cost, hops = path.hops(), "shortest_path_computed");
    observers.shortest_path_computed(&path.vertices);

    Ok(path)
}

impl<V: Vertex> WeightedGraph<V> {
    /// Run Dijkstra's algorithm; see [`dijkstra_shortest_path`]
    pub fn run_dijkstra(&self, start: &V, end: &V) -> Result<ShortestPath<V>> {
        dijkstra_shortest_path(self, start, end)
    }
}

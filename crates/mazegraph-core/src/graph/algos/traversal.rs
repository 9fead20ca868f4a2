use crate::error::Result;
use crate::graph::types::{AlgorithmKind, SearchOutcome, Vertex};
use crate::graph::WeightedGraph;
use std::collections::{HashSet, VecDeque};

/// Discovery structure for an early-exit traversal
///
/// The only difference between BFS and DFS is which discovered vertex is
/// handed out next.
pub trait Frontier<T> {
    fn discover(&mut self, item: T);

    fn next_candidate(&mut self) -> Option<T>;
}

/// FIFO discovery: level order
impl<T> Frontier<T> for VecDeque<T> {
    fn discover(&mut self, item: T) {
        self.push_back(item);
    }

    fn next_candidate(&mut self) -> Option<T> {
        self.pop_front()
    }
}

/// LIFO discovery: stack order
impl<T> Frontier<T> for Vec<T> {
    fn discover(&mut self, item: T) {
        self.push(item);
    }

    fn next_candidate(&mut self) -> Option<T> {
        self.pop()
    }
}

/// Visit vertices reachable from `start` until `end` is visited
///
/// A vertex may be discovered several times; only the first time it is
/// handed out by the frontier counts as a visit. Neighbors of `end` are never
/// examined.
pub(crate) fn traverse<V, F>(
    graph: &WeightedGraph<V>,
    start: &V,
    end: &V,
    kind: AlgorithmKind,
    mut frontier: F,
) -> Result<SearchOutcome>
where
    V: Vertex,
    F: Frontier<V>,
{
    graph.ensure_vertex(start)?;
    graph.ensure_vertex(end)?;

    let observers = graph.observers();
    observers.algorithm_begun(kind);

    let mut visited: HashSet<V> = HashSet::new();
    frontier.discover(start.clone());

    while let Some(current) = frontier.next_candidate() {
        if !visited.insert(current.clone()) {
            continue;
        }

        observers.visit(&current);

        if current == *end {
            observers.search_concluded();
            tracing::debug!(algorithm = %kind, visited = visited.len(), "search_concluded");
            return Ok(SearchOutcome::Concluded);
        }

        for (neighbor, _) in graph.neighbors(&current) {
            if !visited.contains(neighbor) {
                frontier.discover(neighbor.clone());
            }
        }
    }

    tracing::debug!(algorithm = %kind, visited = visited.len(), "search_exhausted");
    Ok(SearchOutcome::Exhausted)
}

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;

/// Identity of a graph vertex
///
/// Vertices are compared by value. `Debug` is required so that errors can
/// name the vertex that caused them.
pub trait Vertex: Clone + Eq + Hash + fmt::Debug {}

impl<T> Vertex for T where T: Clone + Eq + Hash + fmt::Debug {}

/// Accumulated path cost from the start vertex
pub type Cost = u64;

/// The algorithm a notification stream belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlgorithmKind {
    Bfs,
    Dfs,
    Dijkstra,
}

impl AlgorithmKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlgorithmKind::Bfs => "bfs",
            AlgorithmKind::Dfs => "dfs",
            AlgorithmKind::Dijkstra => "dijkstra",
        }
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a BFS or DFS run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchOutcome {
    /// The end vertex was visited and `on_search_concluded` fired
    Concluded,
    /// The discovery structure ran dry without reaching the end vertex
    Exhausted,
}

impl SearchOutcome {
    pub fn is_concluded(&self) -> bool {
        matches!(self, SearchOutcome::Concluded)
    }
}

/// Result of a Dijkstra run: the cheapest start-to-end vertex sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPath<V> {
    /// Vertices from start to end, both inclusive
    pub vertices: Vec<V>,
    /// Sum of the edge weights along `vertices`
    pub cost: Cost,
}

impl<V> ShortestPath<V> {
    /// Number of edges on the path
    pub fn hops(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }
}

use crate::error::Result;
use crate::graph::algos::traversal::traverse;
use crate::graph::types::{AlgorithmKind, SearchOutcome, Vertex};
use crate::graph::WeightedGraph;

/// Depth-first search from `start`, stopping once `end` is visited
///
/// Unvisited neighbors are pushed in edge insertion order, so the most
/// recently added edge of a vertex is explored first. Termination follows the
/// same rules as [`bfs_search`](super::bfs_search).
#[tracing::instrument(skip_all, fields(start = ?start, end = ?end))]
pub fn dfs_search<V: Vertex>(graph: &WeightedGraph<V>, start: &V, end: &V) -> Result<SearchOutcome> {
    traverse(graph, start, end, AlgorithmKind::Dfs, Vec::new())
}

impl<V: Vertex> WeightedGraph<V> {
    /// Run a depth-first search; see [`dfs_search`]
    pub fn run_dfs(&self, start: &V, end: &V) -> Result<SearchOutcome> {
        dfs_search(self, start, end)
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::observer::{Notification, NotificationLog};
    use crate::graph::types::{AlgorithmKind, SearchOutcome};
    use crate::graph::WeightedGraph;
    use std::rc::Rc;

    /// A -> B, A -> C, B -> D, C -> E
    fn tree() -> (WeightedGraph<char>, Rc<NotificationLog<char>>) {
        let mut graph = WeightedGraph::new();
        for v in ['A', 'B', 'C', 'D', 'E'] {
            graph.add_vertex(v).unwrap();
        }
        graph.add_edge(&'A', &'B', 1).unwrap();
        graph.add_edge(&'A', &'C', 1).unwrap();
        graph.add_edge(&'B', &'D', 1).unwrap();
        graph.add_edge(&'C', &'E', 1).unwrap();
        let log = Rc::new(NotificationLog::<char>::new());
        graph.add_observer(log.clone());
        (graph, log)
    }

    #[test]
    fn test_dfs_start_equals_end() {
        let (graph, log) = tree();

        graph.run_dfs(&'A', &'A').unwrap();

        assert_eq!(
            log.events(),
            vec![
                Notification::AlgorithmBegun {
                    algorithm: AlgorithmKind::Dfs
                },
                Notification::Visit { vertex: 'A' },
                Notification::SearchConcluded,
            ]
        );
    }

    #[test]
    fn test_dfs_explores_last_inserted_edge_first() {
        let (graph, log) = tree();

        let outcome = graph.run_dfs(&'A', &'D').unwrap();

        assert_eq!(outcome, SearchOutcome::Concluded);
        assert_eq!(log.visited(), vec!['A', 'C', 'E', 'B', 'D']);
    }

    #[test]
    fn test_dfs_order_is_reproducible() {
        let (graph, log) = tree();

        graph.run_dfs(&'A', &'D').unwrap();
        let first = log.take();
        graph.run_dfs(&'A', &'D').unwrap();
        let second = log.take();

        assert_eq!(first, second);
    }

    #[test]
    fn test_dfs_unreachable_end_is_silent() {
        let (graph, log) = tree();

        let outcome = graph.run_dfs(&'B', &'E').unwrap();

        assert_eq!(outcome, SearchOutcome::Exhausted);
        assert_eq!(log.visited(), vec!['B', 'D']);
        assert!(!log.events().contains(&Notification::SearchConcluded));
    }

    #[test]
    fn test_dfs_handles_cycles() {
        let mut graph = WeightedGraph::new();
        for v in [1u32, 2, 3, 4] {
            graph.add_vertex(v).unwrap();
        }
        graph.add_edge(&1, &2, 1).unwrap();
        graph.add_edge(&2, &3, 1).unwrap();
        graph.add_edge(&3, &1, 1).unwrap();
        graph.add_edge(&3, &4, 1).unwrap();
        let log = Rc::new(NotificationLog::<u32>::new());
        graph.add_observer(log.clone());

        graph.run_dfs(&1, &4).unwrap();

        assert_eq!(log.visited(), vec![1, 2, 3, 4]);
    }
}

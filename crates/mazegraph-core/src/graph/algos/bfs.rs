use crate::error::Result;
use crate::graph::algos::traversal::traverse;
use crate::graph::types::{AlgorithmKind, SearchOutcome, Vertex};
use crate::graph::WeightedGraph;
use std::collections::VecDeque;

/// Breadth-first search from `start`, stopping once `end` is visited
///
/// Progress is reported through the graph's observers. An unreachable `end`
/// is not an error: the queue simply runs dry and `SearchOutcome::Exhausted`
/// is returned without `on_search_concluded` ever firing.
#[tracing::instrument(skip_all, fields(start = ?start, end = ?end))]
pub fn bfs_search<V: Vertex>(graph: &WeightedGraph<V>, start: &V, end: &V) -> Result<SearchOutcome> {
    traverse(graph, start, end, AlgorithmKind::Bfs, VecDeque::new())
}

impl<V: Vertex> WeightedGraph<V> {
    /// Run a breadth-first search; see [`bfs_search`]
    pub fn run_bfs(&self, start: &V, end: &V) -> Result<SearchOutcome> {
        bfs_search(self, start, end)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::GraphError;
    use crate::graph::observer::{Notification, NotificationLog};
    use crate::graph::types::{AlgorithmKind, SearchOutcome};
    use crate::graph::WeightedGraph;
    use std::rc::Rc;

    fn graph_with(
        vertices: &[&'static str],
        edges: &[(&'static str, &'static str, i64)],
    ) -> (WeightedGraph<&'static str>, Rc<NotificationLog<&'static str>>) {
        let mut graph = WeightedGraph::new();
        for v in vertices {
            graph.add_vertex(*v).unwrap();
        }
        for (from, to, weight) in edges {
            graph.add_edge(from, to, *weight).unwrap();
        }
        let log = Rc::new(NotificationLog::<&str>::new());
        graph.add_observer(log.clone());
        (graph, log)
    }

    #[test]
    fn test_bfs_linear_chain() {
        let (graph, log) = graph_with(
            &["A", "B", "C", "D"],
            &[("A", "B", 1), ("B", "C", 1), ("C", "D", 1)],
        );

        let outcome = graph.run_bfs(&"A", &"D").unwrap();

        assert_eq!(outcome, SearchOutcome::Concluded);
        assert_eq!(
            log.events(),
            vec![
                Notification::AlgorithmBegun {
                    algorithm: AlgorithmKind::Bfs
                },
                Notification::Visit { vertex: "A" },
                Notification::Visit { vertex: "B" },
                Notification::Visit { vertex: "C" },
                Notification::Visit { vertex: "D" },
                Notification::SearchConcluded,
            ]
        );
    }

    #[test]
    fn test_bfs_start_equals_end() {
        let (graph, log) = graph_with(&["A", "B"], &[("A", "B", 1)]);

        graph.run_bfs(&"A", &"A").unwrap();

        assert_eq!(
            log.events(),
            vec![
                Notification::AlgorithmBegun {
                    algorithm: AlgorithmKind::Bfs
                },
                Notification::Visit { vertex: "A" },
                Notification::SearchConcluded,
            ]
        );
    }

    #[test]
    fn test_bfs_visits_level_by_level() {
        // A -> B, A -> C, B -> D, C -> E, D -> F
        let (graph, log) = graph_with(
            &["A", "B", "C", "D", "E", "F"],
            &[
                ("A", "B", 1),
                ("A", "C", 1),
                ("B", "D", 1),
                ("C", "E", 1),
                ("D", "F", 1),
            ],
        );

        graph.run_bfs(&"A", &"F").unwrap();

        assert_eq!(log.visited(), vec!["A", "B", "C", "D", "E", "F"]);
    }

    #[test]
    fn test_bfs_stops_without_expanding_end() {
        let (graph, log) = graph_with(
            &["A", "B", "C"],
            &[("A", "B", 1), ("B", "C", 1), ("A", "C", 1)],
        );

        graph.run_bfs(&"A", &"B").unwrap();

        assert_eq!(log.visited(), vec!["A", "B"]);
    }

    #[test]
    fn test_bfs_duplicate_discoveries_visited_once() {
        // Diamond: D is discovered from both B and C
        let (graph, log) = graph_with(
            &["A", "B", "C", "D", "E"],
            &[
                ("A", "B", 1),
                ("A", "C", 1),
                ("B", "D", 1),
                ("C", "D", 1),
                ("D", "E", 1),
            ],
        );

        graph.run_bfs(&"A", &"E").unwrap();

        assert_eq!(log.visited(), vec!["A", "B", "C", "D", "E"]);
    }

    #[test]
    fn test_bfs_unreachable_end_is_silent() {
        let (graph, log) = graph_with(&["A", "B", "C"], &[("A", "B", 1), ("C", "A", 1)]);

        let outcome = graph.run_bfs(&"A", &"C").unwrap();

        assert_eq!(outcome, SearchOutcome::Exhausted);
        assert_eq!(log.visited(), vec!["A", "B"]);
        assert!(!log.events().contains(&Notification::SearchConcluded));
    }

    #[test]
    fn test_bfs_ignores_edge_direction_backwards() {
        let (graph, log) = graph_with(&["A", "B"], &[("B", "A", 1)]);

        let outcome = graph.run_bfs(&"A", &"B").unwrap();

        assert!(!outcome.is_concluded());
        assert_eq!(log.visited(), vec!["A"]);
    }

    #[test]
    fn test_bfs_unknown_vertex_fails_before_notifying() {
        let (graph, log) = graph_with(&["A"], &[]);

        let err = graph.run_bfs(&"A", &"Z").unwrap_err();

        assert!(matches!(err, GraphError::UnknownVertex { .. }));
        assert!(log.is_empty());
    }
}

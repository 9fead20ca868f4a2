use crate::error::Result;
use crate::graph::WeightedGraph;
use crate::maze::{Direction, Juncture, Maze};

/// Convert a maze into a directed weighted graph
///
/// Every juncture becomes a vertex, added row by row. Each open side of a
/// juncture becomes an edge to the neighbor on that side, weighted with the
/// maze's weight for leaving in that direction. Two adjacent open junctures
/// therefore end up connected in both directions, possibly with different
/// weights.
#[tracing::instrument(skip_all, fields(width = maze.width(), height = maze.height()))]
pub fn build_maze_graph(maze: &Maze) -> Result<WeightedGraph<Juncture>> {
    let mut graph = WeightedGraph::new();

    for y in 0..maze.height() {
        for x in 0..maze.width() {
            let current = Juncture::new(x, y);
            if !graph.contains_vertex(&current) {
                graph.add_vertex(current)?;
            }

            for direction in Direction::ALL {
                if maze.is_wall(current, direction) {
                    continue;
                }
                let Some(next) = maze.neighbor(current, direction) else {
                    continue;
                };
                if !graph.contains_vertex(&next) {
                    graph.add_vertex(next)?;
                }
                graph.add_edge(&current, &next, maze.weight(current, direction))?;
            }
        }
    }

    tracing::debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "maze_graph_built"
    );
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraphError;

    #[test]
    fn test_open_maze_connects_all_neighbors() {
        let maze = Maze::new(2, 2, 1);

        let graph = build_maze_graph(&maze).unwrap();

        assert_eq!(graph.vertex_count(), 4);
        // 4 undirected adjacencies, each as two directed edges
        assert_eq!(graph.edge_count(), 8);
        assert_eq!(
            graph
                .get_weight(&Juncture::new(0, 0), &Juncture::new(1, 1))
                .unwrap(),
            None
        );
    }

    #[test]
    fn test_walls_remove_both_edges() {
        let mut maze = Maze::new(2, 1, 1);
        maze.add_wall(Juncture::new(0, 0), Direction::Right);

        let graph = build_maze_graph(&maze).unwrap();

        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_directional_weights_carry_over() {
        let mut maze = Maze::new(2, 1, 1);
        maze.set_weight(Juncture::new(0, 0), Direction::Right, 7);

        let graph = build_maze_graph(&maze).unwrap();

        let a = Juncture::new(0, 0);
        let b = Juncture::new(1, 0);
        assert_eq!(graph.get_weight(&a, &b).unwrap(), Some(7));
        assert_eq!(graph.get_weight(&b, &a).unwrap(), Some(1));
    }

    #[test]
    fn test_vertices_added_row_by_row() {
        let maze = Maze::new(2, 2, 1);

        let graph = build_maze_graph(&maze).unwrap();

        let order: Vec<_> = graph.vertices().copied().collect();
        assert_eq!(
            order,
            vec![
                Juncture::new(0, 0),
                Juncture::new(1, 0),
                Juncture::new(0, 1),
                Juncture::new(1, 1),
            ]
        );
    }

    #[test]
    fn test_negative_maze_weight_is_rejected() {
        let mut maze = Maze::new(2, 1, 1);
        maze.set_weight(Juncture::new(1, 0), Direction::Left, -2);

        let err = build_maze_graph(&maze).unwrap_err();

        assert!(matches!(err, GraphError::InvalidWeight { weight: -2 }));
    }
}

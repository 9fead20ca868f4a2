//! Shared helpers for commands

use std::path::Path;
use std::time::Instant;

use mazegraph_core::config::MazeConfig;
use mazegraph_core::error::Result;
use mazegraph_core::{build_maze_graph, trace_time, Juncture, Maze, WeightedGraph};

/// A maze file loaded and converted into a graph
pub struct LoadedMaze {
    pub config: MazeConfig,
    pub maze: Maze,
    pub graph: WeightedGraph<Juncture>,
}

/// Read, validate and convert a maze description
pub fn load_maze(path: &Path) -> Result<LoadedMaze> {
    let start = Instant::now();

    let config = MazeConfig::load(path)?;
    let maze = Maze::from_config(&config)?;
    trace_time!(start, "load_maze");

    let graph = build_maze_graph(&maze)?;
    trace_time!(start, "build_graph", vertices = graph.vertex_count());

    Ok(LoadedMaze {
        config,
        maze,
        graph,
    })
}

/// Juncture rendered without spaces, for records output
pub fn compact(juncture: &Juncture) -> String {
    format!("{},{}", juncture.x, juncture.y)
}

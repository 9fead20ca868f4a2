//! Mazegraph Core Library
//!
//! A directed, weighted graph engine with observable breadth-first search,
//! depth-first search and Dijkstra's algorithm, plus an adapter that turns
//! rectangular mazes into graphs.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod maze;

pub use error::{GraphError, Result};
pub use graph::{
    AlgorithmKind, GraphObserver, Notification, NotificationLog, SearchOutcome, ShortestPath,
    WeightedGraph,
};
pub use maze::{build_maze_graph, Juncture, Maze};

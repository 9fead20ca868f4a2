//! Graph algorithm implementations
//!
//! Contains concrete implementations of graph algorithms:
//! - `bfs`: Breadth-first reachability probe
//! - `dfs`: Depth-first reachability probe
//! - `dijkstra`: Single-source shortest paths with path reconstruction
//! - `traversal`: The visit loop shared by BFS and DFS

pub mod bfs;
pub mod dfs;
pub mod dijkstra;
pub mod traversal;

pub use bfs::bfs_search;
pub use dfs::dfs_search;
pub use dijkstra::dijkstra_shortest_path;
pub use traversal::Frontier;

//! Graph storage, observation and search
//!
//! Provides the directed weighted graph engine:
//! - `store`: vertex and edge storage with structural invariants
//! - `observer`: notification protocol used by every algorithm
//! - `algos`: BFS, DFS and Dijkstra driven through the observers

pub mod algos;
pub mod observer;
pub mod store;
pub mod types;

pub use algos::{bfs_search, dfs_search, dijkstra_shortest_path};
pub use observer::{GraphObserver, Notification, NotificationLog, ObserverRegistry, TracingObserver};
pub use store::WeightedGraph;
pub use types::{AlgorithmKind, Cost, SearchOutcome, ShortestPath, Vertex};

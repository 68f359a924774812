pub mod bellman_ford;
pub mod dijkstra;
pub mod floyd_warshall;
pub mod kruskal;
pub mod topological;
pub mod traits;
pub mod traversal;

pub use traits::{ShortestPathAlgorithm, ShortestPathResult};

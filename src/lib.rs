//! Classic graph algorithms over a single parameterized graph representation.
//!
//! The crate provides an edge-list/adjacency-list graph type that covers
//! directed/undirected and weighted/unweighted variants, a disjoint-set
//! forest, and the textbook algorithms built on top of them: Dijkstra,
//! Bellman-Ford, Floyd-Warshall, Kruskal's minimum spanning tree and Kahn's
//! topological sort, plus iterative breadth-first and depth-first traversals.
//!
//! All algorithms are pure functions over an immutable graph (topological
//! sort works on its own clone); there is no shared state between calls.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    bellman_ford::BellmanFord, dijkstra::Dijkstra, floyd_warshall::FloydWarshall,
    kruskal::Kruskal, topological::TopologicalSort, ShortestPathAlgorithm, ShortestPathResult,
};
pub use data_structures::UnionFind;
/// Re-export main types for convenient use
pub use graph::adjacency::AdjacencyGraph;
pub use graph::edge::Edge;

/// Error types for the library
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid node ID: {0}")]
    InvalidNode(usize),

    #[error("Graph carries no edge weights")]
    Unweighted,

    #[error("Negative edge weight on edge from {0} to {1}")]
    NegativeWeight(usize, usize),

    #[error("Graph contains a negative cycle")]
    NegativeCycle,

    #[error("Graph contains a cycle; no topological order exists")]
    CycleDetected,
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;

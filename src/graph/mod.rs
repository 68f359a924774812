pub mod adjacency;
pub mod edge;
pub mod generators;
pub mod traits;

pub use adjacency::AdjacencyGraph;
pub use edge::Edge;
pub use traits::Graph;

use num_traits::{PrimInt, Signed};
use std::fmt::Debug;

/// Read-only view of a graph, shared by the algorithms that only need
/// adjacency and weight lookups (Dijkstra, Floyd-Warshall, traversals).
pub trait Graph<W>: Debug
where
    W: PrimInt + Signed + Debug,
{
    /// Returns the number of nodes in the graph
    fn node_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns true if the graph was constructed as directed
    fn is_directed(&self) -> bool;

    /// Returns true if the graph carries edge weights
    fn is_weighted(&self) -> bool;

    /// Returns an iterator over the neighbors of a node, in edge insertion order
    fn neighbors(&self, node: usize) -> Box<dyn Iterator<Item = usize> + '_>;

    /// Returns true if the node exists in the graph
    fn has_node(&self, node: usize) -> bool;

    /// Returns true if there is an edge between the two nodes
    fn has_edge(&self, from: usize, to: usize) -> bool;

    /// Gets the weight of an edge if it exists and the graph is weighted
    fn edge_weight(&self, from: usize, to: usize) -> Option<W>;
}

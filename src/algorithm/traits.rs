use crate::graph::Graph;
use crate::Result;
use num_traits::{PrimInt, Signed};
use std::collections::HashSet;
use std::fmt::Debug;

/// Result of a single-source shortest path computation.
///
/// `None` in `distances` means the node is unreachable from the source;
/// `None` in `predecessors` means the node has no predecessor (the source
/// itself, or an unreachable node). Disconnected inputs are therefore a
/// defined output state, not an error.
#[derive(Debug, Clone)]
pub struct ShortestPathResult<W>
where
    W: PrimInt + Signed + Debug,
{
    /// Distance from the source to each node
    pub distances: Vec<Option<W>>,

    /// Predecessor of each node in the shortest path tree
    pub predecessors: Vec<Option<usize>>,

    /// Source node ID
    pub source: usize,
}

/// Trait for single-source shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: PrimInt + Signed + Debug,
    G: Graph<W>,
{
    /// Compute shortest paths from a source node to all other nodes
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Reconstructs the path from the source to `target` by walking the
    /// predecessor tree. Returns `None` for unreachable targets, and for
    /// predecessor structures that do not lead back to the source.
    fn get_path(&self, result: &ShortestPathResult<W>, target: usize) -> Option<Vec<usize>> {
        if target >= result.predecessors.len() || result.distances[target].is_none() {
            return None;
        }

        let mut path = Vec::new();
        let mut current = target;
        let mut visited = HashSet::new();

        while current != result.source {
            // A revisited node means the predecessor structure has a cycle.
            if !visited.insert(current) {
                log::warn!("cycle in predecessor structure at node {}", current);
                return None;
            }
            path.push(current);
            current = result.predecessors[current]?;
        }

        path.push(result.source);
        path.reverse();

        Some(path)
    }
}

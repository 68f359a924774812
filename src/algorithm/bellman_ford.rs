use num_traits::{PrimInt, Signed, Zero};
use std::fmt::Debug;

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::{AdjacencyGraph, Graph};
use crate::{Error, Result};

/// Bellman-Ford single-source shortest path algorithm.
///
/// Handles negative edge weights. Runs in two phases: relax the full edge
/// list exactly `V-1` times, which converges every simple path, then run one
/// more relaxation pass over all edges; if anything still relaxes there is
/// a negative cycle and the distances are meaningless, so the computation
/// fails with [`Error::NegativeCycle`] instead of returning them.
///
/// Works on the edge list directly, so it is implemented for
/// [`AdjacencyGraph`] rather than the read-only `Graph` view.
#[derive(Debug, Default)]
pub struct BellmanFord;

impl BellmanFord {
    /// Creates a new Bellman-Ford algorithm instance
    pub fn new() -> Self {
        BellmanFord
    }
}

impl<W> ShortestPathAlgorithm<W, AdjacencyGraph<W>> for BellmanFord
where
    W: PrimInt + Signed + Zero + Debug,
{
    fn name(&self) -> &'static str {
        "Bellman-Ford"
    }

    fn compute_shortest_paths(
        &self,
        graph: &AdjacencyGraph<W>,
        source: usize,
    ) -> Result<ShortestPathResult<W>> {
        if !graph.has_node(source) {
            return Err(Error::InvalidNode(source));
        }
        if !graph.is_weighted() {
            return Err(Error::Unweighted);
        }

        let n = graph.node_count();

        // Undirected graphs relax every edge in both directions.
        let mut arcs: Vec<(usize, usize, W)> = Vec::with_capacity(graph.edge_count() * 2);
        for edge in graph.edges() {
            let weight = match edge.weight() {
                Some(weight) => weight,
                None => continue,
            };
            arcs.push((edge.source(), edge.dest(), weight));
            if !graph.is_directed() {
                arcs.push((edge.dest(), edge.source(), weight));
            }
        }

        let mut distances: Vec<Option<W>> = vec![None; n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        distances[source] = Some(W::zero());

        // Convergence phase: V-1 full passes cover every simple path.
        for _ in 1..n {
            for &(u, v, weight) in &arcs {
                if let Some(dist_u) = distances[u] {
                    let new_dist = dist_u + weight;
                    let should_update = match distances[v] {
                        None => true,
                        Some(current) => new_dist < current,
                    };
                    if should_update {
                        distances[v] = Some(new_dist);
                        predecessors[v] = Some(u);
                    }
                }
            }
        }

        // Verification phase: any edge that still relaxes lies on a path
        // through a negative cycle.
        for &(u, v, weight) in &arcs {
            if let Some(dist_u) = distances[u] {
                let new_dist = dist_u + weight;
                if distances[v].map_or(true, |current| new_dist < current) {
                    log::debug!(
                        "negative cycle: edge {} -> {} still relaxes after {} passes",
                        u,
                        v,
                        n - 1
                    );
                    return Err(Error::NegativeCycle);
                }
            }
        }

        Ok(ShortestPathResult {
            distances,
            predecessors,
            source,
        })
    }
}

use num_traits::{PrimInt, Signed, Zero};
use std::fmt::Debug;

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::Graph;
use crate::{Error, Result};

/// Dijkstra's single-source shortest path algorithm, linear-scan variant.
///
/// Each iteration picks the unvisited node with the smallest tentative
/// distance by scanning the unvisited set (O(V) per pick, O(V^2) total,
/// no priority queue) and relaxes its outgoing edges. Nodes never reached
/// stay at `None` distance with no predecessor.
///
/// Requires non-negative weights; a negative edge is rejected up front
/// with [`Error::NegativeWeight`] instead of silently producing wrong
/// distances.
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: PrimInt + Signed + Zero + Debug,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        if !graph.has_node(source) {
            return Err(Error::InvalidNode(source));
        }
        if !graph.is_weighted() {
            return Err(Error::Unweighted);
        }

        let n = graph.node_count();

        let mut distances: Vec<Option<W>> = vec![None; n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        let mut unvisited: Vec<usize> = (0..n).collect();

        distances[source] = Some(W::zero());

        while !unvisited.is_empty() {
            // Linear scan for the unvisited node closest to the source.
            let mut nearest: Option<(usize, W)> = None;
            for (position, &node) in unvisited.iter().enumerate() {
                if let Some(dist) = distances[node] {
                    match nearest {
                        Some((_, best)) if best <= dist => {}
                        _ => nearest = Some((position, dist)),
                    }
                }
            }

            // Every remaining node is unreachable; that is a defined
            // output state for disconnected graphs.
            let (position, dist_u) = match nearest {
                Some(found) => found,
                None => break,
            };
            let u = unvisited.swap_remove(position);

            for v in graph.neighbors(u) {
                let weight = match graph.edge_weight(u, v) {
                    Some(weight) => weight,
                    None => continue,
                };
                if weight < W::zero() {
                    return Err(Error::NegativeWeight(u, v));
                }

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

        Ok(ShortestPathResult {
            distances,
            predecessors,
            source,
        })
    }
}

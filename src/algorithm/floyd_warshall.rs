use num_traits::{PrimInt, Signed, Zero};
use std::fmt::Debug;

use crate::graph::Graph;
use crate::{Error, Result};

/// All-pairs shortest path distances plus the next-hop matrix needed to
/// reconstruct the paths. Owned by the caller; nothing is cached.
#[derive(Debug, Clone)]
pub struct AllPairsResult<W>
where
    W: PrimInt + Signed + Debug,
{
    /// `distances[i][j]` is the shortest distance from i to j;
    /// `None` means no path.
    pub distances: Vec<Vec<Option<W>>>,

    /// `next[i][j]` is the node that follows i on the shortest path to j.
    pub next: Vec<Vec<Option<usize>>>,
}

impl<W> AllPairsResult<W>
where
    W: PrimInt + Signed + Debug,
{
    /// Reconstructs the shortest path from `from` to `to` by walking the
    /// next-hop matrix until the endpoints meet. Returns `None` when no
    /// path exists.
    pub fn path(&self, from: usize, to: usize) -> Option<Vec<usize>> {
        if from >= self.next.len() || to >= self.next.len() {
            return None;
        }
        self.next[from][to]?;

        let mut path = vec![from];
        let mut current = from;
        while current != to {
            current = self.next[current][to]?;
            path.push(current);
        }
        Some(path)
    }
}

/// Floyd-Warshall all-pairs shortest path algorithm.
///
/// Negative edge weights are fine; a negative cycle is not. The relaxation
/// that drives a diagonal entry below zero proves one exists, and the
/// computation aborts right there with [`Error::NegativeCycle`]; every
/// distance produced after that point would be meaningless.
#[derive(Debug, Default)]
pub struct FloydWarshall;

impl FloydWarshall {
    /// Creates a new Floyd-Warshall algorithm instance
    pub fn new() -> Self {
        FloydWarshall
    }

    /// Computes shortest distances between every pair of nodes.
    pub fn compute_all_pairs<W, G>(&self, graph: &G) -> Result<AllPairsResult<W>>
    where
        W: PrimInt + Signed + Zero + Debug,
        G: Graph<W>,
    {
        if !graph.is_weighted() {
            return Err(Error::Unweighted);
        }

        let n = graph.node_count();

        // None plays the role of the "infinity" sentinel; relaxing only
        // when both legs are Some sidesteps sentinel-overflow entirely.
        let mut distances: Vec<Vec<Option<W>>> = vec![vec![None; n]; n];
        let mut next: Vec<Vec<Option<usize>>> = vec![vec![None; n]; n];

        for i in 0..n {
            for j in graph.neighbors(i) {
                distances[i][j] = graph.edge_weight(i, j);
                next[i][j] = Some(j);
            }
        }
        for i in 0..n {
            distances[i][i] = Some(W::zero());
            next[i][i] = Some(i);
        }

        for k in 0..n {
            for i in 0..n {
                let via_k = match distances[i][k] {
                    Some(d) => d,
                    None => continue,
                };
                for j in 0..n {
                    let leg = match distances[k][j] {
                        Some(d) => d,
                        None => continue,
                    };
                    let candidate = via_k + leg;
                    let improves = match distances[i][j] {
                        None => true,
                        Some(current) => candidate < current,
                    };
                    if improves {
                        if i == j && candidate < W::zero() {
                            log::debug!("negative cycle through node {}", i);
                            return Err(Error::NegativeCycle);
                        }
                        distances[i][j] = Some(candidate);
                        next[i][j] = next[i][k];
                    }
                }
            }
        }

        Ok(AllPairsResult { distances, next })
    }
}

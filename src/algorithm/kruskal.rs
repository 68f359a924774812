use num_traits::{PrimInt, Signed, Zero};
use std::fmt::Debug;

use crate::data_structures::UnionFind;
use crate::graph::{AdjacencyGraph, Edge, Graph};
use crate::{Error, Result};

/// The edge subset Kruskal's algorithm accepted, with its total weight.
///
/// On a connected graph this is a minimum spanning tree
/// (`component_count == 1`). On a disconnected graph the scan still runs to
/// completion and yields a minimum spanning forest; `component_count` says
/// how many trees it holds, so a forest can never masquerade as a tree.
#[derive(Debug, Clone)]
pub struct MinimumSpanningTree<W>
where
    W: PrimInt + Signed + Debug,
{
    /// Accepted edges, in the order the ascending scan accepted them
    pub edges: Vec<Edge<W>>,

    /// Sum of the accepted edge weights
    pub total_weight: W,

    /// Number of connected components left in the forest
    pub component_count: usize,
}

impl<W> MinimumSpanningTree<W>
where
    W: PrimInt + Signed + Debug,
{
    /// True when the accepted edges span the whole graph as a single tree.
    pub fn is_spanning_tree(&self) -> bool {
        self.component_count == 1
    }
}

/// Kruskal's minimum spanning tree algorithm.
///
/// Scans the edges in ascending weight order and accepts an edge whenever
/// its endpoints lie in different union-find components. Edge direction is
/// ignored; spanning trees are an undirected notion.
#[derive(Debug, Default)]
pub struct Kruskal;

impl Kruskal {
    /// Creates a new Kruskal algorithm instance
    pub fn new() -> Self {
        Kruskal
    }

    /// Computes a minimum spanning tree (or forest, for disconnected input).
    pub fn compute_mst<W>(&self, graph: &AdjacencyGraph<W>) -> Result<MinimumSpanningTree<W>>
    where
        W: PrimInt + Signed + Zero + Debug,
    {
        if !graph.is_weighted() {
            return Err(Error::Unweighted);
        }

        let mut forest = UnionFind::new(graph.node_count());
        let mut accepted = Vec::new();
        let mut total_weight = W::zero();

        for edge in graph.edges_by_weight() {
            // Endpoints sharing a root would close a cycle; skip the edge.
            if forest.union(edge.source(), edge.dest()) {
                if let Some(weight) = edge.weight() {
                    total_weight = total_weight + weight;
                }
                accepted.push(edge);
            }
        }

        let component_count = forest.components();
        if component_count > 1 {
            log::debug!(
                "input graph is disconnected: spanning forest with {} components",
                component_count
            );
        }

        Ok(MinimumSpanningTree {
            edges: accepted,
            total_weight,
            component_count,
        })
    }
}

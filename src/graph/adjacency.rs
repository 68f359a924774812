use crate::graph::edge::Edge;
use crate::graph::traits::Graph;
use crate::{Error, Result};
use num_traits::{PrimInt, Signed};
use std::fmt::Debug;

/// A graph stored as an edge list with a derived adjacency list and a dense
/// edge-weight lookup table.
///
/// One type covers all four variants (directed/undirected, weighted/
/// unweighted); the flags are fixed at construction. The edge list is the
/// canonical source of truth, insertion order preserved. The adjacency list
/// and weight table are derived and rebuilt after every mutation, so readers
/// never observe them out of sync with the edge list.
///
/// Node IDs run from `0` to `node_count - 1`. Isolated nodes are legal; the
/// node count is fixed at construction and never inferred from the edges.
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<W>
where
    W: PrimInt + Signed + Debug,
{
    node_count: usize,
    directed: bool,
    weighted: bool,

    /// Canonical edge list, in insertion order.
    edges: Vec<Edge<W>>,

    /// node -> neighbors, derived from `edges`.
    adjacency: Vec<Vec<usize>>,

    /// Dense (source, dest) -> weight table, derived from `edges`.
    /// `None` means "no such edge", never "weight zero".
    weights: Vec<Vec<Option<W>>>,
}

impl<W> AdjacencyGraph<W>
where
    W: PrimInt + Signed + Debug,
{
    /// Creates a weighted graph from `(source, dest, weight)` triples.
    ///
    /// Every endpoint must be `< node_count`; an out-of-range endpoint is
    /// rejected with [`Error::InvalidNode`] rather than left as a latent
    /// out-of-bounds access inside the algorithms.
    pub fn weighted(edges: &[(usize, usize, W)], node_count: usize, directed: bool) -> Result<Self> {
        let edge_list = edges
            .iter()
            .map(|&(source, dest, weight)| Edge::new(source, dest, weight))
            .collect();
        Self::from_edge_list(edge_list, node_count, directed, true)
    }

    /// Creates an unweighted graph from `(source, dest)` pairs.
    pub fn unweighted(edges: &[(usize, usize)], node_count: usize, directed: bool) -> Result<Self> {
        let edge_list = edges
            .iter()
            .map(|&(source, dest)| Edge::unweighted(source, dest))
            .collect();
        Self::from_edge_list(edge_list, node_count, directed, false)
    }

    fn from_edge_list(
        edges: Vec<Edge<W>>,
        node_count: usize,
        directed: bool,
        weighted: bool,
    ) -> Result<Self> {
        for edge in &edges {
            if edge.source() >= node_count {
                return Err(Error::InvalidNode(edge.source()));
            }
            if edge.dest() >= node_count {
                return Err(Error::InvalidNode(edge.dest()));
            }
        }

        let mut graph = AdjacencyGraph {
            node_count,
            directed,
            weighted,
            edges,
            adjacency: Vec::new(),
            weights: Vec::new(),
        };
        graph.update_derived();
        Ok(graph)
    }

    /// Rebuilds the adjacency list and weight table from the edge list.
    /// Called after construction and after every edge mutation.
    fn update_derived(&mut self) {
        self.adjacency = vec![Vec::new(); self.node_count];
        self.weights = vec![vec![None; self.node_count]; self.node_count];

        for edge in &self.edges {
            self.adjacency[edge.source()].push(edge.dest());
            self.weights[edge.source()][edge.dest()] = edge.weight();
            if !self.directed {
                self.adjacency[edge.dest()].push(edge.source());
                self.weights[edge.dest()][edge.source()] = edge.weight();
            }
        }
    }

    /// Returns the edge list in insertion order.
    pub fn edges(&self) -> &[Edge<W>] {
        &self.edges
    }

    /// Returns an iterator over all node IDs.
    pub fn nodes(&self) -> impl Iterator<Item = usize> {
        0..self.node_count
    }

    /// Removes every edge leaving `node` (for undirected graphs, every edge
    /// touching `node`) and rebuilds the derived structures before returning.
    ///
    /// This is the mutation Kahn's algorithm drives; callers always observe
    /// an adjacency list consistent with the shrunken edge list.
    pub fn remove_outgoing_edges(&mut self, node: usize) {
        if self.directed {
            self.edges.retain(|edge| edge.source() != node);
        } else {
            self.edges
                .retain(|edge| edge.source() != node && edge.dest() != node);
        }
        self.update_derived();
    }

    /// Returns the edges ordered ascending by weight.
    ///
    /// Computed per call from a copy of the edge list. The sort is a
    /// partition sort driven by an explicit work stack instead of recursion,
    /// and it keeps equal-weight edges in their original relative order;
    /// Kruskal's accepted-edge set is deterministic because of it.
    pub fn edges_by_weight(&self) -> Vec<Edge<W>> {
        enum Item<W: PrimInt + Signed + Debug> {
            Sort(Vec<Edge<W>>),
            Emit(Edge<W>),
        }

        let mut sorted = Vec::with_capacity(self.edges.len());
        let mut stack = vec![Item::Sort(self.edges.clone())];

        while let Some(item) = stack.pop() {
            match item {
                Item::Emit(edge) => sorted.push(edge),
                Item::Sort(mut list) => {
                    if list.len() <= 1 {
                        sorted.extend(list);
                        continue;
                    }
                    if let Some(pivot) = list.pop() {
                        let (before, after): (Vec<_>, Vec<_>) = list
                            .into_iter()
                            .partition(|edge| edge.weight() <= pivot.weight());
                        // Popped in reverse: before, then pivot, then after.
                        stack.push(Item::Sort(after));
                        stack.push(Item::Emit(pivot));
                        stack.push(Item::Sort(before));
                    }
                }
            }
        }

        sorted
    }
}

impl<W> Graph<W> for AdjacencyGraph<W>
where
    W: PrimInt + Signed + Debug,
{
    fn node_count(&self) -> usize {
        self.node_count
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn is_directed(&self) -> bool {
        self.directed
    }

    fn is_weighted(&self) -> bool {
        self.weighted
    }

    fn neighbors(&self, node: usize) -> Box<dyn Iterator<Item = usize> + '_> {
        if let Some(adjacent) = self.adjacency.get(node) {
            Box::new(adjacent.iter().copied())
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn has_node(&self, node: usize) -> bool {
        node < self.node_count
    }

    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.adjacency
            .get(from)
            .map_or(false, |adjacent| adjacent.contains(&to))
    }

    fn edge_weight(&self, from: usize, to: usize) -> Option<W> {
        self.weights.get(from).and_then(|row| row.get(to)).copied().flatten()
    }
}

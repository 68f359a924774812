use num_traits::{PrimInt, Signed};
use std::fmt::Debug;

/// A single edge between two nodes, optionally carrying a weight.
///
/// Edges are immutable once constructed. Unweighted edges carry `None`
/// rather than a sentinel weight, so "no weight" can never be confused
/// with a legitimate weight of zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge<W>
where
    W: PrimInt + Signed + Debug,
{
    source: usize,
    dest: usize,
    weight: Option<W>,
}

impl<W> Edge<W>
where
    W: PrimInt + Signed + Debug,
{
    /// Creates a weighted edge from `source` to `dest`.
    pub fn new(source: usize, dest: usize, weight: W) -> Self {
        Edge {
            source,
            dest,
            weight: Some(weight),
        }
    }

    /// Creates an edge that carries no weight.
    pub fn unweighted(source: usize, dest: usize) -> Self {
        Edge {
            source,
            dest,
            weight: None,
        }
    }

    pub fn source(&self) -> usize {
        self.source
    }

    pub fn dest(&self) -> usize {
        self.dest
    }

    pub fn weight(&self) -> Option<W> {
        self.weight
    }
}

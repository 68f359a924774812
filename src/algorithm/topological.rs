use num_traits::{PrimInt, Signed};
use std::collections::VecDeque;
use std::fmt::Debug;

use crate::graph::{AdjacencyGraph, Graph};
use crate::{Error, Result};

/// Kahn's topological sort.
///
/// Works on a clone of the input graph, repeatedly pulling a node with no
/// incoming edge and deleting its outgoing edges; the adjacency list is
/// rebuilt after every deletion, so the zero-indegree scan never reads a
/// stale view. When the queue drains while nodes remain unsorted, the
/// leftovers all sit on cycles and the sort fails with
/// [`Error::CycleDetected`] rather than returning a partial order.
#[derive(Debug, Default)]
pub struct TopologicalSort;

impl TopologicalSort {
    /// Creates a new topological sort instance
    pub fn new() -> Self {
        TopologicalSort
    }

    /// Returns a linear ordering of the nodes consistent with every edge
    /// direction, i.e. for each edge (u, v), u appears before v.
    pub fn sort<W>(&self, graph: &AdjacencyGraph<W>) -> Result<Vec<usize>>
    where
        W: PrimInt + Signed + Debug,
    {
        let mut working = graph.clone();
        let n = working.node_count();

        let mut sorted: Vec<usize> = Vec::with_capacity(n);
        let mut queued = vec![false; n];
        let mut queue: VecDeque<usize> = VecDeque::new();

        Self::collect_zero_indegree(&working, &sorted, &mut queued, &mut queue);

        while let Some(node) = queue.pop_front() {
            sorted.push(node);
            working.remove_outgoing_edges(node);
            Self::collect_zero_indegree(&working, &sorted, &mut queued, &mut queue);
        }

        if sorted.len() < n {
            log::debug!("{} nodes left unsorted; they sit on cycles", n - sorted.len());
            return Err(Error::CycleDetected);
        }

        Ok(sorted)
    }

    /// Scans every adjacency list and queues each node that no remaining
    /// edge points at, skipping nodes already sorted or already queued.
    fn collect_zero_indegree<W>(
        graph: &AdjacencyGraph<W>,
        sorted: &[usize],
        queued: &mut [bool],
        queue: &mut VecDeque<usize>,
    ) where
        W: PrimInt + Signed + Debug,
    {
        let n = graph.node_count();
        let mut has_incoming = vec![false; n];
        for node in graph.nodes() {
            for neighbor in graph.neighbors(node) {
                has_incoming[neighbor] = true;
            }
        }

        for node in 0..n {
            if !has_incoming[node] && !queued[node] && !sorted.contains(&node) {
                queued[node] = true;
                queue.push_back(node);
            }
        }
    }
}

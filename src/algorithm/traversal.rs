use num_traits::{PrimInt, Signed};
use std::collections::VecDeque;
use std::fmt::Debug;

use crate::graph::Graph;
use crate::{Error, Result};

/// Breadth-first traversal from `start`, returning the nodes in visit
/// order. Neighbors are visited in edge insertion order. Nodes unreachable
/// from `start` do not appear in the result.
pub fn bfs<W, G>(graph: &G, start: usize) -> Result<Vec<usize>>
where
    W: PrimInt + Signed + Debug,
    G: Graph<W>,
{
    if !graph.has_node(start) {
        return Err(Error::InvalidNode(start));
    }

    let mut visited = vec![false; graph.node_count()];
    let mut order = Vec::new();
    let mut frontier = VecDeque::new();

    visited[start] = true;
    frontier.push_back(start);

    while let Some(node) = frontier.pop_front() {
        order.push(node);
        for neighbor in graph.neighbors(node) {
            if !visited[neighbor] {
                visited[neighbor] = true;
                frontier.push_back(neighbor);
            }
        }
    }

    Ok(order)
}

/// Depth-first traversal from `start`, returning the nodes in visit order.
/// Uses an explicit work stack, so traversal depth is bounded by memory
/// rather than the call stack. Neighbors are pushed in reverse so they are
/// visited in edge insertion order.
pub fn dfs<W, G>(graph: &G, start: usize) -> Result<Vec<usize>>
where
    W: PrimInt + Signed + Debug,
    G: Graph<W>,
{
    if !graph.has_node(start) {
        return Err(Error::InvalidNode(start));
    }

    let mut visited = vec![false; graph.node_count()];
    let mut order = Vec::new();
    let mut stack = vec![start];

    while let Some(node) = stack.pop() {
        if visited[node] {
            continue;
        }
        visited[node] = true;
        order.push(node);

        let neighbors: Vec<usize> = graph.neighbors(node).collect();
        for &neighbor in neighbors.iter().rev() {
            if !visited[neighbor] {
                stack.push(neighbor);
            }
        }
    }

    Ok(order)
}

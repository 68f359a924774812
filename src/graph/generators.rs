use crate::graph::AdjacencyGraph;
use crate::Result;
use rand::prelude::*;
use rand::rngs::StdRng;

/// Generates a random weighted graph where each ordered node pair gets an
/// edge with probability `edge_probability`. Weights are drawn uniformly
/// from `1..=max_weight`. A fixed `seed` makes the fixture reproducible.
pub fn random_graph(
    node_count: usize,
    edge_probability: f64,
    max_weight: i64,
    directed: bool,
    seed: u64,
) -> Result<AdjacencyGraph<i64>> {
    assert!(max_weight > 0, "max_weight must be positive");

    let mut rng = StdRng::seed_from_u64(seed);
    let mut edges = Vec::new();

    for u in 0..node_count {
        for v in 0..node_count {
            if u == v {
                continue;
            }
            // Undirected graphs only sample each unordered pair once.
            if !directed && v < u {
                continue;
            }
            if rng.gen_bool(edge_probability) {
                edges.push((u, v, rng.gen_range(1..=max_weight)));
            }
        }
    }

    AdjacencyGraph::weighted(&edges, node_count, directed)
}

/// Generates a random weighted graph that is guaranteed connected (reachable
/// from node 0 when directed): a random-weight path threads every node first,
/// then `extra_edges` additional random edges are layered on top.
pub fn random_connected_graph(
    node_count: usize,
    extra_edges: usize,
    max_weight: i64,
    directed: bool,
    seed: u64,
) -> Result<AdjacencyGraph<i64>> {
    assert!(node_count > 1, "need at least two nodes");
    assert!(max_weight > 0, "max_weight must be positive");

    let mut rng = StdRng::seed_from_u64(seed);
    let mut edges = Vec::with_capacity(node_count - 1 + extra_edges);

    for u in 0..node_count - 1 {
        edges.push((u, u + 1, rng.gen_range(1..=max_weight)));
    }

    let mut added = 0;
    while added < extra_edges {
        let u = rng.gen_range(0..node_count);
        let v = rng.gen_range(0..node_count);
        if u == v {
            continue;
        }
        edges.push((u, v, rng.gen_range(1..=max_weight)));
        added += 1;
    }

    AdjacencyGraph::weighted(&edges, node_count, directed)
}

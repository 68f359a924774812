use graphalg::algorithm::bellman_ford::BellmanFord;
use graphalg::algorithm::dijkstra::Dijkstra;
use graphalg::algorithm::traits::ShortestPathAlgorithm;
use graphalg::graph::generators::random_connected_graph;
use graphalg::graph::AdjacencyGraph;
use graphalg::Error;

// Directed graph used by the original single-source demos:
// shortest distances from node 0 are [0, 4, 6, 5, 3].
fn sample_directed_graph() -> AdjacencyGraph<i64> {
    let edges = [
        (0, 1, 10),
        (0, 4, 3),
        (1, 2, 2),
        (1, 4, 4),
        (2, 3, 9),
        (3, 2, 7),
        (4, 1, 1),
        (4, 2, 8),
        (4, 3, 2),
    ];
    AdjacencyGraph::weighted(&edges, 5, true).unwrap()
}

#[test]
fn test_dijkstra_sample_distances() {
    let graph = sample_directed_graph();
    let result = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();

    let expected = [Some(0), Some(4), Some(6), Some(5), Some(3)];
    assert_eq!(result.distances, expected, "Dijkstra distances from node 0");
}

#[test]
fn test_bellman_ford_sample_distances() {
    let graph = sample_directed_graph();
    let result = BellmanFord::new().compute_shortest_paths(&graph, 0).unwrap();

    let expected = [Some(0), Some(4), Some(6), Some(5), Some(3)];
    assert_eq!(result.distances, expected, "Bellman-Ford distances from node 0");
}

#[test]
fn test_dijkstra_and_bellman_ford_agree_on_random_graphs() {
    for seed in 0..10 {
        let graph = random_connected_graph(40, 80, 50, true, seed).unwrap();

        for source in [0, 7, 19] {
            let dijkstra = Dijkstra::new().compute_shortest_paths(&graph, source).unwrap();
            let bellman = BellmanFord::new().compute_shortest_paths(&graph, source).unwrap();

            assert_eq!(
                dijkstra.distances, bellman.distances,
                "distance disagreement on seed {} from source {}",
                seed, source
            );
        }
    }
}

#[test]
fn test_bellman_ford_detects_negative_cycle() {
    // Same shape as the sample graph, but edge (1,4) is -4, so
    // 1 -> 4 -> 1 sums to -3.
    let edges = [
        (0, 1, 10),
        (0, 4, 3),
        (1, 2, 2),
        (1, 4, -4),
        (2, 3, 9),
        (3, 2, 7),
        (4, 1, 1),
        (4, 2, 8),
        (4, 3, 2),
    ];
    let graph = AdjacencyGraph::weighted(&edges, 5, true).unwrap();

    let result = BellmanFord::new().compute_shortest_paths(&graph, 0);
    assert_eq!(result.unwrap_err(), Error::NegativeCycle);
}

#[test]
fn test_bellman_ford_allows_negative_weights_without_cycle() {
    let edges = [(0, 2, -2), (2, 3, 2), (3, 1, -1), (1, 2, 3), (1, 0, 4)];
    let graph = AdjacencyGraph::weighted(&edges, 4, true).unwrap();

    let result = BellmanFord::new().compute_shortest_paths(&graph, 0).unwrap();
    assert_eq!(result.distances, [Some(0), Some(-1), Some(-2), Some(0)]);
}

#[test]
fn test_dijkstra_rejects_negative_weight() {
    let edges = [(0, 1, 5), (1, 2, -3)];
    let graph = AdjacencyGraph::weighted(&edges, 3, true).unwrap();

    let result = Dijkstra::new().compute_shortest_paths(&graph, 0);
    assert_eq!(result.unwrap_err(), Error::NegativeWeight(1, 2));
}

#[test]
fn test_disconnected_graph_leaves_unreachable_nodes_at_none() {
    let edges = [(0, 1, 7)];
    let graph = AdjacencyGraph::weighted(&edges, 4, true).unwrap();

    for result in [
        Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap(),
        BellmanFord::new().compute_shortest_paths(&graph, 0).unwrap(),
    ] {
        assert_eq!(result.distances[0], Some(0));
        assert_eq!(result.distances[1], Some(7));
        assert_eq!(result.distances[2], None, "unreachable node keeps None distance");
        assert_eq!(result.distances[3], None);
        assert_eq!(result.predecessors[2], None, "unreachable node has no predecessor");
    }
}

#[test]
fn test_path_reconstruction_terminates_at_source() {
    let graph = sample_directed_graph();
    let dijkstra = Dijkstra::new();
    let result = dijkstra.compute_shortest_paths(&graph, 0).unwrap();

    let path = <Dijkstra as ShortestPathAlgorithm<i64, AdjacencyGraph<i64>>>::get_path(
        &dijkstra, &result, 3,
    )
    .unwrap();

    assert_eq!(path, [0, 4, 3], "shortest path 0 -> 3 runs through node 4");

    // No node appears twice on any reconstructed path.
    for target in 0..5 {
        if let Some(path) = <Dijkstra as ShortestPathAlgorithm<i64, AdjacencyGraph<i64>>>::get_path(
            &dijkstra, &result, target,
        ) {
            let mut seen = std::collections::HashSet::new();
            assert!(path.iter().all(|node| seen.insert(node)), "path revisits a node");
            assert_eq!(path[0], 0, "path starts at the source");
            assert_eq!(*path.last().unwrap(), target);
        }
    }
}

#[test]
fn test_path_to_unreachable_target_is_none() {
    let edges = [(0, 1, 7)];
    let graph = AdjacencyGraph::weighted(&edges, 3, true).unwrap();
    let dijkstra = Dijkstra::new();
    let result = dijkstra.compute_shortest_paths(&graph, 0).unwrap();

    let path = <Dijkstra as ShortestPathAlgorithm<i64, AdjacencyGraph<i64>>>::get_path(
        &dijkstra, &result, 2,
    );
    assert!(path.is_none());
}

#[test]
fn test_invalid_source_is_rejected() {
    let graph = sample_directed_graph();

    assert_eq!(
        Dijkstra::new().compute_shortest_paths(&graph, 9).unwrap_err(),
        Error::InvalidNode(9)
    );
    assert_eq!(
        BellmanFord::new().compute_shortest_paths(&graph, 9).unwrap_err(),
        Error::InvalidNode(9)
    );
}

#[test]
fn test_unweighted_graph_is_rejected() {
    let graph = AdjacencyGraph::<i64>::unweighted(&[(0, 1), (1, 2)], 3, true).unwrap();

    assert_eq!(
        Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap_err(),
        Error::Unweighted
    );
    assert_eq!(
        BellmanFord::new().compute_shortest_paths(&graph, 0).unwrap_err(),
        Error::Unweighted
    );
}

#[test]
fn test_undirected_weights_are_mirrored() {
    let edges = [(0, 1, 2), (1, 2, 3)];
    let graph = AdjacencyGraph::weighted(&edges, 3, false).unwrap();

    // From node 2 the path back to 0 uses the mirrored edges.
    let result = Dijkstra::new().compute_shortest_paths(&graph, 2).unwrap();
    assert_eq!(result.distances, [Some(5), Some(3), Some(0)]);

    let bellman = BellmanFord::new().compute_shortest_paths(&graph, 2).unwrap();
    assert_eq!(bellman.distances, result.distances);
}

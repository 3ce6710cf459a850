use batch_sssp::{BellmanFord, EdgeWeightedDigraph, Error, ShortestPathAlgorithm};

// 0->1 (1.0), 1->2 (2.0), 0->2 (5.0), vertex 3 isolated
fn chain_digraph() -> EdgeWeightedDigraph {
    let mut graph = EdgeWeightedDigraph::new(4);
    graph.add_edge(0, 1, 1.0);
    graph.add_edge(1, 2, 2.0);
    graph.add_edge(0, 2, 5.0);
    graph
}

#[test]
fn two_hop_route_beats_the_direct_edge() {
    let tree = BellmanFord::new()
        .compute_shortest_paths(&chain_digraph(), 0)
        .unwrap();

    assert_eq!(tree.distance_to(2).unwrap(), 3.0);

    let path = tree.path_to(2).unwrap().expect("vertex 2 is reachable");
    assert_eq!(path.len(), 2);
    assert_eq!((path[0].from(), path[0].to()), (0, 1));
    assert_eq!((path[1].from(), path[1].to()), (1, 2));
}

#[test]
fn source_has_zero_distance_and_an_empty_path() {
    let tree = BellmanFord::new()
        .compute_shortest_paths(&chain_digraph(), 0)
        .unwrap();

    assert_eq!(tree.distance_to(0).unwrap(), 0.0);
    assert!(tree.path_to(0).unwrap().expect("source is reachable").is_empty());
}

#[test]
fn unreachable_vertex_has_infinite_distance_and_no_path() {
    let tree = BellmanFord::new()
        .compute_shortest_paths(&chain_digraph(), 0)
        .unwrap();

    assert!(tree.distance_to(3).unwrap().is_infinite());
    assert!(!tree.has_path_to(3).unwrap());
    assert!(tree.path_to(3).unwrap().is_none());
}

#[test]
fn negative_edges_without_a_cycle_reroute_paths() {
    let mut graph = EdgeWeightedDigraph::new(4);
    graph.add_edge(0, 1, 5.0);
    graph.add_edge(0, 2, 4.0);
    graph.add_edge(2, 1, -6.0);
    graph.add_edge(1, 3, 3.0);

    let tree = BellmanFord::new().compute_shortest_paths(&graph, 0).unwrap();

    assert!(!tree.has_negative_cycle());
    assert_eq!(tree.distance_to(1).unwrap(), -2.0);
    assert_eq!(tree.distance_to(3).unwrap(), 1.0);

    let path = tree.path_to(3).unwrap().expect("vertex 3 is reachable");
    let hops: Vec<usize> = path.iter().map(|e| e.to()).collect();
    assert_eq!(hops, vec![2, 1, 3]);
}

#[test]
fn negative_cycle_is_reported_and_blocks_distance_queries() {
    let mut graph = EdgeWeightedDigraph::new(3);
    graph.add_edge(0, 1, 1.0);
    graph.add_edge(1, 2, 1.0);
    graph.add_edge(2, 0, -3.0);

    let tree = BellmanFord::new().compute_shortest_paths(&graph, 0).unwrap();

    assert!(tree.has_negative_cycle());
    let cycle = tree.negative_cycle().expect("cycle should be recorded");

    let total: f64 = cycle.iter().map(|e| e.weight()).sum();
    assert!(total < 0.0, "reported cycle weighs {total}");

    for pair in cycle.windows(2) {
        assert_eq!(pair[0].to(), pair[1].from());
    }
    assert_eq!(cycle[cycle.len() - 1].to(), cycle[0].from());

    assert!(matches!(tree.distance_to(1), Err(Error::NegativeCycle)));
    assert!(matches!(tree.path_to(2), Err(Error::NegativeCycle)));
}

#[test]
fn unreachable_negative_cycle_does_not_taint_the_run() {
    let mut graph = EdgeWeightedDigraph::new(5);
    graph.add_edge(0, 1, 1.0);
    graph.add_edge(2, 3, 1.0);
    graph.add_edge(3, 4, 1.0);
    graph.add_edge(4, 2, -5.0);

    let tree = BellmanFord::new().compute_shortest_paths(&graph, 0).unwrap();

    assert!(!tree.has_negative_cycle());
    assert!(tree.negative_cycle().is_none());
    assert_eq!(tree.distance_to(1).unwrap(), 1.0);
    assert!(tree.distance_to(2).unwrap().is_infinite());
}

#[test]
fn out_of_range_vertices_are_reported() {
    assert!(matches!(
        BellmanFord::new().compute_shortest_paths(&chain_digraph(), 11),
        Err(Error::InvalidVertex(11))
    ));

    let tree = BellmanFord::new()
        .compute_shortest_paths(&chain_digraph(), 0)
        .unwrap();
    assert!(matches!(tree.distance_to(4), Err(Error::InvalidVertex(4))));
    assert!(matches!(tree.path_to(8), Err(Error::InvalidVertex(8))));
}

#[test]
fn cycle_queries_stay_safe_after_a_cycle_is_found() {
    let mut graph = EdgeWeightedDigraph::new(2);
    graph.add_edge(0, 1, 1.0);
    graph.add_edge(1, 0, -2.0);

    let tree = BellmanFord::new().compute_shortest_paths(&graph, 0).unwrap();

    // has_negative_cycle and negative_cycle never fail, even repeatedly.
    assert!(tree.has_negative_cycle());
    assert!(tree.has_negative_cycle());
    assert_eq!(tree.negative_cycle().map(|c| c.len()), Some(2));
}

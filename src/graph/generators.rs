//! Random graph generators for tests and benchmarks.

use rand::prelude::*;
use std::ops::Range;

use crate::graph::{EdgeWeightedDigraph, EdgeWeightedGraph};

/// Generates a random undirected graph with `edges` edges and weights
/// drawn uniformly from `weights`.
pub fn random_graph(vertices: usize, edges: usize, weights: Range<f64>) -> EdgeWeightedGraph {
    assert!(vertices > 0, "vertices must be positive");

    let mut graph = EdgeWeightedGraph::new(vertices);
    let mut rng = rand::thread_rng();
    for _ in 0..edges {
        let v = rng.gen_range(0..vertices);
        let w = rng.gen_range(0..vertices);
        graph.add_edge(v, w, rng.gen_range(weights.clone()));
    }

    graph
}

/// Generates a random digraph with `edges` edges and weights drawn
/// uniformly from `weights`.
pub fn random_digraph(vertices: usize, edges: usize, weights: Range<f64>) -> EdgeWeightedDigraph {
    assert!(vertices > 0, "vertices must be positive");

    let mut digraph = EdgeWeightedDigraph::new(vertices);
    let mut rng = rand::thread_rng();
    for _ in 0..edges {
        let from = rng.gen_range(0..vertices);
        let to = rng.gen_range(0..vertices);
        digraph.add_edge(from, to, rng.gen_range(weights.clone()));
    }

    digraph
}

/// Directed view of an undirected graph: one arc in each direction per
/// edge, so both engines see the same metric structure.
pub fn mirror_digraph(graph: &EdgeWeightedGraph) -> EdgeWeightedDigraph {
    let mut digraph = EdgeWeightedDigraph::new(graph.vertex_count());
    for edge in graph.edges() {
        let v = edge.either();
        let w = edge.other(v);
        digraph.add_edge(v, w, edge.weight());
        if v != w {
            digraph.add_edge(w, v, edge.weight());
        }
    }

    digraph
}

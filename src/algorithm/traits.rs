use crate::Result;

/// Trait for single-source shortest path engines.
///
/// Implementations are stateless; every call produces a fresh result
/// tree, so no state leaks between runs or between graph instances.
pub trait ShortestPathAlgorithm {
    /// The graph representation the engine operates on.
    type Graph;

    /// The per-run result tree.
    type Tree;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Compute shortest paths from `source` to every reachable vertex.
    fn compute_shortest_paths(&self, graph: &Self::Graph, source: usize) -> Result<Self::Tree>;
}

/// Uniform distance lookup used by the batch statistics layer.
pub trait DistanceQuery {
    /// Finite source-to-`v` distance, or `None` when `v` is unreachable
    /// or the run's distances are invalidated by a negative cycle.
    fn finite_distance_to(&self, v: usize) -> Result<Option<f64>>;
}

//! Single-source shortest paths with batch statistics.
//!
//! Two complementary relaxation engines over weighted graphs: a
//! label-setting engine ([`Dijkstra`]) for undirected graphs with
//! non-negative weights, and a label-correcting engine ([`BellmanFord`])
//! for directed graphs with arbitrary weights and negative-cycle
//! detection. The [`stats`] module aggregates shortest-path lengths for a
//! fixed source/target pair across many independent graph instances.

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod stats;

pub use algorithm::{
    bellman_ford::{BellmanFord, BellmanFordTree},
    dijkstra::{Dijkstra, ShortestPathTree},
    DistanceQuery, ShortestPathAlgorithm,
};
/// Re-export main types for convenient use
pub use graph::{DirectedEdge, Edge, EdgeWeightedDigraph, EdgeWeightedGraph};
pub use stats::{aggregate, BatchSummary, Statistic};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("invalid vertex id: {0}")]
    InvalidVertex(usize),

    #[error("negative edge weight: {0}")]
    NegativeWeight(f64),

    #[error("negative cost cycle reachable from source")]
    NegativeCycle,
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;

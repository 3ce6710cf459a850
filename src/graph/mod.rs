pub mod digraph;
pub mod generators;
pub mod undirected;

pub use digraph::{DirectedEdge, EdgeWeightedDigraph};
pub use undirected::{Edge, EdgeWeightedGraph};

pub mod bellman_ford;
pub mod cycle;
pub mod dijkstra;
pub mod traits;

pub use traits::{DistanceQuery, ShortestPathAlgorithm};

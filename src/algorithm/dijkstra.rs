use log::debug;
use ordered_float::OrderedFloat;

use crate::algorithm::{DistanceQuery, ShortestPathAlgorithm};
use crate::data_structures::IndexMinPq;
use crate::graph::{Edge, EdgeWeightedGraph};
use crate::{Error, Result};

/// Label-setting shortest paths for undirected graphs with non-negative
/// edge weights. Once a vertex leaves the priority queue its distance is
/// final; every vertex leaves the queue at most once.
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl ShortestPathAlgorithm for Dijkstra {
    type Graph = EdgeWeightedGraph;
    type Tree = ShortestPathTree;

    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(
        &self,
        graph: &EdgeWeightedGraph,
        source: usize,
    ) -> Result<ShortestPathTree> {
        // Refuse negative weights before allocating any run state.
        for edge in graph.edges() {
            if edge.weight() < 0.0 {
                return Err(Error::NegativeWeight(edge.weight()));
            }
        }

        let vertices = graph.vertex_count();
        if source >= vertices {
            return Err(Error::InvalidVertex(source));
        }

        let mut dist_to = vec![f64::INFINITY; vertices];
        let mut edge_to: Vec<Option<Edge>> = vec![None; vertices];
        dist_to[source] = 0.0;

        let mut pq = IndexMinPq::with_capacity(vertices);
        pq.insert(source, OrderedFloat(0.0));

        // Relax vertices in order of distance from the source.
        while let Some((v, _)) = pq.del_min() {
            for edge in graph.adj(v) {
                let w = edge.other(v);
                let candidate = dist_to[v] + edge.weight();
                if candidate < dist_to[w] {
                    dist_to[w] = candidate;
                    edge_to[w] = Some(*edge);
                    if pq.contains(w) {
                        pq.decrease_key(w, OrderedFloat(candidate));
                    } else {
                        pq.insert(w, OrderedFloat(candidate));
                    }
                }
            }
        }

        debug!(
            "dijkstra settled {}/{} vertices from source {}",
            dist_to.iter().filter(|d| d.is_finite()).count(),
            vertices,
            source
        );

        Ok(ShortestPathTree {
            source,
            dist_to,
            edge_to,
        })
    }
}

/// Shortest-path tree produced by a single [`Dijkstra`] run. Immutable
/// once the run completes.
#[derive(Debug, Clone)]
pub struct ShortestPathTree {
    source: usize,
    dist_to: Vec<f64>,
    edge_to: Vec<Option<Edge>>,
}

impl ShortestPathTree {
    pub fn source(&self) -> usize {
        self.source
    }

    /// Length of the shortest source-to-`v` path, `f64::INFINITY` when
    /// `v` is unreachable.
    pub fn distance_to(&self, v: usize) -> Result<f64> {
        self.validate_vertex(v)?;
        Ok(self.dist_to[v])
    }

    pub fn has_path_to(&self, v: usize) -> Result<bool> {
        self.validate_vertex(v)?;
        Ok(self.dist_to[v].is_finite())
    }

    /// Edges of the shortest source-to-`v` path in source-to-target
    /// order, or `None` when `v` is unreachable. The path to the source
    /// itself is empty.
    pub fn path_to(&self, v: usize) -> Result<Option<Vec<Edge>>> {
        self.validate_vertex(v)?;
        if !self.dist_to[v].is_finite() {
            return Ok(None);
        }
        let mut path = Vec::new();
        let mut x = v;
        while let Some(edge) = self.edge_to[x] {
            path.push(edge);
            x = edge.other(x);
        }
        path.reverse();
        Ok(Some(path))
    }

    fn validate_vertex(&self, v: usize) -> Result<()> {
        if v < self.dist_to.len() {
            Ok(())
        } else {
            Err(Error::InvalidVertex(v))
        }
    }
}

impl DistanceQuery for ShortestPathTree {
    fn finite_distance_to(&self, v: usize) -> Result<Option<f64>> {
        let distance = self.distance_to(v)?;
        Ok(distance.is_finite().then_some(distance))
    }
}

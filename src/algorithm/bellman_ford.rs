use std::collections::VecDeque;

use log::debug;

use crate::algorithm::cycle::find_cycle;
use crate::algorithm::{DistanceQuery, ShortestPathAlgorithm};
use crate::graph::{DirectedEdge, EdgeWeightedDigraph};
use crate::{Error, Result};

/// Tolerance against spurious re-relaxation from floating-point noise.
const EPSILON: f64 = 1e-14;

/// Label-correcting shortest paths for digraphs with arbitrary edge
/// weights. A vertex's distance may be revised several times until the
/// run converges or a negative cycle reachable from the source is found.
#[derive(Debug, Default)]
pub struct BellmanFord;

impl BellmanFord {
    /// Creates a new Bellman-Ford algorithm instance
    pub fn new() -> Self {
        BellmanFord
    }
}

impl ShortestPathAlgorithm for BellmanFord {
    type Graph = EdgeWeightedDigraph;
    type Tree = BellmanFordTree;

    fn name(&self) -> &'static str {
        "Bellman-Ford"
    }

    fn compute_shortest_paths(
        &self,
        graph: &EdgeWeightedDigraph,
        source: usize,
    ) -> Result<BellmanFordTree> {
        let vertices = graph.vertex_count();
        if source >= vertices {
            return Err(Error::InvalidVertex(source));
        }

        let mut dist_to = vec![f64::INFINITY; vertices];
        let mut edge_to: Vec<Option<DirectedEdge>> = vec![None; vertices];
        let mut on_queue = vec![false; vertices];
        let mut queue = VecDeque::new();
        let mut relaxations: u64 = 0;
        let mut cycle: Option<Vec<DirectedEdge>> = None;

        dist_to[source] = 0.0;
        queue.push_back(source);
        on_queue[source] = true;

        'correcting: while let Some(v) = queue.pop_front() {
            on_queue[v] = false;
            for edge in graph.adj(v) {
                let w = edge.to();
                if dist_to[v] + edge.weight() + EPSILON < dist_to[w] {
                    dist_to[w] = dist_to[v] + edge.weight();
                    edge_to[w] = Some(*edge);
                    if !on_queue[w] {
                        queue.push_back(w);
                        on_queue[w] = true;
                    }
                }
                relaxations += 1;
                // amortized: search the predecessor subgraph once per V relaxations
                if relaxations % vertices as u64 == 0 {
                    cycle = find_predecessor_cycle(&edge_to, vertices);
                    if cycle.is_some() {
                        debug!("negative cycle found after {relaxations} relaxations");
                        break 'correcting;
                    }
                }
            }
        }

        Ok(BellmanFordTree {
            source,
            dist_to,
            edge_to,
            cycle,
        })
    }
}

/// Searches the subgraph of current predecessor edges (at most one per
/// vertex) for a directed cycle.
fn find_predecessor_cycle(
    edge_to: &[Option<DirectedEdge>],
    vertices: usize,
) -> Option<Vec<DirectedEdge>> {
    let mut spt = EdgeWeightedDigraph::new(vertices);
    for edge in edge_to.iter().flatten() {
        spt.add(*edge);
    }
    find_cycle(&spt)
}

/// Result of a single [`BellmanFord`] run. Immutable once the run
/// completes; when a negative cycle was found the distances are
/// unreliable and the distance/path accessors refuse to serve them.
#[derive(Debug, Clone)]
pub struct BellmanFordTree {
    source: usize,
    dist_to: Vec<f64>,
    edge_to: Vec<Option<DirectedEdge>>,
    cycle: Option<Vec<DirectedEdge>>,
}

impl BellmanFordTree {
    pub fn source(&self) -> usize {
        self.source
    }

    /// Was a negative cycle reachable from the source found?
    pub fn has_negative_cycle(&self) -> bool {
        self.cycle.is_some()
    }

    /// The negative cycle as an ordered edge sequence, each edge's head
    /// being the next edge's tail, or `None` if no cycle was found.
    pub fn negative_cycle(&self) -> Option<&[DirectedEdge]> {
        self.cycle.as_deref()
    }

    /// Length of the shortest source-to-`v` path, `f64::INFINITY` when
    /// `v` is unreachable.
    ///
    /// Fails with [`Error::NegativeCycle`] once a cycle is recorded;
    /// callers must check [`has_negative_cycle`](Self::has_negative_cycle)
    /// before trusting distances.
    pub fn distance_to(&self, v: usize) -> Result<f64> {
        self.validate_vertex(v)?;
        if self.cycle.is_some() {
            return Err(Error::NegativeCycle);
        }
        Ok(self.dist_to[v])
    }

    pub fn has_path_to(&self, v: usize) -> Result<bool> {
        self.validate_vertex(v)?;
        Ok(self.dist_to[v].is_finite())
    }

    /// Edges of the shortest source-to-`v` path in source-to-target
    /// order, or `None` when `v` is unreachable.
    ///
    /// Fails with [`Error::NegativeCycle`] once a cycle is recorded.
    pub fn path_to(&self, v: usize) -> Result<Option<Vec<DirectedEdge>>> {
        self.validate_vertex(v)?;
        if self.cycle.is_some() {
            return Err(Error::NegativeCycle);
        }
        if !self.dist_to[v].is_finite() {
            return Ok(None);
        }
        let mut path = Vec::new();
        let mut x = v;
        while let Some(edge) = self.edge_to[x] {
            path.push(edge);
            x = edge.from();
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

impl DistanceQuery for BellmanFordTree {
    fn finite_distance_to(&self, v: usize) -> Result<Option<f64>> {
        self.validate_vertex(v)?;
        if self.cycle.is_some() {
            return Ok(None);
        }
        let distance = self.dist_to[v];
        Ok(distance.is_finite().then_some(distance))
    }
}

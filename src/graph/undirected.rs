use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An undirected edge with a real-valued weight.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Edge {
    v: usize,
    w: usize,
    weight: f64,
}

impl Edge {
    pub fn new(v: usize, w: usize, weight: f64) -> Self {
        Edge { v, w, weight }
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// One endpoint of the edge.
    pub fn either(&self) -> usize {
        self.v
    }

    /// The endpoint opposite `vertex`.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is not an endpoint of this edge.
    pub fn other(&self, vertex: usize) -> usize {
        if vertex == self.v {
            self.w
        } else if vertex == self.w {
            self.v
        } else {
            panic!(
                "vertex {} is not an endpoint of edge {}-{}",
                vertex, self.v, self.w
            )
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{} {:.5}", self.v, self.w, self.weight)
    }
}

/// An undirected graph with weighted edges, vertices addressed `0..V-1`.
///
/// Edges are stored in the adjacency list of both endpoints; a self-loop
/// is stored once. Structural well-formedness of the input (valid
/// endpoint ids) is the loader's responsibility, so construction panics
/// on violations rather than reporting them as data errors.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EdgeWeightedGraph {
    vertices: usize,
    edges: usize,
    adj: Vec<Vec<Edge>>,
}

impl EdgeWeightedGraph {
    /// Creates a graph with `vertices` vertices and no edges.
    pub fn new(vertices: usize) -> Self {
        EdgeWeightedGraph {
            vertices,
            edges: 0,
            adj: vec![Vec::new(); vertices],
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices
    }

    pub fn edge_count(&self) -> usize {
        self.edges
    }

    /// Adds an undirected edge between `v` and `w`.
    ///
    /// # Panics
    ///
    /// Panics if either endpoint is out of range.
    pub fn add_edge(&mut self, v: usize, w: usize, weight: f64) {
        assert!(v < self.vertices, "vertex {} out of range 0..{}", v, self.vertices);
        assert!(w < self.vertices, "vertex {} out of range 0..{}", w, self.vertices);
        let edge = Edge::new(v, w, weight);
        self.adj[v].push(edge);
        if v != w {
            self.adj[w].push(edge);
        }
        self.edges += 1;
    }

    /// Edges incident to `v`.
    ///
    /// # Panics
    ///
    /// Panics if `v` is out of range.
    pub fn adj(&self, v: usize) -> &[Edge] {
        &self.adj[v]
    }

    /// All edges, each reported once.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.adj
            .iter()
            .enumerate()
            .flat_map(|(v, list)| list.iter().filter(move |e| e.other(v) >= v))
    }
}

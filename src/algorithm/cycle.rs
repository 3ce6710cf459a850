//! Directed-cycle search over edge-weighted digraphs.

use crate::graph::{DirectedEdge, EdgeWeightedDigraph};

/// Finds a directed cycle in `graph`, returning it as an ordered edge
/// sequence in which each edge's head is the next edge's tail (and the
/// last edge closes back on the first), or `None` when the graph is
/// acyclic.
///
/// Depth-first search with an explicit frame stack, tracking the current
/// path (`on_stack`) and fully explored vertices (`marked`) separately.
/// The iterative form keeps deep predecessor chains from exhausting the
/// call stack.
pub fn find_cycle(graph: &EdgeWeightedDigraph) -> Option<Vec<DirectedEdge>> {
    let vertices = graph.vertex_count();
    let mut marked = vec![false; vertices];
    let mut on_stack = vec![false; vertices];
    let mut edge_to: Vec<Option<DirectedEdge>> = vec![None; vertices];

    for start in 0..vertices {
        if marked[start] {
            continue;
        }
        marked[start] = true;
        on_stack[start] = true;

        // Each frame is (vertex, next adjacency position).
        let mut stack: Vec<(usize, usize)> = vec![(start, 0)];
        while let Some(frame) = stack.last_mut() {
            let v = frame.0;
            let position = frame.1;
            frame.1 += 1;
            if let Some(&edge) = graph.adj(v).get(position) {
                let w = edge.to();
                if !marked[w] {
                    marked[w] = true;
                    on_stack[w] = true;
                    edge_to[w] = Some(edge);
                    stack.push((w, 0));
                } else if on_stack[w] {
                    return Some(trace_cycle(edge, &edge_to));
                }
            } else {
                on_stack[v] = false;
                stack.pop();
            }
        }
    }

    None
}

/// Walks the tree edges backward from the closing edge `v -> w` until
/// the path returns to `w`, then reverses into head-to-tail order.
fn trace_cycle(closing: DirectedEdge, edge_to: &[Option<DirectedEdge>]) -> Vec<DirectedEdge> {
    let w = closing.to();
    let mut cycle = vec![closing];
    let mut x = closing.from();
    while x != w {
        let Some(back) = edge_to[x] else { break };
        cycle.push(back);
        x = back.from();
    }
    cycle.reverse();
    cycle
}

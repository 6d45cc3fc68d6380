use crate::graph::*;
use tracing::debug;

pub trait TopologicalSort
where
    Self: QueryableGraph + Sized,
{
    /// Orders all vertices so that every arc points forward.
    ///
    /// Returns `None` if the graph has a directed cycle (self-loops included).
    ///
    /// Depth-first search from every unvisited vertex in id order;
    /// vertices are emitted in reverse finishing order.
    /// The search keeps its own stack, so deep graphs do not exhaust the call stack.
    fn toposort(&self) -> Option<Vec<VertexId>> {
        toposort(self)
    }
}

impl<G: QueryableGraph> TopologicalSort for G {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    /// not visited yet
    White,
    /// on the current search path
    Gray,
    /// finished
    Black,
}

fn toposort<G>(graph: &G) -> Option<Vec<VertexId>>
where
    G: QueryableGraph,
{
    let mut color = vec![Color::White; graph.vertex_size()];
    let mut order = Vec::with_capacity(graph.vertex_size());
    let mut stack: Vec<(VertexId, Box<dyn Iterator<Item = Edge<G::Weight>> + '_>)> = vec![];
    for root in graph.iter_vertices() {
        if color[root.to_raw()] != Color::White {
            continue;
        }
        color[root.to_raw()] = Color::Gray;
        stack.push((root, graph.out_edges(&root)));
        while let Some((vert, edges)) = stack.last_mut() {
            if let Some(e) = edges.next() {
                match color[e.sink.to_raw()] {
                    Color::Black => {}
                    Color::Gray => {
                        debug!(from = ?e.source, to = ?e.sink, "back arc closes a cycle");
                        return None;
                    }
                    Color::White => {
                        color[e.sink.to_raw()] = Color::Gray;
                        stack.push((e.sink, graph.out_edges(&e.sink)));
                    }
                }
            } else {
                let vert = *vert;
                color[vert.to_raw()] = Color::Black;
                order.push(vert);
                stack.pop();
            }
        }
    }
    order.reverse();
    Some(order)
}

use crate::graph::*;
use tracing::debug;

/// One of the two color classes of a bipartite graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// 2-coloring of graphs.
///
/// Graphs are expected to be undirected, i.e., built with [Graph::add_edge].
/// Arcs are only followed from their source.
pub trait Bipartite
where
    Self: QueryableGraph + Sized,
{
    fn is_bipartite(&self) -> bool {
        self.bipartition().is_some()
    }

    /// A proper 2-coloring, if any.
    ///
    /// Every component is colored on its own, starting from its smallest vertex,
    /// which is put on [Side::Left].
    /// Isolated vertices are thus on the left.
    fn bipartition(&self) -> Option<Vec<Side>> {
        bipartition(self)
    }
}

impl<G: QueryableGraph> Bipartite for G {}

fn bipartition<G>(graph: &G) -> Option<Vec<Side>>
where
    G: QueryableGraph,
{
    let mut sides: Vec<Option<Side>> = vec![None; graph.vertex_size()];
    let mut stack: Vec<(Side, Box<dyn Iterator<Item = Edge<G::Weight>> + '_>)> = vec![];
    for root in graph.iter_vertices() {
        if sides[root.to_raw()].is_some() {
            continue;
        }
        sides[root.to_raw()] = Some(Side::Left);
        stack.push((Side::Left, graph.out_edges(&root)));
        while let Some((side, edges)) = stack.last_mut() {
            let side = *side;
            if let Some(e) = edges.next() {
                match sides[e.sink.to_raw()] {
                    None => {
                        sides[e.sink.to_raw()] = Some(side.opposite());
                        stack.push((side.opposite(), graph.out_edges(&e.sink)));
                    }
                    Some(other) if other == side => {
                        debug!(from = ?e.source, to = ?e.sink, "edge inside one side");
                        return None;
                    }
                    Some(_) => {}
                }
            } else {
                stack.pop();
            }
        }
    }
    sides.into_iter().collect()
}

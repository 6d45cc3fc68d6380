use crate::{error::check_vertex, graph::*, Result};
use std::ops::Index;

/// A weighted graph stored as per-vertex adjacency lists.
///
/// `graph[v]` is the list of arcs leaving `v`, in insertion order.
/// The number of vertices is fixed by [Graph::new].
///
/// |                    | Complexity      |
/// | ------------------ | --------------- |
/// | `add_edge`         | amortized $O(1)$ |
/// | `add_arc`          | amortized $O(1)$ |
/// | `vertex_size`      | $O(1)$          |
/// | `edge_size`        | $O(\|V\|)$      |
/// | `out_edges`        | $O(1)$ per item |
#[derive(Clone, PartialEq)]
pub struct Graph<W> {
    adjacency: Vec<Vec<Edge<W>>>,
}

impl<W: Weight> Graph<W> {
    /// Creates a graph of `vertex_size` isolated vertices.
    pub fn new(vertex_size: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); vertex_size],
        }
    }

    /// Builds a directed graph out of a flat edge list.
    pub fn from_arcs<I>(vertex_size: usize, arcs: I) -> Result<Self>
    where
        I: IntoIterator<Item = Edge<W>>,
    {
        let mut res = Self::new(vertex_size);
        for e in arcs {
            res.add_arc(e.source, e.sink, e.weight)?;
        }
        Ok(res)
    }

    /// Inserts an undirected connection:
    /// `a -> b` is appended to `graph[a]` and `b -> a` to `graph[b]`.
    pub fn add_edge(&mut self, a: VertexId, b: VertexId, weight: W) -> Result<()> {
        self.check(&a)?;
        self.check(&b)?;
        self.adjacency[a.to_raw()].push(Edge::new(a, b, weight));
        self.adjacency[b.to_raw()].push(Edge::new(b, a, weight));
        Ok(())
    }

    /// Inserts a directed connection: `source -> sink` is appended to `graph[source]`.
    pub fn add_arc(&mut self, source: VertexId, sink: VertexId, weight: W) -> Result<()> {
        self.check(&source)?;
        self.check(&sink)?;
        self.adjacency[source.to_raw()].push(Edge::new(source, sink, weight));
        Ok(())
    }

    /// A new graph with every arc flipped.
    ///
    /// Shortest paths *into* a vertex are shortest paths *from* it on the reversed graph.
    pub fn reversed(&self) -> Self {
        let mut res = Self::new(self.vertex_size());
        for e in self.adjacency.iter().flatten() {
            res.adjacency[e.sink.to_raw()].push(e.reversed());
        }
        res
    }

    fn check(&self, v: &VertexId) -> Result<()> {
        check_vertex(v.to_raw(), self.adjacency.len())
    }
}

impl<W> Index<VertexId> for Graph<W> {
    type Output = [Edge<W>];

    fn index(&self, v: VertexId) -> &Self::Output {
        &self.adjacency[v.to_raw()]
    }
}

impl<W: Weight> QueryableGraph for Graph<W> {
    type Weight = W;

    fn vertex_size(&self) -> usize {
        self.adjacency.len()
    }

    fn iter_vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_> {
        Box::new((0..self.adjacency.len()).map(VertexId::new))
    }

    fn contains_vertex(&self, v: &VertexId) -> bool {
        v.to_raw() < self.adjacency.len()
    }

    fn edge_size(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    fn iter_edges(&self) -> Box<dyn Iterator<Item = Edge<W>> + '_> {
        Box::new(self.adjacency.iter().flatten().copied())
    }

    fn out_edges(&self, v: &VertexId) -> Box<dyn Iterator<Item = Edge<W>> + '_> {
        match self.adjacency.get(v.to_raw()) {
            Some(list) => Box::new(list.iter().copied()),
            None => Box::new(std::iter::empty()),
        }
    }
}

impl<W: Weight> std::fmt::Debug for Graph<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Graph {{")?;
        write!(f, "{:?}", self.debug())?;
        writeln!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GraphError;
    use quickcheck_macros::quickcheck;

    #[test]
    fn add_edge_is_symmetric() {
        let mut g = Graph::new(3);
        g.add_edge(VertexId(0), VertexId(2), 4i32).unwrap();
        assert_eq!(g[VertexId(0)], [Edge::new(VertexId(0), VertexId(2), 4)]);
        assert_eq!(g[VertexId(2)], [Edge::new(VertexId(2), VertexId(0), 4)]);
        assert!(g[VertexId(1)].is_empty());
        assert_eq!(g.edge_size(), 2);
    }

    #[test]
    fn add_arc_is_one_way() {
        let mut g = Graph::new(2);
        g.add_arc(VertexId(1), VertexId(0), 2.5f64).unwrap();
        assert!(g[VertexId(0)].is_empty());
        assert_eq!(g[VertexId(1)], [Edge::new(VertexId(1), VertexId(0), 2.5)]);
    }

    #[test]
    fn out_of_range_is_rejected() {
        let mut g = Graph::new(2);
        let err = g.add_edge(VertexId(0), VertexId(2), 1u8).unwrap_err();
        assert_eq!(
            err,
            GraphError::InvalidVertexIndex {
                index: 2,
                vertex_count: 2
            }
        );
        assert_eq!(g.edge_size(), 0);
        assert!(g.add_arc(VertexId(9), VertexId(0), 1).is_err());
        assert!(Graph::from_arcs(1, vec![Edge::<u8>::unit(VertexId(0), VertexId(1))]).is_err());
    }

    #[test]
    fn queries() {
        let g = Graph::from_arcs(
            3,
            vec![
                Edge::new(VertexId(0), VertexId(1), 1u32),
                Edge::new(VertexId(0), VertexId(2), 2),
                Edge::new(VertexId(2), VertexId(1), 3),
            ],
        )
        .unwrap();
        assert_eq!(g.vertex_size(), 3);
        assert!(g.contains_vertex(&VertexId(2)));
        assert!(!g.contains_vertex(&VertexId(3)));
        let outs: Vec<_> = g.out_edges(&VertexId(0)).map(|e| e.sink).collect();
        assert_eq!(outs, vec![VertexId(1), VertexId(2)]);
        assert_eq!(g.out_edges(&VertexId(5)).count(), 0);
        assert_eq!(g.iter_edges().count(), 3);
    }

    #[quickcheck]
    fn reversed_flips_every_arc(arcs: Arcs) {
        let g = arcs.to_graph();
        assert_eq!(g.reversed().reversed().edge_size(), g.edge_size());
        let mut orig: Vec<_> = g.iter_edges().map(|e| (e.source, e.sink, e.weight)).collect();
        let mut back: Vec<_> = g
            .reversed()
            .iter_edges()
            .map(|e| (e.sink, e.source, e.weight))
            .collect();
        orig.sort();
        back.sort();
        assert_eq!(orig, back);
    }
}

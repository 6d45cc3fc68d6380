use super::{VertexId, Weight};

/// A directed, weighted arc.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Edge<W> {
    pub source: VertexId,
    pub sink: VertexId,
    pub weight: W,
}

/// A flat edge list, kept in insertion order.
pub type Edges<W> = Vec<Edge<W>>;

impl<W> Edge<W> {
    pub fn new(source: VertexId, sink: VertexId, weight: W) -> Self {
        Self {
            source,
            sink,
            weight,
        }
    }

    /// The same arc pointing the other way.
    pub fn reversed(self) -> Self {
        Self {
            source: self.sink,
            sink: self.source,
            weight: self.weight,
        }
    }
}

impl<W: Weight> Edge<W> {
    /// An arc of weight one.
    pub fn unit(source: VertexId, sink: VertexId) -> Self {
        Self::new(source, sink, W::ONE)
    }
}

/// Appends the arc `source -> sink` to a flat edge list.
///
/// Nothing is validated here.
/// Algorithms consuming the list check vertex ids against their vertex count.
pub fn add_to_edges<W>(edges: &mut Edges<W>, source: VertexId, sink: VertexId, weight: W) {
    edges.push(Edge::new(source, sink, weight));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insertion_order() {
        let mut edges = Edges::new();
        add_to_edges(&mut edges, VertexId(0), VertexId(1), 5i32);
        add_to_edges(&mut edges, VertexId(2), VertexId(0), -1);
        assert_eq!(
            edges,
            vec![
                Edge::new(VertexId(0), VertexId(1), 5),
                Edge::new(VertexId(2), VertexId(0), -1),
            ]
        );
    }

    #[test]
    fn unit_and_reversed() {
        let e: Edge<u32> = Edge::unit(VertexId(3), VertexId(4));
        assert_eq!(e.weight, 1);
        let r = e.reversed();
        assert_eq!((r.source, r.sink, r.weight), (VertexId(4), VertexId(3), 1));
    }
}

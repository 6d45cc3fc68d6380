use crate::graph::*;

/// Read-only view on a weighted graph with dense vertex ids.
///
/// Algorithms are written against this trait,
/// so they never look into how adjacency is stored.
pub trait QueryableGraph {
    type Weight: Weight;

    fn vertex_size(&self) -> usize;
    fn iter_vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_>;
    fn contains_vertex(&self, v: &VertexId) -> bool;

    /// Number of stored arcs. An undirected edge counts twice.
    fn edge_size(&self) -> usize;
    fn iter_edges(&self) -> Box<dyn Iterator<Item = Edge<Self::Weight>> + '_>;
    fn out_edges(&self, v: &VertexId) -> Box<dyn Iterator<Item = Edge<Self::Weight>> + '_>;

    fn debug(&self) -> GraphDebug<'_, Self>
    where
        Self: Sized,
    {
        GraphDebug::new(self)
    }
}

use crate::{error::check_vertex, graph::*, union_find::UnionFind, Result};
use std::cmp::Ordering;
use tracing::debug;

/// A minimum spanning forest: one tree per connected component.
#[derive(Debug, Clone, PartialEq)]
pub struct SpanningForest<W> {
    /// Chosen edges, lightest first.
    pub edges: Vec<Edge<W>>,
    pub total_weight: W,
}

/// Total weight of a minimum spanning forest over `0..vertex_size`.
///
/// Edges are taken as undirected.
/// A disconnected graph yields the sum over its components.
///
/// **`edges` is sorted by weight in place.**
/// Pass a copy if the original order matters.
///
/// Runs in $O(\|E\| \log \|E\|)$.
///
/// # Errors
///
/// [crate::GraphError::InvalidVertexIndex] if an endpoint does not lie in `0..vertex_size`.
pub fn kruskal<W: Weight>(edges: &mut [Edge<W>], vertex_size: usize) -> Result<W> {
    spanning_forest(edges, vertex_size).map(|forest| forest.total_weight)
}

/// Like [kruskal], but also returns which edges make up the forest.
pub fn spanning_forest<W: Weight>(
    edges: &mut [Edge<W>],
    vertex_size: usize,
) -> Result<SpanningForest<W>> {
    for e in edges.iter() {
        check_vertex(e.source.to_raw(), vertex_size)?;
        check_vertex(e.sink.to_raw(), vertex_size)?;
    }
    // stable, so equal weights keep their insertion order
    edges.sort_by(|a, b| a.weight.partial_cmp(&b.weight).unwrap_or(Ordering::Equal));

    let mut components = UnionFind::new(vertex_size);
    let mut forest = SpanningForest {
        edges: Vec::with_capacity(vertex_size.saturating_sub(1)),
        total_weight: W::ZERO,
    };
    for e in edges.iter() {
        if components.unite(e.source.to_raw(), e.sink.to_raw()) {
            forest.total_weight = forest.total_weight.saturating_add(e.weight);
            forest.edges.push(*e);
        }
    }
    debug!(
        trees = components.num_components(),
        edges = forest.edges.len(),
        "spanning forest built"
    );
    Ok(forest)
}

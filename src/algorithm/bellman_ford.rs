use crate::{error::check_vertex, graph::*, Result};
use tracing::{debug, trace};

/// Single-source shortest paths over an edge list whose weights may be negative.
///
/// Returns `Ok(Some(distances))` with [Weight::INFINITY] for vertices out of reach,
/// or `Ok(None)` if a negative cycle is reachable from `source`,
/// in which case shortest paths are undefined.
///
/// Runs in $O(\|V\| \cdot \|E\|)$.
///
/// # Errors
///
/// [crate::GraphError::InvalidVertexIndex] if `source` or an endpoint of any edge
/// does not lie in `0..vertex_size`.
pub fn bellman_ford<W: Weight>(
    edges: &[Edge<W>],
    vertex_size: usize,
    source: VertexId,
) -> Result<Option<Vec<W>>> {
    check_vertex(source.to_raw(), vertex_size)?;
    for e in edges {
        check_vertex(e.source.to_raw(), vertex_size)?;
        check_vertex(e.sink.to_raw(), vertex_size)?;
    }

    let mut dist = vec![W::INFINITY; vertex_size];
    dist[source.to_raw()] = W::ZERO;
    for pass in 1..vertex_size {
        if !relax_all(edges, &mut dist) {
            trace!(pass, "bellman-ford converged early");
            break;
        }
    }
    let cyclic = edges.iter().any(|e| {
        let from = dist[e.source.to_raw()];
        !from.is_unreachable() && from.saturating_add(e.weight) < dist[e.sink.to_raw()]
    });
    if cyclic {
        debug!(?source, "negative cycle reachable from source");
        return Ok(None);
    }
    Ok(Some(dist))
}

/// One sweep over all edges. Returns whether any distance shrank.
fn relax_all<W: Weight>(edges: &[Edge<W>], dist: &mut [W]) -> bool {
    let mut changed = false;
    for e in edges {
        let from = dist[e.source.to_raw()];
        // adding to the sentinel could overflow
        if from.is_unreachable() {
            continue;
        }
        let next_weight = from.saturating_add(e.weight);
        if next_weight < dist[e.sink.to_raw()] {
            dist[e.sink.to_raw()] = next_weight;
            changed = true;
        }
    }
    changed
}

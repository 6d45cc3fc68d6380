use crate::{error::check_vertex, graph::*, GraphError, Result};
use ahash::RandomState;
use keyed_priority_queue::KeyedPriorityQueue;
use std::cmp::{Ordering, Reverse};
use tracing::trace;

/// Single-source shortest paths over non-negative weights.
pub trait ShortestPaths
where
    Self: QueryableGraph + Sized,
{
    /// Distances from `source` to every vertex,
    /// [Weight::INFINITY] for vertices out of reach.
    ///
    /// Runs in $O(\|E\| \log \|V\|)$.
    ///
    /// # Errors
    ///
    /// * [GraphError::InvalidVertexIndex] if `source` is not a vertex.
    /// * [GraphError::NegativeWeightUnsupported] if any arc weighs less than zero.
    fn dijkstra(&self, source: VertexId) -> Result<Vec<Self::Weight>> {
        dijkstra(self, source)
    }
}

impl<G: QueryableGraph> ShortestPaths for G {}

/// Tentative distances ordered totally, so that they can key a heap.
/// Incomparable weights count as equal.
#[derive(Debug, Clone, Copy)]
struct Tentative<W>(W);

impl<W: PartialOrd> PartialEq for Tentative<W> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<W: PartialOrd> Eq for Tentative<W> {}

impl<W: PartialOrd> PartialOrd for Tentative<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<W: PartialOrd> Ord for Tentative<W> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.partial_cmp(&other.0).unwrap_or(Ordering::Equal)
    }
}

fn dijkstra<G, W>(graph: &G, source: VertexId) -> Result<Vec<W>>
where
    G: QueryableGraph<Weight = W>,
    W: Weight,
{
    let vertex_size = graph.vertex_size();
    check_vertex(source.to_raw(), vertex_size)?;
    if let Some(e) = graph.iter_edges().find(|e| e.weight.is_negative()) {
        return Err(GraphError::NegativeWeightUnsupported {
            from: e.source.to_raw(),
            to: e.sink.to_raw(),
        });
    }

    let mut dist = vec![W::INFINITY; vertex_size];
    dist[source.to_raw()] = W::ZERO;
    let mut frontier: KeyedPriorityQueue<VertexId, Reverse<Tentative<W>>, RandomState> =
        KeyedPriorityQueue::with_capacity_and_hasher(vertex_size, RandomState::new());
    frontier.push(source, Reverse(Tentative(W::ZERO)));
    let mut settled = 0usize;
    while let Some((v, Reverse(Tentative(weight)))) = frontier.pop() {
        if dist[v.to_raw()] < weight {
            continue;
        }
        settled += 1;
        for e in graph.out_edges(&v) {
            let next_weight = weight.saturating_add(e.weight);
            if next_weight < dist[e.sink.to_raw()] {
                dist[e.sink.to_raw()] = next_weight;
                // re-pushing an enqueued vertex lowers its priority in place
                frontier.push(e.sink, Reverse(Tentative(next_weight)));
            }
        }
    }
    trace!(settled, vertex_size, "dijkstra done");
    Ok(dist)
}

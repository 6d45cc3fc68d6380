/// Errors raised when a caller breaks the preconditions of an algorithm.
///
/// Outcomes such as "unreachable" or "negative cycle" are not errors;
/// they are part of each algorithm's return value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// A vertex id does not lie in `[0, vertex_count)`.
    #[error("Invalid vertex index {index}: graph has {vertex_count} vertices")]
    InvalidVertexIndex { index: usize, vertex_count: usize },

    /// Dijkstra met an arc with a negative weight.
    #[error("Negative weight on arc {from} -> {to} is not supported")]
    NegativeWeightUnsupported { from: usize, to: usize },
}

/// Result type for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

pub(crate) fn check_vertex(index: usize, vertex_count: usize) -> Result<()> {
    if index < vertex_count {
        Ok(())
    } else {
        Err(GraphError::InvalidVertexIndex {
            index,
            vertex_count,
        })
    }
}

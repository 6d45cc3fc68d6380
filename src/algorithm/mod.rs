//! Graph algorithms
//!
//! Algorithms over a [QueryableGraph](crate::graph::QueryableGraph) are extension traits,
//! blanket-implemented for every graph.
//! Algorithms over a flat edge list are free functions.
mod dijkstra;
pub use self::dijkstra::*;
mod bellman_ford;
pub use self::bellman_ford::*;
mod warshall_floyd;
pub use self::warshall_floyd::*;
mod kruskal;
pub use self::kruskal::*;
mod toposort;
pub use self::toposort::*;
mod bipartite;
pub use self::bipartite::*;

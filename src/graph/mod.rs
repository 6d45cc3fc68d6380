//! Weighted graph representations.
//!
//! # Vertices, arcs and edges
//!
//! Vertices are dense ids wrapped in [VertexId].
//! Every stored connection is a directed, weighted [Edge].
//! An undirected edge is nothing more than a pair of opposite arcs,
//! which is what [Graph::add_edge] inserts.
//!
//! # Representations
//!
//! * [Graph]: per-vertex adjacency lists, consumed through [QueryableGraph].
//! * [Edges]: a flat edge list, consumed by Bellman-Ford and Kruskal.
//! * [Matrix]: a dense distance table produced by Floyd-Warshall.
//!
//! # Weights
//!
//! All of them are generic over a [Weight].
//! Unreachable is the finite sentinel [Weight::INFINITY].

mod weight;
pub use self::weight::*;
mod vertex;
pub use self::vertex::*;
mod edge;
pub use self::edge::*;
mod r#trait;
pub use self::r#trait::*;
mod graph_debug;
pub use self::graph_debug::*;
mod adjacent_list;
pub use self::adjacent_list::*;
mod matrix;
pub use self::matrix::*;

#[cfg(test)]
pub use self::tests::*;

//! Classical algorithms over weighted graphs.
//!
//! * single-source shortest paths: [Dijkstra](algorithm::ShortestPaths::dijkstra)
//!   and [Bellman-Ford](algorithm::bellman_ford), the latter detecting negative cycles;
//! * all-pairs shortest paths: [Floyd-Warshall](algorithm::AllPairsShortestPaths::warshall_floyd),
//!   plus $O(\|V\|^2)$ [edge insertion](algorithm::add_edge_to_matrix) into a solved matrix;
//! * minimum spanning forests: [Kruskal](algorithm::kruskal) over a [union_find::UnionFind];
//! * [topological sort](algorithm::TopologicalSort::toposort);
//! * [bipartiteness](algorithm::Bipartite::is_bipartite).
//!
//! Graphs are plain values built by the caller; algorithms keep no state between calls.
//!
//! # Examples
//!
//! ```rust
//! use wgraph::{algorithm::*, graph::*};
//!
//! let mut g = Graph::new(3);
//! g.add_edge(VertexId(0), VertexId(1), 4).unwrap();
//! g.add_edge(VertexId(1), VertexId(2), 1).unwrap();
//! g.add_edge(VertexId(0), VertexId(2), 7).unwrap();
//! assert_eq!(g.dijkstra(VertexId(0)).unwrap(), vec![0, 4, 5]);
//!
//! let mut edges = Edges::new();
//! add_to_edges(&mut edges, VertexId(0), VertexId(1), 1);
//! add_to_edges(&mut edges, VertexId(1), VertexId(2), -3);
//! add_to_edges(&mut edges, VertexId(2), VertexId(0), 1);
//! assert_eq!(bellman_ford(&edges, 3, VertexId(0)).unwrap(), None);
//! ```
//!
//! # Unreachable vertices
//!
//! Distances to unreachable vertices are [Weight::INFINITY](graph::Weight::INFINITY),
//! a finite sentinel of `MAX / 10`.
//! Check with [Weight::is_unreachable](graph::Weight::is_unreachable) before doing arithmetic on results.

pub mod algorithm;
pub mod graph;
pub mod union_find;

mod error;
pub use self::error::{GraphError, Result};

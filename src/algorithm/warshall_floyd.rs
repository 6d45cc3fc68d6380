use crate::{error::check_vertex, graph::*, Result};
use tracing::debug;

/// All-pairs shortest paths.
pub trait AllPairsShortestPaths
where
    Self: QueryableGraph + Sized,
{
    /// The matrix of shortest distances between all pairs of vertices.
    ///
    /// Parallel arcs contribute their lightest weight.
    /// Unreachable pairs stay at [Weight::INFINITY].
    /// If the graph has a negative cycle,
    /// some diagonal entry ends up negative: see [Matrix::has_negative_cycle].
    ///
    /// Runs in $O(\|V\|^3)$.
    fn warshall_floyd(&self) -> Matrix<Self::Weight> {
        warshall_floyd(self)
    }
}

impl<G: QueryableGraph> AllPairsShortestPaths for G {}

fn warshall_floyd<G, W>(graph: &G) -> Matrix<W>
where
    G: QueryableGraph<Weight = W>,
    W: Weight,
{
    let mut matrix: Matrix<W> = Matrix::new(graph.vertex_size());
    for e in graph.iter_edges() {
        let (i, j) = (e.source.to_raw(), e.sink.to_raw());
        matrix[i][j] = matrix[i][j].min_weight(e.weight);
    }
    for k in 0..matrix.size() {
        relax_through(&mut matrix, k);
    }
    if matrix.has_negative_cycle() {
        debug!("negative cycle found by warshall-floyd");
    }
    matrix
}

/// Inserts an undirected edge `a -- b` into a converged distance matrix
/// and brings the matrix up to date.
///
/// Both `matrix[a][b]` and `matrix[b][a]` are lowered to `weight` if it is lighter.
/// Any path the new edge shortens passes through `a` or `b`,
/// so only those two are re-relaxed as intermediate vertices.
///
/// Runs in $O(\|V\|^2)$. The caller's matrix is updated in place.
///
/// # Errors
///
/// [crate::GraphError::InvalidVertexIndex] if `a` or `b` is out of the matrix,
/// in which case the matrix is left untouched.
pub fn add_edge_to_matrix<W: Weight>(
    matrix: &mut Matrix<W>,
    a: VertexId,
    b: VertexId,
    weight: W,
) -> Result<()> {
    check_vertex(a.to_raw(), matrix.size())?;
    check_vertex(b.to_raw(), matrix.size())?;
    let (a, b) = (a.to_raw(), b.to_raw());
    matrix[a][b] = matrix[a][b].min_weight(weight);
    matrix[b][a] = matrix[b][a].min_weight(weight);
    relax_through(matrix, a);
    relax_through(matrix, b);
    Ok(())
}

/// Inserts a directed arc `source -> sink` into a converged distance matrix
/// and brings the matrix up to date.
///
/// Same as [add_edge_to_matrix] except that only `matrix[source][sink]` is lowered.
pub fn add_arc_to_matrix<W: Weight>(
    matrix: &mut Matrix<W>,
    source: VertexId,
    sink: VertexId,
    weight: W,
) -> Result<()> {
    check_vertex(source.to_raw(), matrix.size())?;
    check_vertex(sink.to_raw(), matrix.size())?;
    let (a, b) = (source.to_raw(), sink.to_raw());
    matrix[a][b] = matrix[a][b].min_weight(weight);
    relax_through(matrix, a);
    relax_through(matrix, b);
    Ok(())
}

/// One round of Floyd-Warshall with `k` as the intermediate vertex.
fn relax_through<W: Weight>(matrix: &mut Matrix<W>, k: usize) {
    let n = matrix.size();
    for i in 0..n {
        for j in 0..n {
            let (ik, kj) = (matrix[i][k], matrix[k][j]);
            if ik.is_unreachable() || kj.is_unreachable() {
                continue;
            }
            let through_k = ik.saturating_add(kj);
            if through_k < matrix[i][j] {
                matrix[i][j] = through_k;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::{bellman_ford, ShortestPaths};
    use crate::GraphError;
    use quickcheck_macros::quickcheck;

    #[test]
    fn small_directed() {
        let mut g = Graph::new(4);
        g.add_arc(VertexId(0), VertexId(1), 5i32).unwrap();
        g.add_arc(VertexId(0), VertexId(1), 3).unwrap();
        g.add_arc(VertexId(1), VertexId(2), 1).unwrap();
        g.add_arc(VertexId(2), VertexId(0), 2).unwrap();
        let m = g.warshall_floyd();
        let inf = <i32 as Weight>::INFINITY;
        let rows: Vec<Vec<i32>> = m.rows().map(|r| r.to_vec()).collect();
        assert_eq!(
            rows,
            vec![
                vec![0, 3, 4, inf],
                vec![3, 0, 1, inf],
                vec![2, 5, 0, inf],
                vec![inf, inf, inf, 0],
            ]
        );
        assert!(!m.has_negative_cycle());
    }

    #[test]
    fn negative_cycle_on_diagonal() {
        let g = Graph::from_arcs(
            3,
            vec![
                Edge::new(VertexId(0), VertexId(1), 1i32),
                Edge::new(VertexId(1), VertexId(2), -3),
                Edge::new(VertexId(2), VertexId(0), 1),
            ],
        )
        .unwrap();
        let m = g.warshall_floyd();
        assert!(m[0][0] < 0);
        assert!(m.has_negative_cycle());
    }

    #[test]
    fn negative_cycle_does_not_overflow() {
        let mut g = Graph::new(3);
        g.add_edge(VertexId(0), VertexId(1), -100i8).unwrap();
        g.add_edge(VertexId(1), VertexId(2), -100).unwrap();
        let m = g.warshall_floyd();
        assert!(m.has_negative_cycle());
        assert_eq!(m[0][2], i8::MIN);
    }

    #[test]
    fn incremental_example() {
        let mut g = Graph::new(4);
        g.add_edge(VertexId(0), VertexId(1), 1u32).unwrap();
        g.add_edge(VertexId(2), VertexId(3), 1).unwrap();
        let mut m = g.warshall_floyd();
        assert!(m[0][3].is_unreachable());
        add_edge_to_matrix(&mut m, VertexId(1), VertexId(2), 5).unwrap();
        assert_eq!(&m[0], &[0, 1, 6, 7]);
        assert_eq!(m[3][0], 7);
        add_edge_to_matrix(&mut m, VertexId(0), VertexId(3), 2).unwrap();
        assert_eq!(&m[1], &[1, 0, 4, 3]);
    }

    #[test]
    fn heavier_edge_changes_nothing() {
        let mut g = Graph::new(2);
        g.add_edge(VertexId(0), VertexId(1), 1i64).unwrap();
        let mut m = g.warshall_floyd();
        let before = m.clone();
        add_edge_to_matrix(&mut m, VertexId(0), VertexId(1), 9).unwrap();
        assert!(m == before);
    }

    #[test]
    fn rejects_bad_vertices() {
        let mut m: Matrix<i32> = Matrix::new(2);
        assert_eq!(
            add_edge_to_matrix(&mut m, VertexId(0), VertexId(2), 1),
            Err(GraphError::InvalidVertexIndex {
                index: 2,
                vertex_count: 2
            })
        );
        assert!(add_arc_to_matrix(&mut m, VertexId(5), VertexId(0), 1).is_err());
        assert!(m == Matrix::new(2));
    }

    #[quickcheck]
    fn rows_are_dijkstra(arcs: Arcs) {
        let g = arcs.to_graph();
        let m = g.warshall_floyd();
        for s in g.iter_vertices() {
            assert_eq!(&m[s.to_raw()], g.dijkstra(s).unwrap().as_slice());
        }
    }

    #[quickcheck]
    fn symmetric_for_undirected(arcs: Arcs) {
        let m = arcs.to_undirected_graph().warshall_floyd();
        for i in 0..m.size() {
            for j in 0..m.size() {
                assert_eq!(m[i][j], m[j][i]);
            }
        }
    }

    #[quickcheck]
    fn fixed_point(arcs: Arcs) {
        let g = arcs.to_graph();
        let m = g.warshall_floyd();
        assert!(m == g.warshall_floyd());
        let mut relaxed = m.clone();
        for e in g.iter_edges() {
            add_arc_to_matrix(&mut relaxed, e.source, e.sink, e.weight).unwrap();
        }
        assert!(relaxed == m);
    }

    #[quickcheck]
    fn incremental_edge_equals_recomputation(arcs: Arcs, a: usize, b: usize, w: u8) {
        let (a, b) = (VertexId(a % arcs.vertex_size), VertexId(b % arcs.vertex_size));
        let w = w as u64;
        let mut g = arcs.to_undirected_graph();
        let mut trial = g.warshall_floyd();
        add_edge_to_matrix(&mut trial, a, b, w).unwrap();
        g.add_edge(a, b, w).unwrap();
        assert!(trial == g.warshall_floyd());
    }

    #[quickcheck]
    fn incremental_arc_equals_recomputation(arcs: Arcs, a: usize, b: usize, w: u8) {
        let (a, b) = (VertexId(a % arcs.vertex_size), VertexId(b % arcs.vertex_size));
        let w = w as u64;
        let mut g = arcs.to_graph();
        let mut trial = g.warshall_floyd();
        add_arc_to_matrix(&mut trial, a, b, w).unwrap();
        g.add_arc(a, b, w).unwrap();
        assert!(trial == g.warshall_floyd());
    }

    #[quickcheck]
    fn negative_cycle_iff_bellman_ford_says_so(arcs: SignedArcs) {
        let m = arcs.to_graph().warshall_floyd();
        let bf_cyclic = (0..arcs.vertex_size).any(|s| {
            bellman_ford(&arcs.arcs, arcs.vertex_size, VertexId(s))
                .unwrap()
                .is_none()
        });
        assert_eq!(m.has_negative_cycle(), bf_cyclic);
    }
}

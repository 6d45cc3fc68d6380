use crate::graph::*;
use std::fmt;

/// Multi-line rendering of any [QueryableGraph].
///
/// A summary line comes first, then one line per vertex listing its out-arcs
/// as `-(weight)-> sink`.
pub struct GraphDebug<'a, G>
where
    G: QueryableGraph,
{
    graph: &'a G,
    indent: usize,
}

impl<'a, G> GraphDebug<'a, G>
where
    G: QueryableGraph,
{
    pub fn new(graph: &'a G) -> Self {
        Self { graph, indent: 2 }
    }

    /// Number of spaces before every vertex line.
    pub fn indent(mut self, width: usize) -> Self {
        self.indent = width;
        self
    }
}

impl<'a, G> fmt::Debug for GraphDebug<'a, G>
where
    G: QueryableGraph,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} vertices, {} arcs",
            self.graph.vertex_size(),
            self.graph.edge_size()
        )?;
        for v in self.graph.iter_vertices() {
            write!(f, "{:width$}{}:", "", v.to_raw(), width = self.indent)?;
            for e in self.graph.out_edges(&v) {
                write!(f, " -({:?})-> {}", e.weight, e.sink.to_raw())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

mod pajek;
mod pmed;

pub use pajek::Pajek;
pub use pmed::Pmed;

use crate::graph::WeightedGraph;
use std::io::{self, Write};

/// An exporter for weighted graphs.
pub trait Export {
    /// Writes the graph to `writer` according to the export format used.
    fn write_graph(&self, graph: &dyn WeightedGraph, writer: &mut dyn Write) -> io::Result<()>;

    /// Returns a String representation of the graph according to the export format used.
    fn render(&self, graph: &dyn WeightedGraph) -> String {
        let mut out = Vec::new();
        // Writing into a Vec never fails.
        let _res = self.write_graph(graph, &mut out);
        String::from_utf8_lossy(&out).into_owned()
    }
}

/// Writes one `from to weight` line per arc with 1-based node ids.
fn write_arcs(graph: &dyn WeightedGraph, writer: &mut dyn Write) -> io::Result<()> {
    for ((from, to), weight) in graph.iter_edges() {
        writeln!(writer, "{} {} {}", from + 1, to + 1, weight)?;
    }
    Ok(())
}

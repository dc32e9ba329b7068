use super::{write_arcs, Export};
use crate::graph::WeightedGraph;
use std::io::{self, Write};

/// Exports graphs in the Pajek `.net` format, every arc listed under `*arcs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pajek;

impl Export for Pajek {
    fn write_graph(&self, graph: &dyn WeightedGraph, writer: &mut dyn Write) -> io::Result<()> {
        writeln!(writer, "*vertices {}", graph.order())?;
        writeln!(writer, "*arcs")?;
        write_arcs(graph, writer)
    }
}

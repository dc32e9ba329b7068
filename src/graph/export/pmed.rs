use super::{write_arcs, Export};
use crate::graph::WeightedGraph;
use std::io::{self, Write};

/// Exports p-median instances: a `nodes arcs centers` header followed by the arcs.
#[derive(Debug, Clone, Copy)]
pub struct Pmed {
    pub centers: usize,
}

impl Export for Pmed {
    fn write_graph(&self, graph: &dyn WeightedGraph, writer: &mut dyn Write) -> io::Result<()> {
        writeln!(writer, "{} {} {}", graph.order(), graph.size(), self.centers)?;
        write_arcs(graph, writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::ListGraph;

    #[test]
    fn pmed_export_works() {
        let mut graph = ListGraph::with_size(4);
        graph.add_edge(0, 1, 3);
        graph.add_edge(3, 2, 8);

        assert_eq!(
            Pmed { centers: 1 }.render(&graph),
            "4 2 1\n1 2 3\n4 3 8\n",
            "Pmed output is wrong."
        );
    }
}

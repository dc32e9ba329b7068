use crate::graph::{ListGraph, WeightedGraph};

/// Summary of a generated graph, logged after every run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphStats {
    pub order: usize,
    pub arcs: usize,
    pub min_out_degree: usize,
    pub max_out_degree: usize,
    pub weakly_connected: bool,
}

impl GraphStats {
    pub fn of(graph: &ListGraph) -> Self {
        let degrees = (0..graph.order()).filter_map(|id| graph.degree(id).ok());
        let (min_out_degree, max_out_degree) = degrees.fold(None, |acc, d| match acc {
            None => Some((d, d)),
            Some((lo, hi)) => Some((usize::min(lo, d), usize::max(hi, d))),
        })
        .unwrap_or((0, 0));

        GraphStats {
            order: graph.order(),
            arcs: graph.size(),
            min_out_degree,
            max_out_degree,
            weakly_connected: graph.is_weakly_connected(),
        }
    }
}

mod error;
mod list_graph;
mod stats;
mod weight;

pub mod export;
pub mod generate;
pub mod import;

pub use error::GraphError;
pub use list_graph::ListGraph;
pub use stats::GraphStats;
pub use weight::WeightRange;

pub type Edge = (usize, usize);

/// Weight type of every arc produced by the generators.
pub type Cost = i64;

/// Read-only view on a weighted, directed graph with dense node ids in [0, order).
pub trait WeightedGraph {
    /// Returns true if there are no nodes, or false otherwise.
    fn is_empty(&self) -> bool {
        self.order() == 0
    }

    /// Returns the number of nodes in this graph.
    fn order(&self) -> usize;

    /// Returns the number of stored arcs in this graph.
    fn size(&self) -> usize;

    /// Returns true if node with id is a member, or false otherwise.
    fn has_node(&self, id: usize) -> bool {
        id < self.order()
    }

    /// Returns the outgoing arcs of the node with id in insertion order.
    /// Returns an error if node is not in graph.
    fn neighbors(&self, id: usize) -> Result<&[(usize, Cost)], GraphError>;

    /// Returns the count of outgoing arcs at node with given id.
    /// Returns an error if the node is not in the graph.
    fn degree(&self, id: usize) -> Result<usize, GraphError> {
        self.neighbors(id).map(<[_]>::len)
    }

    /// Returns an iterator over all arcs with their weights.
    /// Arcs are grouped by source node, each group in insertion order.
    fn iter_edges(&self) -> Box<dyn Iterator<Item = (Edge, Cost)> + '_>;

    /// Returns true if at least one arc from `edge.0` to `edge.1` exists.
    fn has_edge(&self, edge: Edge) -> bool {
        self.neighbors(edge.0)
            .map(|arcs| arcs.iter().any(|(to, _)| *to == edge.1))
            .unwrap_or(false)
    }
}

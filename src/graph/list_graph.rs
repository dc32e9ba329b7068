use crate::graph::{Cost, Edge, GraphError, WeightedGraph};

/// Implements a weighted, directed graph using adjacency lists as datastructure.
/// Arcs keep the order they were added in, which is the order they get exported in.
#[derive(Debug, Clone, PartialEq)]
pub struct ListGraph {
    adjacency_list: Vec<Vec<(usize, Cost)>>,
    size: usize,
}

impl ListGraph {
    /// Constructs a graph with the given amount of nodes and no arcs.
    pub fn with_size(order: usize) -> Self {
        ListGraph {
            adjacency_list: vec![Vec::new(); order],
            size: 0,
        }
    }

    /// Appends an arc from `from` to `to` with the given weight.
    /// Neither bounds nor duplicates are checked here, generators are responsible for
    /// only producing arcs between existing nodes.
    ///
    /// # Panics
    /// Panics if `from` is not a node of this graph.
    pub fn add_edge(&mut self, from: usize, to: usize, weight: Cost) {
        self.adjacency_list[from].push((to, weight));
        self.size += 1;
    }

    /// Returns for every node whether it is reachable from `start`, treating every arc as
    /// undirected.
    pub fn weakly_reachable_from(&self, start: usize) -> Vec<bool> {
        let order = self.order();
        let mut undirected = vec![Vec::new(); order];
        for ((from, to), _) in self.iter_edges() {
            if to < order {
                undirected[from].push(to);
                undirected[to].push(from);
            }
        }

        let mut visited = vec![false; order];
        if start >= order {
            return visited;
        }
        let mut stack = vec![start];
        visited[start] = true;
        while let Some(node) = stack.pop() {
            for &next in undirected[node].iter() {
                if !visited[next] {
                    visited[next] = true;
                    stack.push(next);
                }
            }
        }
        visited
    }

    /// Returns true if every node can be reached from node 0 ignoring arc directions.
    /// The empty graph and single nodes count as connected.
    pub fn is_weakly_connected(&self) -> bool {
        self.is_empty() || self.weakly_reachable_from(0).into_iter().all(|seen| seen)
    }
}

impl WeightedGraph for ListGraph {
    fn order(&self) -> usize {
        self.adjacency_list.len()
    }

    fn size(&self) -> usize {
        self.size
    }

    fn neighbors(&self, id: usize) -> Result<&[(usize, Cost)], GraphError> {
        self.adjacency_list
            .get(id)
            .map(Vec::as_slice)
            .ok_or(GraphError::MissingNode(id))
    }

    fn iter_edges(&self) -> Box<dyn Iterator<Item = (Edge, Cost)> + '_> {
        Box::new(
            self.adjacency_list
                .iter()
                .enumerate()
                .flat_map(|(from, arcs)| arcs.iter().map(move |&(to, w)| ((from, to), w))),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path_graph() -> ListGraph {
        let mut graph = ListGraph::with_size(4);
        graph.add_edge(0, 1, 10);
        graph.add_edge(2, 1, 20);
        graph.add_edge(2, 3, 30);
        graph
    }

    #[test]
    fn new_with_size_works() {
        let graph = ListGraph::with_size(5);

        assert_eq!(graph.order(), 5, "Graph should have 5 nodes.");
        assert_eq!(graph.size(), 0, "Graph should not have any arcs.");
        assert!(!graph.is_empty(), "Graph with nodes is empty.");
        assert!(ListGraph::with_size(0).is_empty(), "Graph without nodes is not empty.");
    }

    #[test]
    fn add_edge_keeps_insertion_order() {
        let mut graph = ListGraph::with_size(3);
        graph.add_edge(0, 2, 5);
        graph.add_edge(0, 1, 7);
        graph.add_edge(1, 0, 9);

        assert_eq!(graph.size(), 3, "Arc count is wrong.");
        assert_eq!(
            graph.neighbors(0).unwrap(),
            &[(2, 5), (1, 7)],
            "Neighbors are not in insertion order."
        );
        assert_eq!(
            graph.iter_edges().collect::<Vec<_>>(),
            vec![((0, 2), 5), ((0, 1), 7), ((1, 0), 9)],
            "Arcs are not grouped by source in insertion order."
        );
    }

    #[test]
    fn add_edge_is_permissive() {
        let mut graph = ListGraph::with_size(2);
        graph.add_edge(0, 1, 1);
        graph.add_edge(0, 1, 2);
        graph.add_edge(1, 1, 3);

        assert_eq!(graph.size(), 3, "Duplicates and self loops should be stored.");
        assert_eq!(graph.degree(0), Ok(2));
        assert!(graph.has_edge((1, 1)), "Self loop is missing.");
    }

    #[test]
    fn missing_node_errors() {
        let graph = ListGraph::with_size(2);

        assert_eq!(graph.neighbors(2), Err(GraphError::MissingNode(2)));
        assert_eq!(graph.degree(7), Err(GraphError::MissingNode(7)));
        assert!(!graph.has_edge((5, 0)), "Arc from missing node exists.");
        assert!(!graph.has_node(2), "Node 2 should not exist.");
    }

    #[test]
    fn weak_connectivity_ignores_direction() {
        let graph = path_graph();

        assert!(graph.is_weakly_connected(), "Path graph should be connected.");
        assert_eq!(graph.weakly_reachable_from(3), vec![true; 4]);
    }

    #[test]
    fn disconnected_graph_is_detected() {
        let mut graph = ListGraph::with_size(5);
        for ((from, to), w) in path_graph().iter_edges() {
            graph.add_edge(from, to, w);
        }

        assert!(!graph.is_weakly_connected(), "Node 4 is isolated.");
        assert!(ListGraph::with_size(1).is_weakly_connected());
    }
}

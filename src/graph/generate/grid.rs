use oorandom::Rand64;
use tracing::{debug, warn};

use super::{check_size_and_density, Generate, GenerationError};
use crate::graph::{ListGraph, WeightRange, WeightedGraph};
use crate::rng::chance;

/// Generates a random square lattice.
///
/// Nodes are numbered row-major on a `side x side` grid with `side = floor(sqrt(n))`.
/// Every node considers an arc to its lower and its left neighbor, directed grids also
/// to the upper and the right one. Each candidate is kept with probability `density`.
#[derive(Debug, Clone, Copy)]
pub struct Grid {
    side: usize,
    directed: bool,
    density: f64,
    weights: WeightRange,
}

impl Grid {
    pub fn new(
        size: usize,
        directed: bool,
        density: f64,
        weights: WeightRange,
    ) -> Result<Self, GenerationError> {
        check_size_and_density("grid", size, density)?;
        let side = integer_sqrt(size);
        if side * side != size {
            warn!(
                requested = size,
                effective = side * side,
                "node count is not a perfect square, truncating the grid"
            );
        }
        Ok(Grid {
            side,
            directed,
            density,
            weights,
        })
    }

    pub fn side(&self) -> usize {
        self.side
    }

    /// Number of nodes the generated graph has.
    pub fn order(&self) -> usize {
        self.side * self.side
    }

    fn maybe_add(&self, graph: &mut ListGraph, rng: &mut Rand64, from: usize, to: usize) {
        if chance(rng) < self.density {
            graph.add_edge(from, to, self.weights.sample(rng));
        }
    }
}

impl Generate for Grid {
    fn generate(&self, rng: &mut Rand64) -> Result<ListGraph, GenerationError> {
        let side = self.side;
        let order = self.order();
        let mut graph = ListGraph::with_size(order);

        for i in 0..order {
            // down
            if i + side < order {
                self.maybe_add(&mut graph, rng, i, i + side);
            }
            // left
            if i % side != 0 {
                self.maybe_add(&mut graph, rng, i, i - 1);
            }
            if self.directed {
                // up
                if i >= side {
                    self.maybe_add(&mut graph, rng, i, i - side);
                }
                // right
                if (i + 1) % side != 0 {
                    self.maybe_add(&mut graph, rng, i, i + 1);
                }
            }
        }

        debug!(side, arcs = graph.size(), "grid graph generated");
        Ok(graph)
    }
}

/// Largest `side` with `side * side <= n`.
fn integer_sqrt(n: usize) -> usize {
    let mut side = (n as f64).sqrt() as usize;
    while side * side > n {
        side -= 1;
    }
    while (side + 1) * (side + 1) <= n {
        side += 1;
    }
    side
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::WeightedGraph;
    use crate::rng::rng64;
    use rstest::rstest;

    #[rstest]
    #[case(1, 1)]
    #[case(3, 1)]
    #[case(4, 2)]
    #[case(24, 4)]
    #[case(25, 5)]
    #[case(26, 5)]
    #[case(1_000_000, 1000)]
    fn integer_sqrt_works(#[case] n: usize, #[case] side: usize) {
        assert_eq!(integer_sqrt(n), side);
    }

    #[rstest]
    #[case(1)]
    #[case(4)]
    #[case(10)]
    #[case(25)]
    #[case(99)]
    fn full_undirected_grid_has_down_and_left_arcs(#[case] n: usize) {
        let gen = Grid::new(n, false, 1.0, WeightRange::default()).unwrap();
        let graph = gen.generate(&mut rng64(3)).unwrap();
        let side = gen.side();

        assert_eq!(graph.order(), side * side, "Grid was not truncated to a square.");
        assert_eq!(
            graph.size(),
            2 * side * (side - 1),
            "A full {0}x{0} grid should have {1} arcs.",
            side,
            2 * side * (side - 1)
        );
        for ((from, to), _) in graph.iter_edges() {
            assert!(
                to == from + side || to + 1 == from,
                "Arc {} -> {} is neither down nor left.",
                from,
                to
            );
        }
    }

    #[test]
    fn full_directed_grid_has_all_four_directions() {
        let gen = Grid::new(9, true, 1.0, WeightRange::default()).unwrap();
        let graph = gen.generate(&mut rng64(3)).unwrap();

        assert_eq!(graph.size(), 24, "A full directed 3x3 grid has 24 arcs.");
        assert_eq!(
            graph.neighbors(4).unwrap().iter().map(|(to, _)| *to).collect::<Vec<_>>(),
            vec![7, 3, 1, 5],
            "Center arcs should be down, left, up, right."
        );
        assert_eq!(graph.degree(0), Ok(2), "Corner should have two arcs.");
    }

    #[test]
    fn first_column_has_no_left_arc() {
        let gen = Grid::new(16, false, 1.0, WeightRange::default()).unwrap();
        let graph = gen.generate(&mut rng64(8)).unwrap();

        for row in 0..4 {
            assert_eq!(
                graph.neighbors(row * 4).unwrap().len(),
                if row == 3 { 0 } else { 1 },
                "Node {} in the first column has a wrong arc count.",
                row * 4
            );
        }
    }

    #[test]
    fn partial_density_keeps_subset() {
        let gen = Grid::new(400, true, 0.5, WeightRange::default()).unwrap();
        let graph = gen.generate(&mut rng64(21)).unwrap();
        let full = 4 * 20 * 19;

        assert!(graph.size() > 0 && graph.size() < full, "Density 0.5 kept {} arcs.", graph.size());
    }
}

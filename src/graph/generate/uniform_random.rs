use oorandom::Rand64;
use tracing::debug;

use super::{check_size_and_density, Generate, GenerationError};
use crate::graph::{ListGraph, WeightRange, WeightedGraph};
use crate::rng::chance;

/// Samples every candidate arc independently with a fixed probability.
///
/// Undirected graphs consider each pair `i < j` once and store a single arc `i -> j`.
/// Directed graphs consider every ordered pair `i != j`.
#[derive(Debug, Clone, Copy)]
pub struct UniformRandom {
    size: usize,
    directed: bool,
    density: f64,
    weights: WeightRange,
}

impl UniformRandom {
    pub fn new(
        size: usize,
        directed: bool,
        density: f64,
        weights: WeightRange,
    ) -> Result<Self, GenerationError> {
        check_size_and_density("uniform random", size, density)?;
        Ok(UniformRandom {
            size,
            directed,
            density,
            weights,
        })
    }
}

impl Generate for UniformRandom {
    fn generate(&self, rng: &mut Rand64) -> Result<ListGraph, GenerationError> {
        let mut graph = ListGraph::with_size(self.size);

        for i in 0..self.size {
            let first = if self.directed { 0 } else { i + 1 };
            for j in first..self.size {
                if i == j {
                    continue;
                }
                if chance(rng) < self.density {
                    graph.add_edge(i, j, self.weights.sample(rng));
                }
            }
        }

        debug!(arcs = graph.size(), directed = self.directed, "uniform random graph generated");
        Ok(graph)
    }
}

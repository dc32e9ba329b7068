use oorandom::Rand64;
use tracing::debug;

use super::{
    check_size_and_density, default_attempt_limit, AttemptCounter, Generate, GenerationError,
};
use crate::graph::{ListGraph, WeightRange, WeightedGraph};
use crate::rng::node;

const NAME: &str = "connected random";

/// Generates a connected, undirected random graph.
///
/// A random walk first builds a spanning tree: the walk jumps to uniformly drawn nodes and
/// every first visit of a node connects it to the node the walk came from. Afterwards
/// random pairs are added until `floor(density * n * (n - 1) / 2)` edges exist.
/// Weights are drawn last, for the pairs `i < j` in row-major order, and every edge is
/// stored as a single arc `i -> j`.
#[derive(Debug, Clone, Copy)]
pub struct ConnectedRandom {
    size: usize,
    density: f64,
    weights: WeightRange,
    max_attempts: u64,
}

impl ConnectedRandom {
    pub fn new(size: usize, density: f64, weights: WeightRange) -> Result<Self, GenerationError> {
        check_size_and_density(NAME, size, density)?;
        Ok(ConnectedRandom {
            size,
            density,
            weights,
            max_attempts: default_attempt_limit(size, 1),
        })
    }

    /// Caps the random draws spent on both phases together.
    pub fn with_max_attempts(mut self, max_attempts: u64) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Number of edges the graph ends up with.
    pub fn target_edges(&self) -> usize {
        let n = self.size as f64;
        let max_edges = self.size * (self.size - 1) / 2;
        let wanted = (self.density * n * (n - 1.0) / 2.0).floor() as usize;
        wanted.min(max_edges).max(self.size - 1)
    }
}

impl Generate for ConnectedRandom {
    fn generate(&self, rng: &mut Rand64) -> Result<ListGraph, GenerationError> {
        let n = self.size;
        let mut adjacent = vec![false; n * n];
        let mut counter = AttemptCounter::new(NAME, self.max_attempts);

        // spanning tree
        let mut in_tree = vec![false; n];
        let mut current = node(rng, n);
        in_tree[current] = true;
        let mut remaining = n - 1;
        let mut edges = 0;
        while remaining > 0 {
            counter.tick()?;
            let next = node(rng, n);
            if !in_tree[next] {
                adjacent[n * current + next] = true;
                adjacent[n * next + current] = true;
                in_tree[next] = true;
                remaining -= 1;
                edges += 1;
            }
            current = next;
        }
        debug!(attempts = counter.attempts(), "spanning tree complete");

        // densification
        let target = self.target_edges();
        while edges < target {
            counter.tick()?;
            let a = node(rng, n);
            let b = node(rng, n);
            if a != b && !adjacent[n * a + b] {
                adjacent[n * a + b] = true;
                adjacent[n * b + a] = true;
                edges += 1;
            }
        }

        let mut graph = ListGraph::with_size(n);
        for i in 0..n {
            for j in (i + 1)..n {
                if adjacent[n * i + j] {
                    graph.add_edge(i, j, self.weights.sample(rng));
                }
            }
        }

        debug!(
            arcs = graph.size(),
            attempts = counter.attempts(),
            "connected random graph generated"
        );
        Ok(graph)
    }
}

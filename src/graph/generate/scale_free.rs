use oorandom::Rand64;
use tracing::{debug, trace};

use super::{default_attempt_limit, AttemptCounter, Generate, GenerationError};
use crate::graph::{ListGraph, WeightRange, WeightedGraph};
use crate::rng::{chance, node};

const NAME: &str = "scale free";

/// Generates a graph by preferential attachment.
///
/// The first `initial_nodes` nodes form a complete graph. Every further node `i` then
/// draws candidates `c < i` uniformly and links to a candidate with probability
/// `(degree(c) / total_degree) ^ offset_exponent` until it has `min_degree` neighbors.
/// Edges are stored as single arcs, `i -> j` with `i < j` for the seed clique and
/// `new -> candidate` while growing.
#[derive(Debug, Clone, Copy)]
pub struct ScaleFree {
    size: usize,
    initial_nodes: usize,
    offset_exponent: f64,
    min_degree: usize,
    weights: WeightRange,
    max_attempts: u64,
}

impl ScaleFree {
    pub fn new(
        size: usize,
        initial_nodes: usize,
        offset_exponent: f64,
        min_degree: usize,
        weights: WeightRange,
    ) -> Result<Self, GenerationError> {
        let invalid = |reason: String| {
            Err(GenerationError::InvalidParameters {
                generator: NAME,
                reason,
            })
        };
        if initial_nodes < 1 || initial_nodes >= size {
            return invalid(format!(
                "initial nodes {} are not in [1, {})",
                initial_nodes, size
            ));
        }
        if min_degree < 1 || min_degree > initial_nodes {
            return invalid(format!(
                "min degree {} is not in [1, {}]",
                min_degree, initial_nodes
            ));
        }
        if !offset_exponent.is_finite() || offset_exponent < 0.0 {
            return invalid(format!(
                "offset exponent {} is not a finite, non-negative number",
                offset_exponent
            ));
        }

        Ok(ScaleFree {
            size,
            initial_nodes,
            offset_exponent,
            min_degree,
            weights,
            max_attempts: default_attempt_limit(size, min_degree as u64),
        })
    }

    /// Caps the candidate draws spent on the whole growth phase.
    pub fn with_max_attempts(mut self, max_attempts: u64) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Probability to link to a node of the given degree.
    /// Without any edge yet every candidate is accepted.
    fn acceptance(&self, degree: usize, total_degree: usize) -> f64 {
        if total_degree == 0 {
            return 1.0;
        }
        (degree as f64 / total_degree as f64).powf(self.offset_exponent)
    }
}

impl Generate for ScaleFree {
    fn generate(&self, rng: &mut Rand64) -> Result<ListGraph, GenerationError> {
        let mut graph = ListGraph::with_size(self.size);
        let mut degrees = vec![0usize; self.size];
        let mut total_degree = 0usize;

        for i in 0..self.initial_nodes {
            for j in (i + 1)..self.initial_nodes {
                graph.add_edge(i, j, self.weights.sample(rng));
                degrees[i] += 1;
                degrees[j] += 1;
                total_degree += 2;
            }
        }

        let mut counter = AttemptCounter::new(NAME, self.max_attempts);
        for i in self.initial_nodes..self.size {
            while degrees[i] < self.min_degree {
                counter.tick()?;
                let candidate = node(rng, i);
                let p = self.acceptance(degrees[candidate], total_degree);
                if chance(rng) < p {
                    graph.add_edge(i, candidate, self.weights.sample(rng));
                    degrees[i] += 1;
                    degrees[candidate] += 1;
                    total_degree += 2;
                }
            }
            trace!(node = i, attempts = counter.attempts(), "node attached");
        }

        debug!(
            arcs = graph.size(),
            attempts = counter.attempts(),
            max_degree = degrees.iter().max().copied().unwrap_or(0),
            "scale free graph generated"
        );
        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::WeightedGraph;
    use crate::rng::rng64;
    use proptest::prelude::*;
    use rstest::rstest;

    fn undirected_degrees(graph: &ListGraph) -> Vec<usize> {
        let mut degrees = vec![0; graph.order()];
        for ((from, to), _) in graph.iter_edges() {
            degrees[from] += 1;
            degrees[to] += 1;
        }
        degrees
    }

    #[test]
    fn seed_nodes_form_clique() {
        let gen = ScaleFree::new(30, 5, 1.0, 2, WeightRange::default()).unwrap();
        let graph = gen.generate(&mut rng64(4)).unwrap();

        for i in 0..5 {
            for j in (i + 1)..5 {
                assert!(graph.has_edge((i, j)), "Seed arc {} -> {} is missing.", i, j);
            }
        }
        let seed_arcs: Vec<_> = graph.iter_edges().take(10).map(|(edge, _)| edge).collect();
        assert!(
            seed_arcs.iter().all(|(from, to)| from < to && *to < 5),
            "The first arcs should be the seed clique."
        );
    }

    #[test]
    fn grown_nodes_link_backwards() {
        let gen = ScaleFree::new(50, 3, 1.0, 2, WeightRange::default()).unwrap();
        let graph = gen.generate(&mut rng64(8)).unwrap();

        for ((from, to), weight) in graph.iter_edges().skip(3) {
            assert!(to < from, "Grown arc {} -> {} points forward.", from, to);
            assert!(WeightRange::default().contains(weight), "Weight out of range.");
        }
    }

    #[test]
    fn single_seed_node_still_grows() {
        let gen = ScaleFree::new(20, 1, 1.0, 1, WeightRange::default()).unwrap();
        let graph = gen.generate(&mut rng64(2)).unwrap();

        assert_eq!(graph.size(), 19, "Every grown node should have exactly one arc.");
        assert!(graph.is_weakly_connected(), "Tree is not connected.");
    }

    #[test]
    fn zero_exponent_attaches_uniformly() {
        let gen = ScaleFree::new(40, 2, 0.0, 2, WeightRange::default()).unwrap();
        let graph = gen.generate(&mut rng64(6)).unwrap();

        assert_eq!(graph.size(), 1 + 38 * 2, "Every draw should have been accepted.");
    }

    #[test]
    fn exhausted_attempts_error() {
        let gen = ScaleFree::new(200, 2, 3.0, 2, WeightRange::default())
            .unwrap()
            .with_max_attempts(5);

        assert_eq!(
            gen.generate(&mut rng64(1)),
            Err(GenerationError::AttemptLimitExceeded {
                generator: NAME,
                limit: 5
            })
        );
    }

    #[rstest]
    #[case(1, 1, 1.0, 1)]
    #[case(5, 0, 1.0, 1)]
    #[case(5, 5, 1.0, 1)]
    #[case(5, 2, 1.0, 0)]
    #[case(5, 2, 1.0, 3)]
    #[case(5, 2, -1.0, 1)]
    #[case(5, 2, f64::INFINITY, 1)]
    fn invalid_parameters_error(
        #[case] n: usize,
        #[case] initial: usize,
        #[case] exponent: f64,
        #[case] min_degree: usize,
    ) {
        assert!(
            ScaleFree::new(n, initial, exponent, min_degree, WeightRange::default()).is_err(),
            "Invalid parameters were accepted."
        );
    }

    proptest! {
        #[test]
        fn every_grown_node_reaches_min_degree(
            n in 3usize..60,
            initial in 2usize..4,
            min_degree in 1usize..3,
            seed in any::<u64>(),
        ) {
            prop_assume!(initial < n && min_degree <= initial);
            let gen = ScaleFree::new(n, initial, 1.0, min_degree, WeightRange::default()).unwrap();
            let graph = gen.generate(&mut rng64(seed as u128)).unwrap();
            let degrees = undirected_degrees(&graph);

            for i in initial..n {
                prop_assert!(graph.degree(i).unwrap() >= min_degree);
                prop_assert!(degrees[i] >= min_degree);
            }
        }
    }
}

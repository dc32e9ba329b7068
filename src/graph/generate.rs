mod connected_random;
mod error;
mod grid;
mod scale_free;
mod uniform_random;

pub use connected_random::ConnectedRandom;
pub use error::GenerationError;
pub use grid::Grid;
pub use scale_free::ScaleFree;
pub use uniform_random::UniformRandom;

use oorandom::Rand64;

use crate::graph::ListGraph;

/// Attempts granted per squared node for rejection sampling loops.
const ATTEMPTS_PER_NODE_PAIR: u64 = 64;
/// Attempts granted regardless of the graph size.
const BASE_ATTEMPTS: u64 = 1024;

/// A Generator for weighted graphs.
pub trait Generate {
    /// Generates a graph, drawing every random decision from `rng`.
    /// The generator has exclusive use of `rng` until it returns.
    fn generate(&self, rng: &mut Rand64) -> Result<ListGraph, GenerationError>;
}

/// Default cap on the random draws of a rejection sampling loop over `order` nodes,
/// scaled by `factor`.
pub(crate) fn default_attempt_limit(order: usize, factor: u64) -> u64 {
    let order = order as u64;
    order
        .saturating_mul(order)
        .saturating_mul(ATTEMPTS_PER_NODE_PAIR)
        .saturating_mul(factor.max(1))
        .saturating_add(BASE_ATTEMPTS)
}

/// Rejects an empty graph and densities outside of (0, 1].
pub(crate) fn check_size_and_density(
    generator: &'static str,
    size: usize,
    density: f64,
) -> Result<(), GenerationError> {
    if size == 0 {
        return Err(GenerationError::InvalidParameters {
            generator,
            reason: "the node count has to be positive".to_string(),
        });
    }
    if !(density > 0.0 && density <= 1.0) {
        return Err(GenerationError::InvalidParameters {
            generator,
            reason: format!("density {} is not in (0, 1]", density),
        });
    }
    Ok(())
}

/// Counts the draws of a rejection sampling loop and fails once the limit is exceeded.
#[derive(Debug)]
pub(crate) struct AttemptCounter {
    generator: &'static str,
    attempts: u64,
    limit: u64,
}

impl AttemptCounter {
    pub(crate) fn new(generator: &'static str, limit: u64) -> Self {
        AttemptCounter {
            generator,
            attempts: 0,
            limit,
        }
    }

    pub(crate) fn tick(&mut self) -> Result<(), GenerationError> {
        self.attempts += 1;
        if self.attempts > self.limit {
            return Err(GenerationError::AttemptLimitExceeded {
                generator: self.generator,
                limit: self.limit,
            });
        }
        Ok(())
    }

    pub(crate) fn attempts(&self) -> u64 {
        self.attempts
    }
}

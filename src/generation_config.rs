mod config_layer;
mod scale_free_config;

pub use config_layer::ConfigLayer;
pub use scale_free_config::ScaleFreeConfig;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::graph::{Cost, GraphError, WeightRange};
use crate::rng::os_random_seed;

pub const DEFAULT_MIN_COST: Cost = 1;
pub const DEFAULT_MAX_COST: Cost = 100;

pub trait Fix<CorrectType> {
    fn to_fixed(&self) -> CorrectType;
}

/// The graph model to generate.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum GraphKind {
    /// Every arc is drawn independently.
    Random,
    /// Random spanning tree plus random edges up to the density.
    Connected,
    /// Square lattice with randomly dropped arcs.
    Grid,
    /// Preferential attachment growth.
    #[value(name = "scalefree")]
    ScaleFree,
}

/// The serialization format written after generation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Pajek,
    Pmed,
}

/// Complete parameters of one generator run. Immutable once built.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    pub nodes: usize,
    pub kind: GraphKind,
    pub density: f64,
    pub format: OutputFormat,
    pub seed: Option<u64>,
    pub min_cost: Cost,
    pub max_cost: Cost,
    pub centers: Option<usize>,
    pub directed: bool,
    pub scale_free: ScaleFreeConfig,
    pub max_attempts: Option<u64>,
}

/// A configuration whose seed has been fixed.
#[derive(Clone, Debug, PartialEq)]
pub struct SeededConfig {
    pub seed: u64,
    pub config: GenerationConfig,
}

impl Fix<Result<SeededConfig, ConfigError>> for GenerationConfig {
    fn to_fixed(&self) -> Result<SeededConfig, ConfigError> {
        self.seeded_with(os_random_seed)
    }
}

/// Whether `centers` is a usable p-median center count for a graph of `order` nodes.
pub fn centers_fit(centers: usize, order: usize) -> bool {
    centers >= 1 && centers < order.saturating_sub(1)
}

impl GenerationConfig {
    /// Checks all parameters before anything gets generated.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.nodes == 0 {
            return Err(ConfigError::InvalidNodeCount(self.nodes));
        }
        if !(self.density > 0.0 && self.density <= 1.0) {
            return Err(ConfigError::InvalidDensity(self.density));
        }
        self.weights()?;
        if self.format == OutputFormat::Pmed {
            let centers = self.centers();
            if !centers_fit(centers, self.nodes) {
                return Err(ConfigError::InvalidCenters {
                    centers,
                    nodes: self.nodes,
                });
            }
        }
        if self.kind == GraphKind::ScaleFree {
            self.scale_free.validate(self.nodes)?;
        }
        Ok(())
    }

    /// Fixes the seed, asking `draw` for one only if none is configured.
    pub fn seeded_with<F>(&self, draw: F) -> Result<SeededConfig, ConfigError>
    where
        F: FnOnce() -> Result<u128, getrandom::Error>,
    {
        let seed = match self.seed {
            Some(seed) => seed,
            None => (draw()? >> 64) as u64,
        };
        Ok(SeededConfig {
            seed,
            config: self.clone(),
        })
    }

    pub fn weights(&self) -> Result<WeightRange, ConfigError> {
        Ok(WeightRange::new(self.min_cost, self.max_cost)?)
    }

    /// Configured center count, `nodes / 3` if unset.
    pub fn centers(&self) -> usize {
        self.centers.unwrap_or(self.nodes / 3)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("node count has to be positive, got {0}")]
    InvalidNodeCount(usize),
    #[error("density has to be in (0, 1], got {0}")]
    InvalidDensity(f64),
    #[error(transparent)]
    InvalidCosts(#[from] GraphError),
    #[error("center count has to be at least 1 and below {nodes} - 1, got {centers}")]
    InvalidCenters { centers: usize, nodes: usize },
    #[error("invalid scale free parameters: {0}")]
    InvalidScaleFree(String),
    #[error("missing required parameter `{0}`")]
    Missing(&'static str),
    #[error("could not read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid RON config: {0}")]
    Ron(#[from] ron::Error),
    #[error("could not draw a seed from the operating system: {0}")]
    Seed(#[from] getrandom::Error),
    #[error("unsupported config file extension of {0}, expected .yaml, .yml or .ron")]
    UnsupportedExtension(PathBuf),
}

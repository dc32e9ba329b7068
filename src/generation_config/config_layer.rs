use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

use super::{
    ConfigError, GenerationConfig, GraphKind, OutputFormat, ScaleFreeConfig, DEFAULT_MAX_COST,
    DEFAULT_MIN_COST,
};
use crate::graph::Cost;

/// A partial set of parameters, read from a config file or the command line.
/// Layers are merged, later layers win, and the result is resolved into a
/// [`GenerationConfig`] with defaults for everything optional.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigLayer {
    pub nodes: Option<usize>,
    pub kind: Option<GraphKind>,
    pub density: Option<f64>,
    pub format: Option<OutputFormat>,
    pub seed: Option<u64>,
    pub min_cost: Option<Cost>,
    pub max_cost: Option<Cost>,
    pub centers: Option<usize>,
    pub directed: Option<bool>,
    pub initial_nodes: Option<usize>,
    pub min_degree: Option<usize>,
    pub offset_exponent: Option<f64>,
    pub max_attempts: Option<u64>,
}

impl ConfigLayer {
    /// Reads a layer from a `.yaml`, `.yml` or `.ron` file.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let layer = match extension.as_deref() {
            Some("yaml") | Some("yml") => Self::from_yaml(&text)?,
            Some("ron") => Self::from_ron(&text)?,
            _ => return Err(ConfigError::UnsupportedExtension(path.to_path_buf())),
        };
        debug!(path = %path.display(), ?layer, "config file loaded");
        Ok(layer)
    }

    pub fn from_yaml(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn from_ron(text: &str) -> Result<Self, ConfigError> {
        Ok(ron::de::from_str(text)?)
    }

    /// Returns a layer with every parameter set in `overrides` replacing the one in `self`.
    pub fn merge(self, overrides: ConfigLayer) -> ConfigLayer {
        ConfigLayer {
            nodes: overrides.nodes.or(self.nodes),
            kind: overrides.kind.or(self.kind),
            density: overrides.density.or(self.density),
            format: overrides.format.or(self.format),
            seed: overrides.seed.or(self.seed),
            min_cost: overrides.min_cost.or(self.min_cost),
            max_cost: overrides.max_cost.or(self.max_cost),
            centers: overrides.centers.or(self.centers),
            directed: overrides.directed.or(self.directed),
            initial_nodes: overrides.initial_nodes.or(self.initial_nodes),
            min_degree: overrides.min_degree.or(self.min_degree),
            offset_exponent: overrides.offset_exponent.or(self.offset_exponent),
            max_attempts: overrides.max_attempts.or(self.max_attempts),
        }
    }

    /// Fills in defaults and validates the result.
    pub fn resolve(self) -> Result<GenerationConfig, ConfigError> {
        let scale_free_defaults = ScaleFreeConfig::default();
        let config = GenerationConfig {
            nodes: self.nodes.ok_or(ConfigError::Missing("nodes"))?,
            kind: self.kind.ok_or(ConfigError::Missing("type"))?,
            density: self.density.ok_or(ConfigError::Missing("density"))?,
            format: self.format.ok_or(ConfigError::Missing("format"))?,
            seed: self.seed,
            min_cost: self.min_cost.unwrap_or(DEFAULT_MIN_COST),
            max_cost: self.max_cost.unwrap_or(DEFAULT_MAX_COST),
            centers: self.centers,
            directed: self.directed.unwrap_or(true),
            scale_free: ScaleFreeConfig {
                initial_nodes: self
                    .initial_nodes
                    .unwrap_or(scale_free_defaults.initial_nodes),
                min_degree: self.min_degree.unwrap_or(scale_free_defaults.min_degree),
                offset_exponent: self
                    .offset_exponent
                    .unwrap_or(scale_free_defaults.offset_exponent),
            },
            max_attempts: self.max_attempts,
        };
        config.validate()?;
        Ok(config)
    }
}

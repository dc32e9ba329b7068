use serde::{Deserialize, Serialize};

use super::ConfigError;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaleFreeConfig {
    pub initial_nodes: usize,
    pub min_degree: usize,
    pub offset_exponent: f64,
}

impl Default for ScaleFreeConfig {
    fn default() -> Self {
        ScaleFreeConfig {
            initial_nodes: 2,
            min_degree: 1,
            offset_exponent: 1.0,
        }
    }
}

impl ScaleFreeConfig {
    pub fn validate(&self, nodes: usize) -> Result<(), ConfigError> {
        if self.initial_nodes < 1 || self.initial_nodes >= nodes {
            return Err(ConfigError::InvalidScaleFree(format!(
                "initial nodes have to be in [1, {}), got {}",
                nodes, self.initial_nodes
            )));
        }
        if self.min_degree < 1 || self.min_degree > self.initial_nodes {
            return Err(ConfigError::InvalidScaleFree(format!(
                "min degree has to be in [1, {}], got {}",
                self.initial_nodes, self.min_degree
            )));
        }
        if !self.offset_exponent.is_finite() || self.offset_exponent < 0.0 {
            return Err(ConfigError::InvalidScaleFree(format!(
                "offset exponent has to be finite and non-negative, got {}",
                self.offset_exponent
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(3, 2, 1, 1.0, true)]
    #[case(3, 2, 2, 0.0, true)]
    #[case(2, 2, 1, 1.0, false)]
    #[case(3, 0, 1, 1.0, false)]
    #[case(3, 2, 0, 1.0, false)]
    #[case(3, 2, 3, 1.0, false)]
    #[case(3, 2, 1, -2.0, false)]
    #[case(3, 2, 1, f64::NAN, false)]
    fn validate_works(
        #[case] nodes: usize,
        #[case] initial_nodes: usize,
        #[case] min_degree: usize,
        #[case] offset_exponent: f64,
        #[case] valid: bool,
    ) {
        let cfg = ScaleFreeConfig {
            initial_nodes,
            min_degree,
            offset_exponent,
        };
        assert_eq!(cfg.validate(nodes).is_ok(), valid, "{:?} with {} nodes", cfg, nodes);
    }
}

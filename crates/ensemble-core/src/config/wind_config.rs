use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// Wind-direction aggregation configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindConfig {
    /// Width of the angular gaussian kernel, in degrees.
    #[serde(alias = "sigmaDeg")]
    pub sigma_deg: f64,
}

impl Default for WindConfig {
    fn default() -> Self {
        Self {
            sigma_deg: defaults::DEFAULT_WIND_SIGMA_DEG,
        }
    }
}

impl WindConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.sigma_deg.is_finite() && self.sigma_deg > 0.0) {
            return Err(ConfigError::invalid(
                "wind.sigma_deg",
                format!("must be a positive number, got {}", self.sigma_deg),
            ));
        }
        Ok(())
    }
}

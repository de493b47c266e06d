use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// Reduction used for continuous parameters (temperature, humidity, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContinuousMethod {
    Mean,
    #[default]
    Median,
    TrimmedMean,
    AdaptiveTrimmedMean,
    WinsorizedMean,
    RobustTrimmedMean,
    Gaussian,
    AdaptiveGaussian,
    RobustGaussian,
    MixtureGaussian,
    ConstrainedGaussian,
}

impl ContinuousMethod {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Mean => "mean",
            Self::Median => "median",
            Self::TrimmedMean => "trimmed_mean",
            Self::AdaptiveTrimmedMean => "adaptive_trimmed_mean",
            Self::WinsorizedMean => "winsorized_mean",
            Self::RobustTrimmedMean => "robust_trimmed_mean",
            Self::Gaussian => "gaussian",
            Self::AdaptiveGaussian => "adaptive_gaussian",
            Self::RobustGaussian => "robust_gaussian",
            Self::MixtureGaussian => "mixture_gaussian",
            Self::ConstrainedGaussian => "constrained_gaussian",
        }
    }
}

/// Continuous-parameter aggregation configuration. Only the fields relevant
/// to the selected `method` are read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContinuousConfig {
    pub method: ContinuousMethod,
    /// Fraction trimmed from each tail (trimmed/winsorized mean).
    pub trim_percent: f64,
    /// Upper bound for the adaptive trim.
    pub max_trim_percent: f64,
    /// Tukey fence multiplier for the robust trimmed mean.
    pub iqr_fence_k: f64,
    /// Fixed kernel width (gaussian, mixture, constrained).
    pub sigma: f64,
    /// Standard-deviation multiplier for the adaptive gaussian.
    pub sigma_multiplier: f64,
    /// MAD scale factor for the robust gaussian.
    pub mad_scale: f64,
    /// Number of centers for the mixture gaussian.
    pub mixture_components: usize,
    /// Cut-off in sigmas for the constrained gaussian.
    pub max_deviation: f64,
}

impl Default for ContinuousConfig {
    fn default() -> Self {
        Self {
            method: ContinuousMethod::default(),
            trim_percent: defaults::DEFAULT_TRIM_PERCENT,
            max_trim_percent: defaults::DEFAULT_MAX_TRIM_PERCENT,
            iqr_fence_k: defaults::DEFAULT_IQR_FENCE_K,
            sigma: defaults::DEFAULT_GAUSSIAN_SIGMA,
            sigma_multiplier: defaults::DEFAULT_SIGMA_MULTIPLIER,
            mad_scale: crate::constants::MAD_TO_SIGMA,
            mixture_components: defaults::DEFAULT_MIXTURE_COMPONENTS,
            max_deviation: defaults::DEFAULT_MAX_DEVIATION,
        }
    }
}

impl ContinuousConfig {
    pub fn with_method(method: ContinuousMethod) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..0.5).contains(&self.trim_percent) {
            return Err(ConfigError::invalid("continuous.trim_percent", "must be in [0, 0.5)"));
        }
        if !(0.0..0.5).contains(&self.max_trim_percent) {
            return Err(ConfigError::invalid(
                "continuous.max_trim_percent",
                "must be in [0, 0.5)",
            ));
        }
        let positive = [
            ("continuous.iqr_fence_k", self.iqr_fence_k),
            ("continuous.sigma", self.sigma),
            ("continuous.sigma_multiplier", self.sigma_multiplier),
            ("continuous.mad_scale", self.mad_scale),
            ("continuous.max_deviation", self.max_deviation),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::invalid(field, format!("must be positive, got {value}")));
            }
        }
        if self.mixture_components == 0 {
            return Err(ConfigError::invalid("continuous.mixture_components", "must be >= 1"));
        }
        Ok(())
    }
}

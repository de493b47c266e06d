use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// Precipitation aggregation and probability-of-precipitation configuration.
///
/// Field names follow the settings files consumed by the UI layer, so the
/// PoP coefficients sit flat next to the aggregation parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrecipConfig {
    /// A model is wet when its amount is strictly above this (mm).
    pub wet_threshold_mm: f64,
    /// Aggregate in `ln(mm + epsilon)` space.
    pub use_log_transform: bool,
    /// Offset that keeps the log transform finite at 0 mm.
    pub epsilon: f64,
    /// Kernel width as a fraction of the (transformed) median.
    pub sigma_ratio: f64,
    /// Relative half-width of the agreement band used by the consensus index.
    pub ci_tolerance: f64,
    /// PoP weight of the wet-model proportion.
    pub a: f64,
    /// PoP weight of the intensity term.
    pub b: f64,
    /// PoP weight of the lead-time confidence term.
    pub c: f64,
    /// Amount (mm) at which the intensity term is zero.
    pub neutral_mm: f64,
    /// Amount (mm) at which the intensity term saturates at +1.
    pub mm_max: f64,
    /// Confidence lost per forecast day.
    pub day_decay_per_day: f64,
}

impl Default for PrecipConfig {
    fn default() -> Self {
        Self {
            wet_threshold_mm: defaults::DEFAULT_WET_THRESHOLD_MM,
            use_log_transform: defaults::DEFAULT_USE_LOG_TRANSFORM,
            epsilon: defaults::DEFAULT_LOG_EPSILON,
            sigma_ratio: defaults::DEFAULT_SIGMA_RATIO,
            ci_tolerance: defaults::DEFAULT_CI_TOLERANCE,
            a: defaults::DEFAULT_POP_A,
            b: defaults::DEFAULT_POP_B,
            c: defaults::DEFAULT_POP_C,
            neutral_mm: defaults::DEFAULT_POP_NEUTRAL_MM,
            mm_max: defaults::DEFAULT_POP_MM_MAX,
            day_decay_per_day: defaults::DEFAULT_POP_DAY_DECAY_PER_DAY,
        }
    }
}

impl PrecipConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            ("precip.wet_threshold_mm", self.wet_threshold_mm),
            ("precip.epsilon", self.epsilon),
            ("precip.sigma_ratio", self.sigma_ratio),
            ("precip.ci_tolerance", self.ci_tolerance),
            ("precip.a", self.a),
            ("precip.b", self.b),
            ("precip.c", self.c),
            ("precip.neutral_mm", self.neutral_mm),
            ("precip.mm_max", self.mm_max),
            ("precip.day_decay_per_day", self.day_decay_per_day),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(ConfigError::invalid(field, format!("must be finite, got {value}")));
            }
        }
        if self.wet_threshold_mm < 0.0 {
            return Err(ConfigError::invalid("precip.wet_threshold_mm", "must be >= 0"));
        }
        if self.use_log_transform && self.epsilon <= 0.0 {
            return Err(ConfigError::invalid(
                "precip.epsilon",
                "must be > 0 when use_log_transform is enabled",
            ));
        }
        if self.sigma_ratio <= 0.0 {
            return Err(ConfigError::invalid("precip.sigma_ratio", "must be > 0"));
        }
        if self.ci_tolerance < 0.0 {
            return Err(ConfigError::invalid("precip.ci_tolerance", "must be >= 0"));
        }
        if self.neutral_mm <= 0.0 {
            return Err(ConfigError::invalid("precip.neutral_mm", "must be > 0"));
        }
        if self.mm_max <= self.neutral_mm {
            return Err(ConfigError::invalid(
                "precip.mm_max",
                format!("must exceed neutral_mm ({})", self.neutral_mm),
            ));
        }
        if self.day_decay_per_day < 0.0 {
            return Err(ConfigError::invalid("precip.day_decay_per_day", "must be >= 0"));
        }
        Ok(())
    }
}

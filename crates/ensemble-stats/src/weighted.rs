//! Weighted averages over ensemble members.
//!
//! Weights are never negative. A set of weights that sums to zero is treated
//! as "no preference" and the plain mean of the valid values is returned.

use std::collections::HashMap;

use serde::Serialize;
use tracing::{debug, warn};

use ensemble_core::{ModelSample, StatsError, StatsResult};

use crate::sanitize::mean_of;

fn check_weight(weight: f64) -> StatsResult<f64> {
    if weight.is_finite() && weight >= 0.0 {
        Ok(weight)
    } else {
        Err(StatsError::InvalidParameter {
            name: "weight",
            value: weight,
            reason: "weights must be finite and non-negative",
        })
    }
}

/// Reduce `(value, weight)` pairs whose values are already known to be finite.
fn reduce_pairs(pairs: &[(f64, f64)], operation: &'static str) -> StatsResult<f64> {
    if pairs.is_empty() {
        return Err(StatsError::empty(operation));
    }
    let total: f64 = pairs.iter().map(|(_, w)| w).sum();
    if total <= 0.0 {
        debug!(operation, "weights sum to zero, using unweighted mean");
        let values: Vec<f64> = pairs.iter().map(|(v, _)| *v).collect();
        return Ok(mean_of(&values));
    }
    Ok(pairs.iter().map(|(v, w)| v * w).sum::<f64>() / total)
}

/// Σ wᵢxᵢ / Σ wᵢ over parallel slices. Non-finite values are skipped
/// together with their weight.
pub fn weighted_average(values: &[f64], weights: &[f64]) -> StatsResult<f64> {
    if values.len() != weights.len() {
        return Err(StatsError::LengthMismatch {
            values: values.len(),
            weights: weights.len(),
        });
    }
    let mut pairs = Vec::with_capacity(values.len());
    for (v, w) in values.iter().zip(weights) {
        let w = check_weight(*w)?;
        if v.is_finite() {
            pairs.push((*v, w));
        }
    }
    reduce_pairs(&pairs, "weighted_average")
}

/// Scale weights to sum to 1. All-zero weights become uniform.
pub fn normalize_weights(weights: &[f64]) -> StatsResult<Vec<f64>> {
    if weights.is_empty() {
        return Err(StatsError::empty("normalize_weights"));
    }
    let mut total = 0.0;
    for w in weights {
        total += check_weight(*w)?;
    }
    if total <= 0.0 {
        let uniform = 1.0 / weights.len() as f64;
        return Ok(vec![uniform; weights.len()]);
    }
    Ok(weights.iter().map(|w| w / total).collect())
}

/// Weighted average together with the normalized weights actually applied.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedAverage {
    pub value: f64,
    /// One entry per valid value, summing to 1.
    pub weights: Vec<f64>,
}

pub fn weighted_average_normalized(
    values: &[f64],
    weights: &[f64],
) -> StatsResult<NormalizedAverage> {
    if values.len() != weights.len() {
        return Err(StatsError::LengthMismatch {
            values: values.len(),
            weights: weights.len(),
        });
    }
    let (kept_values, kept_weights): (Vec<f64>, Vec<f64>) = values
        .iter()
        .zip(weights)
        .filter(|(v, _)| v.is_finite())
        .map(|(v, w)| (*v, *w))
        .unzip();
    if kept_values.is_empty() {
        return Err(StatsError::empty("weighted_average_normalized"));
    }
    let weights = normalize_weights(&kept_weights)?;
    let value = kept_values.iter().zip(&weights).map(|(v, w)| v * w).sum();
    Ok(NormalizedAverage { value, weights })
}

/// Per-model weights looked up by `model_id`; unlisted models get
/// `default_weight`.
pub fn weighted_average_by_model(
    samples: &[ModelSample],
    weights: &HashMap<String, f64>,
    default_weight: f64,
) -> StatsResult<f64> {
    let default_weight = check_weight(default_weight)?;
    let mut pairs = Vec::with_capacity(samples.len());
    for sample in samples {
        let Some(value) = sample.valid_value() else {
            continue;
        };
        let weight = match weights.get(&sample.model_id) {
            Some(w) => check_weight(*w)?,
            None => default_weight,
        };
        pairs.push((value, weight));
    }
    reduce_pairs(&pairs, "weighted_average_by_model")
}

/// A model's skill weight, discounted by confidence and by the age of the run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AdaptiveWeight {
    pub base_weight: f64,
    /// Clamped to `[0, 1]`.
    pub confidence: f64,
    pub age_hours: f64,
}

impl AdaptiveWeight {
    pub fn new(base_weight: f64, confidence: f64, age_hours: f64) -> Self {
        Self {
            base_weight,
            confidence,
            age_hours,
        }
    }

    /// `base · clamp(confidence, 0, 1) · exp(−decay · age)`.
    pub fn effective(&self, decay_per_hour: f64) -> StatsResult<f64> {
        let base = check_weight(self.base_weight)?;
        let confidence = if self.confidence.is_finite() {
            self.confidence.clamp(0.0, 1.0)
        } else {
            0.0
        };
        let age = self.age_hours.max(0.0);
        Ok(base * confidence * (-decay_per_hour * age).exp())
    }
}

/// Weighted average whose weights decay with model age. Models without an
/// entry are skipped.
pub fn adaptive_weighted_average(
    samples: &[ModelSample],
    weights: &HashMap<String, AdaptiveWeight>,
    decay_per_hour: f64,
) -> StatsResult<f64> {
    let decay = check_weight(decay_per_hour).map_err(|_| StatsError::InvalidParameter {
        name: "decay_per_hour",
        value: decay_per_hour,
        reason: "must be finite and non-negative",
    })?;
    let mut pairs = Vec::with_capacity(samples.len());
    for sample in samples {
        let (Some(value), Some(weight)) = (sample.valid_value(), weights.get(&sample.model_id))
        else {
            continue;
        };
        pairs.push((value, weight.effective(decay)?));
    }
    reduce_pairs(&pairs, "adaptive_weighted_average")
}

/// Like [`weighted_average_by_model`] but a member with a missing or
/// non-finite value contributes `fallback_value` instead of being dropped.
pub fn robust_weighted_average(
    samples: &[ModelSample],
    weights: &HashMap<String, f64>,
    default_weight: f64,
    fallback_value: f64,
) -> StatsResult<f64> {
    if !fallback_value.is_finite() {
        return Err(StatsError::InvalidParameter {
            name: "fallback_value",
            value: fallback_value,
            reason: "must be finite",
        });
    }
    let default_weight = check_weight(default_weight)?;
    let mut pairs = Vec::with_capacity(samples.len());
    let mut substituted = 0usize;
    for sample in samples {
        let value = sample.valid_value().unwrap_or_else(|| {
            substituted += 1;
            fallback_value
        });
        let weight = match weights.get(&sample.model_id) {
            Some(w) => check_weight(*w)?,
            None => default_weight,
        };
        pairs.push((value, weight));
    }
    if substituted > 0 {
        warn!(substituted, fallback_value, "invalid members replaced by fallback");
    }
    reduce_pairs(&pairs, "robust_weighted_average")
}

//! Wet-model selection and agreement diagnostics.

use serde::Serialize;

use ensemble_core::{ModelSample, StatsResult};
use ensemble_stats::median;

/// A model whose amount exceeded the wet threshold.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WetModel {
    pub model: String,
    pub mm: f64,
}

/// Models with a valid amount strictly above `threshold_mm`, in input order.
pub fn wet_models(samples: &[ModelSample], threshold_mm: f64) -> Vec<WetModel> {
    samples
        .iter()
        .filter_map(|s| {
            s.valid_value()
                .filter(|mm| *mm > threshold_mm)
                .map(|mm| WetModel {
                    model: s.model_id.clone(),
                    mm,
                })
        })
        .collect()
}

/// Percentage of values within `±tolerance · median` of the median.
pub fn consensus_index(values: &[f64], tolerance: f64) -> StatsResult<f64> {
    let center = median(values)?;
    let band = tolerance * center.abs();
    let valid: Vec<f64> = ensemble_stats::valid_values(values);
    let agreeing = valid.iter().filter(|v| (*v - center).abs() <= band).count();
    Ok(100.0 * agreeing as f64 / valid.len() as f64)
}

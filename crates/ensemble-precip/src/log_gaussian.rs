//! Gaussian-weighted mean in (optionally) log space.

use tracing::debug;

use ensemble_core::constants::MIN_LOG_SIGMA;
use ensemble_core::{PrecipConfig, StatsResult};
use ensemble_stats::{gaussian_weights, median, valid_values};

fn forward(mm: f64, config: &PrecipConfig) -> f64 {
    if config.use_log_transform {
        (mm + config.epsilon).ln()
    } else {
        mm
    }
}

fn inverse(t: f64, config: &PrecipConfig) -> f64 {
    let mm = if config.use_log_transform {
        t.exp() - config.epsilon
    } else {
        t
    };
    mm.max(0.0)
}

/// Consensus amount of `amounts` (mm).
///
/// The kernel is centered on the transformed median with
/// `σ = max(1e-9, sigma_ratio · max(median_t, 1e-9))`; if every weight
/// vanishes the transformed median itself is used. The result is mapped back
/// to millimetres and floored at 0.
pub fn log_gaussian_mm(amounts: &[f64], config: &PrecipConfig) -> StatsResult<f64> {
    let transformed: Vec<f64> = valid_values(amounts)
        .into_iter()
        .map(|mm| forward(mm, config))
        .filter(|t| t.is_finite())
        .collect();
    let center = median(&transformed)?;
    let sigma = (config.sigma_ratio * center.max(MIN_LOG_SIGMA)).max(MIN_LOG_SIGMA);
    let weights = gaussian_weights(&transformed, sigma)?;

    let total: f64 = weights.iter().sum();
    let t = if total > 0.0 && total.is_finite() {
        transformed.iter().zip(&weights).map(|(t, w)| t * w).sum::<f64>() / total
    } else {
        debug!(center, sigma, "log-gaussian weights vanished, using median");
        center
    };
    Ok(inverse(t, config))
}

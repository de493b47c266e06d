//! Gaussian-weighted means centered on the median.
//!
//! Every variant weights each value by `exp(-½((x − c)/σ)²)` and returns the
//! weighted mean. They differ only in how `σ` (and, for the mixture, the
//! centers) are chosen. Because weights are non-negative and the result is a
//! convex combination, the output always lies within `[min(x), max(x)]`.

use tracing::debug;

use ensemble_core::constants::MAD_TO_SIGMA;
use ensemble_core::{StatsError, StatsResult};

use crate::central::{mad_of_sorted, std_dev_of};
use crate::sanitize::{mean_of, median_of_sorted, require_positive, sorted_valid, valid_values};

/// Smallest sigma the adaptive variant will use.
pub const ADAPTIVE_SIGMA_FLOOR: f64 = 0.1;

#[inline]
pub(crate) fn kernel(x: f64, center: f64, sigma: f64) -> f64 {
    let z = (x - center) / sigma;
    (-0.5 * z * z).exp()
}

/// Weighted mean with a fallback for weights that underflowed to zero.
fn weighted_mean_or(values: &[f64], weights: &[f64], fallback: f64) -> f64 {
    let total: f64 = weights.iter().sum();
    if !(total > 0.0 && total.is_finite()) {
        debug!(fallback, "gaussian weights vanished, using center");
        return fallback;
    }
    values.iter().zip(weights).map(|(v, w)| v * w).sum::<f64>() / total
}

/// Gaussian weights of the finite values around their median, in input order.
pub fn gaussian_weights(values: &[f64], sigma: f64) -> StatsResult<Vec<f64>> {
    let sigma = require_positive("sigma", sigma)?;
    let sorted = sorted_valid(values, "gaussian_weights")?;
    let center = median_of_sorted(&sorted);
    Ok(valid_values(values)
        .into_iter()
        .map(|v| kernel(v, center, sigma))
        .collect())
}

/// Gaussian-weighted mean around the median with a fixed `sigma`.
pub fn gaussian_weighted(values: &[f64], sigma: f64) -> StatsResult<f64> {
    let sigma = require_positive("sigma", sigma)?;
    let sorted = sorted_valid(values, "gaussian_weighted")?;
    Ok(weighted_about_median(&sorted, sigma))
}

fn weighted_about_median(sorted: &[f64], sigma: f64) -> f64 {
    let center = median_of_sorted(sorted);
    let weights: Vec<f64> = sorted.iter().map(|v| kernel(*v, center, sigma)).collect();
    weighted_mean_or(sorted, &weights, center)
}

/// `sigma = max(std_dev × multiplier, 0.1)`.
pub fn adaptive_gaussian_weighted(values: &[f64], multiplier: f64) -> StatsResult<f64> {
    let multiplier = require_positive("multiplier", multiplier)?;
    let sorted = sorted_valid(values, "adaptive_gaussian_weighted")?;
    let sd = std_dev_of(&sorted, mean_of(&sorted));
    let sigma = (sd * multiplier).max(ADAPTIVE_SIGMA_FLOOR);
    Ok(weighted_about_median(&sorted, sigma))
}

/// `sigma = MAD × mad_scale` (1.4826 makes it a normal-consistent scale).
///
/// A zero MAD means at least half the members agree exactly; the median is
/// returned in that case.
pub fn robust_gaussian_weighted(values: &[f64], mad_scale: f64) -> StatsResult<f64> {
    let mad_scale = require_positive("mad_scale", mad_scale)?;
    let sorted = sorted_valid(values, "robust_gaussian_weighted")?;
    let sigma = mad_of_sorted(&sorted) * mad_scale;
    if sigma <= f64::EPSILON {
        return Ok(median_of_sorted(&sorted));
    }
    Ok(weighted_about_median(&sorted, sigma))
}

/// [`robust_gaussian_weighted`] with the normal-consistency constant.
pub fn robust_gaussian_weighted_default(values: &[f64]) -> StatsResult<f64> {
    robust_gaussian_weighted(values, MAD_TO_SIGMA)
}

/// Multimodal kernel: `components` centers are the means of equal-size groups
/// of the sorted sample and each value is weighted by its best-matching center.
///
/// Keeps a bimodal ensemble from being pulled toward the empty middle as hard
/// as a single kernel would.
pub fn mixture_gaussian_weighted(
    values: &[f64],
    components: usize,
    sigma: f64,
) -> StatsResult<f64> {
    if components == 0 {
        return Err(StatsError::InvalidParameter {
            name: "components",
            value: 0.0,
            reason: "must be at least 1",
        });
    }
    let sigma = require_positive("sigma", sigma)?;
    let sorted = sorted_valid(values, "mixture_gaussian_weighted")?;
    let centers = cluster_centers(&sorted, components);

    let weights: Vec<f64> = sorted
        .iter()
        .map(|v| {
            centers
                .iter()
                .map(|c| kernel(*v, *c, sigma))
                .fold(0.0_f64, f64::max)
        })
        .collect();
    Ok(weighted_mean_or(&sorted, &weights, median_of_sorted(&sorted)))
}

/// Means of `min(k, n)` contiguous groups of a sorted sample. Group `i`
/// spans `[i·n/k, (i+1)·n/k)`, so sizes differ by at most one.
fn cluster_centers(sorted: &[f64], k: usize) -> Vec<f64> {
    let n = sorted.len();
    let k = k.min(n);
    (0..k)
        .map(|i| mean_of(&sorted[i * n / k..(i + 1) * n / k]))
        .collect()
}

/// Drops values further than `max_deviation · sigma` from the median, then
/// applies [`gaussian_weighted`] to the rest around the original median.
///
/// If nothing survives the cut the median is returned.
pub fn constrained_gaussian_weighted(
    values: &[f64],
    sigma: f64,
    max_deviation: f64,
) -> StatsResult<f64> {
    let sigma = require_positive("sigma", sigma)?;
    let max_deviation = require_positive("max_deviation", max_deviation)?;
    let sorted = sorted_valid(values, "constrained_gaussian_weighted")?;
    let center = median_of_sorted(&sorted);
    let limit = max_deviation * sigma;
    let kept: Vec<f64> = sorted
        .iter()
        .copied()
        .filter(|v| (v - center).abs() <= limit)
        .collect();
    if kept.is_empty() {
        return Ok(center);
    }
    let weights: Vec<f64> = kept.iter().map(|v| kernel(*v, center, sigma)).collect();
    Ok(weighted_mean_or(&kept, &weights, center))
}

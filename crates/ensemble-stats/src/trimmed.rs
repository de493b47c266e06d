//! Trimmed, winsorized, and fence-based robust means.

use tracing::debug;

use ensemble_core::{StatsError, StatsResult};

use crate::central::quartiles_of_sorted;
use crate::sanitize::{mean_of, sorted_valid};

fn require_trim(name: &'static str, value: f64) -> StatsResult<f64> {
    if (0.0..0.5).contains(&value) {
        Ok(value)
    } else {
        Err(StatsError::InvalidParameter {
            name,
            value,
            reason: "must be in [0, 0.5)",
        })
    }
}

/// Mean after dropping `floor(n · trim_percent)` values from each tail.
///
/// Falls back to the plain mean when `n ≤ 2` or nothing would be trimmed.
pub fn trimmed_mean(values: &[f64], trim_percent: f64) -> StatsResult<f64> {
    let trim_percent = require_trim("trim_percent", trim_percent)?;
    let sorted = sorted_valid(values, "trimmed_mean")?;
    let n = sorted.len();
    let k = (n as f64 * trim_percent).floor() as usize;
    if n <= 2 || k == 0 {
        return Ok(mean_of(&sorted));
    }
    Ok(mean_of(&sorted[k..n - k]))
}

/// Trim fraction chosen from the coefficient of variation.
///
/// | CV | trim |
/// |----|------|
/// | > 0.5 | `max_trim_percent` |
/// | > 0.3 | 0.7 × max |
/// | > 0.1 | 0.4 × max |
/// | otherwise | 0.1 × max |
pub fn adaptive_trim_percent(values: &[f64], max_trim_percent: f64) -> StatsResult<f64> {
    let max_trim_percent = require_trim("max_trim_percent", max_trim_percent)?;
    let cv = crate::central::coefficient_of_variation(values)?;
    let factor = if cv > 0.5 {
        1.0
    } else if cv > 0.3 {
        0.7
    } else if cv > 0.1 {
        0.4
    } else {
        0.1
    };
    Ok(max_trim_percent * factor)
}

/// Trimmed mean with the trim fraction picked by [`adaptive_trim_percent`].
pub fn adaptive_trimmed_mean(values: &[f64], max_trim_percent: f64) -> StatsResult<f64> {
    let trim = adaptive_trim_percent(values, max_trim_percent)?;
    trimmed_mean(values, trim)
}

/// Like [`trimmed_mean`] but tail values are clamped to the cut-off order
/// statistics instead of being discarded.
pub fn winsorized_mean(values: &[f64], trim_percent: f64) -> StatsResult<f64> {
    let trim_percent = require_trim("trim_percent", trim_percent)?;
    let sorted = sorted_valid(values, "winsorized_mean")?;
    let n = sorted.len();
    let k = (n as f64 * trim_percent).floor() as usize;
    if n <= 2 || k == 0 {
        return Ok(mean_of(&sorted));
    }
    let low = sorted[k];
    let high = sorted[n - 1 - k];
    let sum: f64 = sorted.iter().map(|v| v.clamp(low, high)).sum();
    Ok(sum / n as f64)
}

/// Mean of the values inside the Tukey fences `[Q1 − k·IQR, Q3 + k·IQR]`.
///
/// If every value is fenced out the midhinge `(Q1 + Q3) / 2` is returned.
pub fn robust_trimmed_mean(values: &[f64], fence_k: f64) -> StatsResult<f64> {
    if !(fence_k.is_finite() && fence_k >= 0.0) {
        return Err(StatsError::InvalidParameter {
            name: "fence_k",
            value: fence_k,
            reason: "must be a non-negative finite number",
        });
    }
    let sorted = sorted_valid(values, "robust_trimmed_mean")?;
    let q = quartiles_of_sorted(&sorted);
    let lower = q.q1 - fence_k * q.iqr;
    let upper = q.q3 + fence_k * q.iqr;
    let kept: Vec<f64> = sorted
        .iter()
        .copied()
        .filter(|v| *v >= lower && *v <= upper)
        .collect();
    if kept.is_empty() {
        debug!(lower, upper, "all values outside IQR fences, using midhinge");
        return Ok((q.q1 + q.q3) / 2.0);
    }
    Ok(mean_of(&kept))
}

//! Location and scale: mean, median, quantiles, quartiles, MAD.

use serde::Serialize;

use ensemble_core::{StatsError, StatsResult};

use crate::sanitize::{mean_of, median_of_sorted, sorted_valid, valid_values};

/// Arithmetic mean of the finite values.
pub fn mean(values: &[f64]) -> StatsResult<f64> {
    let valid = valid_values(values);
    if valid.is_empty() {
        return Err(StatsError::empty("mean"));
    }
    Ok(mean_of(&valid))
}

/// Median of the finite values. Even lengths average the two central values.
pub fn median(values: &[f64]) -> StatsResult<f64> {
    let sorted = sorted_valid(values, "median")?;
    Ok(median_of_sorted(&sorted))
}

/// Quantile `q ∈ [0, 1]` by linear interpolation between order statistics.
pub fn quantile(values: &[f64], q: f64) -> StatsResult<f64> {
    if !(0.0..=1.0).contains(&q) {
        return Err(StatsError::InvalidParameter {
            name: "q",
            value: q,
            reason: "must be in [0, 1]",
        });
    }
    let sorted = sorted_valid(values, "quantile")?;
    if sorted.len() == 1 {
        return Ok(sorted[0]);
    }
    let pos = q * (sorted.len() - 1) as f64;
    let idx = pos.floor() as usize;
    let frac = pos - idx as f64;
    let a = sorted[idx];
    let b = sorted[(idx + 1).min(sorted.len() - 1)];
    Ok(a + (b - a) * frac)
}

/// Tukey-style quartiles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Quartiles {
    pub q1: f64,
    pub q2: f64,
    pub q3: f64,
    pub iqr: f64,
}

/// Quartiles by the median-of-halves method.
///
/// The sorted sample is split at its midpoint; for odd lengths the middle
/// element belongs to neither half. A single value yields `q1 = q2 = q3`.
pub fn quartiles(values: &[f64]) -> StatsResult<Quartiles> {
    let sorted = sorted_valid(values, "quartiles")?;
    Ok(quartiles_of_sorted(&sorted))
}

pub(crate) fn quartiles_of_sorted(sorted: &[f64]) -> Quartiles {
    let n = sorted.len();
    let q2 = median_of_sorted(sorted);
    if n == 1 {
        return Quartiles {
            q1: q2,
            q2,
            q3: q2,
            iqr: 0.0,
        };
    }
    let half = n / 2;
    let lower = &sorted[..half];
    let upper = if n % 2 == 1 {
        &sorted[half + 1..]
    } else {
        &sorted[half..]
    };
    let q1 = median_of_sorted(lower);
    let q3 = median_of_sorted(upper);
    Quartiles {
        q1,
        q2,
        q3,
        iqr: q3 - q1,
    }
}

/// Median of absolute deviations from the median.
pub fn median_absolute_deviation(values: &[f64]) -> StatsResult<f64> {
    let sorted = sorted_valid(values, "median_absolute_deviation")?;
    Ok(mad_of_sorted(&sorted))
}

pub(crate) fn mad_of_sorted(sorted: &[f64]) -> f64 {
    let center = median_of_sorted(sorted);
    let mut deviations: Vec<f64> = sorted.iter().map(|v| (v - center).abs()).collect();
    deviations.sort_by(f64::total_cmp);
    median_of_sorted(&deviations)
}

/// Population standard deviation.
pub fn std_dev(values: &[f64]) -> StatsResult<f64> {
    let valid = valid_values(values);
    if valid.is_empty() {
        return Err(StatsError::empty("std_dev"));
    }
    Ok(std_dev_of(&valid, mean_of(&valid)))
}

pub(crate) fn std_dev_of(values: &[f64], mean: f64) -> f64 {
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// `std_dev / |mean|`.
///
/// A zero mean gives `0.0` when the sample is constant and `+∞` otherwise,
/// so callers can still band on the result.
pub fn coefficient_of_variation(values: &[f64]) -> StatsResult<f64> {
    let valid = valid_values(values);
    if valid.is_empty() {
        return Err(StatsError::empty("coefficient_of_variation"));
    }
    let m = mean_of(&valid);
    let sd = std_dev_of(&valid, m);
    if m.abs() < f64::EPSILON {
        return Ok(if sd < f64::EPSILON { 0.0 } else { f64::INFINITY });
    }
    Ok(sd / m.abs())
}

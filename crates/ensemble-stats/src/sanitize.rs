use ensemble_core::{StatsError, StatsResult};

/// Finite values only, original order preserved.
pub fn valid_values(values: &[f64]) -> Vec<f64> {
    values.iter().copied().filter(|v| v.is_finite()).collect()
}

/// Finite values sorted ascending; empty input is an error naming `operation`.
pub(crate) fn sorted_valid(values: &[f64], operation: &'static str) -> StatsResult<Vec<f64>> {
    let mut valid = valid_values(values);
    if valid.is_empty() {
        return Err(StatsError::empty(operation));
    }
    valid.sort_by(f64::total_cmp);
    Ok(valid)
}

/// Median of an already sorted, non-empty slice.
pub(crate) fn median_of_sorted(sorted: &[f64]) -> f64 {
    let n = sorted.len();
    let mid = n / 2;
    if n % 2 == 1 {
        sorted[mid]
    } else {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    }
}

/// Arithmetic mean of a non-empty slice.
pub(crate) fn mean_of(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

pub(crate) fn require_positive(name: &'static str, value: f64) -> StatsResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(StatsError::InvalidParameter {
            name,
            value,
            reason: "must be a positive finite number",
        })
    }
}

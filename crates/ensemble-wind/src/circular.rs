//! Circular statistics on directions in degrees.

use tracing::debug;

use ensemble_core::{StatsError, StatsResult};
use ensemble_stats::valid_values;

/// Below this resultant length the vector mean has no meaningful direction.
pub const DEGENERATE_RESULTANT: f64 = 1e-12;

/// Angle in `[0, 360)`.
pub fn normalize_deg(deg: f64) -> f64 {
    let d = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if d >= 360.0 {
        0.0
    } else {
        d
    }
}

/// Signed smallest rotation from `b` to `a`, in `(−180, 180]`.
///
/// `angular_difference_deg(350.0, 10.0) == -20.0`.
pub fn angular_difference_deg(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(360.0);
    if d > 180.0 {
        d - 360.0
    } else {
        d
    }
}

/// Σ sin and Σ cos of `weights`-scaled unit vectors.
pub(crate) fn vector_sum(directions: &[f64], weights: Option<&[f64]>) -> (f64, f64) {
    let mut sin = 0.0;
    let mut cos = 0.0;
    for (i, deg) in directions.iter().enumerate() {
        let w = weights.map_or(1.0, |w| w[i]);
        let rad = deg.to_radians();
        sin += w * rad.sin();
        cos += w * rad.cos();
    }
    (sin, cos)
}

/// Direction of a vector sum, or `None` when it is too short to point anywhere.
pub(crate) fn direction_of(sin: f64, cos: f64, weight: f64) -> Option<f64> {
    let length = sin.hypot(cos);
    if !(weight > 0.0) || length / weight < DEGENERATE_RESULTANT {
        return None;
    }
    Some(normalize_deg(sin.atan2(cos).to_degrees()))
}

/// Vector mean of the finite directions.
///
/// An exactly balanced ensemble (e.g. 0° and 180°) has no mean direction; the
/// smallest normalized member is returned in that case.
pub fn circular_mean_deg(directions: &[f64]) -> StatsResult<f64> {
    let valid = valid_values(directions);
    if valid.is_empty() {
        return Err(StatsError::empty("circular_mean_deg"));
    }
    let (sin, cos) = vector_sum(&valid, None);
    Ok(direction_of(sin, cos, valid.len() as f64).unwrap_or_else(|| {
        let fallback = valid
            .iter()
            .map(|d| normalize_deg(*d))
            .fold(f64::INFINITY, f64::min);
        debug!(fallback, "balanced directions, no mean; using smallest member");
        fallback
    }))
}

/// Mean resultant length `R ∈ [0, 1]`: 1 when all directions agree, near 0
/// when they cancel out.
pub fn mean_resultant_length(directions: &[f64]) -> StatsResult<f64> {
    let valid = valid_values(directions);
    if valid.is_empty() {
        return Err(StatsError::empty("mean_resultant_length"));
    }
    let (sin, cos) = vector_sum(&valid, None);
    Ok((sin.hypot(cos) / valid.len() as f64).min(1.0))
}

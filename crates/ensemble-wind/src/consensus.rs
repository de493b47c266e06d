//! Gaussian-reweighted vector mean.
//!
//! 1. Start from the plain vector mean.
//! 2. Weight each member by `exp(−½(Δ/σ)²)`, `Δ` its angular distance to that
//!    mean in radians.
//! 3. The consensus is the vector mean of the weighted unit vectors.
//!
//! Members far from the bulk (a model turning the wind the other way) lose
//! their pull without being discarded outright.

use serde::Serialize;
use tracing::{debug, trace};

use ensemble_core::{Aggregator, ConsensusResult, StatsError, StatsResult, WindConfig};
use ensemble_stats::valid_values;

use crate::circular::{
    angular_difference_deg, circular_mean_deg, direction_of, mean_resultant_length,
    normalize_deg, vector_sum,
};

/// Consensus direction in `[0, 360)`.
pub fn aggregate_wind_direction_gaussian(directions: &[f64], sigma_deg: f64) -> StatsResult<f64> {
    if !(sigma_deg.is_finite() && sigma_deg > 0.0) {
        return Err(StatsError::InvalidParameter {
            name: "sigma_deg",
            value: sigma_deg,
            reason: "must be a positive finite number",
        });
    }
    let valid = valid_values(directions);
    match valid.as_slice() {
        [] => return Err(StatsError::empty("aggregate_wind_direction_gaussian")),
        [single] => return Ok(normalize_deg(*single)),
        _ => {}
    }

    let center = circular_mean_deg(&valid)?;
    let sigma = sigma_deg.to_radians();
    let weights: Vec<f64> = valid
        .iter()
        .map(|d| {
            let z = angular_difference_deg(*d, center).to_radians() / sigma;
            (-0.5 * z * z).exp()
        })
        .collect();
    let total: f64 = weights.iter().sum();
    let (sin, cos) = vector_sum(&valid, Some(&weights));

    Ok(direction_of(sin, cos, total).unwrap_or_else(|| {
        debug!(center, "weighted resultant vanished, using vector mean");
        center
    }))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WindConsensus {
    /// Degrees, `[0, 360)`, meteorological convention (direction the wind comes from).
    pub direction: f64,
    /// Mean resultant length of the raw members; low values mean the models
    /// disagree and the direction is of little use.
    pub concentration: f64,
    pub valid_members: usize,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct WindAggregator;

impl Aggregator for WindAggregator {
    type Input = [f64];
    type Config = WindConfig;
    type Output = WindConsensus;

    fn name(&self) -> &'static str {
        "wind"
    }

    fn aggregate(&self, input: &[f64], config: &WindConfig) -> ConsensusResult<WindConsensus> {
        let direction = aggregate_wind_direction_gaussian(input, config.sigma_deg)?;
        let concentration = mean_resultant_length(input)?;
        let valid_members = valid_values(input).len();
        trace!(direction, concentration, valid_members, "wind consensus");
        Ok(WindConsensus {
            direction,
            concentration,
            valid_members,
        })
    }
}

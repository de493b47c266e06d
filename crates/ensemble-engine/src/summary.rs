//! Reduce hourly consensus values to one value per slot (e.g. a 6-hour tranche).

use chrono::Timelike;
use serde::Serialize;
use tracing::debug;

use ensemble_core::{ConsensusError, ConsensusResult, Parameter, TimeSlot};
use ensemble_stats::{mean, valid_values};
use ensemble_time::slot_hour_indices;
use ensemble_wind::circular_mean_deg;

/// How hourly values of a parameter combine over a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotReducer {
    /// Accumulated amounts.
    Sum,
    /// Peaks: gusts and the most severe weather code.
    Max,
    CircularMean,
    Mean,
}

impl SlotReducer {
    pub fn for_parameter(parameter: Parameter) -> Self {
        match parameter {
            Parameter::Precipitation
            | Parameter::Rain
            | Parameter::Showers
            | Parameter::Snowfall
            | Parameter::SunshineDuration => Self::Sum,
            Parameter::WindGusts10m | Parameter::WeatherCode => Self::Max,
            Parameter::WindDirection10m => Self::CircularMean,
            _ => Self::Mean,
        }
    }

    fn reduce(&self, values: &[f64]) -> ConsensusResult<f64> {
        let value = match self {
            Self::Sum => values.iter().sum(),
            Self::Max => values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            Self::CircularMean => circular_mean_deg(values)?,
            Self::Mean => mean(values)?,
        };
        Ok(value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotSummary {
    pub parameter: Parameter,
    pub slot: TimeSlot,
    pub reducer: SlotReducer,
    /// `None` when no valid hourly value falls in the slot.
    pub value: Option<f64>,
    /// Valid hourly values that went into `value`.
    pub hours_used: usize,
}

/// Summarize `hourly_values` (one consensus value per timestamp) over `slot`.
///
/// Hour selection follows the parameter's time interpretation, so an
/// accumulated parameter sampled at 18:00 counts toward the slot ending at 18.
pub fn summarize_slot<T: Timelike>(
    hourly_values: &[f64],
    timestamps: &[T],
    parameter: Parameter,
    slot: &TimeSlot,
) -> ConsensusResult<SlotSummary> {
    if hourly_values.len() != timestamps.len() {
        return Err(ConsensusError::MisalignedSeries {
            values: hourly_values.len(),
            timestamps: timestamps.len(),
        });
    }
    let selected: Vec<f64> = slot_hour_indices(timestamps, parameter, slot)
        .into_iter()
        .map(|i| hourly_values[i])
        .collect();
    let valid = valid_values(&selected);
    let reducer = SlotReducer::for_parameter(parameter);

    let value = if valid.is_empty() {
        debug!(%parameter, ?slot, "no valid hours in slot");
        None
    } else {
        Some(reducer.reduce(&valid)?)
    };
    Ok(SlotSummary {
        parameter,
        slot: *slot,
        reducer,
        value,
        hours_used: valid.len(),
    })
}

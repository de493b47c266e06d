use serde::{Deserialize, Serialize};

use ensemble_core::Parameter;

/// What an hourly sample stamped `H` represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterpretationMode {
    /// The state at `H`.
    Instant,
    /// The total or mean over `H − 1 → H`.
    PrecedingHour,
}

/// Static per-parameter lookup.
pub fn time_interpretation_mode(parameter: Parameter) -> InterpretationMode {
    match parameter {
        Parameter::Precipitation
        | Parameter::Rain
        | Parameter::Showers
        | Parameter::Snowfall
        | Parameter::WeatherCode
        | Parameter::WindGusts10m
        | Parameter::ShortwaveRadiation
        | Parameter::DirectRadiation
        | Parameter::SunshineDuration
        | Parameter::PrecipitationProbability => InterpretationMode::PrecedingHour,
        _ => InterpretationMode::Instant,
    }
}

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Forecast parameters understood by the engine, named the way hourly
/// forecast APIs name them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Parameter {
    #[serde(rename = "temperature_2m")]
    Temperature2m,
    ApparentTemperature,
    #[serde(rename = "dew_point_2m")]
    DewPoint2m,
    #[serde(rename = "relative_humidity_2m")]
    RelativeHumidity2m,
    PressureMsl,
    SurfacePressure,
    CloudCover,
    CloudCoverLow,
    CloudCoverMid,
    CloudCoverHigh,
    Visibility,
    #[serde(rename = "wind_speed_10m", alias = "windspeed_10m")]
    WindSpeed10m,
    #[serde(rename = "wind_direction_10m", alias = "winddirection_10m")]
    WindDirection10m,
    #[serde(rename = "wind_gusts_10m", alias = "windgusts_10m")]
    WindGusts10m,
    Precipitation,
    Rain,
    Showers,
    Snowfall,
    SnowDepth,
    PrecipitationProbability,
    #[serde(alias = "weathercode")]
    WeatherCode,
    ShortwaveRadiation,
    DirectRadiation,
    SunshineDuration,
    UvIndex,
    Cape,
    FreezingLevelHeight,
}

/// Which aggregator family handles a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterKind {
    /// WMO weather codes.
    Categorical,
    /// Accumulated liquid-equivalent amounts in millimetres.
    Precipitation,
    /// Angles in degrees, aggregated on the circle.
    Direction,
    /// Everything else.
    Continuous,
}

impl Parameter {
    pub const ALL: [Parameter; 27] = [
        Self::Temperature2m,
        Self::ApparentTemperature,
        Self::DewPoint2m,
        Self::RelativeHumidity2m,
        Self::PressureMsl,
        Self::SurfacePressure,
        Self::CloudCover,
        Self::CloudCoverLow,
        Self::CloudCoverMid,
        Self::CloudCoverHigh,
        Self::Visibility,
        Self::WindSpeed10m,
        Self::WindDirection10m,
        Self::WindGusts10m,
        Self::Precipitation,
        Self::Rain,
        Self::Showers,
        Self::Snowfall,
        Self::SnowDepth,
        Self::PrecipitationProbability,
        Self::WeatherCode,
        Self::ShortwaveRadiation,
        Self::DirectRadiation,
        Self::SunshineDuration,
        Self::UvIndex,
        Self::Cape,
        Self::FreezingLevelHeight,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Temperature2m => "temperature_2m",
            Self::ApparentTemperature => "apparent_temperature",
            Self::DewPoint2m => "dew_point_2m",
            Self::RelativeHumidity2m => "relative_humidity_2m",
            Self::PressureMsl => "pressure_msl",
            Self::SurfacePressure => "surface_pressure",
            Self::CloudCover => "cloud_cover",
            Self::CloudCoverLow => "cloud_cover_low",
            Self::CloudCoverMid => "cloud_cover_mid",
            Self::CloudCoverHigh => "cloud_cover_high",
            Self::Visibility => "visibility",
            Self::WindSpeed10m => "wind_speed_10m",
            Self::WindDirection10m => "wind_direction_10m",
            Self::WindGusts10m => "wind_gusts_10m",
            Self::Precipitation => "precipitation",
            Self::Rain => "rain",
            Self::Showers => "showers",
            Self::Snowfall => "snowfall",
            Self::SnowDepth => "snow_depth",
            Self::PrecipitationProbability => "precipitation_probability",
            Self::WeatherCode => "weather_code",
            Self::ShortwaveRadiation => "shortwave_radiation",
            Self::DirectRadiation => "direct_radiation",
            Self::SunshineDuration => "sunshine_duration",
            Self::UvIndex => "uv_index",
            Self::Cape => "cape",
            Self::FreezingLevelHeight => "freezing_level_height",
        }
    }

    pub fn kind(&self) -> ParameterKind {
        match self {
            Self::WeatherCode => ParameterKind::Categorical,
            Self::Precipitation | Self::Rain | Self::Showers | Self::Snowfall => {
                ParameterKind::Precipitation
            }
            Self::WindDirection10m => ParameterKind::Direction,
            _ => ParameterKind::Continuous,
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Parameter {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Legacy camelCase spellings still show up in older settings files.
        let normalized = match s {
            "weathercode" | "weatherCode" => "weather_code",
            "winddirection_10m" => "wind_direction_10m",
            "windgusts_10m" => "wind_gusts_10m",
            "windspeed_10m" => "wind_speed_10m",
            other => other,
        };
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.name() == normalized)
            .ok_or_else(|| ConfigError::UnknownParameter { name: s.to_string() })
    }
}

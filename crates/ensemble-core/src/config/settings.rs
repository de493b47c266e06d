use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{ContinuousConfig, PrecipConfig, WindConfig, WmoConfig};
use crate::errors::ConfigError;
use crate::types::Parameter;

const INLINE_SOURCE: &str = "<inline>";

/// Per-parameter replacement of one or more sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterOverride {
    pub wmo: Option<WmoConfig>,
    pub precip: Option<PrecipConfig>,
    pub wind: Option<WindConfig>,
    pub continuous: Option<ContinuousConfig>,
}

/// Top-level settings: one section per aggregator family plus optional
/// per-parameter overrides.
///
/// Settings are immutable once loaded and are passed explicitly into every
/// aggregation call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsensusSettings {
    pub wmo: WmoConfig,
    pub precip: PrecipConfig,
    pub wind: WindConfig,
    pub continuous: ContinuousConfig,
    pub parameters: BTreeMap<Parameter, ParameterOverride>,
}

impl ConsensusSettings {
    /// Parse and validate TOML settings.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Self::parse_toml(text, INLINE_SOURCE)
    }

    /// Parse and validate JSON settings.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        Self::parse_json(text, INLINE_SOURCE)
    }

    /// Load settings from a file. `.json` files are parsed as JSON, anything
    /// else as TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let display = path.display().to_string();
        let text = std::fs::read_to_string(path)
            .map_err(|_| ConfigError::FileNotFound { path: display.clone() })?;

        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));
        if is_json {
            Self::parse_json(&text, &display)
        } else {
            Self::parse_toml(&text, &display)
        }
    }

    fn parse_toml(text: &str, source: &str) -> Result<Self, ConfigError> {
        let settings: Self = toml::from_str(text).map_err(|e| ConfigError::ParseError {
            path: source.to_string(),
            message: e.to_string(),
        })?;
        settings.validate()?;
        Ok(settings)
    }

    fn parse_json(text: &str, source: &str) -> Result<Self, ConfigError> {
        let settings: Self = serde_json::from_str(text).map_err(|e| ConfigError::ParseError {
            path: source.to_string(),
            message: e.to_string(),
        })?;
        settings.validate()?;
        Ok(settings)
    }

    /// Validate every section and every override.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.wmo.validate()?;
        self.precip.validate()?;
        self.wind.validate()?;
        self.continuous.validate()?;
        for over in self.parameters.values() {
            if let Some(wmo) = &over.wmo {
                wmo.validate()?;
            }
            if let Some(precip) = &over.precip {
                precip.validate()?;
            }
            if let Some(wind) = &over.wind {
                wind.validate()?;
            }
            if let Some(continuous) = &over.continuous {
                continuous.validate()?;
            }
        }
        Ok(())
    }

    /// Categorical config for `parameter`, override first.
    pub fn wmo_for(&self, parameter: Parameter) -> &WmoConfig {
        self.parameters
            .get(&parameter)
            .and_then(|o| o.wmo.as_ref())
            .unwrap_or(&self.wmo)
    }

    pub fn precip_for(&self, parameter: Parameter) -> &PrecipConfig {
        self.parameters
            .get(&parameter)
            .and_then(|o| o.precip.as_ref())
            .unwrap_or(&self.precip)
    }

    pub fn wind_for(&self, parameter: Parameter) -> &WindConfig {
        self.parameters
            .get(&parameter)
            .and_then(|o| o.wind.as_ref())
            .unwrap_or(&self.wind)
    }

    pub fn continuous_for(&self, parameter: Parameter) -> &ContinuousConfig {
        self.parameters
            .get(&parameter)
            .and_then(|o| o.continuous.as_ref())
            .unwrap_or(&self.continuous)
    }
}

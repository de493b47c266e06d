use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;
use crate::types::{SeverityGroup, WmoCode};

/// Categorical consensus algorithms.
///
/// Legacy names from older settings files are accepted as aliases, so an
/// unknown name fails once when the settings are parsed, never per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WmoAlgorithm {
    /// Most frequent code, ties to the highest code.
    #[serde(rename = "mode")]
    Mode,
    /// Dynamic-threshold scan over configured severity groups.
    #[serde(rename = "severity_groups", alias = "severityGroups")]
    SeverityGroups,
    /// Numeric maximum.
    #[serde(rename = "max_severity", alias = "maxSeverity")]
    MaxSeverity,
    /// Upper median of the raw codes.
    #[serde(rename = "median", alias = "simpleMedian", alias = "simple_median")]
    Median,
    /// Median on the 1–28 ordinal severity scale.
    #[serde(
        rename = "remapped_median",
        alias = "remappedMedian",
        alias = "severityMedian",
        alias = "severity_median"
    )]
    RemappedMedian,
    /// Three-group barycenter.
    #[serde(rename = "bary")]
    Bary,
    /// Priority-group barycenter with a top risk.
    #[default]
    #[serde(rename = "smart_bary", alias = "smart_barycentre_11_groups")]
    SmartBary,
}

impl WmoAlgorithm {
    pub const ALL: [WmoAlgorithm; 7] = [
        Self::Mode,
        Self::SeverityGroups,
        Self::MaxSeverity,
        Self::Median,
        Self::RemappedMedian,
        Self::Bary,
        Self::SmartBary,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Mode => "mode",
            Self::SeverityGroups => "severity_groups",
            Self::MaxSeverity => "max_severity",
            Self::Median => "median",
            Self::RemappedMedian => "remapped_median",
            Self::Bary => "bary",
            Self::SmartBary => "smart_bary",
        }
    }

    /// Names accepted besides [`name`](Self::name).
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::Mode => &[],
            Self::SeverityGroups => &["severityGroups"],
            Self::MaxSeverity => &["maxSeverity"],
            Self::Median => &["simpleMedian", "simple_median"],
            Self::RemappedMedian => &["remappedMedian", "severityMedian", "severity_median"],
            Self::Bary => &[],
            Self::SmartBary => &["smart_barycentre_11_groups"],
        }
    }
}

impl fmt::Display for WmoAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WmoAlgorithm {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|a| a.name() == s || a.aliases().contains(&s))
            .ok_or_else(|| ConfigError::UnknownAlgorithm { name: s.to_string() })
    }
}

/// Categorical (weather-code) aggregation configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WmoConfig {
    pub algorithm: WmoAlgorithm,
    /// Ordered partition of the code domain, used by `severity_groups`.
    #[serde(alias = "severityGroups")]
    pub severity_groups: Vec<SeverityGroup>,
    /// Numerator of the dynamic share threshold (percent × active groups).
    #[serde(alias = "dynamicThresholdBase")]
    pub dynamic_threshold_base: f64,
    /// Weight given to the most severe occupied position by `bary`.
    pub bary_max_pond: f64,
}

impl Default for WmoConfig {
    fn default() -> Self {
        Self {
            algorithm: WmoAlgorithm::default(),
            severity_groups: default_severity_groups(),
            dynamic_threshold_base: defaults::DEFAULT_DYNAMIC_THRESHOLD_BASE,
            bary_max_pond: defaults::DEFAULT_BARY_MAX_POND,
        }
    }
}

impl WmoConfig {
    /// Default config with a different algorithm.
    pub fn with_algorithm(algorithm: WmoAlgorithm) -> Self {
        Self {
            algorithm,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.dynamic_threshold_base.is_finite() && self.dynamic_threshold_base > 0.0) {
            return Err(ConfigError::invalid(
                "wmo.dynamic_threshold_base",
                format!("must be positive, got {}", self.dynamic_threshold_base),
            ));
        }
        if !(self.bary_max_pond.is_finite() && self.bary_max_pond > 0.0) {
            return Err(ConfigError::invalid(
                "wmo.bary_max_pond",
                format!("must be positive, got {}", self.bary_max_pond),
            ));
        }
        if self.algorithm == WmoAlgorithm::SeverityGroups && self.severity_groups.is_empty() {
            return Err(ConfigError::invalid(
                "wmo.severity_groups",
                "severity_groups algorithm needs at least one group",
            ));
        }

        let mut owner: BTreeMap<WmoCode, usize> = BTreeMap::new();
        for (index, group) in self.severity_groups.iter().enumerate() {
            if group.codes.is_empty() {
                return Err(ConfigError::invalid(
                    "wmo.severity_groups",
                    format!("group '{}' has no codes", group.description),
                ));
            }
            for &code in &group.codes {
                match owner.insert(code, index) {
                    Some(previous) if previous != index => {
                        return Err(ConfigError::invalid(
                            "wmo.severity_groups",
                            format!(
                                "code {code} appears in both '{}' and '{}'",
                                self.severity_groups[previous].description, group.description
                            ),
                        ));
                    }
                    _ => {}
                }
            }
        }
        Ok(())
    }
}

/// Default partition of the standard hourly weather codes.
pub fn default_severity_groups() -> Vec<SeverityGroup> {
    vec![
        SeverityGroup::new(0, "clear_cloudy", &[0, 1, 2, 3]),
        SeverityGroup::new(1, "fog", &[45, 48]),
        SeverityGroup::new(2, "drizzle", &[51, 53, 55]),
        SeverityGroup::new(3, "rain", &[61, 63, 65, 80, 81, 82]),
        SeverityGroup::new(4, "freezing", &[56, 57, 66, 67]),
        SeverityGroup::new(5, "snow", &[71, 73, 75, 77, 85, 86]),
        SeverityGroup::new(6, "thunderstorm", &[95, 96, 99]),
    ]
}

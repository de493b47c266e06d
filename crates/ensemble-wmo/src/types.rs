use serde::Serialize;

use ensemble_core::{WmoAlgorithm, WmoCode};

use crate::risk::{RiskCounters, TopRisk};

/// How the consensus code was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Selection {
    /// No valid member.
    Empty,
    /// Unique most frequent code.
    Dominant,
    /// Several codes shared the top count; the highest won.
    SeverityTiebreak,
    /// First group from the top whose share reached the dynamic threshold.
    ThresholdGroup,
    /// No group reached the threshold; the largest group was used.
    FallbackMaxCount,
    MaxSeverity,
    Median,
    RemappedMedian,
    Barycenter,
    /// Fog dominated; 45 vs 48 decided by count.
    FogMode,
    /// The winning group had no positioned mass; global mode used.
    GlobalModeFallback,
    SmartBarycenter,
}

/// Strategy-specific diagnostics. Fields a strategy does not use stay `None`
/// and are omitted from the serialized form.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DecisionDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upper_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lower_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barycenter: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ordinal: Option<u8>,
}

/// What a strategy returns.
#[derive(Debug, Clone, PartialEq)]
pub struct Decision {
    pub code: WmoCode,
    pub selection: Selection,
    pub risk: Option<TopRisk>,
    pub detail: DecisionDetail,
}

impl Decision {
    pub fn new(code: WmoCode, selection: Selection) -> Self {
        Self {
            code,
            selection,
            risk: None,
            detail: DecisionDetail::default(),
        }
    }

    pub fn with_detail(mut self, detail: DecisionDetail) -> Self {
        self.detail = detail;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WmoDebug {
    pub algorithm: WmoAlgorithm,
    pub selection: Selection,
    pub tables_version: &'static str,
    /// Valid members considered.
    pub total: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unknown_codes: Vec<WmoCode>,
    #[serde(flatten)]
    pub detail: DecisionDetail,
}

/// Categorical consensus for one (location, hour).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WmoConsensus {
    #[serde(rename = "wmo")]
    pub code: WmoCode,
    pub selection: Selection,
    /// Only the priority-group strategy fills this.
    pub risk: Option<TopRisk>,
    pub risks: RiskCounters,
    pub debug: WmoDebug,
}

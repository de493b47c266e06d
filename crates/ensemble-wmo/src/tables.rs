//! Fixed WMO code tables.
//!
//! Every consensus rule that depends on domain knowledge about weather codes
//! reads it from here. Changing any table is a behavioral change and must
//! bump [`TABLES_VERSION`].

use ensemble_core::WmoCode;
use serde::Serialize;

/// Version of the tables below. Reported in every categorical result.
pub const TABLES_VERSION: &str = "2024.1";

/// Every code the tables know about, ascending.
pub const KNOWN_CODES: [WmoCode; 28] = [
    0, 1, 2, 3, 45, 48, 51, 53, 55, 56, 57, 61, 63, 65, 66, 67, 71, 73, 75, 77, 80, 81, 82, 85,
    86, 95, 96, 99,
];

pub fn is_known(code: WmoCode) -> bool {
    KNOWN_CODES.binary_search(&code).is_ok()
}

// ── Ordinal severity scale ──────────────────────────────────────────────

/// Code at ordinal `i + 1`. Precipitation hierarchy: sky, fog, drizzle,
/// freezing drizzle, rain, freezing rain, showers, snow, snow showers, thunder.
pub const ORDINAL_SCALE: [WmoCode; 28] = [
    0, 1, 2, 3, 45, 48, 51, 53, 55, 56, 57, 61, 63, 65, 66, 67, 80, 81, 82, 71, 73, 75, 77, 85,
    86, 95, 96, 99,
];

/// Ordinal given to codes missing from [`ORDINAL_SCALE`].
pub const UNKNOWN_ORDINAL: u8 = 1;

/// Ordinal (1–28) of a code, `None` if the code is not on the scale.
pub fn ordinal_of(code: WmoCode) -> Option<u8> {
    ORDINAL_SCALE
        .iter()
        .position(|c| *c == code)
        .map(|i| i as u8 + 1)
}

/// Representative code of an ordinal, `None` outside 1–28.
pub fn code_of_ordinal(ordinal: u8) -> Option<WmoCode> {
    ORDINAL_SCALE.get(usize::from(ordinal).checked_sub(1)?).copied()
}

// ── Three-group barycenter ──────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BaryGroup {
    Temperate,
    Fog,
    Icy,
}

impl BaryGroup {
    /// Tie-break order, strongest first.
    pub const PRIORITY: [BaryGroup; 3] = [Self::Icy, Self::Fog, Self::Temperate];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Temperate => "temperate",
            Self::Fog => "fog",
            Self::Icy => "icy",
        }
    }

    /// Member codes, ascending.
    pub fn codes(&self) -> &'static [WmoCode] {
        match self {
            Self::Temperate => &BARY_TEMPERATE,
            Self::Fog => &BARY_FOG,
            Self::Icy => &BARY_ICY,
        }
    }

    /// Group of a code. Codes outside the tables fall in `Temperate`.
    pub fn of(code: WmoCode) -> Self {
        if BARY_FOG.contains(&code) {
            Self::Fog
        } else if BARY_ICY.contains(&code) {
            Self::Icy
        } else {
            Self::Temperate
        }
    }
}

pub const BARY_TEMPERATE: [WmoCode; 16] =
    [0, 1, 2, 3, 51, 53, 55, 61, 63, 65, 80, 81, 82, 95, 96, 99];
pub const BARY_FOG: [WmoCode; 2] = [45, 48];
pub const BARY_ICY: [WmoCode; 10] = [56, 57, 66, 67, 71, 73, 75, 77, 85, 86];

// ── Risk kinds ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskKind {
    Thunder,
    Hail,
    FreezingRain,
    Ice,
    Fog,
}

impl RiskKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Thunder => "thunder",
            Self::Hail => "hail",
            Self::FreezingRain => "freezing_rain",
            Self::Ice => "ice",
            Self::Fog => "fog",
        }
    }
}

/// Codes counted by each badge counter. Counters overlap on purpose:
/// 96/99 raise both thunder and hail, 48 raises both ice and fog.
pub const RISK_COUNTERS: [(RiskKind, &[WmoCode]); 5] = [
    (RiskKind::Thunder, &[95, 96, 99]),
    (RiskKind::Hail, &[96, 99]),
    (RiskKind::FreezingRain, &[56, 57, 66, 67]),
    (RiskKind::Ice, &[48]),
    (RiskKind::Fog, &[45, 48]),
];

// ── Priority groups ─────────────────────────────────────────────────────

/// One group of the priority barycenter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SmartGroup {
    pub name: &'static str,
    /// Fixed ordering used for barycenter positions.
    pub codes: &'static [WmoCode],
    /// Risk reported when this group wins the risk vote.
    pub risk: Option<RiskKind>,
}

/// Highest priority first. The last group also collects unknown codes.
pub const SMART_GROUPS: [SmartGroup; 9] = [
    SmartGroup {
        name: "thunder_hail",
        codes: &[96, 99],
        risk: Some(RiskKind::Hail),
    },
    SmartGroup {
        name: "thunder",
        codes: &[95],
        risk: Some(RiskKind::Thunder),
    },
    SmartGroup {
        name: "freezing_rain",
        codes: &[56, 57, 66, 67],
        risk: Some(RiskKind::FreezingRain),
    },
    SmartGroup {
        name: "freezing_fog",
        codes: &[48],
        risk: Some(RiskKind::Ice),
    },
    SmartGroup {
        name: "convective_snow",
        codes: &[85, 86],
        risk: None,
    },
    SmartGroup {
        name: "continuous_snow",
        codes: &[71, 73, 75, 77],
        risk: None,
    },
    SmartGroup {
        name: "convective_rain",
        codes: &[80, 81, 82],
        risk: None,
    },
    SmartGroup {
        name: "fog",
        codes: &[45],
        risk: Some(RiskKind::Fog),
    },
    SmartGroup {
        name: "dry_continuous_rain",
        codes: &[0, 1, 2, 3, 51, 53, 55, 61, 63, 65],
        risk: None,
    },
];

/// Index into [`SMART_GROUPS`]; unknown codes land in the last group.
pub fn smart_group_of(code: WmoCode) -> usize {
    SMART_GROUPS
        .iter()
        .position(|g| g.codes.contains(&code))
        .unwrap_or(SMART_GROUPS.len() - 1)
}

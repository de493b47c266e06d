//! Badge counters: a 0–5 level per risk kind, independent of the chosen code.

use serde::Serialize;

use ensemble_core::constants::RISK_SCALE_MAX;

use crate::histogram::CodeHistogram;
use crate::tables::{RiskKind, RISK_COUNTERS};

/// `min(round(5 · matching / total), 5)` for each risk kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RiskCounters {
    pub thunder: u8,
    pub hail: u8,
    pub freezing_rain: u8,
    pub ice: u8,
    pub fog: u8,
}

impl RiskCounters {
    pub fn from_histogram(histogram: &CodeHistogram) -> Self {
        let mut counters = Self::default();
        if histogram.is_empty() {
            return counters;
        }
        let total = histogram.total() as f64;
        for (kind, codes) in RISK_COUNTERS {
            let share = histogram.count_in(codes) as f64 / total;
            let level = (f64::from(RISK_SCALE_MAX) * share).round().min(f64::from(RISK_SCALE_MAX));
            *counters.slot_mut(kind) = level as u8;
        }
        counters
    }

    pub fn get(&self, kind: RiskKind) -> u8 {
        match kind {
            RiskKind::Thunder => self.thunder,
            RiskKind::Hail => self.hail,
            RiskKind::FreezingRain => self.freezing_rain,
            RiskKind::Ice => self.ice,
            RiskKind::Fog => self.fog,
        }
    }

    fn slot_mut(&mut self, kind: RiskKind) -> &mut u8 {
        match kind {
            RiskKind::Thunder => &mut self.thunder,
            RiskKind::Hail => &mut self.hail,
            RiskKind::FreezingRain => &mut self.freezing_rain,
            RiskKind::Ice => &mut self.ice,
            RiskKind::Fog => &mut self.fog,
        }
    }
}

/// The single most represented risk of a priority-group vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TopRisk {
    pub kind: RiskKind,
    /// Members voting for it.
    pub quantity: usize,
}

//! Priority-group barycenter.
//!
//! Nine fixed groups from thunder+hail down to dry/continuous rain. The
//! largest group wins, the higher-priority one on a tie. The code is the
//! count-weighted barycenter of positions in that group's ordering, rounded
//! half up. A top risk is voted among the risk-tagged groups.

use tracing::{debug, warn};

use ensemble_core::{WmoAlgorithm, WmoConfig};
use ensemble_stats::weighted_average;

use super::{mode_decision, WmoStrategy};
use crate::histogram::CodeHistogram;
use crate::risk::TopRisk;
use crate::tables::{smart_group_of, SMART_GROUPS};
use crate::types::{Decision, DecisionDetail, Selection};

#[derive(Debug, Clone, Copy, Default)]
pub struct SmartBaryStrategy;

/// Standard half-up rounding: exactly `.5` goes to the ceiling.
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

fn group_counts(histogram: &CodeHistogram) -> [usize; SMART_GROUPS.len()] {
    let mut counts = [0usize; SMART_GROUPS.len()];
    for (code, n) in histogram.iter() {
        counts[smart_group_of(code)] += n;
    }
    counts
}

/// Risk-tagged group with the most members; ties go to the higher priority.
fn top_risk(counts: &[usize]) -> Option<TopRisk> {
    let mut best: Option<TopRisk> = None;
    for (group, count) in SMART_GROUPS.iter().zip(counts) {
        let Some(kind) = group.risk else { continue };
        if *count == 0 {
            continue;
        }
        if best.map_or(true, |b| *count > b.quantity) {
            best = Some(TopRisk {
                kind,
                quantity: *count,
            });
        }
    }
    best
}

impl WmoStrategy for SmartBaryStrategy {
    fn algorithm(&self) -> WmoAlgorithm {
        WmoAlgorithm::SmartBary
    }

    fn decide(&self, histogram: &CodeHistogram, _config: &WmoConfig) -> Decision {
        let unknown = histogram.unknown_codes();
        if !unknown.is_empty() {
            warn!(codes = ?unknown, "unknown codes counted in the lowest priority group");
        }

        let counts = group_counts(histogram);
        let risk = top_risk(&counts);
        let mut winner = 0;
        for (i, n) in counts.iter().enumerate() {
            if *n > counts[winner] {
                winner = i;
            }
        }
        let group = &SMART_GROUPS[winner];
        let mut detail = DecisionDetail {
            selected_group: Some(group.name.to_string()),
            group_count: Some(counts[winner]),
            ..DecisionDetail::default()
        };

        let positions: Vec<f64> = (0..group.codes.len()).map(|i| i as f64).collect();
        let weights: Vec<f64> = group
            .codes
            .iter()
            .map(|c| histogram.count(*c) as f64)
            .collect();

        let barycenter = if weights.iter().sum::<f64>() > 0.0 {
            weighted_average(&positions, &weights).ok()
        } else {
            None
        };
        let Some(barycenter) = barycenter else {
            debug!(group = group.name, "no positioned mass, using global mode");
            let mode = mode_decision(histogram);
            let mut decision =
                Decision::new(mode.code, Selection::GlobalModeFallback).with_detail(detail);
            decision.risk = risk;
            return decision;
        };

        detail.barycenter = Some(barycenter);
        let index = (round_half_up(barycenter) as usize).min(group.codes.len() - 1);
        let mut decision =
            Decision::new(group.codes[index], Selection::SmartBarycenter).with_detail(detail);
        decision.risk = risk;
        decision
    }
}

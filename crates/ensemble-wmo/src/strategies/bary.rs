//! Three-group barycenter (temperate / fog / icy).

use tracing::{debug, warn};

use ensemble_core::{WmoAlgorithm, WmoCode, WmoConfig};
use ensemble_stats::weighted_average;

use super::{mode_decision, WmoStrategy};
use crate::histogram::CodeHistogram;
use crate::tables::BaryGroup;
use crate::types::{Decision, DecisionDetail, Selection};

#[derive(Debug, Clone, Copy, Default)]
pub struct BaryStrategy;

/// Rounds on the first decimal digit only: `.0`–`.5` down, `.6`–`.9` up.
/// So 2.5 and 2.59 give 2, 2.6 gives 3.
pub fn round_first_decimal(value: f64) -> f64 {
    let whole = value.floor();
    let digit = ((value - whole) * 10.0 + 1e-9).floor();
    if digit <= 5.0 {
        whole
    } else {
        whole + 1.0
    }
}

impl BaryStrategy {
    fn dominant(histogram: &CodeHistogram) -> (BaryGroup, usize) {
        let count = |group: BaryGroup| -> usize {
            histogram
                .iter()
                .filter(|(code, _)| BaryGroup::of(*code) == group)
                .map(|(_, n)| n)
                .sum()
        };
        let mut best = (BaryGroup::PRIORITY[0], count(BaryGroup::PRIORITY[0]));
        for group in &BaryGroup::PRIORITY[1..] {
            let n = count(*group);
            if n > best.1 {
                best = (*group, n);
            }
        }
        best
    }

    fn fog_mode(histogram: &CodeHistogram, detail: DecisionDetail) -> Decision {
        let code: WmoCode = if histogram.count(45) > histogram.count(48) {
            45
        } else {
            48
        };
        Decision::new(code, Selection::FogMode).with_detail(detail)
    }
}

impl WmoStrategy for BaryStrategy {
    fn algorithm(&self) -> WmoAlgorithm {
        WmoAlgorithm::Bary
    }

    fn decide(&self, histogram: &CodeHistogram, config: &WmoConfig) -> Decision {
        let unknown = histogram.unknown_codes();
        if !unknown.is_empty() {
            warn!(codes = ?unknown, "unknown codes counted as temperate");
        }

        let (group, group_count) = Self::dominant(histogram);
        let mut detail = DecisionDetail {
            selected_group: Some(group.name().to_string()),
            group_count: Some(group_count),
            ..DecisionDetail::default()
        };
        if group == BaryGroup::Fog {
            return Self::fog_mode(histogram, detail);
        }

        let codes = group.codes();
        let counts: Vec<usize> = codes.iter().map(|c| histogram.count(*c)).collect();
        let occupied: Vec<usize> = (0..codes.len()).filter(|i| counts[*i] > 0).collect();
        let (Some(&imin), Some(&imax)) = (occupied.first(), occupied.last()) else {
            debug!(group = group.name(), "no positioned mass, using global mode");
            return fallback(histogram, detail);
        };

        // Linear ramp 1 → max_pond across the occupied range.
        let span = (imax - imin) as f64;
        let pond = config.bary_max_pond;
        let mut positions = Vec::with_capacity(imax - imin + 1);
        let mut masses = Vec::with_capacity(imax - imin + 1);
        for i in imin..=imax {
            let weight = if span > 0.0 {
                1.0 + (pond - 1.0) * (i - imin) as f64 / span
            } else {
                1.0
            };
            positions.push((i + 1) as f64);
            masses.push(counts[i] as f64 * weight);
        }
        if masses.iter().sum::<f64>() <= 0.0 {
            return fallback(histogram, detail);
        }

        let barycenter = match weighted_average(&positions, &masses) {
            Ok(b) => b,
            Err(err) => {
                warn!(%err, "barycenter failed, using global mode");
                return fallback(histogram, detail);
            }
        };
        detail.barycenter = Some(barycenter);
        let position = (round_first_decimal(barycenter) as usize).clamp(1, codes.len());
        Decision::new(codes[position - 1], Selection::Barycenter).with_detail(detail)
    }
}

fn fallback(histogram: &CodeHistogram, detail: DecisionDetail) -> Decision {
    let mode = mode_decision(histogram);
    Decision::new(mode.code, Selection::GlobalModeFallback).with_detail(detail)
}

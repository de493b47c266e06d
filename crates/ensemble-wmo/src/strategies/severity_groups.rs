//! Dynamic-threshold scan over the configured severity groups.
//!
//! 1. Count members per group. Codes outside every group join the
//!    lowest-severity group.
//! 2. `threshold = dynamic_threshold_base / active_groups / 100`.
//! 3. From the most severe group down, take the first whose share reaches the
//!    threshold; otherwise the group with the most members.
//! 4. Members in strictly more severe groups (upper) vs strictly less severe
//!    groups (lower) pull the pick to the group's max code, its min code, or
//!    its upper median when balanced.

use std::cmp::Reverse;

use tracing::warn;

use ensemble_core::{WmoAlgorithm, WmoCode, WmoConfig};

use super::median::upper_middle;
use super::{mode_decision, WmoStrategy};
use crate::histogram::CodeHistogram;
use crate::types::{Decision, DecisionDetail, Selection};

#[derive(Debug, Clone, Copy, Default)]
pub struct SeverityGroupsStrategy;

impl WmoStrategy for SeverityGroupsStrategy {
    fn algorithm(&self) -> WmoAlgorithm {
        WmoAlgorithm::SeverityGroups
    }

    fn decide(&self, histogram: &CodeHistogram, config: &WmoConfig) -> Decision {
        let groups = &config.severity_groups;
        let Some(lowest) = (0..groups.len()).min_by_key(|i| groups[*i].severity) else {
            warn!("no severity groups configured, using mode");
            return mode_decision(histogram);
        };

        let mut counts = vec![0usize; groups.len()];
        let mut orphans: Vec<WmoCode> = Vec::new();
        for (code, n) in histogram.iter() {
            let slot = match groups.iter().position(|g| g.contains(code)) {
                Some(i) => i,
                None => {
                    orphans.push(code);
                    lowest
                }
            };
            counts[slot] += n;
        }
        if !orphans.is_empty() {
            warn!(
                codes = ?orphans,
                group = %groups[lowest].description,
                "codes outside every severity group counted in the lowest group"
            );
        }

        let total = histogram.total() as f64;
        let active = counts.iter().filter(|n| **n > 0).count().max(1);
        let threshold = config.dynamic_threshold_base / active as f64 / 100.0;

        // Most severe first; equal severities keep configuration order.
        let mut by_severity: Vec<usize> = (0..groups.len()).collect();
        by_severity.sort_by_key(|i| Reverse(groups[*i].severity));

        let (chosen, selection) = match by_severity
            .iter()
            .copied()
            .find(|i| counts[*i] > 0 && counts[*i] as f64 / total >= threshold)
        {
            Some(i) => (i, Selection::ThresholdGroup),
            None => {
                // max_by_key keeps the last maximum; scan least severe first so
                // that the most severe of equally large groups wins.
                let i = by_severity
                    .iter()
                    .rev()
                    .copied()
                    .max_by_key(|i| counts[*i])
                    .unwrap_or(lowest);
                (i, Selection::FallbackMaxCount)
            }
        };

        let severity = groups[chosen].severity;
        let upper: usize = (0..groups.len())
            .filter(|i| groups[*i].severity > severity)
            .map(|i| counts[i])
            .sum();
        let lower: usize = (0..groups.len())
            .filter(|i| groups[*i].severity < severity)
            .map(|i| counts[i])
            .sum();

        let detail = DecisionDetail {
            threshold: Some(threshold),
            selected_group: Some(groups[chosen].description.clone()),
            group_count: Some(counts[chosen]),
            upper_count: Some(upper),
            lower_count: Some(lower),
            ..DecisionDetail::default()
        };

        let codes = groups[chosen].sorted_codes();
        let picked = if upper > lower {
            codes.last().copied()
        } else if lower > upper {
            codes.first().copied()
        } else {
            upper_middle(&codes)
        };
        match picked {
            Some(code) => Decision::new(code, selection).with_detail(detail),
            None => {
                warn!(group = %groups[chosen].description, "selected severity group has no codes, using mode");
                mode_decision(histogram)
            }
        }
    }
}

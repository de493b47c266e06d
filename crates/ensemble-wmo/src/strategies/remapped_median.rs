use ensemble_core::constants::EMPTY_WMO_CODE;
use ensemble_core::{WmoAlgorithm, WmoConfig};

use super::median::upper_middle;
use super::WmoStrategy;
use crate::histogram::CodeHistogram;
use crate::ordinal::{from_ordinal, to_ordinal};
use crate::types::{Decision, DecisionDetail, Selection};

/// Upper median on the ordinal severity scale, mapped back to a code.
///
/// Unlike the raw median this ranks showers (80–82) below snow (71–77).
#[derive(Debug, Clone, Copy, Default)]
pub struct RemappedMedianStrategy;

impl WmoStrategy for RemappedMedianStrategy {
    fn algorithm(&self) -> WmoAlgorithm {
        WmoAlgorithm::RemappedMedian
    }

    fn decide(&self, histogram: &CodeHistogram, _config: &WmoConfig) -> Decision {
        // Map each distinct code once; an unknown code warns once, not per member.
        let mut ordinals: Vec<u8> = histogram
            .iter()
            .flat_map(|(code, count)| std::iter::repeat(to_ordinal(code)).take(count))
            .collect();
        ordinals.sort_unstable();
        let Some(ordinal) = upper_middle(&ordinals) else {
            return Decision::new(EMPTY_WMO_CODE, Selection::Empty);
        };
        Decision::new(from_ordinal(ordinal), Selection::RemappedMedian).with_detail(
            DecisionDetail {
                ordinal: Some(ordinal),
                ..DecisionDetail::default()
            },
        )
    }
}

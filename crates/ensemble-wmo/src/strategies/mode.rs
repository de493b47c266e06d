use ensemble_core::constants::EMPTY_WMO_CODE;
use ensemble_core::{WmoAlgorithm, WmoConfig};

use super::WmoStrategy;
use crate::histogram::CodeHistogram;
use crate::types::{Decision, Selection};

/// Most frequent code; a tie goes to the highest code.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModeStrategy;

impl ModeStrategy {
    pub(crate) fn decide_mode(&self, histogram: &CodeHistogram) -> Decision {
        match histogram.mode() {
            Some((code, false)) => Decision::new(code, Selection::Dominant),
            Some((code, true)) => Decision::new(code, Selection::SeverityTiebreak),
            None => Decision::new(EMPTY_WMO_CODE, Selection::Empty),
        }
    }
}

impl WmoStrategy for ModeStrategy {
    fn algorithm(&self) -> WmoAlgorithm {
        WmoAlgorithm::Mode
    }

    fn decide(&self, histogram: &CodeHistogram, _config: &WmoConfig) -> Decision {
        self.decide_mode(histogram)
    }
}

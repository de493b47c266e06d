use ensemble_core::constants::EMPTY_WMO_CODE;
use ensemble_core::{WmoAlgorithm, WmoConfig};

use super::WmoStrategy;
use crate::histogram::CodeHistogram;
use crate::types::{Decision, Selection};

/// Numeric maximum of the codes.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaxSeverityStrategy;

impl WmoStrategy for MaxSeverityStrategy {
    fn algorithm(&self) -> WmoAlgorithm {
        WmoAlgorithm::MaxSeverity
    }

    fn decide(&self, histogram: &CodeHistogram, _config: &WmoConfig) -> Decision {
        let code = histogram.max_code().unwrap_or(EMPTY_WMO_CODE);
        Decision::new(code, Selection::MaxSeverity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_member_can_dominate() {
        let h = CodeHistogram::from_codes(&[0, 0, 0, 0, 95]);
        assert_eq!(MaxSeverityStrategy.decide(&h, &WmoConfig::default()).code, 95);
    }
}

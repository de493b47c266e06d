use ensemble_core::constants::EMPTY_WMO_CODE;
use ensemble_core::{WmoAlgorithm, WmoConfig};

use super::WmoStrategy;
use crate::histogram::CodeHistogram;
use crate::types::{Decision, Selection};

/// Upper median of the raw codes: the element at `n / 2` of the sorted list.
#[derive(Debug, Clone, Copy, Default)]
pub struct MedianStrategy;

/// Element at `len / 2`; for even lengths that is the upper of the two middles.
pub(crate) fn upper_middle<T: Copy>(sorted: &[T]) -> Option<T> {
    sorted.get(sorted.len() / 2).copied()
}

impl WmoStrategy for MedianStrategy {
    fn algorithm(&self) -> WmoAlgorithm {
        WmoAlgorithm::Median
    }

    fn decide(&self, histogram: &CodeHistogram, _config: &WmoConfig) -> Decision {
        let code = upper_middle(&histogram.sorted_codes()).unwrap_or(EMPTY_WMO_CODE);
        Decision::new(code, Selection::Median)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(codes: &[u16]) -> u16 {
        MedianStrategy
            .decide(&CodeHistogram::from_codes(codes), &WmoConfig::default())
            .code
    }

    #[test]
    fn odd_takes_center() {
        assert_eq!(run(&[61, 0, 3]), 3);
    }

    #[test]
    fn even_takes_upper_middle() {
        assert_eq!(run(&[0, 3, 61, 95]), 61);
    }
}

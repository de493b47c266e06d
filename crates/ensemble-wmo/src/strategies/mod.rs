//! Consensus strategies. Each one sees the same histogram and config and is
//! free to read whichever config fields it needs.

pub mod bary;
pub mod max_severity;
pub mod median;
pub mod mode;
pub mod remapped_median;
pub mod severity_groups;
pub mod smart_bary;

use ensemble_core::{WmoAlgorithm, WmoConfig};

use crate::histogram::CodeHistogram;
use crate::types::Decision;

pub use bary::BaryStrategy;
pub use max_severity::MaxSeverityStrategy;
pub use median::MedianStrategy;
pub use mode::ModeStrategy;
pub use remapped_median::RemappedMedianStrategy;
pub use severity_groups::SeverityGroupsStrategy;
pub use smart_bary::SmartBaryStrategy;

pub trait WmoStrategy: Send + Sync {
    fn algorithm(&self) -> WmoAlgorithm;

    /// Pick a code. `histogram` is never empty.
    fn decide(&self, histogram: &CodeHistogram, config: &WmoConfig) -> Decision;
}

/// Global mode as a decision; shared fallback for the group strategies.
pub(crate) fn mode_decision(histogram: &CodeHistogram) -> Decision {
    mode::ModeStrategy.decide_mode(histogram)
}

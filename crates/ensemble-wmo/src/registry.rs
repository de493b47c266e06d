//! Algorithm → strategy lookup.
//!
//! The match is exhaustive, so adding a `WmoAlgorithm` variant without a
//! strategy does not compile. Unknown algorithm names never reach this point:
//! they are rejected when the settings are parsed.

use ensemble_core::WmoAlgorithm;

use crate::strategies::{
    BaryStrategy, MaxSeverityStrategy, MedianStrategy, ModeStrategy, RemappedMedianStrategy,
    SeverityGroupsStrategy, SmartBaryStrategy, WmoStrategy,
};

pub fn strategy_for(algorithm: WmoAlgorithm) -> &'static dyn WmoStrategy {
    match algorithm {
        WmoAlgorithm::Mode => &ModeStrategy,
        WmoAlgorithm::SeverityGroups => &SeverityGroupsStrategy,
        WmoAlgorithm::MaxSeverity => &MaxSeverityStrategy,
        WmoAlgorithm::Median => &MedianStrategy,
        WmoAlgorithm::RemappedMedian => &RemappedMedianStrategy,
        WmoAlgorithm::Bary => &BaryStrategy,
        WmoAlgorithm::SmartBary => &SmartBaryStrategy,
    }
}

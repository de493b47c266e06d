//! # ensemble-precip
//!
//! Precipitation consensus for one (location, hour).
//!
//! Amounts are right-skewed: one convective model with 15 mm next to eight
//! models with 0.3 mm is common. The consensus is therefore taken over the
//! wet models only, in `ln(mm + ε)` space, with a gaussian kernel centered on
//! the median. Agreement diagnostics (CI, IQR) and a probability of
//! precipitation are reported alongside.

pub mod aggregate;
pub mod log_gaussian;
pub mod pop;
pub mod wet;

pub use aggregate::{aggregate_precip_mm, PrecipAggregator, PrecipConsensus};
pub use log_gaussian::log_gaussian_mm;
pub use pop::{intensity_term, lead_time_weight, probability_of_precipitation};
pub use wet::{consensus_index, wet_models, WetModel};

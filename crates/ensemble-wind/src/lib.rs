//! # ensemble-wind
//!
//! Wind direction lives on a circle: the arithmetic mean of 350° and 10° is
//! 180°, the opposite of both. Everything here works on unit vectors instead.

pub mod circular;
pub mod consensus;

pub use circular::{angular_difference_deg, circular_mean_deg, mean_resultant_length, normalize_deg};
pub use consensus::{aggregate_wind_direction_gaussian, WindAggregator, WindConsensus};

//! Top-level error for aggregation calls.

use super::config_error::ConfigError;
use super::error_code::{self, ConsensusErrorCode};
use super::stats_error::StatsError;

/// Error returned by any aggregation call. A failure is scoped to the single
/// (location, hour, parameter) call that produced it.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConsensusError {
    #[error(transparent)]
    Stats(#[from] StatsError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("invalid time slot [{start}, {end}): hours must be in 0..24")]
    InvalidTimeSlot { start: u8, end: u8 },

    #[error("hourly series misaligned: {values} values for {timestamps} timestamps")]
    MisalignedSeries { values: usize, timestamps: usize },
}

impl ConsensusErrorCode for ConsensusError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Stats(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::InvalidTimeSlot { .. } => error_code::INVALID_TIME_SLOT,
            Self::MisalignedSeries { .. } => error_code::MISALIGNED_SERIES,
        }
    }
}

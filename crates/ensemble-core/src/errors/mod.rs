//! Error types for the ensemble consensus engine.
//!
//! One enum per concern, all convertible into [`ConsensusError`].
//! Every enum implements [`ConsensusErrorCode`] for a stable machine-readable code.

pub mod config_error;
pub mod consensus_error;
pub mod error_code;
pub mod stats_error;

pub use config_error::ConfigError;
pub use consensus_error::ConsensusError;
pub use error_code::ConsensusErrorCode;
pub use stats_error::StatsError;

/// Result alias for the statistical primitives.
pub type StatsResult<T> = Result<T, StatsError>;

/// Result alias for everything above the statistical primitives.
pub type ConsensusResult<T> = Result<T, ConsensusError>;

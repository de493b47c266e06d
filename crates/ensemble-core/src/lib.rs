//! # ensemble-core
//!
//! Foundation crate for the ensemble consensus engine.
//! Defines the shared data model, configuration, errors, tracing setup, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod traits;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::{
    ConsensusSettings, ContinuousConfig, ContinuousMethod, PrecipConfig, WindConfig, WmoAlgorithm,
    WmoConfig,
};
pub use errors::{ConfigError, ConsensusError, ConsensusResult, StatsError, StatsResult};
pub use traits::Aggregator;
pub use types::{Ensemble, ModelSample, Parameter, SeverityGroup, TimeSlot, WmoCode};

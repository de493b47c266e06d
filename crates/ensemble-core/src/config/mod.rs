//! Configuration for every aggregator.
//!
//! Each section is `#[serde(default)]` so partial settings files are accepted;
//! [`ConsensusSettings::validate`] rejects values no aggregator can work with.

pub mod continuous_config;
pub mod defaults;
pub mod precip_config;
pub mod settings;
pub mod wind_config;
pub mod wmo_config;

pub use continuous_config::{ContinuousConfig, ContinuousMethod};
pub use precip_config::PrecipConfig;
pub use settings::{ConsensusSettings, ParameterOverride};
pub use wind_config::WindConfig;
pub use wmo_config::{WmoAlgorithm, WmoConfig};

//! # ensemble-engine
//!
//! Routes each (parameter, hour, ensemble) request to the matching
//! aggregator with the settings for that parameter, runs batches in
//! parallel, and reduces hourly consensus values to slot summaries.

pub mod engine;
pub mod request;
pub mod summary;

pub use engine::ConsensusEngine;
pub use request::{AggregatedValue, AggregationRequest};
pub use summary::{summarize_slot, SlotReducer, SlotSummary};

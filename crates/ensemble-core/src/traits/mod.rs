//! Seams shared by the aggregator crates.

pub mod aggregator;

pub use aggregator::Aggregator;

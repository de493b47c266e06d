//! # ensemble-wmo
//!
//! Categorical consensus over WMO weather codes.
//!
//! [`aggregate_wmo`] builds a [`CodeHistogram`] of the ensemble, looks up the
//! strategy for `WmoConfig::algorithm` in the [`registry`], and attaches the
//! badge [`RiskCounters`] that every algorithm reports.
//!
//! Domain knowledge (ordinal scale, group memberships, risk tags) lives in
//! [`tables`].

pub mod aggregate;
pub mod histogram;
pub mod ordinal;
pub mod registry;
pub mod risk;
pub mod strategies;
pub mod tables;
pub mod types;

pub use aggregate::{aggregate_ensemble, aggregate_wmo, WmoAggregator};
pub use histogram::CodeHistogram;
pub use registry::strategy_for;
pub use risk::{RiskCounters, TopRisk};
pub use strategies::WmoStrategy;
pub use tables::{RiskKind, TABLES_VERSION};
pub use types::{Decision, DecisionDetail, Selection, WmoConsensus, WmoDebug};

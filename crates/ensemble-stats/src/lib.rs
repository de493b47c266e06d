//! # ensemble-stats
//!
//! Statistical primitives shared by every consensus engine.
//!
//! All functions ignore non-finite inputs and fail with
//! [`StatsError::EmptyInput`](ensemble_core::StatsError) only when nothing
//! valid remains. They never return `NaN`.
//!
//! | Family | Functions |
//! |--------|-----------|
//! | Central | `mean`, `median`, `quantile`, `quartiles`, `median_absolute_deviation` |
//! | Trimmed | `trimmed_mean`, `adaptive_trimmed_mean`, `winsorized_mean`, `robust_trimmed_mean` |
//! | Gaussian | `gaussian_weighted` and its adaptive, robust, mixture, constrained variants |
//! | Weighted | parallel-array, per-model, normalized, adaptive, and robust weighted averages |

pub mod central;
pub mod continuous;
pub mod gaussian;
pub mod trimmed;
pub mod weighted;

mod sanitize;

pub use central::{
    coefficient_of_variation, mean, median, median_absolute_deviation, quantile, quartiles,
    std_dev, Quartiles,
};
pub use continuous::{ContinuousAggregator, ContinuousConsensus};
pub use gaussian::{
    adaptive_gaussian_weighted, constrained_gaussian_weighted, gaussian_weighted,
    gaussian_weights, mixture_gaussian_weighted, robust_gaussian_weighted,
};
pub use sanitize::valid_values;
pub use trimmed::{
    adaptive_trim_percent, adaptive_trimmed_mean, robust_trimmed_mean, trimmed_mean,
    winsorized_mean,
};
pub use weighted::{
    adaptive_weighted_average, normalize_weights, robust_weighted_average, weighted_average,
    weighted_average_by_model, weighted_average_normalized, AdaptiveWeight, NormalizedAverage,
};

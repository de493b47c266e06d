//! The configurable reducer for continuous parameters.

use serde::Serialize;
use tracing::trace;

use ensemble_core::{Aggregator, ConsensusResult, ContinuousConfig, ContinuousMethod};

use crate::{central, gaussian, sanitize, trimmed};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContinuousConsensus {
    pub value: f64,
    pub method: ContinuousMethod,
    /// Members that contributed (finite values).
    pub valid_members: usize,
}

/// Dispatches to the statistic selected by [`ContinuousConfig::method`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ContinuousAggregator;

impl ContinuousAggregator {
    fn reduce(values: &[f64], config: &ContinuousConfig) -> ConsensusResult<f64> {
        let value = match config.method {
            ContinuousMethod::Mean => central::mean(values)?,
            ContinuousMethod::Median => central::median(values)?,
            ContinuousMethod::TrimmedMean => trimmed::trimmed_mean(values, config.trim_percent)?,
            ContinuousMethod::AdaptiveTrimmedMean => {
                trimmed::adaptive_trimmed_mean(values, config.max_trim_percent)?
            }
            ContinuousMethod::WinsorizedMean => {
                trimmed::winsorized_mean(values, config.trim_percent)?
            }
            ContinuousMethod::RobustTrimmedMean => {
                trimmed::robust_trimmed_mean(values, config.iqr_fence_k)?
            }
            ContinuousMethod::Gaussian => gaussian::gaussian_weighted(values, config.sigma)?,
            ContinuousMethod::AdaptiveGaussian => {
                gaussian::adaptive_gaussian_weighted(values, config.sigma_multiplier)?
            }
            ContinuousMethod::RobustGaussian => {
                gaussian::robust_gaussian_weighted(values, config.mad_scale)?
            }
            ContinuousMethod::MixtureGaussian => gaussian::mixture_gaussian_weighted(
                values,
                config.mixture_components,
                config.sigma,
            )?,
            ContinuousMethod::ConstrainedGaussian => {
                gaussian::constrained_gaussian_weighted(values, config.sigma, config.max_deviation)?
            }
        };
        Ok(value)
    }
}

impl Aggregator for ContinuousAggregator {
    type Input = [f64];
    type Config = ContinuousConfig;
    type Output = ContinuousConsensus;

    fn name(&self) -> &'static str {
        "continuous"
    }

    fn aggregate(
        &self,
        input: &[f64],
        config: &ContinuousConfig,
    ) -> ConsensusResult<ContinuousConsensus> {
        let value = Self::reduce(input, config)?;
        let valid_members = sanitize::valid_values(input).len();
        trace!(method = config.method.name(), value, valid_members, "continuous consensus");
        Ok(ContinuousConsensus {
            value,
            method: config.method,
            valid_members,
        })
    }
}

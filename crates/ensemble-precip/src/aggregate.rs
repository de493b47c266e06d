use serde::Serialize;
use tracing::trace;

use ensemble_core::{Aggregator, ConsensusResult, ModelSample, PrecipConfig};
use ensemble_stats::quartiles;

use crate::log_gaussian::log_gaussian_mm;
use crate::pop::probability_of_precipitation;
use crate::wet::{consensus_index, wet_models, WetModel};

/// Precipitation consensus for one (location, hour).
///
/// Serialized field names (`mm_agg`, `mouillant`, `CI`, `IQR`) are the ones
/// chart and table consumers read.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrecipConsensus {
    pub mm_agg: f64,
    #[serde(rename = "mouillant")]
    pub wet_models: Vec<WetModel>,
    /// Percentage of wet members within the tolerance band of the wet median.
    #[serde(rename = "CI")]
    pub ci: f64,
    #[serde(rename = "IQR")]
    pub iqr: f64,
    pub wet_count: usize,
    /// Members with a finite, non-negative amount.
    pub total_count: usize,
    pub pop: u8,
}

/// Aggregate per-model amounts (mm) at `forecast_hour` hours of lead time.
///
/// An ensemble with no wet member, including an empty one, yields
/// `mm_agg = CI = IQR = 0`.
pub fn aggregate_precip_mm(
    samples: &[ModelSample],
    config: &PrecipConfig,
    forecast_hour: u32,
) -> ConsensusResult<PrecipConsensus> {
    let total_count = samples
        .iter()
        .filter_map(ModelSample::valid_value)
        .filter(|mm| *mm >= 0.0)
        .count();
    let wet = wet_models(samples, config.wet_threshold_mm);
    let amounts: Vec<f64> = wet.iter().map(|w| w.mm).collect();

    let (mm_agg, ci, iqr) = if amounts.is_empty() {
        (0.0, 0.0, 0.0)
    } else {
        (
            log_gaussian_mm(&amounts, config)?,
            consensus_index(&amounts, config.ci_tolerance)?,
            quartiles(&amounts)?.iqr,
        )
    };
    let pop = probability_of_precipitation(wet.len(), total_count, mm_agg, forecast_hour, config);
    trace!(mm_agg, ci, iqr, wet = wet.len(), total_count, pop, "precip consensus");

    Ok(PrecipConsensus {
        mm_agg,
        wet_count: wet.len(),
        wet_models: wet,
        ci,
        iqr,
        total_count,
        pop,
    })
}

/// [`aggregate_precip_mm`] behind the [`Aggregator`] seam. The lead time is
/// fixed per instance since it is not part of the ensemble.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrecipAggregator {
    pub forecast_hour: u32,
}

impl PrecipAggregator {
    pub fn at_hour(forecast_hour: u32) -> Self {
        Self { forecast_hour }
    }
}

impl Aggregator for PrecipAggregator {
    type Input = [ModelSample];
    type Config = PrecipConfig;
    type Output = PrecipConsensus;

    fn name(&self) -> &'static str {
        "precip"
    }

    fn aggregate(
        &self,
        input: &[ModelSample],
        config: &PrecipConfig,
    ) -> ConsensusResult<PrecipConsensus> {
        aggregate_precip_mm(input, config, self.forecast_hour)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn samples(values: &[f64]) -> Vec<ModelSample> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| ModelSample::new(format!("m{i}"), *v))
            .collect()
    }

    #[test]
    fn all_dry_is_zero() {
        let r = aggregate_precip_mm(&samples(&[0.0, 0.0, 0.0]), &PrecipConfig::default(), 0)
            .unwrap();
        assert_eq!((r.mm_agg, r.ci, r.iqr), (0.0, 0.0, 0.0));
        assert!(r.wet_models.is_empty());
        assert_eq!(r.total_count, 3);
        assert_eq!(r.pop, 0);
    }

    #[test]
    fn empty_ensemble_is_zero() {
        let r = aggregate_precip_mm(&[], &PrecipConfig::default(), 48).unwrap();
        assert_eq!(r.mm_agg, 0.0);
        assert_eq!(r.total_count, 0);
    }

    #[test]
    fn wet_subset_drives_amount() {
        let r = aggregate_precip_mm(&samples(&[0.0, 0.0, 2.0, 2.0, 2.0]), &PrecipConfig::default(), 0)
            .unwrap();
        assert!((r.mm_agg - 2.0).abs() < 1e-9);
        assert_eq!(r.wet_count, 3);
        assert_eq!(r.ci, 100.0);
        assert_eq!(r.iqr, 0.0);
        // 0.6·0.6 + 0.25·ln2/ln20 + 0.15 ≈ 0.568
        assert_eq!(r.pop, 57);
    }

    #[test]
    fn missing_members_do_not_count() {
        let mut s = samples(&[1.0, 1.0]);
        s.push(ModelSample::missing("ukmo"));
        let r = aggregate_precip_mm(&s, &PrecipConfig::default(), 0).unwrap();
        assert_eq!(r.total_count, 2);
        assert_eq!(r.wet_count, 2);
    }

    #[test]
    fn aggregator_uses_its_hour() {
        let s = samples(&[1.0, 0.0]);
        let near = PrecipAggregator::at_hour(0).aggregate(&s, &PrecipConfig::default()).unwrap();
        let far = PrecipAggregator::at_hour(24 * 5).aggregate(&s, &PrecipConfig::default()).unwrap();
        assert!(far.pop < near.pop);
        assert_eq!(far.mm_agg, near.mm_agg);
    }
}

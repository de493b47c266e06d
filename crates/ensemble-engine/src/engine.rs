use std::path::Path;

use rayon::prelude::*;
use tracing::{info, instrument, warn};

use ensemble_core::types::ParameterKind;
use ensemble_core::{Aggregator, ConsensusResult, ConsensusSettings};
use ensemble_precip::aggregate_precip_mm;
use ensemble_stats::ContinuousAggregator;
use ensemble_wind::WindAggregator;
use ensemble_wmo::aggregate_ensemble;

use crate::request::{AggregatedValue, AggregationRequest};

/// Stateless dispatcher over validated settings. Cheap to share across
/// threads; every call reads the settings and nothing else.
#[derive(Debug, Clone)]
pub struct ConsensusEngine {
    settings: ConsensusSettings,
}

impl ConsensusEngine {
    pub fn new(settings: ConsensusSettings) -> ConsensusResult<Self> {
        settings.validate()?;
        info!(
            version = ensemble_core::constants::VERSION,
            wmo_algorithm = settings.wmo.algorithm.name(),
            continuous_method = settings.continuous.method.name(),
            overrides = settings.parameters.len(),
            "consensus engine ready"
        );
        Ok(Self { settings })
    }

    /// Load settings from a TOML or JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> ConsensusResult<Self> {
        Self::new(ConsensusSettings::load(path)?)
    }

    pub fn settings(&self) -> &ConsensusSettings {
        &self.settings
    }

    #[instrument(
        skip(self, request),
        fields(parameter = %request.parameter, hour = request.forecast_hour, members = request.samples.len())
    )]
    pub fn aggregate(&self, request: &AggregationRequest) -> ConsensusResult<AggregatedValue> {
        let parameter = request.parameter;
        let samples = &request.samples;
        let value = match parameter.kind() {
            ParameterKind::Categorical => AggregatedValue::Categorical(aggregate_ensemble(
                samples,
                self.settings.wmo_for(parameter),
            )),
            ParameterKind::Precipitation => AggregatedValue::Precipitation(aggregate_precip_mm(
                samples.samples(),
                self.settings.precip_for(parameter),
                request.forecast_hour,
            )?),
            ParameterKind::Direction => AggregatedValue::Direction(
                WindAggregator.aggregate(&samples.valid_values(), self.settings.wind_for(parameter))?,
            ),
            ParameterKind::Continuous => AggregatedValue::Continuous(ContinuousAggregator.aggregate(
                &samples.valid_values(),
                self.settings.continuous_for(parameter),
            )?),
        };
        Ok(value)
    }

    /// Aggregate independent requests in parallel. Results are in request
    /// order and one failing request does not affect the others.
    #[instrument(skip(self, requests), fields(requests = requests.len()))]
    pub fn aggregate_batch(
        &self,
        requests: &[AggregationRequest],
    ) -> Vec<ConsensusResult<AggregatedValue>> {
        let results: Vec<_> = requests.par_iter().map(|r| self.aggregate(r)).collect();
        let failed = results.iter().filter(|r| r.is_err()).count();
        if failed > 0 {
            warn!(failed, total = requests.len(), "some aggregations failed");
        }
        results
    }
}

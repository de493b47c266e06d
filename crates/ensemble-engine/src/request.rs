use serde::{Deserialize, Serialize};

use ensemble_core::{Ensemble, Parameter};
use ensemble_precip::PrecipConsensus;
use ensemble_stats::ContinuousConsensus;
use ensemble_wind::WindConsensus;
use ensemble_wmo::WmoConsensus;

/// One (parameter, hour) ensemble to aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregationRequest {
    pub parameter: Parameter,
    /// Lead time in hours from the model run.
    #[serde(default)]
    pub forecast_hour: u32,
    pub samples: Ensemble,
}

impl AggregationRequest {
    pub fn new(parameter: Parameter, forecast_hour: u32, samples: Ensemble) -> Self {
        Self {
            parameter,
            forecast_hour,
            samples,
        }
    }
}

/// Result of one request, shaped by the aggregator family that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AggregatedValue {
    Categorical(WmoConsensus),
    Precipitation(PrecipConsensus),
    Direction(WindConsensus),
    Continuous(ContinuousConsensus),
}

impl AggregatedValue {
    /// The headline number: code, millimetres, degrees, or the statistic.
    pub fn value(&self) -> f64 {
        match self {
            Self::Categorical(c) => f64::from(c.code),
            Self::Precipitation(p) => p.mm_agg,
            Self::Direction(d) => d.direction,
            Self::Continuous(c) => c.value,
        }
    }
}

//! Entry point of the categorical engine.

use tracing::trace;

use ensemble_core::constants::EMPTY_WMO_CODE;
use ensemble_core::{Aggregator, ConsensusResult, Ensemble, WmoCode, WmoConfig};

use crate::histogram::CodeHistogram;
use crate::registry::strategy_for;
use crate::risk::RiskCounters;
use crate::tables::TABLES_VERSION;
use crate::types::{Decision, Selection, WmoConsensus, WmoDebug};

/// Consensus code of `codes` under `config.algorithm`.
///
/// Never fails: an empty input yields code 0 with [`Selection::Empty`], and
/// unknown codes are logged and handled by each strategy's fallback.
pub fn aggregate_wmo(codes: &[WmoCode], config: &WmoConfig) -> WmoConsensus {
    let histogram = CodeHistogram::from_codes(codes);
    let decision = if histogram.is_empty() {
        Decision::new(EMPTY_WMO_CODE, Selection::Empty)
    } else {
        strategy_for(config.algorithm).decide(&histogram, config)
    };
    trace!(
        algorithm = config.algorithm.name(),
        code = decision.code,
        selection = ?decision.selection,
        members = histogram.total(),
        "wmo consensus"
    );
    WmoConsensus {
        code: decision.code,
        selection: decision.selection,
        risk: decision.risk,
        risks: RiskCounters::from_histogram(&histogram),
        debug: WmoDebug {
            algorithm: config.algorithm,
            selection: decision.selection,
            tables_version: TABLES_VERSION,
            total: histogram.total(),
            unknown_codes: histogram.unknown_codes(),
            detail: decision.detail,
        },
    }
}

/// [`aggregate_wmo`] over the valid members of an ensemble.
pub fn aggregate_ensemble(ensemble: &Ensemble, config: &WmoConfig) -> WmoConsensus {
    aggregate_wmo(&ensemble.wmo_codes(), config)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct WmoAggregator;

impl Aggregator for WmoAggregator {
    type Input = [WmoCode];
    type Config = WmoConfig;
    type Output = WmoConsensus;

    fn name(&self) -> &'static str {
        "wmo"
    }

    fn aggregate(&self, input: &[WmoCode], config: &WmoConfig) -> ConsensusResult<WmoConsensus> {
        Ok(aggregate_wmo(input, config))
    }
}

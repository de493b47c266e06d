use crate::errors::ConsensusResult;

/// A reduction of one ensemble to one consensus value.
///
/// Implementations are stateless with respect to calls: the configuration
/// is borrowed read-only and nothing is retained between invocations, so a
/// single aggregator can be shared freely across threads.
pub trait Aggregator: Send + Sync {
    /// What the aggregator consumes (codes, samples, angles, ...).
    type Input: ?Sized;
    /// The configuration section it reads.
    type Config;
    /// Result including diagnostics.
    type Output;

    /// Stable name used in logs and diagnostics.
    fn name(&self) -> &'static str;

    fn aggregate(&self, input: &Self::Input, config: &Self::Config)
        -> ConsensusResult<Self::Output>;
}

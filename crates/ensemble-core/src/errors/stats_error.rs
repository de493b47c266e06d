//! Statistical primitive errors.

use super::error_code::{self, ConsensusErrorCode};

/// Input validation failures raised by the statistical primitives.
///
/// Degenerate-but-valid inputs (single values, everything fenced out) never
/// produce these; they resolve to documented fallback values instead.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StatsError {
    #[error("no valid values for {operation}")]
    EmptyInput { operation: &'static str },

    #[error("invalid {name} = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("length mismatch: {values} values, {weights} weights")]
    LengthMismatch { values: usize, weights: usize },
}

impl StatsError {
    /// Shorthand for the empty-input error of a named operation.
    pub fn empty(operation: &'static str) -> Self {
        Self::EmptyInput { operation }
    }
}

impl ConsensusErrorCode for StatsError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyInput { .. } => error_code::EMPTY_INPUT,
            Self::InvalidParameter { .. } => error_code::INVALID_PARAMETER,
            Self::LengthMismatch { .. } => error_code::LENGTH_MISMATCH,
        }
    }
}

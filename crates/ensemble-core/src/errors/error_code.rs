//! ConsensusErrorCode trait for callers at the process boundary.

/// Every error enum implements this to expose a structured error code string
/// that UI and API layers can match on without parsing messages.
pub trait ConsensusErrorCode {
    /// Returns the error code string (e.g., "EMPTY_INPUT").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted boundary string: `[ERROR_CODE] message`.
    fn boundary_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

// Error code constants.
pub const EMPTY_INPUT: &str = "EMPTY_INPUT";
pub const INVALID_PARAMETER: &str = "INVALID_PARAMETER";
pub const LENGTH_MISMATCH: &str = "LENGTH_MISMATCH";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const UNKNOWN_ALGORITHM: &str = "UNKNOWN_ALGORITHM";
pub const UNKNOWN_PARAMETER: &str = "UNKNOWN_PARAMETER";
pub const INVALID_TIME_SLOT: &str = "INVALID_TIME_SLOT";
pub const MISALIGNED_SERIES: &str = "MISALIGNED_SERIES";

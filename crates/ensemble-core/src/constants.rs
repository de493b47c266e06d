//! Shared constants for the ensemble consensus engine.

/// Engine version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Hours in a local day. Slot boundaries are taken modulo this value.
pub const HOURS_PER_DAY: u8 = 24;

/// Width of a standard forecast tranche in hours.
pub const TRANCHE_HOURS: u8 = 6;

/// Consistency constant that turns a MAD into a standard-deviation estimate
/// under normality (1 / Φ⁻¹(3/4)).
pub const MAD_TO_SIGMA: f64 = 1.4826;

/// Smallest positive sigma accepted by the log-space precipitation kernel.
pub const MIN_LOG_SIGMA: f64 = 1e-9;

/// Code returned by the categorical engine for an empty ensemble (clear sky).
pub const EMPTY_WMO_CODE: u16 = 0;

/// Number of levels on the risk badge scale.
pub const RISK_SCALE_MAX: u8 = 5;

// Single source of truth for all default values.

// --- Categorical (WMO) ---
pub const DEFAULT_DYNAMIC_THRESHOLD_BASE: f64 = 80.0;
pub const DEFAULT_BARY_MAX_POND: f64 = 1.0;

// --- Precipitation ---
pub const DEFAULT_WET_THRESHOLD_MM: f64 = 0.0;
pub const DEFAULT_USE_LOG_TRANSFORM: bool = true;
pub const DEFAULT_LOG_EPSILON: f64 = 0.1;
pub const DEFAULT_SIGMA_RATIO: f64 = 0.5;
/// Relative half-width of the agreement band around the wet median.
pub const DEFAULT_CI_TOLERANCE: f64 = 0.2;

// --- Probability of precipitation ---
pub const DEFAULT_POP_A: f64 = 0.6;
pub const DEFAULT_POP_B: f64 = 0.25;
pub const DEFAULT_POP_C: f64 = 0.15;
pub const DEFAULT_POP_NEUTRAL_MM: f64 = 1.0;
pub const DEFAULT_POP_MM_MAX: f64 = 20.0;
pub const DEFAULT_POP_DAY_DECAY_PER_DAY: f64 = 0.1;

// --- Wind ---
pub const DEFAULT_WIND_SIGMA_DEG: f64 = 30.0;

// --- Continuous ---
pub const DEFAULT_TRIM_PERCENT: f64 = 0.1;
pub const DEFAULT_MAX_TRIM_PERCENT: f64 = 0.25;
pub const DEFAULT_IQR_FENCE_K: f64 = 1.5;
pub const DEFAULT_GAUSSIAN_SIGMA: f64 = 1.0;
pub const DEFAULT_SIGMA_MULTIPLIER: f64 = 1.0;
pub const DEFAULT_MIXTURE_COMPONENTS: usize = 2;
pub const DEFAULT_MAX_DEVIATION: f64 = 2.0;

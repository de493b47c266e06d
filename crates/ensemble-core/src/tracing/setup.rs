//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the log filter.
pub const LOG_ENV_VAR: &str = "ENSEMBLE_LOG";

/// Filter used when `ENSEMBLE_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "ensemble=info";

/// Initialize the tracing/logging system.
///
/// Reads `ENSEMBLE_LOG` for per-subsystem log levels.
/// Format: `ENSEMBLE_LOG=ensemble_wmo=debug,ensemble_precip=warn`
///
/// Falls back to `ensemble=info` if `ENSEMBLE_LOG` is not set or is invalid.
///
/// Idempotent: only the first call installs a subscriber. If the host
/// process already installed a global subscriber this is a no-op.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_line_number(true))
            .with(filter)
            .try_init();
    });
}

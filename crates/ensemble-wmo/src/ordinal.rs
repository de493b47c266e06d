//! Mapping between codes and the 1–28 ordinal severity scale.

use tracing::warn;

use ensemble_core::WmoCode;

use crate::tables::{self, UNKNOWN_ORDINAL};

/// Ordinal of `code`; unknown codes get the lowest ordinal and a warning.
pub fn to_ordinal(code: WmoCode) -> u8 {
    tables::ordinal_of(code).unwrap_or_else(|| {
        warn!(code, ordinal = UNKNOWN_ORDINAL, "code not on the ordinal scale");
        UNKNOWN_ORDINAL
    })
}

/// Representative code of `ordinal`, clamped into 1–28.
pub fn from_ordinal(ordinal: u8) -> WmoCode {
    let clamped = ordinal.clamp(1, tables::ORDINAL_SCALE.len() as u8);
    tables::ORDINAL_SCALE[usize::from(clamped) - 1]
}

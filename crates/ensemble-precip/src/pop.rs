//! Probability of precipitation.
//!
//! `PoP = clamp(round(100 · (a·prop + b·D′ + c·w)), 0, 100)` where
//!
//! - `prop` is the wet share of the ensemble,
//! - `D′ = clamp(ln(mm / neutral) / ln(mm_max / neutral), −1, 1)`, −1 when dry,
//! - `w = max(0, 1 − day_decay_per_day · ⌊hour / 24⌋)`.

use ensemble_core::PrecipConfig;

/// Intensity term `D′` in `[−1, 1]`.
pub fn intensity_term(mm_agg: f64, config: &PrecipConfig) -> f64 {
    if !(mm_agg > 0.0) {
        return -1.0;
    }
    let d = (mm_agg / config.neutral_mm).ln() / (config.mm_max / config.neutral_mm).ln();
    if d.is_finite() {
        d.clamp(-1.0, 1.0)
    } else {
        -1.0
    }
}

/// Lead-time confidence `w` in `[0, 1]`, decreasing per whole forecast day.
pub fn lead_time_weight(forecast_hour: u32, config: &PrecipConfig) -> f64 {
    let days = f64::from(forecast_hour / 24);
    (1.0 - config.day_decay_per_day * days).max(0.0)
}

pub fn probability_of_precipitation(
    wet_count: usize,
    total_count: usize,
    mm_agg: f64,
    forecast_hour: u32,
    config: &PrecipConfig,
) -> u8 {
    let prop = if total_count == 0 {
        0.0
    } else {
        wet_count as f64 / total_count as f64
    };
    let score = config.a * prop
        + config.b * intensity_term(mm_agg, config)
        + config.c * lead_time_weight(forecast_hour, config);
    let pop = (100.0 * score).round();
    if pop.is_finite() {
        pop.clamp(0.0, 100.0) as u8
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intensity_anchors() {
        let c = PrecipConfig::default();
        assert_eq!(intensity_term(0.0, &c), -1.0);
        assert_eq!(intensity_term(c.neutral_mm, &c), 0.0);
        assert!((intensity_term(c.mm_max, &c) - 1.0).abs() < 1e-12);
        assert_eq!(intensity_term(500.0, &c), 1.0);
        assert_eq!(intensity_term(1e-6, &c), -1.0);
    }

    #[test]
    fn lead_time_steps_per_day() {
        let c = PrecipConfig::default();
        assert_eq!(lead_time_weight(0, &c), 1.0);
        assert_eq!(lead_time_weight(23, &c), 1.0);
        assert!((lead_time_weight(24, &c) - 0.9).abs() < 1e-12);
        assert_eq!(lead_time_weight(24 * 30, &c), 0.0);
    }

    #[test]
    fn dry_ensemble_is_zero() {
        // 0.6·0 + 0.25·(−1) + 0.15·1 = −0.1 → clamped to 0
        assert_eq!(probability_of_precipitation(0, 10, 0.0, 0, &PrecipConfig::default()), 0);
        assert_eq!(probability_of_precipitation(0, 0, 0.0, 0, &PrecipConfig::default()), 0);
    }

    #[test]
    fn unanimous_heavy_rain_is_certain() {
        // 0.6 + 0.25 + 0.15 = 1.0
        assert_eq!(probability_of_precipitation(9, 9, 20.0, 0, &PrecipConfig::default()), 100);
    }

    #[test]
    fn neutral_amount_half_wet() {
        // 0.6·0.5 + 0 + 0.15 = 0.45
        assert_eq!(probability_of_precipitation(5, 10, 1.0, 0, &PrecipConfig::default()), 45);
    }
}

use ensemble_core::{ModelSample, PrecipConfig};
use ensemble_precip::{aggregate_precip_mm, probability_of_precipitation};
use proptest::prelude::*;

fn arb_amounts() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(prop_oneof![Just(0.0f64), 0.0f64..60.0], 0..14)
}

fn to_samples(amounts: &[f64]) -> Vec<ModelSample> {
    amounts
        .iter()
        .enumerate()
        .map(|(i, mm)| ModelSample::new(format!("model_{i}"), *mm))
        .collect()
}

// ── PoP is a percentage ─────────────────────────────────────────────────

proptest! {
    #[test]
    fn pop_bounded(
        wet in 0usize..20,
        extra in 0usize..20,
        mm in 0.0f64..500.0,
        hour in 0u32..400,
    ) {
        let pop = probability_of_precipitation(wet, wet + extra, mm, hour, &PrecipConfig::default());
        prop_assert!(pop <= 100);
    }
}

// ── Aggregated amount stays within the wet members ──────────────────────

proptest! {
    #[test]
    fn consensus_within_wet_range(amounts in arb_amounts(), log in any::<bool>(), hour in 0u32..240) {
        let config = PrecipConfig { use_log_transform: log, ..PrecipConfig::default() };
        let r = aggregate_precip_mm(&to_samples(&amounts), &config, hour).unwrap();
        let wet: Vec<f64> = amounts.iter().copied().filter(|mm| *mm > 0.0).collect();
        if wet.is_empty() {
            prop_assert_eq!(r.mm_agg, 0.0);
            prop_assert_eq!(r.ci, 0.0);
            prop_assert_eq!(r.iqr, 0.0);
        } else {
            let lo = wet.iter().copied().fold(f64::INFINITY, f64::min);
            let hi = wet.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            prop_assert!(r.mm_agg >= lo - 1e-9 && r.mm_agg <= hi + 1e-9);
            prop_assert!((0.0..=100.0).contains(&r.ci));
            prop_assert!(r.iqr >= 0.0);
        }
        prop_assert!(r.pop <= 100);
        prop_assert_eq!(r.wet_count, wet.len());
    }
}

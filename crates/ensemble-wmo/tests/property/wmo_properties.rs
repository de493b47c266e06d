use ensemble_core::{WmoAlgorithm, WmoConfig};
use ensemble_wmo::tables::KNOWN_CODES;
use ensemble_wmo::{aggregate_wmo, Selection};
use proptest::prelude::*;

fn arb_code() -> impl Strategy<Value = u16> {
    prop::sample::select(KNOWN_CODES.to_vec())
}

fn arb_codes() -> impl Strategy<Value = Vec<u16>> {
    prop::collection::vec(arb_code(), 1..15)
}

fn arb_algorithm() -> impl Strategy<Value = WmoAlgorithm> {
    prop::sample::select(WmoAlgorithm::ALL.to_vec())
}

// ── Member order never changes the result ───────────────────────────────

proptest! {
    #[test]
    fn order_independent(codes in arb_codes(), algorithm in arb_algorithm()) {
        let config = WmoConfig::with_algorithm(algorithm);
        let mut reversed = codes.clone();
        reversed.reverse();
        prop_assert_eq!(aggregate_wmo(&codes, &config), aggregate_wmo(&reversed, &config));
    }
}

// ── Results stay inside the known domain ────────────────────────────────

proptest! {
    #[test]
    fn result_is_a_known_code(codes in arb_codes(), algorithm in arb_algorithm()) {
        let r = aggregate_wmo(&codes, &WmoConfig::with_algorithm(algorithm));
        prop_assert!(KNOWN_CODES.contains(&r.code));
        prop_assert_ne!(r.selection, Selection::Empty);
    }

    #[test]
    fn raw_statistics_pick_an_observed_code(codes in arb_codes()) {
        for algorithm in [WmoAlgorithm::Mode, WmoAlgorithm::MaxSeverity, WmoAlgorithm::Median] {
            let r = aggregate_wmo(&codes, &WmoConfig::with_algorithm(algorithm));
            prop_assert!(codes.contains(&r.code));
        }
    }

    #[test]
    fn max_severity_bounds_median(codes in arb_codes()) {
        let max = aggregate_wmo(&codes, &WmoConfig::with_algorithm(WmoAlgorithm::MaxSeverity));
        let median = aggregate_wmo(&codes, &WmoConfig::with_algorithm(WmoAlgorithm::Median));
        prop_assert!(median.code <= max.code);
    }
}

// ── Unanimous ensembles agree with themselves ───────────────────────────
// severity_groups is excluded: a balanced group resolves to its upper median
// code, not to the observed one.

proptest! {
    #[test]
    fn unanimity_is_respected(code in arb_code(), n in 1usize..12, algorithm in arb_algorithm()) {
        prop_assume!(algorithm != WmoAlgorithm::SeverityGroups);
        let codes = vec![code; n];
        let r = aggregate_wmo(&codes, &WmoConfig::with_algorithm(algorithm));
        prop_assert_eq!(r.code, code);
    }

    #[test]
    fn risk_levels_bounded(codes in arb_codes()) {
        let r = aggregate_wmo(&codes, &WmoConfig::default());
        for level in [r.risks.thunder, r.risks.hail, r.risks.freezing_rain, r.risks.ice, r.risks.fog] {
            prop_assert!(level <= 5);
        }
        prop_assert!(r.risks.hail <= r.risks.thunder);
    }
}

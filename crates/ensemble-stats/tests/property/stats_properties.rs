use ensemble_stats::{
    gaussian_weighted, gaussian_weights, mean, median, quartiles, trimmed_mean, winsorized_mean,
};
use proptest::prelude::*;

fn arb_sample() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-100.0f64..100.0, 1..40)
}

fn arb_invalid() -> impl Strategy<Value = f64> {
    prop::sample::select(vec![f64::NAN, f64::INFINITY, f64::NEG_INFINITY])
}

fn bounds(values: &[f64]) -> (f64, f64) {
    values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(*v), hi.max(*v)))
}

// ── Median is order-independent ─────────────────────────────────────────

proptest! {
    #[test]
    fn median_ignores_order(values in arb_sample()) {
        let mut reversed = values.clone();
        reversed.reverse();
        prop_assert_eq!(median(&values).unwrap(), median(&reversed).unwrap());
    }

    #[test]
    fn median_ignores_invalid_entries(
        values in arb_sample(),
        junk in prop::collection::vec((arb_invalid(), any::<prop::sample::Index>()), 0..8),
    ) {
        let mut polluted = values.clone();
        for (bad, at) in junk {
            let pos = at.index(polluted.len() + 1);
            polluted.insert(pos, bad);
        }
        prop_assert_eq!(median(&values).unwrap(), median(&polluted).unwrap());
    }
}

// ── Trimmed and winsorized means stay inside the sample range ───────────

proptest! {
    #[test]
    fn trimmed_mean_within_range(values in arb_sample(), trim in 0.0f64..0.49) {
        let (lo, hi) = bounds(&values);
        let t = trimmed_mean(&values, trim).unwrap();
        prop_assert!(t >= lo - 1e-9 && t <= hi + 1e-9);
        let w = winsorized_mean(&values, trim).unwrap();
        prop_assert!(w >= lo - 1e-9 && w <= hi + 1e-9);
    }

    #[test]
    fn zero_trim_equals_mean(values in arb_sample()) {
        let t = trimmed_mean(&values, 0.0).unwrap();
        prop_assert!((t - mean(&values).unwrap()).abs() < 1e-9);
    }
}

// ── Gaussian weighting is a convex combination ──────────────────────────

proptest! {
    #[test]
    fn gaussian_weights_positive_mass(values in arb_sample(), sigma in 0.5f64..50.0) {
        let weights = gaussian_weights(&values, sigma).unwrap();
        prop_assert_eq!(weights.len(), values.len());
        prop_assert!(weights.iter().all(|w| (0.0..=1.0).contains(w)));
        prop_assert!(weights.iter().sum::<f64>() > 0.0);
    }

    #[test]
    fn gaussian_within_range(values in arb_sample(), sigma in 0.01f64..50.0) {
        let (lo, hi) = bounds(&values);
        let g = gaussian_weighted(&values, sigma).unwrap();
        prop_assert!(g >= lo - 1e-9 && g <= hi + 1e-9);
    }
}

// ── Quartiles are ordered ───────────────────────────────────────────────

proptest! {
    #[test]
    fn quartiles_ordered(values in arb_sample()) {
        let q = quartiles(&values).unwrap();
        prop_assert!(q.q1 <= q.q2 && q.q2 <= q.q3);
        prop_assert!(q.iqr >= 0.0);
    }
}

use ensemble_wind::{aggregate_wind_direction_gaussian, angular_difference_deg, normalize_deg};
use proptest::prelude::*;

proptest! {
    #[test]
    fn result_in_range(dirs in prop::collection::vec(-720.0f64..720.0, 1..13), sigma in 1.0f64..90.0) {
        let d = aggregate_wind_direction_gaussian(&dirs, sigma).unwrap();
        prop_assert!((0.0..360.0).contains(&d));
    }

    #[test]
    fn rotation_equivariant(
        dirs in prop::collection::vec(0.0f64..90.0, 2..13),
        shift in 0.0f64..360.0,
    ) {
        // A quarter-circle spread keeps the resultant well defined.
        let base = aggregate_wind_direction_gaussian(&dirs, 30.0).unwrap();
        let rotated: Vec<f64> = dirs.iter().map(|d| d + shift).collect();
        let moved = aggregate_wind_direction_gaussian(&rotated, 30.0).unwrap();
        prop_assert!(angular_difference_deg(moved, normalize_deg(base + shift)).abs() < 1e-6);
    }

    #[test]
    fn difference_in_half_open_range(a in -1000.0f64..1000.0, b in -1000.0f64..1000.0) {
        let d = angular_difference_deg(a, b);
        prop_assert!(d > -180.0 && d <= 180.0);
    }
}

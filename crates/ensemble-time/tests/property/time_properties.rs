use chrono::{Duration, NaiveDate, NaiveDateTime};
use ensemble_core::{Parameter, TimeSlot};
use ensemble_time::{hour_in_slot, slot_hour_indices, InterpretationMode};
use proptest::prelude::*;

fn three_days() -> Vec<NaiveDateTime> {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap();
    (0..72).map(|h| start + Duration::hours(h)).collect()
}

proptest! {
    // Each hour of the day is claimed by exactly one standard tranche.
    #[test]
    fn tranches_partition_the_day(hour in 0u8..24, preceding in any::<bool>()) {
        let mode = if preceding { InterpretationMode::PrecedingHour } else { InterpretationMode::Instant };
        let claims = TimeSlot::standard_tranches()
            .iter()
            .filter(|slot| hour_in_slot(hour, slot, mode))
            .count();
        prop_assert_eq!(claims, 1);
    }

    #[test]
    fn slot_length_matches_selection(start in 0u8..24, end in 0u8..24, precip in any::<bool>()) {
        let slot = TimeSlot::new(start, end).unwrap();
        let parameter = if precip { Parameter::Precipitation } else { Parameter::Temperature2m };
        let selected = slot_hour_indices(&three_days(), parameter, &slot);
        prop_assert_eq!(selected.len(), 3 * usize::from(slot.len_hours()));
    }
}

//! Hour-of-day membership of a slot.
//!
//! | mode | hours selected for `[s, e)` |
//! |------|-----------------------------|
//! | instant | `s ≤ h < e` |
//! | preceding hour | `s + 1 ≤ h ≤ e`, modulo 24 |
//!
//! Both wrap past midnight when `s > e`, and `s == e` is a full day.

use chrono::Timelike;
use tracing::trace;

use ensemble_core::constants::HOURS_PER_DAY;
use ensemble_core::{ConsensusResult, Parameter, TimeSlot};

use crate::interpretation::{time_interpretation_mode, InterpretationMode};

/// Whether a sample stamped at `hour` (0–23) belongs to `slot`.
pub fn hour_in_slot(hour: u8, slot: &TimeSlot, mode: InterpretationMode) -> bool {
    let hour = hour % HOURS_PER_DAY;
    match mode {
        InterpretationMode::Instant => {
            let (s, e) = (slot.start_hour(), slot.end_hour());
            if s < e {
                (s..e).contains(&hour)
            } else if s > e {
                hour >= s || hour < e
            } else {
                true
            }
        }
        InterpretationMode::PrecedingHour => {
            let s = (slot.start_hour() + 1) % HOURS_PER_DAY;
            let e = slot.end_hour() % HOURS_PER_DAY;
            if s <= e {
                (s..=e).contains(&hour)
            } else {
                hour >= s || hour <= e
            }
        }
    }
}

/// Indices of `hourly` whose hour of day falls in `slot` for `parameter`.
pub fn slot_hour_indices<T: Timelike>(
    hourly: &[T],
    parameter: Parameter,
    slot: &TimeSlot,
) -> Vec<usize> {
    let mode = time_interpretation_mode(parameter);
    let indices: Vec<usize> = hourly
        .iter()
        .enumerate()
        .filter(|(_, t)| hour_in_slot(t.hour() as u8, slot, mode))
        .map(|(i, _)| i)
        .collect();
    trace!(%parameter, ?mode, ?slot, selected = indices.len(), "slot hours");
    indices
}

/// [`slot_hour_indices`] with the slot given as raw hours; hours ≥ 24 are an error.
pub fn relevant_hour_indices<T: Timelike>(
    hourly: &[T],
    parameter: Parameter,
    start_hour: u8,
    end_hour: u8,
) -> ConsensusResult<Vec<usize>> {
    let slot = TimeSlot::new(start_hour, end_hour)?;
    Ok(slot_hour_indices(hourly, parameter, &slot))
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};

    use super::*;

    fn day() -> Vec<NaiveDateTime> {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        (0..24).map(|h| date.and_hms_opt(h, 0, 0).unwrap()).collect()
    }

    fn hours(indices: &[usize], hourly: &[NaiveDateTime]) -> Vec<u32> {
        indices.iter().map(|i| hourly[*i].hour()).collect()
    }

    #[test]
    fn instant_morning_slot() {
        let h = day();
        let idx = relevant_hour_indices(&h, Parameter::Temperature2m, 6, 12).unwrap();
        assert_eq!(hours(&idx, &h), vec![6, 7, 8, 9, 10, 11]);
    }

    #[test]
    fn preceding_hour_shifts_by_one() {
        let h = day();
        let idx = relevant_hour_indices(&h, Parameter::Precipitation, 6, 12).unwrap();
        assert_eq!(hours(&idx, &h), vec![7, 8, 9, 10, 11, 12]);
    }

    #[test]
    fn preceding_hour_midnight_wrap() {
        let h = day();
        let idx = relevant_hour_indices(&h, Parameter::Precipitation, 18, 0).unwrap();
        assert_eq!(hours(&idx, &h), vec![0, 19, 20, 21, 22, 23]);
    }

    #[test]
    fn instant_midnight_wrap() {
        let h = day();
        let idx = relevant_hour_indices(&h, Parameter::CloudCover, 18, 0).unwrap();
        assert_eq!(hours(&idx, &h), vec![18, 19, 20, 21, 22, 23]);
    }

    #[test]
    fn equal_bounds_select_the_whole_day() {
        let h = day();
        for p in [Parameter::CloudCover, Parameter::Rain] {
            assert_eq!(relevant_hour_indices(&h, p, 5, 5).unwrap().len(), 24);
        }
    }

    #[test]
    fn out_of_range_hours_rejected() {
        assert!(relevant_hour_indices(&day(), Parameter::Rain, 18, 24).is_err());
    }
}

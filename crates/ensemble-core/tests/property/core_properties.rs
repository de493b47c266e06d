use ensemble_core::{ConsensusError, Parameter, TimeSlot};
use proptest::prelude::*;

fn arb_parameter() -> impl Strategy<Value = Parameter> {
    prop::sample::select(Parameter::ALL.to_vec())
}

proptest! {
    #[test]
    fn parameter_name_round_trips(parameter in arb_parameter()) {
        let parsed: Parameter = parameter.name().parse().unwrap();
        prop_assert_eq!(parsed, parameter);
    }

    #[test]
    fn slot_length_is_within_a_day(start in 0u8..24, end in 0u8..24) {
        let slot = TimeSlot::new(start, end).unwrap();
        let len = slot.len_hours();
        prop_assert!((1..=24).contains(&len));
        prop_assert_eq!(len == 24, start == end);
        prop_assert_eq!(slot.wraps(), start > end);
    }

    #[test]
    fn out_of_range_hours_are_rejected(start in 0u8..=255, end in 24u8..=255) {
        prop_assert_eq!(
            TimeSlot::new(start, end),
            Err(ConsensusError::InvalidTimeSlot { start, end })
        );
        prop_assert!(TimeSlot::new(end, start).is_err());
    }

    #[test]
    fn slot_serde_round_trips(start in 0u8..24, end in 0u8..24) {
        let slot = TimeSlot::new(start, end).unwrap();
        let json = serde_json::to_string(&slot).unwrap();
        prop_assert_eq!(serde_json::from_str::<TimeSlot>(&json).unwrap(), slot);
    }
}

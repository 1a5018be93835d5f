//! Property-based tests for the canonical form and the elapsed-time
//! conversions.

use chrono::TimeDelta;
use iso8601_duration::{from_str, Duration, ErrorKind, Unit};
use proptest::prelude::*;

fn any_duration() -> impl Strategy<Value = Duration> {
    (
        any::<bool>(),
        prop::array::uniform7(prop_oneof![Just(0u64), 1..1000u64, any::<u64>()]),
    )
        .prop_map(|(negative, values)| {
            Unit::ALL
                .into_iter()
                .zip(values)
                .fold(Duration::new().with_negative(negative), |d, (unit, v)| {
                    d.with(unit, v)
                })
        })
}

proptest! {
    #[test]
    fn prop_parse_format_roundtrip(duration in any_duration()) {
        let text = duration.to_string();
        prop_assert_eq!(from_str(&text).unwrap(), duration);
    }

    #[test]
    fn prop_format_is_idempotent(duration in any_duration()) {
        let once = duration.to_string();
        let twice = from_str(&once).unwrap().to_string();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_format_has_no_empty_designators(duration in any_duration()) {
        let text = duration.to_string();
        prop_assert!(!text.ends_with('T'));
        prop_assert!(!text.ends_with('P'));
        prop_assert_eq!(text.starts_with('-'), duration.is_negative());
    }

    #[test]
    fn prop_time_delta_roundtrip(seconds in -1_000_000_000_000i64..1_000_000_000_000i64) {
        let delta = TimeDelta::seconds(seconds);
        let duration = Duration::from_time_delta(delta);
        prop_assert_eq!(duration.to_time_delta(), Some(delta));
        prop_assert_eq!(from_str(&duration.to_string()).unwrap(), duration);
    }

    #[test]
    fn prop_repeated_designator_rejected(
        a in 0..100u64,
        b in 0..100u64,
        unit in prop::sample::select(Unit::ALL.to_vec()),
    ) {
        let prefix = if unit.is_time() { "PT" } else { "P" };
        let text = format!("{}{}{}{}{}", prefix, a, unit.designator(), b, unit.designator());
        let err = from_str(&text).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::DuplicateDesignator);
        prop_assert_eq!(err.column(), text.len());
    }

    #[test]
    fn prop_parse_never_panics(text in "[-+PTYMWDHS0-9]{0,24}") {
        let _ = from_str(&text);
    }
}

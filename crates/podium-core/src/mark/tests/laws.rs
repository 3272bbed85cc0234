//! Property tests for parser classification and comparator laws.

use proptest::prelude::*;

use crate::mark::*;

fn time_mark() -> impl Strategy<Value = String> {
    prop_oneof![
        (1u32..60, 0u32..100).prop_map(|(s, h)| format!("{s}.{h:02}")),
        (1u32..20, 0u32..60, 0u32..10).prop_map(|(m, s, t)| format!("{m}:{s:02}.{t}")),
    ]
}

fn distance_mark() -> impl Strategy<Value = String> {
    prop_oneof![
        (1u32..70, 0u32..12, 0u32..4).prop_map(|(f, i, q)| format!("{f}' {i}.{}\"", q * 25)),
        (1u32..70, 0u32..12).prop_map(|(f, i)| format!("{f}-{i:02}")),
    ]
}

proptest! {
    #[test]
    fn valid_times_are_non_negative_times(mark in time_mark()) {
        let parsed = parse_mark(&mark);
        prop_assert!(parsed.valid);
        prop_assert!(parsed.is_time);
        prop_assert!(parsed.value >= 0.0);
    }

    #[test]
    fn valid_distances_are_non_negative_distances(mark in distance_mark()) {
        let parsed = parse_mark(&mark);
        prop_assert!(parsed.valid);
        prop_assert!(!parsed.is_time);
        prop_assert!(parsed.value >= 0.0);
    }

    #[test]
    fn comparator_is_antisymmetric_for_times(a in time_mark(), b in time_mark()) {
        let ab = is_better(&a, &b);
        let ba = is_better(&b, &a);
        if parse_mark(&a).value == parse_mark(&b).value {
            prop_assert!(!ab && !ba);
        } else {
            prop_assert!(ab != ba);
        }
    }

    #[test]
    fn comparator_is_antisymmetric_for_distances(a in distance_mark(), b in distance_mark()) {
        let ab = is_better(&a, &b);
        let ba = is_better(&b, &a);
        if parse_mark(&a).value == parse_mark(&b).value {
            prop_assert!(!ab && !ba);
        } else {
            prop_assert!(ab != ba);
        }
    }

    #[test]
    fn valid_always_beats_invalid(a in time_mark()) {
        prop_assert!(is_better(&a, "DNF"));
        prop_assert!(!is_better("DNF", &a));
    }
}

//! Better-than comparator for marks.

use std::cmp::Ordering;

use super::parse::{parse_mark, ParsedMark};

/// Returns true if mark `a` is a strictly better performance than mark `b`.
///
/// - Both invalid: neither is better.
/// - Exactly one invalid: the valid one is better.
/// - Both valid: lower wins for times, higher wins for distances.
///
/// # Examples
///
/// ```
/// use podium_core::is_better;
///
/// assert!(is_better("7.10", "7.24"));
/// assert!(is_better("20' 1\"", "19' 9.5\""));
/// assert!(is_better("7.24", "DNF"));
/// assert!(!is_better("DNF", "7.24"));
/// assert!(!is_better("7:00.0", "7:00"));
/// ```
pub fn is_better(a: &str, b: &str) -> bool {
    is_better_parsed(&parse_mark(a), &parse_mark(b))
}

/// [`is_better`] over already-parsed marks.
///
/// The kind of `a` decides the direction.
pub fn is_better_parsed(a: &ParsedMark, b: &ParsedMark) -> bool {
    match (a.valid, b.valid) {
        (false, false) => false,
        (true, false) => true,
        (false, true) => false,
        (true, true) => {
            if a.is_time {
                a.value < b.value
            } else {
                a.value > b.value
            }
        }
    }
}

/// Orders marks best first: `Less` when `a` is better than `b`.
///
/// Marks that are numerically equal (or both invalid) compare `Equal`, so
/// this is suitable for stable sorts where ties keep input order.
pub fn compare_marks(a: &str, b: &str) -> Ordering {
    compare_parsed(&parse_mark(a), &parse_mark(b))
}

/// [`compare_marks`] over already-parsed marks.
pub fn compare_parsed(a: &ParsedMark, b: &ParsedMark) -> Ordering {
    if is_better_parsed(a, b) {
        Ordering::Less
    } else if is_better_parsed(b, a) {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// Returns true when neither mark is better than the other.
pub fn marks_equal(a: &str, b: &str) -> bool {
    compare_marks(a, b) == Ordering::Equal
}

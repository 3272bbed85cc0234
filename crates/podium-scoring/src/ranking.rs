//! Competition ranking over marks sorted best first.

use podium_core::{compare_parsed, ParsedMark};

/// Sorts best first; equal marks keep their relative order.
pub(crate) fn sort_best_first<T>(items: &mut [T], mark: impl Fn(&T) -> &ParsedMark) {
    items.sort_by(|a, b| compare_parsed(mark(a), mark(b)));
}

/// Standard competition ranks ("1224") for marks sorted best first.
///
/// The rank advances to `valid_seen + 1` whenever a mark differs from the
/// previous valid mark. Invalid marks are unranked.
pub(crate) fn competition_ranks<'a>(
    marks: impl IntoIterator<Item = &'a ParsedMark>,
) -> Vec<Option<usize>> {
    let mut ranks = Vec::new();
    let mut valid_seen = 0;
    let mut rank = 0;
    let mut last: Option<&ParsedMark> = None;

    for mark in marks {
        if !mark.valid {
            ranks.push(None);
            continue;
        }
        if last.map_or(true, |prev| !compare_parsed(mark, prev).is_eq()) {
            rank = valid_seen + 1;
        }
        ranks.push(Some(rank));
        last = Some(mark);
        valid_seen += 1;
    }
    ranks
}

#[cfg(test)]
mod tests {
    use super::*;
    use podium_core::parse_mark;

    fn ranks_of(marks: &[&str]) -> Vec<Option<usize>> {
        let mut parsed: Vec<ParsedMark> = marks.iter().map(|m| parse_mark(m)).collect();
        sort_best_first(&mut parsed, |m| m);
        competition_ranks(&parsed)
    }

    #[test]
    fn test_ties_share_rank_and_skip() {
        assert_eq!(
            ranks_of(&["7.40", "7.10", "7.20", "7.20"]),
            vec![Some(1), Some(2), Some(2), Some(4)]
        );
    }

    #[test]
    fn test_numeric_equality() {
        assert_eq!(ranks_of(&["7:00", "7:00.0", "7:01"]), vec![Some(1), Some(1), Some(3)]);
    }

    #[test]
    fn test_invalid_marks_are_unranked_and_last() {
        assert_eq!(
            ranks_of(&["DNF", "5' 1\"", "5-2", "NH"]),
            vec![Some(1), Some(2), None, None]
        );
    }

    #[test]
    fn test_empty() {
        assert!(ranks_of(&[]).is_empty());
    }
}

//! Chronological record detection.
//!
//! Two passes over the records in date order:
//!
//! 1. The first record seen per `(athlete, event, season type)` is the
//!    first-time result; running bests are tracked per PR key and per
//!    `(athlete, year, season type, event)` season key.
//! 2. The earliest record whose mark equals the final best of its key
//!    claims that key's badge.

use std::collections::{BTreeSet, HashMap, HashSet};

use podium_core::{
    compare_parsed, is_better_parsed, ParsedMark, PerformanceRecord, RecordId, SeasonKey,
};
use serde::Serialize;
use tracing::debug;

/// Badge assignment for a record collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RecordBadges {
    /// Earliest record of each `(athlete, event, season type)`.
    pub first_time_ids: BTreeSet<RecordId>,
    /// Earliest record achieving the best mark of each `(athlete, event, season type)`.
    pub all_time_best_ids: BTreeSet<RecordId>,
    /// Earliest record achieving the best mark of each `(athlete, year, season type, event)`.
    pub season_best_ids: BTreeSet<RecordId>,
}

impl RecordBadges {
    pub fn is_first_time(&self, id: &RecordId) -> bool {
        self.first_time_ids.contains(id)
    }

    pub fn is_pr(&self, id: &RecordId) -> bool {
        self.all_time_best_ids.contains(id)
    }

    pub fn is_sb(&self, id: &RecordId) -> bool {
        self.season_best_ids.contains(id)
    }
}

struct Entry<'a> {
    record: &'a PerformanceRecord,
    season: SeasonKey,
    mark: ParsedMark,
}

impl<'a> Entry<'a> {
    fn pr_key(&self) -> (&str, &str, &str) {
        (
            self.record.athlete_id.as_str(),
            &self.record.event,
            &self.season.season_type,
        )
    }

    fn sb_key(&self) -> (&str, &str, &str, &str) {
        (
            self.record.athlete_id.as_str(),
            &self.season.year,
            &self.season.season_type,
            &self.record.event,
        )
    }
}

fn track_best<K: Eq + std::hash::Hash>(bests: &mut HashMap<K, ParsedMark>, key: K, mark: ParsedMark) {
    bests
        .entry(key)
        .and_modify(|best| {
            if is_better_parsed(&mark, best) {
                *best = mark;
            }
        })
        .or_insert(mark);
}

/// Tags first-time, all-time-best and season-best records.
///
/// Records are ordered by date with a stable sort, so records on the same
/// date keep their input order and the first of them wins a tie. Only
/// valid marks can claim a best badge.
///
/// # Examples
///
/// ```
/// use podium_history::detect_records;
/// use podium_test::four_hundred_history;
///
/// let records = four_hundred_history();
/// let badges = detect_records(&records);
///
/// assert!(badges.is_first_time(&records[0].id));
/// assert!(badges.is_pr(&records[1].id));
/// assert!(!badges.is_pr(&records[0].id));
/// ```
pub fn detect_records(records: &[PerformanceRecord]) -> RecordBadges {
    let mut entries: Vec<Entry<'_>> = records
        .iter()
        .map(|record| Entry {
            record,
            season: record.season_key(),
            mark: record.parsed_mark(),
        })
        .collect();
    // Calendar day only, so same-day records keep input order.
    entries.sort_by_key(|e| e.record.day_key());

    let mut badges = RecordBadges::default();
    let mut seen: HashSet<(&str, &str, &str)> = HashSet::new();
    let mut pr_bests: HashMap<(&str, &str, &str), ParsedMark> = HashMap::new();
    let mut sb_bests: HashMap<(&str, &str, &str, &str), ParsedMark> = HashMap::new();

    for entry in &entries {
        if seen.insert(entry.pr_key()) {
            badges.first_time_ids.insert(entry.record.id.clone());
        }
        if entry.mark.valid {
            track_best(&mut pr_bests, entry.pr_key(), entry.mark);
            track_best(&mut sb_bests, entry.sb_key(), entry.mark);
        }
    }

    let mut pr_claimed = HashSet::new();
    let mut sb_claimed = HashSet::new();
    for entry in entries.iter().filter(|e| e.mark.valid) {
        let pr_key = entry.pr_key();
        if !pr_claimed.contains(&pr_key)
            && pr_bests
                .get(&pr_key)
                .is_some_and(|best| compare_parsed(&entry.mark, best).is_eq())
        {
            pr_claimed.insert(pr_key);
            badges.all_time_best_ids.insert(entry.record.id.clone());
        }

        let sb_key = entry.sb_key();
        if !sb_claimed.contains(&sb_key)
            && sb_bests
                .get(&sb_key)
                .is_some_and(|best| compare_parsed(&entry.mark, best).is_eq())
        {
            sb_claimed.insert(sb_key);
            badges.season_best_ids.insert(entry.record.id.clone());
        }
    }

    debug!(
        event = "records_detected",
        records = records.len() as u64,
        first_time = badges.first_time_ids.len() as u64,
        prs = badges.all_time_best_ids.len() as u64,
        season_bests = badges.season_best_ids.len() as u64,
    );

    badges
}

#[cfg(test)]
#[path = "records_tests.rs"]
mod tests;

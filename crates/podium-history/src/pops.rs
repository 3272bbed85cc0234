//! PR pops: results at one meet that beat every earlier mark.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use podium_core::{
    format_improvement, is_better_parsed, parse_day, AthleteId, ParsedMark, PerformanceRecord,
    RecordId,
};
use serde::Serialize;
use tracing::{debug, trace};

/// One athlete's improvement in one event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PopEntry {
    pub event: String,
    pub new_mark: String,
    pub old_mark: String,
    /// `-0.14s` for times, `+3.50"` for distances; empty when the old mark
    /// is not a valid mark.
    pub improvement_label: String,
    /// Record that set the new mark.
    pub record_id: RecordId,
}

/// Pops at one meet, grouped by athlete name.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PopReport {
    pub by_athlete: BTreeMap<String, Vec<PopEntry>>,
    pub total_count: usize,
    pub meet_name: String,
}

impl PopReport {
    fn empty(meet_name: &str) -> Self {
        Self {
            meet_name: meet_name.to_string(),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total_count == 0
    }
}

/// Finds the PR pops of `team` at the meet `meet_name` held on `meet_date`.
///
/// `meet_date` may be a date or a date-time; only its calendar day is used.
/// For each athlete and event the best mark of the day is compared against
/// that athlete's best mark in the event on any earlier day (any team). A
/// first-time result has no earlier mark and is never a pop. An unreadable
/// `meet_date` yields an empty report.
///
/// # Examples
///
/// ```
/// use podium_history::detect_pops;
/// use podium_test::four_hundred_history;
///
/// let report = detect_pops(&four_hundred_history(), "X", "Valley Champs", "2024-02-10");
/// let pops = &report.by_athlete["Sam Reed"];
///
/// assert_eq!(report.total_count, 1);
/// assert_eq!(pops[0].new_mark, "7.10");
/// assert_eq!(pops[0].old_mark, "7.24");
/// assert_eq!(pops[0].improvement_label, "-0.14s");
/// ```
pub fn detect_pops(
    records: &[PerformanceRecord],
    team: &str,
    meet_name: &str,
    meet_date: &str,
) -> PopReport {
    match parse_day(meet_date) {
        Some(day) => detect_pops_on(records, team, meet_name, day),
        None => PopReport::empty(meet_name),
    }
}

pub(crate) fn detect_pops_on(
    records: &[PerformanceRecord],
    team: &str,
    meet_name: &str,
    meet_day: NaiveDate,
) -> PopReport {
    let mut report = PopReport::empty(meet_name);

    for (record, mark) in best_of_day(records, team, meet_name, meet_day) {
        let Some((old_record, old_mark)) = best_before(records, record, meet_day) else {
            trace!(
                event = "first_timer",
                athlete = %record.athlete_name,
                result = %record.event,
            );
            continue;
        };
        if !is_better_parsed(&mark, &old_mark) {
            continue;
        }

        report
            .by_athlete
            .entry(record.athlete_name.clone())
            .or_default()
            .push(PopEntry {
                event: record.event.clone(),
                new_mark: record.mark.clone(),
                old_mark: old_record.mark.clone(),
                improvement_label: format_improvement(&mark, &old_mark).unwrap_or_default(),
                record_id: record.id.clone(),
            });
        report.total_count += 1;
    }

    debug!(
        event = "pops_detected",
        team = team,
        meet = meet_name,
        day = %meet_day,
        pops = report.total_count as u64,
        athletes = report.by_athlete.len() as u64,
    );

    report
}

/// Best record of the meet day per `(athlete, event)`, in first-seen order.
///
/// Ties keep the earlier record in input order.
fn best_of_day<'a>(
    records: &'a [PerformanceRecord],
    team: &str,
    meet_name: &str,
    meet_day: NaiveDate,
) -> Vec<(&'a PerformanceRecord, ParsedMark)> {
    let mut best: Vec<(&PerformanceRecord, ParsedMark)> = Vec::new();
    let mut index: HashMap<(&AthleteId, &str), usize> = HashMap::new();

    let at_meet = records.iter().filter(|r| {
        r.team == team && r.meet_name == meet_name && r.day() == Some(meet_day)
    });
    for record in at_meet {
        let mark = record.parsed_mark();
        match index.get(&(&record.athlete_id, record.event.as_str())) {
            Some(&i) => {
                if is_better_parsed(&mark, &best[i].1) {
                    best[i] = (record, mark);
                }
            }
            None => {
                index.insert((&record.athlete_id, record.event.as_str()), best.len());
                best.push((record, mark));
            }
        }
    }
    best
}

/// Best earlier mark of the same athlete in the same event, strictly before
/// the meet day. Returns `None` when there is no earlier record at all.
fn best_before<'a>(
    records: &'a [PerformanceRecord],
    target: &PerformanceRecord,
    meet_day: NaiveDate,
) -> Option<(&'a PerformanceRecord, ParsedMark)> {
    records
        .iter()
        .filter(|r| {
            r.athlete_id == target.athlete_id
                && r.event == target.event
                && r.day().is_some_and(|day| day < meet_day)
        })
        .fold(None, |best, record| {
            let mark = record.parsed_mark();
            match best {
                Some((_, ref best_mark)) if !is_better_parsed(&mark, best_mark) => best,
                _ => Some((record, mark)),
            }
        })
}

#[cfg(test)]
#[path = "pops_tests.rs"]
mod tests;

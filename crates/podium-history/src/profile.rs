//! Per-event statistics for one athlete.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use podium_core::{
    format_distance, format_time, is_better_parsed, ParsedMark, PerformanceRecord, RecordId,
};
use serde::Serialize;

/// One valid result on the athlete's timeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataPoint {
    pub record_id: RecordId,
    pub at: NaiveDateTime,
    pub mark: String,
    pub value: f64,
    pub year: String,
}

/// Statistics of one event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventProfile {
    pub is_time: bool,
    /// Valid results in chronological order.
    pub data: Vec<DataPoint>,
    /// The same results split by season year.
    pub by_year: BTreeMap<String, Vec<DataPoint>>,
    /// Mark of the earliest result achieving the best value.
    pub best: String,
    /// Upper median, formatted as a time or distance.
    pub median: String,
    /// Population standard deviation, rounded to two decimals.
    pub std_dev: f64,
    pub count: usize,
}

/// Builds the per-event profile of one athlete's records.
///
/// Only valid marks are counted; events without any valid mark are left
/// out. The caller passes the records of a single athlete.
pub fn athlete_profile(records: &[PerformanceRecord]) -> BTreeMap<String, EventProfile> {
    let mut by_event: BTreeMap<&str, Vec<(&PerformanceRecord, ParsedMark)>> = BTreeMap::new();
    for record in records {
        let mark = record.parsed_mark();
        if mark.valid {
            by_event.entry(&record.event).or_default().push((record, mark));
        }
    }

    by_event
        .into_iter()
        .map(|(event, mut results)| {
            results.sort_by_key(|(record, _)| record.day_key());
            (event.to_string(), summarize(&results))
        })
        .collect()
}

fn summarize(results: &[(&PerformanceRecord, ParsedMark)]) -> EventProfile {
    let is_time = results[0].1.is_time;
    let data: Vec<DataPoint> = results
        .iter()
        .map(|(record, mark)| DataPoint {
            record_id: record.id.clone(),
            at: record.chronological_key(),
            mark: record.mark.clone(),
            value: mark.value,
            year: record.season_key().year,
        })
        .collect();

    let best = results
        .iter()
        .fold(None::<&(&PerformanceRecord, ParsedMark)>, |best, result| match best {
            Some(b) if !is_better_parsed(&result.1, &b.1) => Some(b),
            _ => Some(result),
        })
        .map(|(record, _)| record.mark.clone())
        .unwrap_or_default();

    let mut sorted: Vec<f64> = data.iter().map(|d| d.value).collect();
    sorted.sort_by(f64::total_cmp);
    let median = sorted[sorted.len() / 2];

    let count = data.len();
    let mean = sorted.iter().sum::<f64>() / count as f64;
    let variance = sorted.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / count as f64;

    let mut by_year: BTreeMap<String, Vec<DataPoint>> = BTreeMap::new();
    for point in &data {
        by_year.entry(point.year.clone()).or_default().push(point.clone());
    }

    EventProfile {
        is_time,
        by_year,
        best,
        median: if is_time {
            format_time(median)
        } else {
            format_distance(median)
        },
        std_dev: (variance.sqrt() * 100.0).round() / 100.0,
        count,
        data,
    }
}

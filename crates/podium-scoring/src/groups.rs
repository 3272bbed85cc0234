//! Event groups: one best result per competitor and event.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use podium_core::{is_better_parsed, AthleteId, ParsedMark, PerformanceRecord, RecordId};
use serde::{Serialize, Serializer};
use tracing::info;

use crate::catalog::EventCatalog;
use crate::conference::ConferenceRoster;

/// Identifies one scored event within one season instance.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EventGroupKey {
    pub event: String,
    pub season_type: String,
    pub year: String,
}

impl EventGroupKey {
    pub fn new(
        event: impl Into<String>,
        season_type: impl Into<String>,
        year: impl Into<String>,
    ) -> Self {
        Self {
            event: event.into(),
            season_type: season_type.into(),
            year: year.into(),
        }
    }
}

impl fmt::Display for EventGroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} {})", self.event, self.season_type, self.year)
    }
}

// Serialized as its display form so it can key JSON objects.
impl Serialize for EventGroupKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// The best result of one athlete (or one relay team) in one event group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Competitor {
    pub record_id: RecordId,
    pub athlete_id: AthleteId,
    pub athlete_name: String,
    /// Conference school the entry scores for.
    pub team: String,
    pub event: String,
    pub mark: String,
    pub is_relay: bool,
    #[serde(skip)]
    pub parsed: ParsedMark,
}

impl Competitor {
    fn from_record(record: &PerformanceRecord, team: &str, parsed: ParsedMark) -> Self {
        Self {
            record_id: record.id.clone(),
            athlete_id: record.athlete_id.clone(),
            athlete_name: record.athlete_name.clone(),
            team: team.to_string(),
            event: record.event.clone(),
            mark: record.mark.clone(),
            is_relay: record.is_relay(),
            parsed,
        }
    }
}

/// Competitors per event group, in sorted key order.
pub type EventGroups = BTreeMap<EventGroupKey, Vec<Competitor>>;

/// Reduces `records` to the best result per competitor per event group.
///
/// Keeps records of the given season instance whose team resolves through
/// `roster` and whose event `catalog` allows. Relays compete per school,
/// individuals per `(athlete, school)`. Within a group competitors keep the
/// order they were first seen; a later record replaces an earlier one only
/// with a strictly better mark.
pub fn build_event_groups(
    records: &[PerformanceRecord],
    roster: &ConferenceRoster,
    catalog: &EventCatalog,
    year: &str,
    season_type: &str,
) -> EventGroups {
    let mut groups: EventGroups = BTreeMap::new();
    let mut slots: HashMap<(EventGroupKey, String), usize> = HashMap::new();
    let mut considered = 0u64;

    for record in records {
        let season = record.season_key();
        if season.year != year || season.season_type != season_type {
            continue;
        }
        let Some(team) = roster.resolve(&record.team) else {
            continue;
        };
        if !catalog.is_allowed(&record.event) {
            continue;
        }
        considered += 1;

        let key = EventGroupKey::new(record.event.as_str(), season.season_type, season.year);
        let competitor_key = if record.is_relay() {
            team.to_string()
        } else {
            format!("{}|{}", record.athlete_id, team)
        };
        let parsed = record.parsed_mark();
        let entries = groups.entry(key.clone()).or_default();

        match slots.get(&(key.clone(), competitor_key.clone())) {
            Some(&i) => {
                if is_better_parsed(&parsed, &entries[i].parsed) {
                    entries[i] = Competitor::from_record(record, team, parsed);
                }
            }
            None => {
                slots.insert((key, competitor_key), entries.len());
                entries.push(Competitor::from_record(record, team, parsed));
            }
        }
    }

    info!(
        event = "groups_built",
        conference = roster.name(),
        year = year,
        season = season_type,
        records = considered,
        groups = groups.len() as u64,
        competitors = groups.values().map(Vec::len).sum::<usize>() as u64,
    );

    groups
}

#[cfg(test)]
#[path = "groups_tests.rs"]
mod tests;

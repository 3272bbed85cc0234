//! Greedy event-cap optimization.
//!
//! An athlete may score in at most `event_cap` events, relays included.
//! Every entry is a scoring action worth the points its raw place would
//! earn. Actions are accepted greedily, most points first, while the
//! athletes involved are below the cap. Events are then re-ranked among the
//! accepted entries only, so a dropped winner lets everyone behind move up.

use std::collections::{BTreeMap, HashMap};

use podium_core::relay_members;
use serde::Serialize;
use tracing::{info, trace};

use crate::groups::{Competitor, EventGroupKey, EventGroups};
use crate::leaderboard::{tally, Leaderboard};
use crate::points::{Points, ScoringTable};
use crate::ranking::{competition_ranks, sort_best_first};

const UNNAMED_ATHLETE: &str = "Unknown";

/// One competitor's result in a scored event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredEntry {
    #[serde(flatten)]
    pub competitor: Competitor,
    /// Place among every competitor in the event.
    pub raw_rank: Option<usize>,
    /// Points the raw place is worth.
    pub potential_points: Points,
    /// Whether the event cap let this entry score.
    pub accepted: bool,
    /// Place among accepted entries only.
    pub rank: Option<usize>,
    pub points: Points,
}

impl ScoredEntry {
    fn new(competitor: Competitor) -> Self {
        Self {
            competitor,
            raw_rank: None,
            potential_points: Points::ZERO,
            accepted: false,
            rank: None,
            points: Points::ZERO,
        }
    }
}

/// Scored events and the team standings derived from them.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MeetScore {
    /// Every competitor per event, best raw mark first.
    pub event_groups: BTreeMap<EventGroupKey, Vec<ScoredEntry>>,
    pub leaderboard: Leaderboard,
}

impl MeetScore {
    /// Sum of all points awarded.
    pub fn total_points(&self) -> Points {
        self.event_groups
            .values()
            .flatten()
            .map(|entry| entry.points)
            .sum()
    }
}

struct Action {
    group: usize,
    index: usize,
    points: Points,
    rank: Option<usize>,
}

/// Scores a championship from its event groups.
///
/// 1. Each group is ranked best first; invalid marks are unranked.
/// 2. Individual actions, then relay actions, are stably sorted by
///    potential points (descending) and raw rank (ascending, unranked last).
/// 3. An individual action is accepted while its athlete is below the cap.
///    A relay is accepted only if every named member is below the cap, and
///    then counts against all of them. A relay without recognizable member
///    names is accepted unconditionally.
/// 4. Accepted entries are re-ranked; athletes tied at a scoring place
///    share the points of the places they occupy.
/// 5. Points are tallied per team and division.
///
/// Accepted actions still consume the cap when they are worth no points.
pub fn optimize(groups: &EventGroups, table: &ScoringTable, event_cap: usize) -> MeetScore {
    let mut scored: Vec<(EventGroupKey, Vec<ScoredEntry>)> = groups
        .iter()
        .map(|(key, competitors)| {
            let mut entries: Vec<ScoredEntry> =
                competitors.iter().cloned().map(ScoredEntry::new).collect();
            sort_best_first(&mut entries, |e| &e.competitor.parsed);
            let ranks = competition_ranks(entries.iter().map(|e| &e.competitor.parsed));
            for (entry, rank) in entries.iter_mut().zip(ranks) {
                entry.raw_rank = rank;
                entry.potential_points = rank.map_or(Points::ZERO, |r| table.for_rank(r));
            }
            (key.clone(), entries)
        })
        .collect();

    let mut actions = collect_actions(&scored, false);
    actions.extend(collect_actions(&scored, true));
    actions.sort_by(|a, b| {
        b.points
            .value()
            .total_cmp(&a.points.value())
            .then_with(|| a.rank.unwrap_or(usize::MAX).cmp(&b.rank.unwrap_or(usize::MAX)))
    });

    let mut usage: HashMap<String, usize> = HashMap::new();
    let mut accepted_count = 0u64;
    for action in &actions {
        let (key, entries) = &mut scored[action.group];
        let entry = &mut entries[action.index];
        entry.accepted = if entry.competitor.is_relay {
            accept_relay(&mut usage, &entry.competitor.athlete_name, event_cap)
        } else {
            accept_individual(&mut usage, &entry.competitor.athlete_name, event_cap)
        };
        if entry.accepted {
            accepted_count += 1;
        }
        trace!(
            event = "action",
            group = %key,
            athlete = %entry.competitor.athlete_name,
            points = %action.points,
            accepted = entry.accepted,
        );
    }

    for (_, entries) in &mut scored {
        award_accepted(entries, table);
    }

    let leaderboard = tally(scored.iter().map(|(key, entries)| (key, entries.as_slice())));

    info!(
        event = "meet_scored",
        groups = scored.len() as u64,
        actions = actions.len() as u64,
        accepted_actions = accepted_count,
        event_cap = event_cap as u64,
        boys_teams = leaderboard.boys.len() as u64,
        girls_teams = leaderboard.girls.len() as u64,
    );

    MeetScore {
        event_groups: scored.into_iter().collect(),
        leaderboard,
    }
}

fn collect_actions(scored: &[(EventGroupKey, Vec<ScoredEntry>)], relays: bool) -> Vec<Action> {
    let mut actions = Vec::new();
    for (group, (_, entries)) in scored.iter().enumerate() {
        for (index, entry) in entries.iter().enumerate() {
            if entry.competitor.is_relay == relays {
                actions.push(Action {
                    group,
                    index,
                    points: entry.potential_points,
                    rank: entry.raw_rank,
                });
            }
        }
    }
    actions
}

fn accept_individual(usage: &mut HashMap<String, usize>, athlete: &str, event_cap: usize) -> bool {
    let athlete = match athlete.trim() {
        "" => UNNAMED_ATHLETE,
        name => name,
    };
    let used = usage.entry(athlete.to_string()).or_default();
    if *used < event_cap {
        *used += 1;
        true
    } else {
        false
    }
}

fn accept_relay(usage: &mut HashMap<String, usize>, names: &str, event_cap: usize) -> bool {
    let members = relay_members(names);
    let fits = members
        .iter()
        .all(|m| usage.get(m.as_str()).copied().unwrap_or(0) < event_cap);
    if fits {
        for member in members {
            *usage.entry(member).or_default() += 1;
        }
    }
    fits
}

/// Ranks accepted entries among themselves and splits tied points.
fn award_accepted(entries: &mut [ScoredEntry], table: &ScoringTable) {
    let accepted: Vec<usize> = (0..entries.len()).filter(|&i| entries[i].accepted).collect();
    let ranks = competition_ranks(accepted.iter().map(|&i| &entries[i].competitor.parsed));

    let mut tied: HashMap<usize, usize> = HashMap::new();
    for rank in ranks.iter().flatten() {
        *tied.entry(*rank).or_default() += 1;
    }

    for (&i, rank) in accepted.iter().zip(ranks) {
        let entry = &mut entries[i];
        entry.rank = rank;
        entry.points = rank.map_or(Points::ZERO, |r| table.tie_share(r, tied[&r]));
    }
}

#[cfg(test)]
#[path = "optimizer_tests.rs"]
mod tests;

//! Team standings per division.

use std::collections::BTreeMap;

use podium_core::Gender;
use serde::Serialize;

use crate::groups::EventGroupKey;
use crate::optimizer::ScoredEntry;
use crate::points::Points;

/// One scoring result in a team's breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreakdownLine {
    pub event: String,
    pub athlete: String,
    pub mark: String,
    pub points: Points,
    /// Display label of the event group.
    pub group: String,
}

/// A team's total and where it came from, highest points first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamScore {
    pub team: String,
    pub total: Points,
    pub breakdown: Vec<BreakdownLine>,
}

/// Team standings, highest total first.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Leaderboard {
    pub boys: Vec<TeamScore>,
    pub girls: Vec<TeamScore>,
}

impl Leaderboard {
    pub fn division(&self, gender: Gender) -> &[TeamScore] {
        match gender {
            Gender::Boys => &self.boys,
            Gender::Girls => &self.girls,
        }
    }

    pub fn team(&self, gender: Gender, team: &str) -> Option<&TeamScore> {
        self.division(gender).iter().find(|t| t.team == team)
    }

    pub fn is_empty(&self) -> bool {
        self.boys.is_empty() && self.girls.is_empty()
    }
}

/// Adds up the points of every entry that scored.
///
/// The division comes from the event name. Teams with equal totals are
/// listed alphabetically.
pub(crate) fn tally<'a>(
    groups: impl IntoIterator<Item = (&'a EventGroupKey, &'a [ScoredEntry])>,
) -> Leaderboard {
    let mut boys: BTreeMap<&str, TeamScore> = BTreeMap::new();
    let mut girls: BTreeMap<&str, TeamScore> = BTreeMap::new();

    for (key, entries) in groups {
        let division = match Gender::from_event(&key.event) {
            Gender::Boys => &mut boys,
            Gender::Girls => &mut girls,
        };
        for entry in entries.iter().filter(|e| e.points.is_positive()) {
            let competitor = &entry.competitor;
            let team = division
                .entry(competitor.team.as_str())
                .or_insert_with(|| TeamScore {
                    team: competitor.team.clone(),
                    total: Points::ZERO,
                    breakdown: Vec::new(),
                });
            team.total += entry.points;
            team.breakdown.push(BreakdownLine {
                event: competitor.event.clone(),
                athlete: if competitor.athlete_name.is_empty() {
                    "Unknown".to_string()
                } else {
                    competitor.athlete_name.clone()
                },
                mark: competitor.mark.clone(),
                points: entry.points,
                group: key.to_string(),
            });
        }
    }

    Leaderboard {
        boys: standings(boys),
        girls: standings(girls),
    }
}

fn standings(teams: BTreeMap<&str, TeamScore>) -> Vec<TeamScore> {
    let mut teams: Vec<TeamScore> = teams.into_values().collect();
    for team in &mut teams {
        team.breakdown
            .sort_by(|a, b| b.points.value().total_cmp(&a.points.value()));
    }
    teams.sort_by(|a, b| b.total.value().total_cmp(&a.total.value()));
    teams
}

//! Meet simulation entry point.

use podium_config::MeetConfig;
use podium_core::{PerformanceRecord, PodiumError, Result};
use podium_scoring::{
    build_event_groups, optimize, ConferenceRoster, EventCatalog, MeetScore, ScoringTable,
};
use serde::Serialize;
use tracing::info;

/// Outcome of scoring one season instance as a conference championship.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Simulation {
    pub year: String,
    pub season_type: String,
    /// Name of the roster used; `"Open"` when no configured conference applies.
    pub conference: String,
    pub score: MeetScore,
    /// Catalog events that no group covers, in catalog order.
    pub missing_events: Vec<String>,
}

/// Scores the `year`/`season_type` season of `records` under `config`.
///
/// The roster is the conference scoped to exactly this season, else the
/// first unscoped one, else an open roster admitting every team.
///
/// # Errors
///
/// Returns [`PodiumError::InvalidState`] when the year or the season type is
/// missing and [`PodiumError::Config`] when `config` fails validation.
pub fn simulate_meet(
    records: &[PerformanceRecord],
    config: &MeetConfig,
    year: Option<&str>,
    season_type: Option<&str>,
) -> Result<Simulation> {
    let (year, season_type) = match (year, season_type) {
        (Some(y), Some(s)) if !y.trim().is_empty() && !s.trim().is_empty() => (y.trim(), s.trim()),
        _ => {
            return Err(PodiumError::InvalidState(
                "meet simulation needs both a year and a season type".to_string(),
            ))
        }
    };
    config.validate()?;

    info!(
        event = "simulation_start",
        year = year,
        season = season_type,
        records = records.len() as u64,
    );

    let roster = config
        .conference_for(year, season_type)
        .map(ConferenceRoster::from_config)
        .unwrap_or_else(ConferenceRoster::open);
    let catalog = EventCatalog::from_config(&config.events);

    let groups = build_event_groups(records, &roster, &catalog, year, season_type);
    let missing_events = catalog.missing_events(groups.keys().map(|k| k.event.as_str()));
    let score = optimize(
        &groups,
        &ScoringTable::from(&config.scoring),
        config.scoring.event_cap,
    );

    info!(
        event = "simulation_end",
        missing_events = missing_events.len() as u64,
    );

    Ok(Simulation {
        year: year.to_string(),
        season_type: season_type.to_string(),
        conference: roster.name().to_string(),
        score,
        missing_events,
    })
}

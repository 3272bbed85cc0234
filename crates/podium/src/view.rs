//! Filterable, sortable performance listing.
//!
//! [`compute_view`] is a pure function of the record collection and the
//! filters: badges are recomputed for the athlete scope on every call and
//! nothing is cached between calls.

use std::cmp::Ordering;
use std::collections::{BTreeSet, HashSet};

use podium_core::{compare_marks, AthleteId, PerformanceRecord};
use podium_history::{detect_records, RecordBadges};
use serde::Serialize;
use tracing::debug;

/// Column a view is sorted by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortField {
    #[default]
    Date,
    Mark,
}

/// Sort direction. Descending puts the latest date or the best mark on top.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    #[default]
    Descending,
}

/// Which records to show and how to order them.
///
/// `None` means "all" for every optional filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewFilters {
    /// Restricts both the rows and the badge computation to one athlete.
    pub athlete: Option<AthleteId>,
    pub year: Option<String>,
    pub season_type: Option<String>,
    pub event: Option<String>,
    /// Meet label as produced in [`PerformanceRow::meet_label`].
    pub meet: Option<String>,
    pub team: Option<String>,
    pub prs_only: bool,
    pub sort_field: SortField,
    pub sort_direction: SortDirection,
}

impl ViewFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_athlete(mut self, athlete: impl Into<AthleteId>) -> Self {
        self.athlete = Some(athlete.into());
        self
    }

    pub fn with_year(mut self, year: impl Into<String>) -> Self {
        self.year = Some(year.into());
        self
    }

    pub fn with_season_type(mut self, season_type: impl Into<String>) -> Self {
        self.season_type = Some(season_type.into());
        self
    }

    pub fn with_event(mut self, event: impl Into<String>) -> Self {
        self.event = Some(event.into());
        self
    }

    pub fn with_meet(mut self, meet: impl Into<String>) -> Self {
        self.meet = Some(meet.into());
        self
    }

    pub fn with_team(mut self, team: impl Into<String>) -> Self {
        self.team = Some(team.into());
        self
    }

    pub fn prs_only(mut self) -> Self {
        self.prs_only = true;
        self
    }

    pub fn sorted_by(mut self, field: SortField, direction: SortDirection) -> Self {
        self.sort_field = field;
        self.sort_direction = direction;
        self
    }
}

/// A record with its derived season and badges.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceRow {
    #[serde(flatten)]
    pub record: PerformanceRecord,
    pub derived_year: String,
    pub derived_type: String,
    /// `"<meet name> (<year>)"`.
    pub meet_label: String,
    pub is_first_time: bool,
    pub is_pr: bool,
    pub is_sb: bool,
}

/// Values each filter can take given the other active filters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Facets {
    /// Newest first; non-numeric years last.
    pub years: Vec<String>,
    pub season_types: Vec<String>,
    pub events: Vec<String>,
    pub meets: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PerformanceView {
    pub rows: Vec<PerformanceRow>,
    pub facets: Facets,
    pub badges: RecordBadges,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Facet {
    Year,
    SeasonType,
    Event,
    Meet,
}

impl ViewFilters {
    /// Checks every filter except `skip` (and except `prs_only`).
    fn matches(&self, row: &PerformanceRow, skip: Option<Facet>) -> bool {
        fn allows(filter: &Option<String>, value: &str) -> bool {
            filter.as_deref().map_or(true, |f| f == value)
        }
        (skip == Some(Facet::Year) || allows(&self.year, &row.derived_year))
            && (skip == Some(Facet::SeasonType) || allows(&self.season_type, &row.derived_type))
            && (skip == Some(Facet::Event) || allows(&self.event, &row.record.event))
            && (skip == Some(Facet::Meet) || allows(&self.meet, &row.meet_label))
            && allows(&self.team, &row.record.team)
    }
}

/// Computes the performance listing for `filters`.
///
/// # Examples
///
/// ```
/// use podium::view::{compute_view, ViewFilters};
/// use podium_test::four_hundred_history;
///
/// let view = compute_view(&four_hundred_history(), &ViewFilters::new().prs_only());
///
/// assert_eq!(view.rows.len(), 1);
/// assert_eq!(view.rows[0].record.mark, "7.10");
/// assert_eq!(view.facets.meets, vec!["Valley Champs (2024)", "Winter Opener (2024)"]);
/// ```
pub fn compute_view(records: &[PerformanceRecord], filters: &ViewFilters) -> PerformanceView {
    let scoped: Vec<PerformanceRecord> = match &filters.athlete {
        Some(athlete) => records
            .iter()
            .filter(|r| &r.athlete_id == athlete)
            .cloned()
            .collect(),
        None => records.to_vec(),
    };
    let badges = detect_records(&scoped);

    let enriched: Vec<PerformanceRow> = scoped
        .into_iter()
        .map(|record| {
            let season = record.season_key();
            PerformanceRow {
                meet_label: format!("{} ({})", record.meet_name, season.year),
                is_first_time: badges.is_first_time(&record.id),
                is_pr: badges.is_pr(&record.id),
                is_sb: badges.is_sb(&record.id),
                derived_year: season.year,
                derived_type: season.season_type,
                record,
            }
        })
        .collect();

    let mut years = facet_values(&enriched, filters, Facet::Year, |r| &r.derived_year);
    years.sort_by(|a, b| newest_year_first(a, b));
    let facets = Facets {
        years,
        season_types: facet_values(&enriched, filters, Facet::SeasonType, |r| &r.derived_type),
        events: facet_values(&enriched, filters, Facet::Event, |r| &r.record.event),
        meets: facet_values(&enriched, filters, Facet::Meet, |r| &r.meet_label),
    };

    let total = enriched.len();
    let mut rows: Vec<PerformanceRow> = enriched
        .into_iter()
        .filter(|row| filters.matches(row, None) && (!filters.prs_only || row.is_pr))
        .collect();
    sort_rows(&mut rows, filters.sort_field, filters.sort_direction);

    debug!(
        event = "view_computed",
        records = total as u64,
        rows = rows.len() as u64,
    );

    PerformanceView {
        rows,
        facets,
        badges,
    }
}

/// Sorted distinct values of one facet under every other active filter.
fn facet_values(
    rows: &[PerformanceRow],
    filters: &ViewFilters,
    facet: Facet,
    value: impl Fn(&PerformanceRow) -> &String,
) -> Vec<String> {
    rows.iter()
        .filter(|row| filters.matches(row, Some(facet)))
        .map(|row| value(row).clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

fn newest_year_first(a: &str, b: &str) -> Ordering {
    match (a.parse::<u32>(), b.parse::<u32>()) {
        (Ok(a), Ok(b)) => b.cmp(&a),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}

fn sort_rows(rows: &mut [PerformanceRow], field: SortField, direction: SortDirection) {
    rows.sort_by(|a, b| {
        // Ascending means earliest date first, worst mark first.
        let ascending = match field {
            SortField::Date => a.record.chronological_key().cmp(&b.record.chronological_key()),
            SortField::Mark => compare_marks(&a.record.mark, &b.record.mark).reverse(),
        };
        match direction {
            SortDirection::Ascending => ascending,
            SortDirection::Descending => ascending.reverse(),
        }
    });
}

/// Distinct non-empty team names, sorted.
pub fn teams(records: &[PerformanceRecord]) -> Vec<String> {
    records
        .iter()
        .filter(|r| !r.team.is_empty())
        .map(|r| r.team.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// One selectable athlete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AthleteSummary {
    pub id: AthleteId,
    pub name: String,
}

/// Athletes of `team` (or of every team), unique by id and sorted by name.
///
/// The first record seen for an athlete provides the name.
pub fn athletes(records: &[PerformanceRecord], team: Option<&str>) -> Vec<AthleteSummary> {
    let mut seen = HashSet::new();
    let mut athletes: Vec<AthleteSummary> = records
        .iter()
        .filter(|r| team.map_or(true, |t| r.team == t))
        .filter(|r| seen.insert(&r.athlete_id))
        .map(|r| AthleteSummary {
            id: r.athlete_id.clone(),
            name: r.athlete_name.clone(),
        })
        .collect();
    athletes.sort_by(|a, b| a.name.cmp(&b.name));
    athletes
}

#[cfg(test)]
#[path = "view_tests.rs"]
mod tests;

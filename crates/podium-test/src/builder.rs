//! Fluent builder for performance records.

use podium_core::{AthleteId, PerformanceRecord, RecordId};

/// Starts a record with the given id and neutral defaults.
///
/// Defaults: athlete `a1` / `Athlete One`, team `X`, event `400m`,
/// date `2024-01-01`, season `2024 Indoor`, meet `Meet`, empty mark.
pub fn performance(id: impl Into<RecordId>) -> RecordBuilder {
    RecordBuilder {
        record: PerformanceRecord {
            id: id.into(),
            athlete_id: AthleteId::from("a1"),
            athlete_name: "Athlete One".to_string(),
            team: "X".to_string(),
            event: "400m".to_string(),
            mark: String::new(),
            date: "2024-01-01".to_string(),
            season: "2024 Indoor".to_string(),
            year: None,
            meet_name: "Meet".to_string(),
            splits: Vec::new(),
            place: None,
            meet_url: None,
        },
    }
}

/// Builds a [`PerformanceRecord`] field by field.
#[derive(Debug, Clone)]
pub struct RecordBuilder {
    record: PerformanceRecord,
}

impl RecordBuilder {
    pub fn athlete(mut self, id: &str, name: &str) -> Self {
        self.record.athlete_id = AthleteId::from(id);
        self.record.athlete_name = name.to_string();
        self
    }

    pub fn team(mut self, team: &str) -> Self {
        self.record.team = team.to_string();
        self
    }

    pub fn event(mut self, event: &str) -> Self {
        self.record.event = event.to_string();
        self
    }

    pub fn mark(mut self, mark: &str) -> Self {
        self.record.mark = mark.to_string();
        self
    }

    pub fn date(mut self, date: &str) -> Self {
        self.record.date = date.to_string();
        self
    }

    pub fn season(mut self, season: &str) -> Self {
        self.record.season = season.to_string();
        self
    }

    pub fn year(mut self, year: &str) -> Self {
        self.record.year = Some(year.to_string());
        self
    }

    pub fn meet(mut self, meet_name: &str) -> Self {
        self.record.meet_name = meet_name.to_string();
        self
    }

    pub fn build(self) -> PerformanceRecord {
        self.record
    }
}

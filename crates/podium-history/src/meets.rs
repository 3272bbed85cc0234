//! Meet catalog for one team.

use std::collections::HashMap;

use chrono::{NaiveDate, NaiveDateTime};
use podium_core::PerformanceRecord;
use serde::Serialize;

use crate::pops::{detect_pops_on, PopReport};

/// One meet a team attended.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct MeetRef {
    pub name: String,
    pub day: NaiveDate,
}

impl MeetRef {
    pub fn new(name: impl Into<String>, day: NaiveDate) -> Self {
        Self {
            name: name.into(),
            day,
        }
    }
}

/// Which meet to analyze.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum MeetSelection {
    /// The team's most recent meet.
    #[default]
    Latest,
    /// A specific meet by name and calendar day.
    Named { name: String, day: NaiveDate },
}

impl MeetSelection {
    /// Picks the selected meet out of a newest-first catalog.
    pub fn resolve<'a>(&self, meets: &'a [MeetRef]) -> Option<&'a MeetRef> {
        match self {
            MeetSelection::Latest => meets.first(),
            MeetSelection::Named { name, day } => {
                meets.iter().find(|m| &m.name == name && &m.day == day)
            }
        }
    }
}

/// Lists the distinct `(meet name, day)` pairs of `team`, newest first.
///
/// Records with unreadable dates are skipped. Meets on the same day are
/// ordered by their latest timestamp, then by name.
pub fn team_meets(records: &[PerformanceRecord], team: &str) -> Vec<MeetRef> {
    let mut latest: HashMap<MeetRef, NaiveDateTime> = HashMap::new();
    for record in records.iter().filter(|r| r.team == team) {
        let (Some(day), Some(at)) = (record.day(), record.timestamp()) else {
            continue;
        };
        latest
            .entry(MeetRef::new(record.meet_name.clone(), day))
            .and_modify(|seen| *seen = (*seen).max(at))
            .or_insert(at);
    }

    let mut meets: Vec<(MeetRef, NaiveDateTime)> = latest.into_iter().collect();
    meets.sort_by(|(a, a_at), (b, b_at)| b_at.cmp(a_at).then_with(|| a.name.cmp(&b.name)));
    meets.into_iter().map(|(meet, _)| meet).collect()
}

/// Resolves `selection` against the team's meets and detects its pops.
///
/// Returns an empty report when the team has no meets or the named meet is
/// not among them.
///
/// ```
/// use podium_history::{detect_pops_for_selection, MeetSelection};
/// use podium_test::four_hundred_history;
///
/// let report = detect_pops_for_selection(&four_hundred_history(), "X", &MeetSelection::Latest);
/// assert_eq!(report.meet_name, "Valley Champs");
/// assert_eq!(report.total_count, 1);
/// ```
pub fn detect_pops_for_selection(
    records: &[PerformanceRecord],
    team: &str,
    selection: &MeetSelection,
) -> PopReport {
    let meets = team_meets(records, team);
    match selection.resolve(&meets) {
        Some(meet) => detect_pops_on(records, team, &meet.name, meet.day),
        None => PopReport::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use podium_test::{four_hundred_history, performance};

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_meets_newest_first() {
        let meets = team_meets(&four_hundred_history(), "X");
        assert_eq!(
            meets,
            vec![
                MeetRef::new("Valley Champs", day(2024, 2, 10)),
                MeetRef::new("Winter Opener", day(2024, 1, 10)),
            ]
        );
    }

    #[test]
    fn test_meets_are_deduplicated_and_team_scoped() {
        let records = vec![
            performance(1u64).meet("Dual").date("2024-03-01T10:00:00").build(),
            performance(2u64).meet("Dual").date("2024-03-01T15:00:00").build(),
            performance(3u64).meet("Dual").date("2024-03-08").build(),
            performance(4u64).team("Y").meet("Invite").date("2024-04-01").build(),
            performance(5u64).meet("Undated").date("").build(),
        ];

        let meets = team_meets(&records, "X");
        assert_eq!(
            meets,
            vec![
                MeetRef::new("Dual", day(2024, 3, 8)),
                MeetRef::new("Dual", day(2024, 3, 1)),
            ]
        );
    }

    #[test]
    fn test_named_selection() {
        let records = four_hundred_history();
        let selection = MeetSelection::Named {
            name: "Winter Opener".to_string(),
            day: day(2024, 1, 10),
        };

        let report = detect_pops_for_selection(&records, "X", &selection);
        assert_eq!(report.meet_name, "Winter Opener");
        assert!(report.is_empty());
    }

    #[test]
    fn test_unknown_selection_is_empty() {
        let selection = MeetSelection::Named {
            name: "Nationals".to_string(),
            day: day(2024, 6, 1),
        };
        assert_eq!(
            detect_pops_for_selection(&four_hundred_history(), "X", &selection),
            PopReport::default()
        );
        assert_eq!(
            detect_pops_for_selection(&four_hundred_history(), "Nobody", &MeetSelection::Latest),
            PopReport::default()
        );
    }
}

//! Podium - Track & Field Performance Ranking and Meet Scoring
//!
//! Load an exported record collection, then ask it questions: which
//! results are PRs and season bests, who popped at the last meet, and how
//! a conference championship would score.
//!
//! # Example
//!
//! ```rust
//! use podium::prelude::*;
//!
//! let records = records_from_json_str(r#"[
//!     {"id": 1, "athlete_id": 7, "athlete_name": "Sam Reed", "team": "X",
//!      "event": "400m", "mark": "7.24", "date": "2024-01-10",
//!      "season": "2024 Indoor", "meet_name": "Winter Opener"},
//!     {"id": 2, "athlete_id": 7, "athlete_name": "Sam Reed", "team": "X",
//!      "event": "400m", "mark": "7.10", "date": "2024-02-10",
//!      "season": "2024 Indoor", "meet_name": "Valley Champs"}
//! ]"#).unwrap();
//!
//! let badges = detect_records(&records);
//! assert!(badges.is_pr(&records[1].id));
//!
//! let pops = detect_pops(&records, "X", "Valley Champs", "2024-02-10");
//! assert_eq!(pops.by_athlete["Sam Reed"][0].improvement_label, "-0.14s");
//! ```

// Record model and mark semantics
pub use podium_core::{
    compare_marks, format_distance, format_improvement, format_time, is_better, marks_equal,
    parse_mark, AthleteId, Gender, MarkKind, ParsedMark, PerformanceRecord, PodiumError, RecordId,
    Result, SeasonKey,
};

// Configuration
pub use podium_config::{ConfigError, MeetConfig};

// History analysis
pub use podium_history::{
    athlete_profile, detect_pops, detect_pops_for_selection, detect_records, team_meets,
    EventProfile, MeetRef, MeetSelection, PopEntry, PopReport, RecordBadges,
};

// Meet scoring
pub use podium_scoring::{
    build_event_groups, optimize, ConferenceRoster, EventCatalog, EventGroupKey, EventGroups,
    Leaderboard, MeetScore, Points, ScoredEntry, ScoringTable, TeamScore,
};

mod load;
mod simulate;
pub mod view;

pub use load::{load_records, records_from_json_str};
pub use simulate::{simulate_meet, Simulation};
pub use view::{athletes, compute_view, teams, PerformanceView, ViewFilters};

#[cfg(feature = "console")]
pub use podium_console as console;

pub mod prelude {
    pub use super::{
        compare_marks, is_better, marks_equal, parse_mark, PerformanceRecord, PodiumError,
        SeasonKey,
    };
    pub use super::{detect_pops, detect_pops_for_selection, detect_records, MeetSelection};
    pub use super::{load_records, records_from_json_str, simulate_meet, MeetConfig};
    pub use super::{compute_view, ViewFilters};
    pub use super::{Gender, Points};
}

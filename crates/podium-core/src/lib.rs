//! Podium Core - record and mark types for track & field analytics
//!
//! This crate provides the fundamental building blocks shared by every
//! Podium component:
//! - Performance records as exported by the data source
//! - Mark parsing and the better-than comparator for times and distances
//! - Season parsing (`"2025 Indoor"` → year + season type)
//! - Relay and gender helpers derived from event and name strings

pub mod error;
pub mod event;
pub mod mark;
pub mod record;
pub mod season;

pub use error::{PodiumError, Result};
pub use event::{is_relay_event, relay_members, Gender, RelayMembers};
pub use mark::{
    compare_marks, compare_parsed, format_distance, format_improvement, format_time, is_better,
    is_better_parsed, marks_equal, parse_mark, MarkKind, ParsedMark,
};
pub use record::{parse_day, parse_timestamp, AthleteId, PerformanceRecord, RecordId};
pub use season::SeasonKey;

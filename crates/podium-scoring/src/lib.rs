//! Championship meet scoring for Podium.
//!
//! A meet simulation takes the season's best result per competitor and
//! scores it as if every conference school met in one championship:
//!
//! - [`ConferenceRoster`] decides which teams take part
//! - [`EventCatalog`] decides which events are contested
//! - [`build_event_groups`] keeps one best result per competitor and event
//! - [`optimize`] ranks each event, enforces the per-athlete event cap and
//!   splits points between tied athletes
//!
//! # Example
//!
//! ```
//! use podium_config::MeetConfig;
//! use podium_scoring::{build_event_groups, optimize, ConferenceRoster, EventCatalog, ScoringTable};
//! use podium_test::performance;
//!
//! let records = vec![
//!     performance(1u64).athlete("a", "Ann").team("North").event("Girls 55m Dash").mark("7.60").build(),
//!     performance(2u64).athlete("b", "Bea").team("South").event("Girls 55m Dash").mark("7.40").build(),
//! ];
//! let config = MeetConfig::default();
//! let groups = build_event_groups(
//!     &records,
//!     &ConferenceRoster::open(),
//!     &EventCatalog::from_config(&config.events),
//!     "2024",
//!     "Indoor",
//! );
//! let score = optimize(&groups, &ScoringTable::from(&config.scoring), config.scoring.event_cap);
//!
//! assert_eq!(score.leaderboard.girls[0].team, "South");
//! assert_eq!(score.leaderboard.girls[0].total.value(), 10.0);
//! ```

pub mod catalog;
pub mod conference;
pub mod groups;
pub mod leaderboard;
pub mod optimizer;
pub mod points;
mod ranking;

pub use catalog::EventCatalog;
pub use conference::ConferenceRoster;
pub use groups::{build_event_groups, Competitor, EventGroupKey, EventGroups};
pub use leaderboard::{BreakdownLine, Leaderboard, TeamScore};
pub use optimizer::{optimize, MeetScore, ScoredEntry};
pub use points::{Points, ScoringTable};

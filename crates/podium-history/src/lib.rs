//! Chronological analysis of an athlete history.
//!
//! Everything here is a pure function over a borrowed record slice:
//!
//! - [`detect_records`] tags first-time results, all-time bests and season bests
//! - [`detect_pops`] finds results at one meet that beat every earlier mark
//! - [`team_meets`] lists the meets a team attended, newest first
//! - [`athlete_profile`] summarizes one athlete event by event

pub mod meets;
pub mod pops;
pub mod profile;
pub mod records;

pub use meets::{detect_pops_for_selection, team_meets, MeetRef, MeetSelection};
pub use pops::{detect_pops, PopEntry, PopReport};
pub use profile::{athlete_profile, DataPoint, EventProfile};
pub use records::{detect_records, RecordBadges};

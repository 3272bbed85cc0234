//! Event-name and relay-name heuristics.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Member names of one relay team, typically four.
pub type RelayMembers = SmallVec<[String; 4]>;

/// Returns true if the event name denotes a relay (`relay` or `4x`).
pub fn is_relay_event(event: &str) -> bool {
    let lower = event.to_lowercase();
    lower.contains("relay") || lower.contains("4x")
}

/// Splits a relay's comma-separated athlete name field into member names.
///
/// Placeholder tokens (anything mentioning `school` or `relay`, as emitted
/// when the source only knows the team) are dropped. An empty result means
/// the relay has no known members.
///
/// ```
/// use podium_core::relay_members;
///
/// let members = relay_members("Ada Lee, Bo Park , ,Cy Diaz");
/// assert_eq!(members.as_slice(), ["Ada Lee", "Bo Park", "Cy Diaz"]);
///
/// assert!(relay_members("Orono High School Relay").is_empty());
/// ```
pub fn relay_members(names: &str) -> RelayMembers {
    names
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .filter(|name| {
            let lower = name.to_lowercase();
            !lower.contains("school") && !lower.contains("relay")
        })
        .map(str::to_string)
        .collect()
}

/// Scoring division of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Boys,
    Girls,
}

impl Gender {
    /// Infers the division from an event name: `girls` anywhere means
    /// girls, everything else scores with the boys.
    pub fn from_event(event: &str) -> Self {
        if event.to_lowercase().contains("girls") {
            Gender::Girls
        } else {
            Gender::Boys
        }
    }
}

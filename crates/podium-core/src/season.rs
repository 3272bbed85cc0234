//! Season parsing.
//!
//! Records carry either a bare season type (`"Indoor"`) plus a separate
//! year field, or a composite `"<year> <type>"` label (`"2025 Indoor"`).
//! Every component derives year and type through [`SeasonKey::derive`].

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static COMPOSITE_SEASON: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4})\s+(.*)$").unwrap());

/// Placeholder for a missing year or season type.
pub const UNKNOWN: &str = "Unknown";

/// One season instance: a year and a season type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SeasonKey {
    pub year: String,
    pub season_type: String,
}

impl SeasonKey {
    /// Creates a key from explicit parts.
    pub fn new(year: impl Into<String>, season_type: impl Into<String>) -> Self {
        Self {
            year: year.into(),
            season_type: season_type.into(),
        }
    }

    /// Derives year and season type from a season label and a raw year field.
    ///
    /// Fallback order for the year: the year inside a composite label, then
    /// the raw year field, then `"Unknown"`. The season type is the rest of a
    /// composite label, else the whole label, else `"Unknown"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use podium_core::SeasonKey;
    ///
    /// let key = SeasonKey::derive("2025 Indoor", None);
    /// assert_eq!(key, SeasonKey::new("2025", "Indoor"));
    ///
    /// let key = SeasonKey::derive("Outdoor", Some("2024"));
    /// assert_eq!(key, SeasonKey::new("2024", "Outdoor"));
    ///
    /// let key = SeasonKey::derive("", None);
    /// assert_eq!(key, SeasonKey::new("Unknown", "Unknown"));
    /// ```
    pub fn derive(season: &str, raw_year: Option<&str>) -> Self {
        let raw_year = raw_year.map(str::trim).filter(|y| !y.is_empty());
        let season = season.trim();

        if let Some(caps) = COMPOSITE_SEASON.captures(season) {
            let year = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
            let season_type = caps.get(2).map(|m| m.as_str().trim()).unwrap_or_default();
            return Self::new(
                year,
                if season_type.is_empty() {
                    UNKNOWN
                } else {
                    season_type
                },
            );
        }

        Self::new(
            raw_year.unwrap_or(UNKNOWN),
            if season.is_empty() { UNKNOWN } else { season },
        )
    }
}

impl fmt::Display for SeasonKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.season_type, self.year)
    }
}

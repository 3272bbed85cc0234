//! Configuration system for Podium.
//!
//! Load meet configuration from TOML or YAML files to control the scoring
//! table, the per-athlete event cap, conference rosters and the championship
//! event catalog without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use podium_config::MeetConfig;
//!
//! let config = MeetConfig::from_toml_str(r#"
//!     [scoring]
//!     points = [10, 8, 6, 4, 2, 1]
//!     event_cap = 4
//!
//!     [[conferences]]
//!     name = "Valley"
//!     schools = [
//!         { key = "Orono", name = "Orono High School" },
//!         { key = "Central", name = "Central High School", exclude = ["maine"] },
//!     ]
//!
//!     [[events.catalog]]
//!     name = "High Jump"
//!     aliases = ["High Jump"]
//! "#).unwrap();
//!
//! assert_eq!(config.scoring.event_cap, 4);
//! assert_eq!(config.conferences[0].schools.len(), 2);
//! assert_eq!(config.events.excluded, vec!["pentathlon".to_string()]);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use podium_config::MeetConfig;
//!
//! let config = MeetConfig::load("podium.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! assert_eq!(config.scoring.points, vec![10, 8, 6, 4, 2, 1]);
//! ```

use std::path::Path;

use podium_core::PodiumError;
use serde::{Deserialize, Serialize};
use thiserror::Error;


/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl From<ConfigError> for PodiumError {
    fn from(err: ConfigError) -> Self {
        PodiumError::Config(err.to_string())
    }
}

/// Main meet configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct MeetConfig {
    /// Place points and event cap.
    #[serde(default)]
    pub scoring: ScoringConfig,

    /// Conference rosters, optionally scoped to one season instance.
    #[serde(default)]
    pub conferences: Vec<ConferenceConfig>,

    /// Championship event catalog.
    #[serde(default)]
    pub events: EventCatalogConfig,
}

impl MeetConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the points awarded for places 1..N.
    pub fn with_scoring_points(mut self, points: Vec<u32>) -> Self {
        self.scoring.points = points;
        self
    }

    /// Sets the maximum number of scoring events per athlete.
    pub fn with_event_cap(mut self, event_cap: usize) -> Self {
        self.scoring.event_cap = event_cap;
        self
    }

    /// Adds a conference roster.
    pub fn with_conference(mut self, conference: ConferenceConfig) -> Self {
        self.conferences.push(conference);
        self
    }

    /// Adds a championship event.
    pub fn with_event(mut self, event: EventConfig) -> Self {
        self.events.catalog.push(event);
        self
    }

    /// Checks the configuration for values the engine cannot use.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.scoring.points.is_empty() {
            return Err(ConfigError::Invalid(
                "scoring.points must list at least one place".to_string(),
            ));
        }
        if self.scoring.event_cap == 0 {
            return Err(ConfigError::Invalid(
                "scoring.event_cap must be at least 1".to_string(),
            ));
        }
        for conference in &self.conferences {
            if let Some(school) = conference.schools.iter().find(|s| s.key.trim().is_empty()) {
                return Err(ConfigError::Invalid(format!(
                    "conference '{}' has a school with an empty key ({})",
                    conference.name, school.name
                )));
            }
        }
        Ok(())
    }

    /// Returns the roster that applies to one season instance.
    ///
    /// A roster scoped to exactly this year and season type wins over an
    /// unscoped roster. Returns `None` when no roster applies.
    ///
    /// ```
    /// use podium_config::{ConferenceConfig, MeetConfig};
    ///
    /// let config = MeetConfig::new()
    ///     .with_conference(ConferenceConfig::new("Legacy"))
    ///     .with_conference(ConferenceConfig::new("Indoor 2026").scoped("2026", "Indoor"));
    ///
    /// assert_eq!(config.conference_for("2026", "Indoor").unwrap().name, "Indoor 2026");
    /// assert_eq!(config.conference_for("2025", "Indoor").unwrap().name, "Legacy");
    /// ```
    pub fn conference_for(&self, year: &str, season_type: &str) -> Option<&ConferenceConfig> {
        self.conferences
            .iter()
            .find(|c| c.year.as_deref() == Some(year) && c.season.as_deref() == Some(season_type))
            .or_else(|| {
                self.conferences
                    .iter()
                    .find(|c| c.year.is_none() && c.season.is_none())
            })
    }
}

/// Place points and the per-athlete event cap.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ScoringConfig {
    /// Points for places 1..N.
    #[serde(default = "default_points")]
    pub points: Vec<u32>,

    /// Maximum number of events (individual + relay) an athlete may score in.
    #[serde(default = "default_event_cap")]
    pub event_cap: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            points: default_points(),
            event_cap: default_event_cap(),
        }
    }
}

fn default_points() -> Vec<u32> {
    vec![10, 8, 6, 4, 2, 1]
}

fn default_event_cap() -> usize {
    3
}

/// One conference roster.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ConferenceConfig {
    /// Display name.
    pub name: String,

    /// Season year this roster applies to; unscoped when absent.
    #[serde(default)]
    pub year: Option<String>,

    /// Season type this roster applies to; unscoped when absent.
    #[serde(default)]
    pub season: Option<String>,

    /// Member schools.
    #[serde(default)]
    pub schools: Vec<SchoolConfig>,

    /// Acronym rules for teams that never contain a school key.
    #[serde(default)]
    pub acronyms: Vec<AcronymConfig>,
}

impl ConferenceConfig {
    /// Creates an empty, unscoped roster.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Scopes the roster to one season instance.
    pub fn scoped(mut self, year: impl Into<String>, season: impl Into<String>) -> Self {
        self.year = Some(year.into());
        self.season = Some(season.into());
        self
    }

    /// Adds a member school.
    pub fn with_school(mut self, key: impl Into<String>, name: impl Into<String>) -> Self {
        self.schools.push(SchoolConfig {
            key: key.into(),
            name: name.into(),
            exclude: Vec::new(),
        });
        self
    }
}

/// A member school matched by key substring or exact full name.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SchoolConfig {
    /// Short key matched case-insensitively as a substring of the team.
    pub key: String,

    /// Full school name used in results.
    pub name: String,

    /// Team substrings that veto a key match.
    #[serde(default)]
    pub exclude: Vec<String>,
}

/// Maps an acronym team name to a school.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct AcronymConfig {
    /// Exact team string, e.g. `PCHS`.
    pub acronym: String,

    /// Team substrings that also resolve to the school.
    #[serde(default)]
    pub contains: Vec<String>,

    /// School name (must match a roster school name).
    pub school: String,
}

/// Championship event catalog.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct EventCatalogConfig {
    /// Canonical events; empty allows every event.
    #[serde(default)]
    pub catalog: Vec<EventConfig>,

    /// Event substrings never scored (e.g. multi-events).
    #[serde(default = "default_excluded")]
    pub excluded: Vec<String>,
}

impl Default for EventCatalogConfig {
    fn default() -> Self {
        Self {
            catalog: Vec::new(),
            excluded: default_excluded(),
        }
    }
}

fn default_excluded() -> Vec<String> {
    vec!["pentathlon".to_string()]
}

/// One canonical championship event.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct EventConfig {
    /// Canonical name.
    pub name: String,

    /// Substrings that identify the event in record event names.
    #[serde(default)]
    pub aliases: Vec<String>,
}

impl EventConfig {
    /// Creates an event whose aliases are the given substrings.
    pub fn new(name: impl Into<String>, aliases: &[&str]) -> Self {
        Self {
            name: name.into(),
            aliases: aliases.iter().map(|a| a.to_string()).collect(),
        }
    }
}

//! Championship event catalog.

use podium_config::EventCatalogConfig;

#[derive(Debug, Clone)]
struct CanonicalEvent {
    name: String,
    aliases: Vec<String>,
}

/// The events contested at the championship.
///
/// An event is allowed when one alias of a canonical event is a
/// case-insensitive substring of its name and no excluded substring is. An
/// empty catalog allows every event that is not excluded.
#[derive(Debug, Clone, Default)]
pub struct EventCatalog {
    events: Vec<CanonicalEvent>,
    excluded: Vec<String>,
}

impl EventCatalog {
    pub fn from_config(config: &EventCatalogConfig) -> Self {
        Self {
            events: config
                .catalog
                .iter()
                .map(|e| CanonicalEvent {
                    name: e.name.clone(),
                    aliases: e.aliases.iter().map(|a| a.to_lowercase()).collect(),
                })
                .collect(),
            excluded: config.excluded.iter().map(|e| e.to_lowercase()).collect(),
        }
    }

    /// Returns true if `event` is scored at the championship.
    ///
    /// ```
    /// use podium_config::{EventCatalogConfig, EventConfig};
    /// use podium_scoring::EventCatalog;
    ///
    /// let mut config = EventCatalogConfig::default();
    /// config.catalog.push(EventConfig::new("55m Dash", &["55m Dash", "55 Meter Dash"]));
    /// let catalog = EventCatalog::from_config(&config);
    ///
    /// assert!(catalog.is_allowed("Girls 55 Meter Dash"));
    /// assert!(!catalog.is_allowed("Girls 55m Hurdles"));
    /// ```
    pub fn is_allowed(&self, event: &str) -> bool {
        let event = event.to_lowercase();
        if self.excluded.iter().any(|e| event.contains(e.as_str())) {
            return false;
        }
        self.events.is_empty() || self.events.iter().any(|c| c.matches(&event))
    }

    /// Lists canonical events, in catalog order, that none of `found` matches.
    pub fn missing_events<'a, I>(&self, found: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let found: Vec<String> = found.into_iter().map(str::to_lowercase).collect();
        self.events
            .iter()
            .filter(|c| !found.iter().any(|event| c.matches(event)))
            .map(|c| c.name.clone())
            .collect()
    }
}

impl CanonicalEvent {
    fn matches(&self, event_lower: &str) -> bool {
        self.aliases.iter().any(|a| event_lower.contains(a.as_str()))
    }
}

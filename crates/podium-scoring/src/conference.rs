//! Team to conference-school resolution.

use podium_config::ConferenceConfig;

#[derive(Debug, Clone)]
struct School {
    key: String,
    name: String,
    name_lower: String,
    exclude: Vec<String>,
}

#[derive(Debug, Clone)]
struct AcronymRule {
    acronym: String,
    contains: Vec<String>,
    school: String,
}

/// Maps raw team strings onto the member schools of one conference.
///
/// A team belongs to a school when the school key is a case-insensitive
/// substring of the team, or the team equals the full school name. Any of
/// the school's `exclude` substrings vetoes the match. Acronym rules are
/// tried when no school matched.
///
/// # Examples
///
/// ```
/// use podium_config::ConferenceConfig;
/// use podium_scoring::ConferenceRoster;
///
/// let mut config = ConferenceConfig::new("Valley").with_school("Central", "Central High School");
/// config.schools[0].exclude.push("maine".to_string());
/// let roster = ConferenceRoster::from_config(&config);
///
/// assert_eq!(roster.resolve("Central HS"), Some("Central High School"));
/// assert_eq!(roster.resolve("Maine Central Institute"), None);
/// ```
#[derive(Debug, Clone)]
pub struct ConferenceRoster {
    name: String,
    schools: Vec<School>,
    acronyms: Vec<AcronymRule>,
    open: bool,
}

impl ConferenceRoster {
    /// A roster that admits every team under its own name.
    pub fn open() -> Self {
        Self {
            name: "Open".to_string(),
            schools: Vec::new(),
            acronyms: Vec::new(),
            open: true,
        }
    }

    pub fn from_config(config: &ConferenceConfig) -> Self {
        Self {
            name: config.name.clone(),
            schools: config
                .schools
                .iter()
                .map(|s| School {
                    key: s.key.to_lowercase(),
                    name: s.name.clone(),
                    name_lower: s.name.to_lowercase(),
                    exclude: s.exclude.iter().map(|e| e.to_lowercase()).collect(),
                })
                .collect(),
            acronyms: config
                .acronyms
                .iter()
                .map(|a| AcronymRule {
                    acronym: a.acronym.clone(),
                    contains: a.contains.iter().map(|c| c.to_lowercase()).collect(),
                    school: a.school.clone(),
                })
                .collect(),
            open: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the school `team` competes for, or `None` for outsiders.
    pub fn resolve<'a>(&'a self, team: &'a str) -> Option<&'a str> {
        if self.open {
            return Some(team);
        }
        let team_lower = team.to_lowercase();

        let by_key = self.schools.iter().find(|school| {
            !school.exclude.iter().any(|e| team_lower.contains(e.as_str()))
                && (team_lower.contains(school.key.as_str()) || team_lower == school.name_lower)
        });
        if let Some(school) = by_key {
            return Some(&school.name);
        }

        self.acronyms
            .iter()
            .filter(|rule| {
                team == rule.acronym || rule.contains.iter().any(|c| team_lower.contains(c.as_str()))
            })
            .find_map(|rule| {
                self.schools
                    .iter()
                    .find(|school| school.name == rule.school)
                    .map(|school| school.name.as_str())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use podium_config::MeetConfig;

    fn pvc(year: &str, season: &str) -> ConferenceRoster {
        let config = MeetConfig::from_toml_str(include_str!("../../../config/pvc.toml")).unwrap();
        ConferenceRoster::from_config(config.conference_for(year, season).unwrap())
    }

    #[test]
    fn test_key_substring_and_full_name() {
        let roster = pvc("2026", "Indoor");
        assert_eq!(roster.resolve("ORONO"), Some("Orono High School"));
        assert_eq!(roster.resolve("Bangor Christian"), Some("Bangor Christian Schools"));
        assert_eq!(roster.resolve("Sumner/Narragaugus"), Some("Sumner/Narragaugus"));
        assert_eq!(roster.resolve("Bangor High School"), None);
    }

    #[test]
    fn test_exclusion_vetoes_match() {
        let roster = pvc("2026", "Indoor");
        assert_eq!(roster.resolve("Central High School"), Some("Central High School"));
        assert_eq!(roster.resolve("Maine Central Institute"), None);
    }

    #[test]
    fn test_acronym_rule() {
        let roster = pvc("2026", "Indoor");
        assert_eq!(roster.resolve("PCHS"), Some("Piscataquis Community High School"));
        assert_eq!(roster.resolve("Piscataquis CHS"), Some("Piscataquis Community High School"));
    }

    #[test]
    fn test_acronym_needs_member_school() {
        let config = ConferenceConfig {
            acronyms: vec![podium_config::AcronymConfig {
                acronym: "PCHS".to_string(),
                contains: Vec::new(),
                school: "Piscataquis Community High School".to_string(),
            }],
            ..ConferenceConfig::new("Tiny").with_school("Orono", "Orono High School")
        };
        assert_eq!(ConferenceRoster::from_config(&config).resolve("PCHS"), None);
    }

    #[test]
    fn test_rosters_differ_by_season() {
        assert_eq!(pvc("2024", "Outdoor").resolve("Houlton"), Some("Houlton High School"));
        assert_eq!(pvc("2026", "Indoor").resolve("Houlton"), None);
        assert_eq!(pvc("2024", "Outdoor").name(), "PVC Small Schools");
    }

    #[test]
    fn test_open_roster() {
        let roster = ConferenceRoster::open();
        assert_eq!(roster.resolve("Anyone"), Some("Anyone"));
    }
}

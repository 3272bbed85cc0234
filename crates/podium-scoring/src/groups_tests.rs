use super::*;
use podium_config::MeetConfig;
use podium_test::{conference_meet, performance};

fn pvc_groups() -> EventGroups {
    let config = MeetConfig::from_toml_str(include_str!("../../../config/pvc.toml")).unwrap();
    let roster = ConferenceRoster::from_config(config.conference_for("2026", "Indoor").unwrap());
    let catalog = EventCatalog::from_config(&config.events);
    build_event_groups(&conference_meet(), &roster, &catalog, "2026", "Indoor")
}

fn record_ids(entries: &[Competitor]) -> Vec<RecordId> {
    entries.iter().map(|c| c.record_id.clone()).collect()
}

#[test]
fn test_group_keys_are_sorted() {
    let groups = pvc_groups();
    let keys: Vec<String> = groups.keys().map(ToString::to_string).collect();
    assert_eq!(
        keys,
        vec![
            "Boys 200m Dash (Indoor 2026)",
            "Boys 400m Dash (Indoor 2026)",
            "Boys 4x200m Relay (Indoor 2026)",
            "Boys 55m Dash (Indoor 2026)",
            "Boys 800m Run (Indoor 2026)",
            "Girls High Jump (Indoor 2026)",
        ]
    );
}

#[test]
fn test_best_mark_per_competitor() {
    let groups = pvc_groups();
    let dash = &groups[&EventGroupKey::new("Boys 55m Dash", "Indoor", "2026")];

    // Eli's slower 6.90 (6) and last year's 6.60 (19) are dropped, as is
    // Maine Central Institute (4).
    assert_eq!(record_ids(dash), ids(&[1, 2, 3, 5]));
    assert_eq!(dash[0].team, "Orono High School");
}

#[test]
fn test_teams_resolve_to_school_names() {
    let groups = pvc_groups();
    let jump = &groups[&EventGroupKey::new("Girls High Jump", "Indoor", "2026")];
    let teams: Vec<&str> = jump.iter().map(|c| c.team.as_str()).collect();
    assert_eq!(
        teams,
        vec!["Foxcroft Academy", "Piscataquis Community High School", "Orono High School"]
    );
}

#[test]
fn test_relays_compete_per_school() {
    let records = vec![
        performance(1u64)
            .athlete("r1", "A, B, C, D")
            .team("North")
            .event("Boys 4x200m Relay")
            .mark("1:45.00")
            .build(),
        performance(2u64)
            .athlete("r2", "E, F, G, H")
            .team("North")
            .event("Boys 4x200m Relay")
            .mark("1:43.00")
            .build(),
    ];
    let groups = build_event_groups(
        &records,
        &ConferenceRoster::open(),
        &EventCatalog::default(),
        "2024",
        "Indoor",
    );
    let relay = &groups[&EventGroupKey::new("Boys 4x200m Relay", "Indoor", "2024")];

    assert_eq!(record_ids(relay), ids(&[2]));
    assert!(relay[0].is_relay);
}

#[test]
fn test_equal_mark_keeps_first_seen() {
    let records = vec![
        performance(1u64).mark("7:00").build(),
        performance(2u64).mark("7:00.0").build(),
    ];
    let groups = build_event_groups(
        &records,
        &ConferenceRoster::open(),
        &EventCatalog::default(),
        "2024",
        "Indoor",
    );
    assert_eq!(record_ids(&groups[&EventGroupKey::new("400m", "Indoor", "2024")]), ids(&[1]));
}

#[test]
fn test_other_season_instances_are_skipped() {
    let groups = build_event_groups(
        &conference_meet(),
        &ConferenceRoster::open(),
        &EventCatalog::default(),
        "2026",
        "Outdoor",
    );
    assert!(groups.is_empty());
}

#[test]
fn test_group_key_serializes_as_label() {
    let key = EventGroupKey::new("Girls High Jump", "Indoor", "2026");
    let mut map = BTreeMap::new();
    map.insert(key, 1);
    assert_eq!(
        serde_json::to_string(&map).unwrap(),
        r#"{"Girls High Jump (Indoor 2026)":1}"#
    );
}

fn ids(values: &[u64]) -> Vec<RecordId> {
    values.iter().map(|&v| RecordId::from(v)).collect()
}

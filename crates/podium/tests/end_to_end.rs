//! Whole-pipeline checks through the facade crate.

use podium::prelude::*;
use podium::{team_meets, MeetRef};
use podium_test::{conference_meet, four_hundred_history};

fn pvc() -> MeetConfig {
    MeetConfig::load("../../config/pvc.toml").unwrap()
}

#[test]
fn test_four_hundred_season() {
    let records = four_hundred_history();

    let badges = detect_records(&records);
    assert!(badges.is_first_time(&records[0].id));
    assert!(badges.is_pr(&records[1].id));
    assert!(!badges.is_pr(&records[0].id));

    let meets = team_meets(&records, "X");
    assert_eq!(meets[0].name, "Valley Champs");

    let pops = detect_pops_for_selection(&records, "X", &MeetSelection::Latest);
    let entry = &pops.by_athlete["Sam Reed"][0];
    assert_eq!(entry.event, "400m");
    assert_eq!(entry.new_mark, "7.10");
    assert_eq!(entry.old_mark, "7.24");
    assert_eq!(entry.improvement_label, "-0.14s");
    assert_eq!(pops.total_count, 1);
}

#[test]
fn test_named_meet_without_history_has_no_pops() {
    let records = four_hundred_history();
    let opener: &MeetRef = &team_meets(&records, "X")[1];
    let selection = MeetSelection::Named {
        name: opener.name.clone(),
        day: opener.day,
    };
    assert!(detect_pops_for_selection(&records, "X", &selection).is_empty());
}

#[test]
fn test_conference_simulation() {
    let sim = simulate_meet(&conference_meet(), &pvc(), Some("2026"), Some("Indoor")).unwrap();

    assert_eq!(
        sim.missing_events,
        vec![
            "1 Mile Run",
            "2 Mile Run",
            "55m Hurdles",
            "4x800m Relay",
            "Pole Vault",
            "Long Jump",
            "Triple Jump",
            "Shot Put",
        ]
    );

    let boys: Vec<(String, String)> = sim
        .score
        .leaderboard
        .division(Gender::Boys)
        .iter()
        .map(|t| (t.team.clone(), t.total.to_string()))
        .collect();
    assert_eq!(
        boys,
        vec![
            ("Orono High School".to_string(), "30".to_string()),
            ("Bucksport High School".to_string(), "25".to_string()),
            ("Dexter Regional High School".to_string(), "15".to_string()),
            ("Central High School".to_string(), "14".to_string()),
        ]
    );

    let json = serde_json::to_value(&sim).unwrap();
    assert_eq!(json["conference"], "PVC Small Schools (Indoor 2026)");
    assert_eq!(json["score"]["leaderboard"]["girls"][0]["total"], 10.0);
}

#[test]
fn test_incomplete_simulation_request() {
    let err = simulate_meet(&conference_meet(), &pvc(), Some("2026"), None).unwrap_err();
    assert!(matches!(err, PodiumError::InvalidState(_)));
}

#[test]
fn test_json_export_round_trip() {
    let records = conference_meet();
    let json = serde_json::to_string(&records).unwrap();
    let loaded = records_from_json_str(&json).unwrap();
    assert_eq!(loaded, records);

    let view = compute_view(&loaded, &ViewFilters::new().with_team("Orono High School").prs_only());
    assert!(view.rows.iter().all(|r| r.is_pr && r.record.team == "Orono High School"));
    assert_eq!(view.facets.years, vec!["2026", "2025"]);
}

#[test]
fn test_load_errors() {
    assert!(matches!(
        load_records("does/not/exist.json"),
        Err(PodiumError::Io(_))
    ));
    assert!(matches!(
        records_from_json_str("{\"not\": \"an array\"}"),
        Err(PodiumError::Json(_))
    ));
}

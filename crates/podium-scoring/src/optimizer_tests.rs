use super::*;
use crate::catalog::EventCatalog;
use crate::conference::ConferenceRoster;
use crate::groups::build_event_groups;
use podium_config::MeetConfig;
use podium_core::{Gender, PerformanceRecord};
use podium_test::{conference_meet, performance};
use proptest::prelude::*;

fn score_open(records: &[PerformanceRecord], event_cap: usize) -> MeetScore {
    let groups = build_event_groups(
        records,
        &ConferenceRoster::open(),
        &EventCatalog::default(),
        "2024",
        "Indoor",
    );
    optimize(&groups, &ScoringTable::default(), event_cap)
}

fn pvc_score() -> MeetScore {
    let config = MeetConfig::from_toml_str(include_str!("../../../config/pvc.toml")).unwrap();
    let roster = ConferenceRoster::from_config(config.conference_for("2026", "Indoor").unwrap());
    let catalog = EventCatalog::from_config(&config.events);
    let groups = build_event_groups(&conference_meet(), &roster, &catalog, "2026", "Indoor");
    optimize(&groups, &ScoringTable::from(&config.scoring), config.scoring.event_cap)
}

fn group<'a>(score: &'a MeetScore, event: &str, year: &str) -> &'a [ScoredEntry] {
    &score.event_groups[&EventGroupKey::new(event, "Indoor", year)]
}

fn points_of(entries: &[ScoredEntry]) -> Vec<f64> {
    entries.iter().map(|e| e.points.value()).collect()
}

#[test]
fn test_two_way_tie_for_first_splits_points() {
    let records = vec![
        performance(1u64).athlete("a", "Ann").team("North").mark("7.10").build(),
        performance(2u64).athlete("b", "Bea").team("South").mark("7.10").build(),
        performance(3u64).athlete("c", "Cy").team("East").mark("7.30").build(),
    ];
    let score = score_open(&records, 3);
    let entries = group(&score, "400m", "2024");

    assert_eq!(points_of(entries), vec![9.0, 9.0, 6.0]);
    assert_eq!(entries[2].rank, Some(3));
}

#[test]
fn test_unmarked_competitors_stay_in_table() {
    let records = vec![
        performance(1u64).athlete("a", "Ann").mark("DNS").build(),
        performance(2u64).athlete("b", "Bea").mark("7.50").build(),
    ];
    let score = score_open(&records, 3);
    let entries = group(&score, "400m", "2024");

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].competitor.athlete_name, "Bea");
    assert_eq!(entries[1].raw_rank, None);
    assert_eq!(entries[1].rank, None);
    assert_eq!(entries[1].points, Points::ZERO);
    assert!(entries[1].accepted);
}

#[test]
fn test_cap_drops_lowest_sorted_action() {
    let records: Vec<_> = ["55m", "200m", "400m", "800m"]
        .into_iter()
        .enumerate()
        .map(|(i, event)| {
            performance(i as u64)
                .athlete("a", "Ann")
                .event(event)
                .mark(&format!("{}.00", 10 + i))
                .build()
        })
        .collect();
    let score = score_open(&records, 3);

    // All four are worth 10; the stable order is the sorted event order.
    let accepted: Vec<&str> = score
        .event_groups
        .values()
        .flatten()
        .filter(|e| e.accepted)
        .map(|e| e.competitor.event.as_str())
        .collect();
    assert_eq!(accepted, vec!["200m", "400m", "55m"]);
    assert_eq!(score.leaderboard.boys[0].total, Points::of(30.0));
}

#[test]
fn test_relay_is_all_or_nothing() {
    let mut records = Vec::new();
    for (i, event) in ["55m", "200m", "400m"].into_iter().enumerate() {
        records.push(
            performance(i as u64)
                .athlete("a", "Ann")
                .team("North")
                .event(event)
                .mark("9.00")
                .build(),
        );
    }
    records.push(
        performance(10u64)
            .athlete("relay", "Ann, Bea, Cy, Di")
            .team("North")
            .event("4x200m Relay")
            .mark("1:50.00")
            .build(),
    );
    let score = score_open(&records, 3);
    let relay = &group(&score, "4x200m Relay", "2024")[0];

    assert!(!relay.accepted);
    assert_eq!(relay.potential_points, Points::of(10.0));
    assert_eq!(relay.points, Points::ZERO);
}

#[test]
fn test_padded_individual_name_shares_relay_cap() {
    let records = vec![
        performance(1u64)
            .athlete("a", "  Ann ")
            .team("North")
            .event("55m")
            .mark("7.00")
            .build(),
        performance(2u64)
            .athlete("relay", "Ann, Bea")
            .team("North")
            .event("4x200m Relay")
            .mark("1:50.00")
            .build(),
    ];
    let score = score_open(&records, 1);

    assert!(group(&score, "55m", "2024")[0].accepted);
    assert!(!group(&score, "4x200m Relay", "2024")[0].accepted);
}

#[test]
fn test_relay_without_member_names_is_unconstrained() {
    let records = vec![performance(1u64)
        .athlete("relay", "North High School Relay")
        .team("North")
        .event("4x800m Relay")
        .mark("9:00.00")
        .build()];
    let score = score_open(&records, 0);

    assert!(group(&score, "4x800m Relay", "2024")[0].accepted);
    assert_eq!(score.leaderboard.boys[0].total, Points::of(10.0));
}

#[test]
fn test_empty_groups() {
    let score = optimize(&EventGroups::new(), &ScoringTable::default(), 3);
    assert!(score.event_groups.is_empty());
    assert!(score.leaderboard.is_empty());
}

#[test]
fn test_conference_meet_event_results() {
    let score = pvc_score();

    let dash = group(&score, "Boys 55m Dash", "2026");
    assert_eq!(points_of(dash), vec![10.0, 7.0, 7.0, 4.0]);

    let run = group(&score, "Boys 800m Run", "2026");
    assert!(!run[0].accepted);
    assert_eq!(run[0].raw_rank, Some(1));
    assert_eq!(run[1].competitor.athlete_name, "Ty Moss");
    assert_eq!(run[1].rank, Some(1));
    assert_eq!(points_of(run), vec![0.0, 10.0]);

    let relay = group(&score, "Boys 4x200m Relay", "2026");
    assert_eq!(points_of(relay), vec![0.0, 10.0]);

    let jump = group(&score, "Girls High Jump", "2026");
    assert_eq!(points_of(jump), vec![10.0, 8.0, 0.0]);
}

#[test]
fn test_conference_meet_leaderboard() {
    let score = pvc_score();
    let boys: Vec<(&str, f64)> = score
        .leaderboard
        .boys
        .iter()
        .map(|t| (t.team.as_str(), t.total.value()))
        .collect();
    assert_eq!(
        boys,
        vec![
            ("Orono High School", 30.0),
            ("Bucksport High School", 25.0),
            ("Dexter Regional High School", 15.0),
            ("Central High School", 14.0),
        ]
    );

    let girls = score.leaderboard.division(Gender::Girls);
    assert_eq!(girls.len(), 2);
    assert_eq!(girls[0].team, "Foxcroft Academy");
    assert_eq!(girls[1].total, Points::of(8.0));

    let bucksport = score
        .leaderboard
        .team(Gender::Boys, "Bucksport High School")
        .unwrap();
    let lines: Vec<(&str, f64)> = bucksport
        .breakdown
        .iter()
        .map(|l| (l.event.as_str(), l.points.value()))
        .collect();
    assert_eq!(
        lines,
        vec![
            ("Boys 4x200m Relay", 10.0),
            ("Boys 200m Dash", 8.0),
            ("Boys 55m Dash", 7.0),
        ]
    );
}

#[test]
fn test_scored_entries_serialize_flat() {
    let score = pvc_score();
    let json = serde_json::to_value(&score).unwrap();
    let first = &json["event_groups"]["Boys 55m Dash (Indoor 2026)"][0];

    assert_eq!(first["athlete_name"], "Eli Park");
    assert_eq!(first["points"], 10.0);
    assert_eq!(json["leaderboard"]["boys"][0]["team"], "Orono High School");
}

fn arb_field() -> impl Strategy<Value = Vec<(u8, u8, u16)>> {
    // (athlete, event, hundredths)
    proptest::collection::vec((0u8..6, 0u8..5, 700u16..760), 0..40)
}

fn field_records(rows: &[(u8, u8, u16)]) -> Vec<PerformanceRecord> {
    rows.iter()
        .enumerate()
        .map(|(i, &(athlete, event, hundredths))| {
            performance(i as u64)
                .athlete(&format!("a{athlete}"), &format!("Athlete {athlete}"))
                .team(&format!("Team {}", athlete % 3))
                .event(["55m", "200m", "400m", "800m", "Mile"][event as usize])
                .mark(&format!("{}.{:02}", hundredths / 100, hundredths % 100))
                .build()
        })
        .collect()
}

proptest! {
    #[test]
    fn accepted_events_never_exceed_cap(rows in arb_field(), cap in 1usize..4) {
        let score = score_open(&field_records(&rows), cap);
        let mut per_athlete: HashMap<&str, usize> = HashMap::new();
        for entry in score.event_groups.values().flatten().filter(|e| e.accepted) {
            *per_athlete.entry(entry.competitor.athlete_name.as_str()).or_default() += 1;
        }
        prop_assert!(per_athlete.values().all(|&n| n <= cap));
    }

    #[test]
    fn group_points_never_exceed_table(rows in arb_field()) {
        let table = ScoringTable::default();
        let score = score_open(&field_records(&rows), 3);
        for entries in score.event_groups.values() {
            let awarded: f64 = entries.iter().map(|e| e.points.value()).sum();
            prop_assert!(awarded <= table.total().value() + 1e-9);
        }
    }

    #[test]
    fn leaderboard_matches_awarded_points(rows in arb_field()) {
        let score = score_open(&field_records(&rows), 2);
        let board: f64 = score.leaderboard.boys.iter().map(|t| t.total.value()).sum();
        prop_assert!((board - score.total_points().value()).abs() < 1e-9);
    }
}

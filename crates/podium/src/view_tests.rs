use super::*;
use podium_test::{four_hundred_history, performance};

fn season_mix() -> Vec<PerformanceRecord> {
    vec![
        performance(1u64).athlete("a1", "Sam Reed").event("55m").mark("7.40").date("2023-01-14").season("2023 Indoor").meet("Opener").build(),
        performance(2u64).athlete("a1", "Sam Reed").event("55m").mark("7.20").date("2024-01-13").season("2024 Indoor").meet("Opener").build(),
        performance(3u64).athlete("a1", "Sam Reed").event("Long Jump").mark("17' 2\"").date("2024-04-20").season("Outdoor").year("2024").meet("Relays").build(),
        performance(4u64).athlete("a2", "Ada Park").team("Y").event("55m").mark("7.30").date("2024-01-13").season("2024 Indoor").meet("Opener").build(),
        performance(5u64).athlete("a2", "Ada Park").team("Y").event("55m").mark("7.10").date("2024-02-03").season("2024 Indoor").meet("Champs").build(),
    ]
}

fn ids(view: &PerformanceView) -> Vec<u64> {
    view.rows
        .iter()
        .map(|r| r.record.id.as_str().parse().unwrap())
        .collect()
}

#[test]
fn test_rows_carry_badges_and_labels() {
    let view = compute_view(&four_hundred_history(), &ViewFilters::new());
    let latest = &view.rows[0];

    assert_eq!(latest.record.mark, "7.10");
    assert_eq!(latest.meet_label, "Valley Champs (2024)");
    assert_eq!(latest.derived_type, "Indoor");
    assert!(latest.is_pr && latest.is_sb && !latest.is_first_time);
    assert!(view.rows[1].is_first_time);
}

#[test]
fn test_default_sort_is_latest_first() {
    let view = compute_view(&season_mix(), &ViewFilters::new());
    assert_eq!(ids(&view), vec![3, 5, 2, 4, 1]);
}

#[test]
fn test_mark_sort_directions() {
    let filters = ViewFilters::new().with_event("55m");

    let best_first = compute_view(&season_mix(), &filters.clone().sorted_by(SortField::Mark, SortDirection::Descending));
    assert_eq!(ids(&best_first), vec![5, 2, 4, 1]);

    let worst_first = compute_view(&season_mix(), &filters.sorted_by(SortField::Mark, SortDirection::Ascending));
    assert_eq!(ids(&worst_first), vec![1, 4, 2, 5]);
}

#[test]
fn test_facets_ignore_their_own_filter() {
    let filters = ViewFilters::new().with_year("2024").with_event("55m");
    let view = compute_view(&season_mix(), &filters);

    assert_eq!(ids(&view), vec![5, 2, 4]);
    assert_eq!(view.facets.years, vec!["2024", "2023"]);
    assert_eq!(view.facets.events, vec!["55m", "Long Jump"]);
    assert_eq!(view.facets.season_types, vec!["Indoor"]);
    assert_eq!(view.facets.meets, vec!["Champs (2024)", "Opener (2024)"]);
}

#[test]
fn test_team_filter_applies_to_facets() {
    let view = compute_view(&season_mix(), &ViewFilters::new().with_team("Y"));
    assert_eq!(ids(&view), vec![5, 4]);
    assert_eq!(view.facets.years, vec!["2024"]);
    assert_eq!(view.facets.events, vec!["55m"]);
}

#[test]
fn test_athlete_scope_and_prs_only() {
    let filters = ViewFilters::new().with_athlete("a1").prs_only();
    let view = compute_view(&season_mix(), &filters);

    // 55m Indoor PR and the outdoor long jump.
    assert_eq!(ids(&view), vec![3, 2]);
    assert!(view.badges.all_time_best_ids.iter().all(|id| id.as_str() != "5"));
}

#[test]
fn test_teams_and_athletes() {
    let mut records = season_mix();
    records.push(performance(6u64).athlete("a3", "Bo Lee").team("").build());

    assert_eq!(teams(&records), vec!["X".to_string(), "Y".to_string()]);

    let everyone: Vec<String> = athletes(&records, None).into_iter().map(|a| a.name).collect();
    assert_eq!(everyone, vec!["Ada Park", "Bo Lee", "Sam Reed"]);

    let team_x = athletes(&records, Some("X"));
    assert_eq!(team_x.len(), 1);
    assert_eq!(team_x[0].id, AthleteId::from("a1"));
}

#[test]
fn test_unknown_years_sort_last() {
    let mut years = vec!["Unknown".to_string(), "2023".to_string(), "2025".to_string()];
    years.sort_by(|a, b| newest_year_first(a, b));
    assert_eq!(years, vec!["2025", "2023", "Unknown"]);
}

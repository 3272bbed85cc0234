//! Meet Report
//!
//! Reads an exported record collection and prints, for one team, the PRs
//! popped at its latest meet and a simulated conference championship for
//! the season of that meet.
//!
//! ```text
//! meet-report <records.json> <team> [config.toml]
//! ```

use std::process::ExitCode;

use podium::prelude::*;
use podium::{team_meets, Leaderboard, PopReport, Simulation};

const DEFAULT_CONFIG: &str = "config/pvc.toml";

fn main() -> ExitCode {
    podium::console::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (Some(records_path), Some(team)) = (args.first(), args.get(1)) else {
        eprintln!("usage: meet-report <records.json> <team> [config.toml]");
        return ExitCode::from(2);
    };
    let config_path = args.get(2).map_or(DEFAULT_CONFIG, String::as_str);

    match run(records_path, team, config_path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("meet-report: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(records_path: &str, team: &str, config_path: &str) -> podium::Result<()> {
    let records = load_records(records_path)?;
    let config = MeetConfig::load(config_path).unwrap_or_else(|err| {
        eprintln!("meet-report: {err}; using default scoring");
        MeetConfig::default()
    });

    let pops = detect_pops_for_selection(&records, team, &MeetSelection::Latest);
    print_pops(team, &pops);

    // Simulate the season of the team's latest meet.
    let Some(latest) = team_meets(&records, team).into_iter().next() else {
        println!("\nNo dated meets for {team}; nothing to simulate.");
        return Ok(());
    };
    let season = records
        .iter()
        .find(|r| r.team == team && r.meet_name == latest.name && r.day() == Some(latest.day))
        .map(|r| r.season_key())
        .unwrap_or_else(|| SeasonKey::new("Unknown", "Unknown"));

    let simulation = simulate_meet(
        &records,
        &config,
        Some(season.year.as_str()),
        Some(season.season_type.as_str()),
    )?;
    print_simulation(&simulation);
    Ok(())
}

fn print_pops(team: &str, report: &PopReport) {
    if report.is_empty() {
        println!("\n{team}: no PRs at {}", display_meet(&report.meet_name));
        return;
    }
    println!(
        "\n{team}: {} PRs at {}",
        report.total_count, report.meet_name
    );
    for (athlete, entries) in &report.by_athlete {
        println!("  {athlete}");
        for pop in entries {
            println!(
                "    {:<20} {:>10}  (was {}, {})",
                pop.event, pop.new_mark, pop.old_mark, pop.improvement_label
            );
        }
    }
}

fn display_meet(name: &str) -> &str {
    if name.is_empty() {
        "the latest meet"
    } else {
        name
    }
}

fn print_simulation(simulation: &Simulation) {
    println!(
        "\n{} - {} {}",
        simulation.conference, simulation.season_type, simulation.year
    );
    print_division("Boys", &simulation.score.leaderboard, Gender::Boys);
    print_division("Girls", &simulation.score.leaderboard, Gender::Girls);

    if !simulation.missing_events.is_empty() {
        println!("\nNo results yet: {}", simulation.missing_events.join(", "));
    }
}

fn print_division(label: &str, leaderboard: &Leaderboard, gender: Gender) {
    let teams = leaderboard.division(gender);
    if teams.is_empty() {
        return;
    }
    println!("{}", "-".repeat(40));
    println!("{label}");
    for (place, team) in teams.iter().enumerate() {
        println!("  {:>2}. {:<30} {:>6}", place + 1, team.team, team.total);
    }
}

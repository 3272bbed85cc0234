//! Colorful console output for Podium engine events.
//!
//! Provides a custom `tracing` layer that formats engine events with colors.
//!
//! ## Log Levels
//!
//! - **INFO**: Simulation lifecycle (start, groups built, meet scored)
//! - **DEBUG**: Record, pop and view computations
//! - **TRACE**: Individual event-cap decisions

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();

/// Package version for banner display.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default filter when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "podium=info";

/// Initializes the console output.
///
/// Safe to call multiple times - only the first call has effect.
/// Prints the Podium banner and sets up tracing.
pub fn init() {
    INIT.get_or_init(|| {
        EPOCH.get_or_init(Instant::now);
        print_banner();

        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(DEFAULT_FILTER))
            .unwrap_or_else(|_| EnvFilter::default().add_directive(LevelFilter::INFO.into()));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(PodiumConsoleLayer)
            .try_init();
    });
}

// Returns elapsed time since init.
fn elapsed_secs() -> f64 {
    EPOCH.get().map_or(0.0, |epoch| epoch.elapsed().as_secs_f64())
}

fn print_banner() {
    let banner = r#"
 ____           _ _
|  _ \ ___   __| (_)_   _ _ __ ___
| |_) / _ \ / _` | | | | | '_ ` _ \
|  __/ (_) | (_| | | |_| | | | | | |
|_|   \___/ \__,_|_|\__,_|_| |_| |_|
"#;

    let version_line = format!("      v{} - Track & Field Meet Scoring\n", VERSION);

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", banner.bright_cyan());
    let _ = writeln!(stdout, "{}", version_line.bright_white().bold());
    let _ = stdout.flush();
}

/// A tracing layer that formats Podium events with colors.
pub struct PodiumConsoleLayer;

impl<S: Subscriber> Layer<S> for PodiumConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();

        // Accept events from engine crates
        if !metadata.target().starts_with("podium") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor, *metadata.level());
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    conference: Option<String>,
    year: Option<String>,
    season: Option<String>,
    team: Option<String>,
    meet: Option<String>,
    day: Option<String>,
    group: Option<String>,
    athlete: Option<String>,
    points: Option<String>,
    accepted: Option<bool>,
    records: Option<u64>,
    first_time: Option<u64>,
    prs: Option<u64>,
    season_bests: Option<u64>,
    pops: Option<u64>,
    athletes: Option<u64>,
    groups: Option<u64>,
    competitors: Option<u64>,
    actions: Option<u64>,
    accepted_actions: Option<u64>,
    event_cap: Option<u64>,
    boys_teams: Option<u64>,
    girls_teams: Option<u64>,
    rows: Option<u64>,
    missing_events: Option<u64>,
}

impl EventVisitor {
    fn text(&mut self, name: &str, value: String) {
        match name {
            "event" => self.event = Some(value),
            "conference" => self.conference = Some(value),
            "year" => self.year = Some(value),
            "season" => self.season = Some(value),
            "team" => self.team = Some(value),
            "meet" => self.meet = Some(value),
            "day" => self.day = Some(value),
            "group" => self.group = Some(value),
            "athlete" => self.athlete = Some(value),
            "points" => self.points = Some(value),
            _ => {}
        }
    }
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        self.text(field.name(), s.trim_matches('"').to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "records" => self.records = Some(value),
            "first_time" => self.first_time = Some(value),
            "prs" => self.prs = Some(value),
            "season_bests" => self.season_bests = Some(value),
            "pops" => self.pops = Some(value),
            "athletes" => self.athletes = Some(value),
            "groups" => self.groups = Some(value),
            "competitors" => self.competitors = Some(value),
            "actions" => self.actions = Some(value),
            "accepted_actions" => self.accepted_actions = Some(value),
            "event_cap" => self.event_cap = Some(value),
            "boys_teams" => self.boys_teams = Some(value),
            "girls_teams" => self.girls_teams = Some(value),
            "rows" => self.rows = Some(value),
            "missing_events" => self.missing_events = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value as u64);
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        if field.name() == "accepted" {
            self.accepted = Some(value);
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.text(field.name(), value.to_string());
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    let event = v.event.as_deref().unwrap_or("");

    match event {
        "simulation_start" => format_simulation_start(v),
        "groups_built" => format_groups_built(v),
        "meet_scored" => format_meet_scored(v),
        "simulation_end" => format_simulation_end(v),
        "records_detected" => format_records_detected(v),
        "pops_detected" => format_pops_detected(v),
        "view_computed" => format_view_computed(v),
        "action" => format_action(v, level),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn count(value: Option<u64>) -> String {
    value.unwrap_or(0).to_formatted_string(&Locale::en)
}

fn format_simulation_start(v: &EventVisitor) -> String {
    format!(
        "{} {} Simulating │ {} {} │ {} records",
        format_elapsed(),
        "▶".bright_green().bold(),
        v.season.as_deref().unwrap_or("?").white().bold(),
        v.year.as_deref().unwrap_or("?").white().bold(),
        count(v.records).bright_yellow(),
    )
}

fn format_groups_built(v: &EventVisitor) -> String {
    format!(
        "{} {} {} │ {} events │ {} competitors │ {} records",
        format_elapsed(),
        "▶".bright_blue(),
        v.conference.as_deref().unwrap_or("Conference").white().bold(),
        count(v.groups).bright_yellow(),
        count(v.competitors).bright_yellow(),
        count(v.records).bright_black(),
    )
}

fn format_meet_scored(v: &EventVisitor) -> String {
    format!(
        "{} {} Scored │ {}/{} entries within cap {} │ {} boys teams │ {} girls teams",
        format_elapsed(),
        "◀".bright_blue(),
        count(v.accepted_actions).bright_magenta().bold(),
        count(v.actions).white(),
        count(v.event_cap).bright_yellow(),
        count(v.boys_teams).white(),
        count(v.girls_teams).white(),
    )
}

fn format_simulation_end(v: &EventVisitor) -> String {
    let missing = v.missing_events.unwrap_or(0);
    let status = if missing == 0 {
        "COMPLETE".bright_green().bold().to_string()
    } else {
        format!("{} EVENTS MISSING", missing).yellow().bold().to_string()
    };
    format!(
        "{} {} Simulation complete │ {}",
        format_elapsed(),
        "■".bright_cyan().bold(),
        status,
    )
}

fn format_records_detected(v: &EventVisitor) -> String {
    format!(
        "{} {} {} records │ {} first-time │ {} PRs │ {} SBs",
        format_elapsed(),
        "•".bright_cyan(),
        count(v.records).white(),
        count(v.first_time).bright_yellow(),
        count(v.prs).bright_green(),
        count(v.season_bests).bright_magenta(),
    )
}

fn format_pops_detected(v: &EventVisitor) -> String {
    format!(
        "{} {} {} @ {} ({}) │ {} pops │ {} athletes",
        format_elapsed(),
        "⚡".bright_cyan(),
        v.team.as_deref().unwrap_or("?").white().bold(),
        v.meet.as_deref().unwrap_or("?"),
        v.day.as_deref().unwrap_or("?").bright_black(),
        count(v.pops).bright_green().bold(),
        count(v.athletes).white(),
    )
}

fn format_view_computed(v: &EventVisitor) -> String {
    format!(
        "{} {} View │ {} rows of {} records",
        format_elapsed(),
        "•".bright_cyan(),
        count(v.rows).white(),
        count(v.records).bright_black(),
    )
}

fn format_action(v: &EventVisitor, level: Level) -> String {
    if level != Level::TRACE {
        return String::new();
    }

    let icon = if v.accepted.unwrap_or(false) {
        "✓".bright_green().to_string()
    } else {
        "✗".bright_red().to_string()
    };

    format!(
        "{} {} {:<24} │ {:<32} │ {} pts",
        format_elapsed(),
        icon,
        v.athlete.as_deref().unwrap_or("?").bright_black(),
        v.group.as_deref().unwrap_or("?").bright_black(),
        v.points.as_deref().unwrap_or("0"),
    )
}

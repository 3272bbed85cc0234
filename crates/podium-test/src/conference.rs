//! A small conference championship field for the 2026 indoor season.
//!
//! Teams use the school names of `config/pvc.toml`. The field exercises the
//! parts of a meet simulation that are easy to get wrong:
//!
//! - Eli Park (Orono) wins four individual events and anchors a relay, so
//!   the event cap drops his slowest-sorted entries.
//! - Jon Hale and Max Cole tie for second in the 55m.
//! - Ned Fox runs for Maine Central Institute, which must not resolve to
//!   Central High School.
//! - Mae Dorr's team is spelled `Piscataquis CHS`.
//! - A pentathlon and a 2025 result are filtered out.

use podium_core::PerformanceRecord;

use crate::builder::performance;

const ORONO: &str = "Orono High School";
const BUCKSPORT: &str = "Bucksport High School";
const DEXTER: &str = "Dexter Regional High School";
const CENTRAL: &str = "Central High School";

fn indoor(id: u64, athlete: (&str, &str), team: &str, event: &str, mark: &str) -> PerformanceRecord {
    performance(id)
        .athlete(athlete.0, athlete.1)
        .team(team)
        .event(event)
        .mark(mark)
        .date("2026-01-24")
        .season("2026 Indoor")
        .meet("PVC Qualifier")
        .build()
}

/// Returns the championship field.
///
/// Expected boys leaderboard with `[10, 8, 6, 4, 2, 1]` and a cap of 3:
/// Orono 30, Bucksport 25, Dexter 15, Central 14. Girls: Foxcroft 10,
/// Piscataquis 8.
pub fn conference_meet() -> Vec<PerformanceRecord> {
    let eli = ("b-eli", "Eli Park");
    let jon = ("b-jon", "Jon Hale");
    let max = ("b-max", "Max Cole");
    let ty = ("b-ty", "Ty Moss");
    vec![
        indoor(1, eli, ORONO, "Boys 55m Dash", "6.70"),
        indoor(2, jon, BUCKSPORT, "Boys 55m Dash", "6.80"),
        indoor(3, max, DEXTER, "Boys 55m Dash", "6.80"),
        indoor(4, ("b-ned", "Ned Fox"), "Maine Central Institute", "Boys 55m Dash", "6.50"),
        indoor(5, ty, CENTRAL, "Boys 55m Dash", "7.00"),
        indoor(6, eli, ORONO, "Boys 55m Dash", "6.90"),
        indoor(7, eli, ORONO, "Boys 200m Dash", "23.90"),
        indoor(8, jon, BUCKSPORT, "Boys 200m Dash", "24.50"),
        indoor(9, eli, ORONO, "Boys 400m Dash", "53.10"),
        indoor(10, max, DEXTER, "Boys 400m Dash", "54.00"),
        indoor(11, eli, ORONO, "Boys 800m Run", "2:05.00"),
        indoor(12, ty, CENTRAL, "Boys 800m Run", "2:10.00"),
        indoor(
            13,
            ("relay-orono", "Eli Park, Sam Roy, Orono High School"),
            ORONO,
            "Boys 4x200m Relay",
            "1:40.00",
        ),
        indoor(
            14,
            ("relay-bucksport", "Jon Hale, Ben Ash"),
            BUCKSPORT,
            "Boys 4x200m Relay",
            "1:42.00",
        ),
        indoor(15, ("g-ivy", "Ivy Lane"), "Foxcroft Academy", "Girls High Jump", "5' 2\""),
        indoor(16, ("g-mae", "Mae Dorr"), "Piscataquis CHS", "Girls High Jump", "5-0"),
        indoor(17, ("g-liz", "Liz Wren"), ORONO, "Girls High Jump", "NH"),
        indoor(18, ("g-ivy", "Ivy Lane"), "Foxcroft Academy", "Girls Pentathlon", "2500"),
        performance(19u64)
            .athlete(eli.0, eli.1)
            .team(ORONO)
            .event("Boys 55m Dash")
            .mark("6.60")
            .date("2025-02-01")
            .season("2025 Indoor")
            .meet("PVC Championship")
            .build(),
    ]
}

//! One athlete improving over a season.

use podium_core::PerformanceRecord;

use crate::builder::performance;

/// Sam Reed (team `X`) runs `7.24` on 2024-01-10 and `7.10` on 2024-02-10.
///
/// Record `1` is the first-time result, record `2` is the PR and a pop at
/// `Valley Champs`.
pub fn four_hundred_history() -> Vec<PerformanceRecord> {
    vec![
        performance(1u64)
            .athlete("a1", "Sam Reed")
            .mark("7.24")
            .date("2024-01-10")
            .meet("Winter Opener")
            .build(),
        performance(2u64)
            .athlete("a1", "Sam Reed")
            .mark("7.10")
            .date("2024-02-10")
            .meet("Valley Champs")
            .build(),
    ]
}

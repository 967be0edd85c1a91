// Test fixtures - reusable test data
// Provides consistent dates and tag lists across integration tests

#![allow(dead_code)]

use chrono::NaiveDate;
use floating_calendar::models::project::ProjectTag;

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Jan 1, 2025 (a Wednesday)
    pub fn jan_1_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
    }

    /// Jan 3, 2025
    pub fn jan_3_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 3).unwrap()
    }

    /// Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    }
}

/// Tag lists of the sizes the layout switches on
pub mod tags {
    use super::*;

    const NAMES: [&str; 10] = [
        "Fabrication",
        "Installation",
        "Completed",
        "Overdue",
        "Delay",
        "Inspection",
        "Handover",
        "Extra",
        "Tentative",
        "Extra",
    ];

    /// The first `n` known tags, repeating the list when `n > 10`.
    pub fn first(n: usize) -> Vec<ProjectTag> {
        NAMES.iter().cycle().take(n).map(|n| ProjectTag::new(*n)).collect()
    }

    pub fn unknown(n: usize) -> Vec<ProjectTag> {
        (0..n).map(|i| ProjectTag::new(format!("Mystery{}", i))).collect()
    }
}

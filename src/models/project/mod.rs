// Project model
// Tags per calendar date, replaced wholesale

use std::collections::BTreeMap;
use std::fmt;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::utils::date::parse_iso;

/// A project or status category such as "Fabrication" or "Overdue".
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectTag(String);

impl ProjectTag {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProjectTag {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ProjectTag {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Ordered project tags for each calendar date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateProjectIndex {
    entries: BTreeMap<NaiveDate, Vec<ProjectTag>>,
}

impl DateProjectIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from ISO `yyyy-mm-dd` keys. Keys that do not parse are skipped.
    pub fn from_iso_map<K, V, T>(map: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: IntoIterator<Item = T>,
        T: Into<ProjectTag>,
    {
        let mut entries = BTreeMap::new();
        for (key, tags) in map {
            let key = key.as_ref();
            match parse_iso(key) {
                Some(date) => {
                    entries.insert(date, tags.into_iter().map(Into::into).collect());
                }
                None => log::warn!("Skipping project entry with invalid date key '{}'", key),
            }
        }
        Self { entries }
    }

    /// Replace every entry with `other`.
    pub fn replace(&mut self, other: DateProjectIndex) {
        *self = other;
    }

    /// Tags for `date` in their original order; empty when none are assigned.
    pub fn tags_for(&self, date: NaiveDate) -> &[ProjectTag] {
        self.entries.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sample data centred on `today`: one date for each layout (strips,
    /// partly filled grid, grid with overflow badge).
    pub fn demo(today: NaiveDate) -> Self {
        let day = |offset: i64| today + Duration::days(offset);
        let tags = |names: &[&str]| -> Vec<ProjectTag> {
            names.iter().map(|n| ProjectTag::new(*n)).collect()
        };

        let mut entries = BTreeMap::new();
        entries.insert(day(-1), tags(&["Fabrication"]));
        entries.insert(
            day(0),
            tags(&["Fabrication", "Installation", "Inspection", "Extra"]),
        );
        entries.insert(
            day(2),
            tags(&[
                "Installation",
                "Completed",
                "Delay",
                "Handover",
                "Extra",
                "Inspection",
            ]),
        );
        entries.insert(
            day(5),
            tags(&[
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
            ]),
        );
        Self { entries }
    }
}

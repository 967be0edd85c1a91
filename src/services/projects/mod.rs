//! Loading the date → project tags map from disk.
//!
//! The file is a JSON object keyed by ISO date:
//!
//! ```json
//! { "2025-11-14": ["Fabrication", "Installation"] }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::project::DateProjectIndex;

pub fn parse_projects(json: &str) -> Result<DateProjectIndex> {
    let raw: BTreeMap<String, Vec<String>> =
        serde_json::from_str(json).context("projects file must map ISO dates to tag lists")?;
    Ok(DateProjectIndex::from_iso_map(raw))
}

pub fn load_projects(path: &Path) -> Result<DateProjectIndex> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read projects from {}", path.display()))?;
    let index = parse_projects(&data)
        .with_context(|| format!("failed to parse projects in {}", path.display()))?;
    log::info!(
        "Loaded project tags for {} dates from {}",
        index.len(),
        path.display()
    );
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::project::ProjectTag;
    use chrono::NaiveDate;

    #[test]
    fn parses_iso_keyed_object() {
        let index = parse_projects(r#"{"2025-11-14": ["Fabrication", "Installation"], "2025-11-15": []}"#)
            .unwrap();
        let date = NaiveDate::from_ymd_opt(2025, 11, 14).unwrap();
        assert_eq!(index.len(), 2);
        assert_eq!(
            index.tags_for(date),
            &[ProjectTag::new("Fabrication"), ProjectTag::new("Installation")]
        );
    }

    #[test]
    fn bad_keys_are_dropped_not_fatal() {
        let index = parse_projects(r#"{"tomorrow": ["Delay"], "2025-01-01": ["Delay"]}"#).unwrap();
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn wrong_shape_is_an_error() {
        assert!(parse_projects(r#"["2025-01-01"]"#).is_err());
        assert!(parse_projects(r#"{"2025-01-01": "Delay"}"#).is_err());
    }

    #[test]
    fn missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("projects.json");
        let err = load_projects(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("projects.json"));
    }

    #[test]
    fn loads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("projects.json");
        fs::write(&path, r#"{"2025-03-01": ["Overdue"]}"#).unwrap();
        assert_eq!(load_projects(&path).unwrap().len(), 1);
    }
}

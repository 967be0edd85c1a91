// Integration tests for selection export, settings persistence and project loading
mod fixtures;

use std::collections::BTreeMap;

use chrono::Datelike;
use fixtures::{dates, tags};
use floating_calendar::models::project::{DateProjectIndex, ProjectTag};
use floating_calendar::models::selection::Selection;
use floating_calendar::models::settings::Settings;
use floating_calendar::services::export::{clipboard_text, export_csv, ExportError};
use floating_calendar::services::projects::load_projects;
use floating_calendar::services::settings::SettingsService;
use pretty_assertions::assert_eq;

#[test]
fn test_click_range_then_export_csv() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dates.csv");

    let mut selection = Selection::default();
    selection.click(dates::jan_3_2025());
    selection.click(dates::jan_1_2025());
    assert_eq!(selection.describe(), "Range: 2025-01-01 → 2025-01-03");

    let rows = export_csv(&selection, &path).expect("export should succeed");
    assert_eq!(rows, 3);
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "2025-01-01\n2025-01-02\n2025-01-03\n"
    );
}

#[test]
fn test_single_date_clipboard_and_csv() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("one.csv");

    let mut selection = Selection::default();
    selection.click(dates::leap_day_2024());

    assert_eq!(clipboard_text(&selection).as_deref(), Some("2024-02-29"));
    assert_eq!(export_csv(&selection, &path).unwrap(), 1);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "2024-02-29\n");
}

#[test]
fn test_export_failures_are_typed() {
    let dir = tempfile::tempdir().unwrap();

    let empty = Selection::default();
    assert!(matches!(
        export_csv(&empty, &dir.path().join("x.csv")),
        Err(ExportError::EmptySelection)
    ));

    let selection = Selection::range(dates::jan_1_2025(), dates::jan_3_2025());
    let missing_dir = dir.path().join("no-such-dir").join("x.csv");
    match export_csv(&selection, &missing_dir) {
        Err(ExportError::Io { path, .. }) => assert_eq!(path, missing_dir),
        other => panic!("expected an I/O error, got {:?}", other),
    }
}

#[test]
fn test_settings_persistence() {
    let dir = tempfile::tempdir().unwrap();
    let service = SettingsService::new(dir.path().join("config").join("settings.toml"));

    // First launch writes defaults
    let settings = service.load_or_default();
    assert_eq!(settings, Settings::default());
    assert!(service.path().exists());

    let mut changed = settings.clone();
    changed.always_on_top = false;
    changed.opacity = 0.8;
    changed
        .palette_overrides
        .insert("Delay".to_string(), "#ff00ff".to_string());
    service.update(&changed).expect("Failed to update settings");

    let loaded = service.get().expect("Failed to load settings");
    assert_eq!(loaded, changed);
    assert_eq!(
        loaded.palette().color_for(&ProjectTag::new("Delay")).to_hex(),
        "#ff00ff"
    );
}

#[test]
fn test_partial_settings_file_takes_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "opacity = 0.5\nlegend = [\"Delay\"]\n").unwrap();

    let loaded = SettingsService::new(&path).get().unwrap();
    assert_eq!(loaded.opacity, 0.5);
    assert_eq!(loaded.legend, vec!["Delay".to_string()]);
    assert_eq!(loaded.window_width, Settings::default().window_width);
    assert!(loaded.always_on_top);
}

#[test]
fn test_invalid_settings_fall_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "opacity = 3.0\n").unwrap();

    let service = SettingsService::new(&path);
    assert!(service.get().is_err());
    assert_eq!(service.load_or_default(), Settings::default());
}

#[test]
fn test_projects_file_replaces_index() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("projects.json");
    std::fs::write(
        &path,
        r#"{"2025-01-01": ["Fabrication", "Overdue"], "soon": ["Delay"]}"#,
    )
    .unwrap();

    let mut index = DateProjectIndex::demo(dates::jan_3_2025());
    assert!(!index.is_empty());
    index.replace(load_projects(&path).unwrap());

    assert_eq!(index.len(), 1);
    assert_eq!(
        index.tags_for(dates::jan_1_2025()),
        &[ProjectTag::new("Fabrication"), ProjectTag::new("Overdue")]
    );
    assert!(index.tags_for(dates::jan_3_2025()).is_empty());
}

#[test]
fn test_iso_map_skips_bad_keys() {
    let mut map = BTreeMap::new();
    map.insert("2025-01-01", vec!["Delay"]);
    map.insert("01/02/2025", vec!["Delay"]);
    let index = DateProjectIndex::from_iso_map(map);
    assert_eq!(index.len(), 1);
}

#[test]
fn test_fixture_dates_are_valid() {
    assert_eq!(dates::jan_1_2025().year(), 2025);
    assert_eq!(dates::jan_3_2025().day(), 3);
    assert_eq!(dates::leap_day_2024().day(), 29);
}

#[test]
fn test_fixture_tags_cycle() {
    assert_eq!(tags::first(12).len(), 12);
    assert_eq!(tags::first(11)[10].as_str(), "Fabrication");
}

// Settings module
// Persisted window and palette preferences

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::models::palette::{ColorPalette, Rgb};

/// Smallest full-window inner size the calendar grid still fits in
pub const MIN_WINDOW_WIDTH: f32 = 240.0;
pub const MIN_WINDOW_HEIGHT: f32 = 200.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub always_on_top: bool,
    /// Window opacity in `0.2..=1.0`
    pub opacity: f32,
    /// Distance from a screen edge that triggers snapping after a drag
    pub snap_margin: f32,
    /// Gap left between a snapped window and the screen edge
    pub snap_inset: f32,
    /// Gap from the bottom-right corner for the initial position and mini bar
    pub screen_margin: f32,
    pub window_width: f32,
    pub window_height: f32,
    /// Tags shown in the footer legend
    pub legend: Vec<String>,
    pub export_file_name: String,
    /// JSON file mapping ISO dates to project tags
    pub projects_file: Option<PathBuf>,
    pub show_demo_projects: bool,
    /// Maximum rows listed in the project popup
    pub project_popup_limit: usize,
    /// Tag name to `#rrggbb`; kept last so it serializes as a trailing table
    pub palette_overrides: BTreeMap<String, String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            always_on_top: true,
            opacity: 0.96,
            snap_margin: 24.0,
            snap_inset: 8.0,
            screen_margin: 24.0,
            window_width: 380.0,
            window_height: 460.0,
            legend: ["Fabrication", "Overdue", "Completed", "Inspection"]
                .into_iter()
                .map(String::from)
                .collect(),
            export_file_name: "dates.csv".to_string(),
            projects_file: None,
            show_demo_projects: true,
            project_popup_limit: 20,
            palette_overrides: BTreeMap::new(),
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), String> {
        if !(0.2..=1.0).contains(&self.opacity) {
            return Err(format!("opacity {} must be between 0.2 and 1.0", self.opacity));
        }
        if self.snap_margin < 0.0 || self.snap_inset < 0.0 || self.screen_margin < 0.0 {
            return Err("margins must not be negative".to_string());
        }
        if self.window_width < MIN_WINDOW_WIDTH || self.window_height < MIN_WINDOW_HEIGHT {
            return Err(format!(
                "window size {}x{} is smaller than {}x{}",
                self.window_width, self.window_height, MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT
            ));
        }
        if self.export_file_name.trim().is_empty() {
            return Err("export file name must not be empty".to_string());
        }
        for (tag, hex) in &self.palette_overrides {
            hex.parse::<Rgb>()
                .map_err(|e| format!("palette override for '{}': {}", tag, e))?;
        }
        Ok(())
    }

    pub fn palette(&self) -> ColorPalette {
        ColorPalette::with_overrides(&self.palette_overrides)
    }
}

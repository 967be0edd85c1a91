use std::path::Path;

use super::FloatingCalendarApp;
use crate::services::export::{self, ExportError};

const NO_SELECTION: &str = "No dates selected.";

/// Copy and CSV export of the current selection.
impl FloatingCalendarApp {
    pub(super) fn copy_selection(&mut self, ctx: &egui::Context) {
        let Some(text) = export::clipboard_text(&self.selection) else {
            self.toast_manager.info(NO_SELECTION);
            return;
        };
        log::info!("Copied selection to clipboard: {}", text);
        self.toast_manager.success(format!("Copied: {}", text));
        ctx.output_mut(|o| o.copied_text = text);
    }

    pub(super) fn export_selection_csv(&mut self) {
        if self.selection.is_empty() {
            self.toast_manager.info(NO_SELECTION);
            return;
        }

        if let Some(path) = rfd::FileDialog::new()
            .set_title("Save CSV")
            .set_file_name(&self.settings.export_file_name)
            .add_filter("CSV Files", &["csv"])
            .add_filter("All Files", &["*"])
            .save_file()
        {
            self.write_selection_csv(&path);
        }
    }

    /// Write the selection to `path` and report the outcome.
    pub(super) fn write_selection_csv(&mut self, path: &Path) {
        match export::export_csv(&self.selection, path) {
            Ok(rows) => {
                self.toast_manager
                    .success(format!("Saved {} rows to {}", rows, path.display()));
            }
            Err(ExportError::EmptySelection) => {
                self.toast_manager.info(NO_SELECTION);
            }
            Err(e) => {
                log::error!("CSV export failed: {}", e);
                self.toast_manager.error(format!("Export failed: {}", e));
                show_error_dialog(&format!("Could not save file: {}", e));
            }
        }
    }
}

fn show_error_dialog(message: &str) {
    // Tests run headless
    if cfg!(test) {
        return;
    }
    rfd::MessageDialog::new()
        .set_level(rfd::MessageLevel::Error)
        .set_title("Error")
        .set_description(message)
        .set_buttons(rfd::MessageButtons::Ok)
        .show();
}

#[cfg(test)]
mod tests {
    use super::super::test_app;
    use crate::models::selection::Selection;
    use chrono::NaiveDate;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn copy_puts_iso_dates_on_the_clipboard() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(&dir.path().join("settings.toml"));
        app.selection = Selection::range(ymd(2025, 1, 1), ymd(2025, 1, 2));

        let ctx = egui::Context::default();
        let output = ctx.run(Default::default(), |ctx| app.copy_selection(ctx));
        assert_eq!(output.platform_output.copied_text, "2025-01-01,2025-01-02");
    }

    #[test]
    fn copy_without_selection_leaves_clipboard_alone() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(&dir.path().join("settings.toml"));

        let ctx = egui::Context::default();
        let output = ctx.run(Default::default(), |ctx| app.copy_selection(ctx));
        assert!(output.platform_output.copied_text.is_empty());
        assert_eq!(
            app.toast_manager.latest().map(|t| t.message.as_str()),
            Some("No dates selected.")
        );
    }

    #[test]
    fn write_reports_rows_and_survives_failures() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(&dir.path().join("settings.toml"));
        app.selection = Selection::range(ymd(2025, 1, 1), ymd(2025, 1, 3));

        let path = dir.path().join("dates.csv");
        app.write_selection_csv(&path);
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "2025-01-01\n2025-01-02\n2025-01-03\n"
        );

        assert_eq!(
            app.toast_manager.latest().map(|t| t.message.clone()),
            Some(format!("Saved 3 rows to {}", path.display()))
        );

        // Directory as target: the error is reported, not propagated
        app.write_selection_csv(dir.path());
        assert!(app
            .toast_manager
            .latest()
            .map(|t| t.message.starts_with("Export failed"))
            .unwrap_or(false));
    }
}

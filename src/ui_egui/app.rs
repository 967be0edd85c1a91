mod footer;
mod geometry;
mod header;
mod lifecycle;
mod menu_export;
mod mini_bar;
mod popup;
mod shortcuts;
mod state;
mod toast;
mod tray;

use chrono::{Local, NaiveDate};

use self::state::{AppState, TrayHandle};
use self::toast::ToastManager;
use crate::models::palette::ColorPalette;
use crate::models::project::{DateProjectIndex, ProjectTag};
use crate::models::selection::Selection;
use crate::models::settings::Settings;
use crate::services::settings::SettingsService;
use crate::ui_egui::theme::FloatingTheme;
use crate::ui_egui::views::month_view::{MonthView, MonthViewAction};

pub use self::state::WindowMode;
pub use crate::models::settings::{MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};

pub struct FloatingCalendarApp {
    /// Persisted preferences and where they live
    settings: Settings,
    settings_service: SettingsService,
    palette: ColorPalette,
    theme: FloatingTheme,
    /// Date → project tags shown in the grid
    projects: DateProjectIndex,
    selection: Selection,
    /// Any date inside the month currently displayed
    visible_month: NaiveDate,
    /// Window mode, drag and popup state
    state: AppState,
    toast_manager: ToastManager,
    tray: Option<TrayHandle>,
    exit_requested: bool,
    egui_ctx: egui::Context,
}

impl eframe::App for FloatingCalendarApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        self.handle_update(ctx, frame);
    }

    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        // Transparent viewport; panels paint the translucent background
        [0.0, 0.0, 0.0, 0.0]
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.handle_exit();
    }
}

impl FloatingCalendarApp {
    /// Replace the date → tags map wholesale and repaint.
    ///
    /// Keys that are not ISO dates are skipped with a warning.
    pub fn set_project_map<K, V, T>(&mut self, map: impl IntoIterator<Item = (K, V)>)
    where
        K: AsRef<str>,
        V: IntoIterator<Item = T>,
        T: Into<ProjectTag>,
    {
        self.replace_projects(DateProjectIndex::from_iso_map(map));
    }

    pub fn replace_projects(&mut self, projects: DateProjectIndex) {
        log::info!("Project map replaced ({} dates)", projects.len());
        self.projects.replace(projects);
        self.egui_ctx.request_repaint();
    }

    pub fn projects(&self) -> &DateProjectIndex {
        &self.projects
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn window_mode(&self) -> WindowMode {
        self.state.mode
    }

    pub fn visible_month(&self) -> NaiveDate {
        self.visible_month
    }

    fn today() -> NaiveDate {
        Local::now().date_naive()
    }

    /// Click on a day cell: advance the selection and show its projects.
    pub(crate) fn on_date_clicked(&mut self, date: NaiveDate) {
        self.selection.click(date);
        self.open_project_popup(date);
    }

    pub(crate) fn jump_to_today(&mut self) {
        self.selection.cancel();
        self.visible_month = Self::today();
    }

    pub(crate) fn select_this_week(&mut self) {
        let today = Self::today();
        self.selection.select_week_of(today);
        self.visible_month = today;
    }

    pub(crate) fn select_this_month(&mut self) {
        let today = Self::today();
        self.selection.select_month_of(today);
        self.visible_month = today;
    }

    pub(crate) fn clear_selection(&mut self) {
        self.selection.cancel();
        self.state.project_popup = None;
    }

    fn render_main_panel(&mut self, ctx: &egui::Context) {
        let frame = egui::Frame::none()
            .fill(self.theme.window_fill(self.settings.opacity))
            .inner_margin(egui::Margin::symmetric(8.0, 4.0));

        let mut clicked = None;
        egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
            let action = MonthView::show(
                ui,
                &mut self.visible_month,
                Self::today(),
                &self.projects,
                &self.selection,
                &self.palette,
                &self.theme,
            );
            if let MonthViewAction::DateClicked(date) = action {
                clicked = Some(date);
            }
        });

        if let Some(date) = clicked {
            self.on_date_clicked(date);
        }
    }
}

/// Build an app without a tray or window, for exercising state changes.
#[cfg(test)]
pub(crate) fn test_app(settings_path: &std::path::Path) -> FloatingCalendarApp {
    FloatingCalendarApp::from_parts(
        egui::Context::default(),
        Settings::default(),
        SettingsService::new(settings_path),
        DateProjectIndex::new(),
        None,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use crate::utils::date::{month_bounds, week_bounds};

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn set_project_map_replaces_everything() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(&dir.path().join("settings.toml"));

        let mut first = BTreeMap::new();
        first.insert("2025-01-01".to_string(), vec!["Delay".to_string()]);
        first.insert("2025-01-02".to_string(), vec!["Overdue".to_string()]);
        app.set_project_map(first);
        assert_eq!(app.projects().len(), 2);

        let mut second = BTreeMap::new();
        second.insert("2025-02-01", vec!["Completed"]);
        app.set_project_map(second);
        assert_eq!(app.projects().len(), 1);
        assert!(app.projects().tags_for(ymd(2025, 1, 1)).is_empty());
        assert_eq!(
            app.projects().tags_for(ymd(2025, 2, 1)),
            &[ProjectTag::new("Completed")]
        );
    }

    #[test]
    fn clicks_build_a_range_and_escape_clears_it() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(&dir.path().join("settings.toml"));

        app.on_date_clicked(ymd(2025, 3, 10));
        app.on_date_clicked(ymd(2025, 3, 4));
        assert_eq!(*app.selection(), Selection::range(ymd(2025, 3, 4), ymd(2025, 3, 10)));

        app.clear_selection();
        assert!(app.selection().is_empty());
    }

    #[test]
    fn quick_ranges_cover_today() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(&dir.path().join("settings.toml"));
        let today = Local::now().date_naive();

        app.select_this_week();
        let (start, end) = week_bounds(today);
        assert_eq!(*app.selection(), Selection::Range { start, end });

        app.select_this_month();
        let (start, end) = month_bounds(today);
        assert_eq!(*app.selection(), Selection::Range { start, end });

        app.jump_to_today();
        assert!(app.selection().is_empty());
        assert_eq!(app.visible_month(), today);
    }
}

use super::state::{AppState, TrayHandle};
use super::toast::ToastManager;
use super::FloatingCalendarApp;
use crate::models::project::DateProjectIndex;
use crate::models::settings::Settings;
use crate::services::settings::SettingsService;
use crate::ui_egui::theme::FloatingTheme;
use chrono::Local;

impl FloatingCalendarApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings: Settings,
        settings_service: SettingsService,
        projects: DateProjectIndex,
    ) -> Self {
        log::info!(
            "Starting floating calendar: {}x{}, opacity {}, always on top {}",
            settings.window_width,
            settings.window_height,
            settings.opacity,
            settings.always_on_top
        );

        let tray = Self::create_tray_icon();
        if tray.is_none() {
            log::warn!("Running without a system tray icon");
        }

        Self::from_parts(
            cc.egui_ctx.clone(),
            settings,
            settings_service,
            projects,
            tray,
        )
    }

    pub(super) fn from_parts(
        ctx: egui::Context,
        settings: Settings,
        settings_service: SettingsService,
        projects: DateProjectIndex,
        tray: Option<TrayHandle>,
    ) -> Self {
        let palette = settings.palette();
        let theme = FloatingTheme::from_palette(&palette);
        theme.apply_to_context(&ctx, settings.opacity);

        Self {
            settings,
            settings_service,
            palette,
            theme,
            projects,
            selection: Default::default(),
            visible_month: Local::now().date_naive(),
            state: AppState::default(),
            toast_manager: ToastManager::new(),
            tray,
            exit_requested: false,
            egui_ctx: ctx,
        }
    }

    pub(super) fn handle_update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.exit_requested {
            return;
        }
        self.poll_tray_events(ctx);

        if !self.state.initial_placement_done {
            self.place_initial_window(ctx);
        }

        self.handle_keyboard_shortcuts(ctx);
        self.finish_drag_if_released(ctx);

        match self.state.mode {
            super::WindowMode::MiniBar => {
                self.render_mini_bar(ctx);
            }
            super::WindowMode::Full => {
                self.render_header(ctx);
                self.render_footer(ctx);
                self.render_main_panel(ctx);
                self.render_project_popup(ctx);
                self.toast_manager.render(ctx);
            }
        }

        // Keep draining tray events while the window is hidden or idle
        if self.tray.is_some() {
            ctx.request_repaint_after(std::time::Duration::from_millis(250));
        }
    }

    pub(super) fn handle_exit(&mut self) {
        log::info!("Floating calendar exiting");
        self.tray = None;
    }

    /// Quit from the header, mini bar or tray.
    pub(super) fn request_quit(&mut self, ctx: &egui::Context) {
        self.exit_requested = true;
        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
    }

    /// Flip always-on-top, apply it to the window and persist it.
    pub(super) fn toggle_always_on_top(&mut self, ctx: &egui::Context) {
        self.settings.always_on_top = !self.settings.always_on_top;
        let level = if self.settings.always_on_top {
            egui::WindowLevel::AlwaysOnTop
        } else {
            egui::WindowLevel::Normal
        };
        ctx.send_viewport_cmd(egui::ViewportCommand::WindowLevel(level));
        log::info!("Always on top: {}", self.settings.always_on_top);

        if let Err(e) = self.settings_service.update(&self.settings) {
            log::warn!("Failed to save settings: {:#}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_app;

    #[test]
    fn always_on_top_toggle_is_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        let mut app = test_app(&path);
        let ctx = egui::Context::default();

        app.toggle_always_on_top(&ctx);
        assert!(!app.settings.always_on_top);

        let saved = app.settings_service.get().unwrap();
        assert!(!saved.always_on_top);

        app.toggle_always_on_top(&ctx);
        assert!(app.settings_service.get().unwrap().always_on_top);
    }

    #[test]
    fn quit_stops_further_frames() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(&dir.path().join("settings.toml"));
        app.request_quit(&egui::Context::default());
        assert!(app.exit_requested);
    }
}

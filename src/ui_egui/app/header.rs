use egui::{RichText, Sense};

use super::FloatingCalendarApp;

const HEADER_HEIGHT: f32 = 32.0;

/// What the user asked for from the header this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HeaderAction {
    Today,
    ThisWeek,
    ThisMonth,
    Minimize,
    Quit,
}

impl FloatingCalendarApp {
    /// Title bar replacement: quick ranges, minimize/close, and drag-to-move.
    pub(super) fn render_header(&mut self, ctx: &egui::Context) {
        let frame = egui::Frame::none()
            .fill(self.theme.window_fill(self.settings.opacity))
            .inner_margin(egui::Margin::symmetric(8.0, 4.0));

        let mut action = None;
        let mut drag_started = false;

        egui::TopBottomPanel::top("floating_header")
            .exact_height(HEADER_HEIGHT)
            .show_separator_line(false)
            .frame(frame)
            .show(ctx, |ui| {
                // Registered before the buttons so they take priority
                let drag = ui.interact(
                    ui.max_rect(),
                    ui.id().with("header_drag"),
                    Sense::click_and_drag(),
                );
                if drag.drag_started() {
                    drag_started = true;
                }

                ui.horizontal_centered(|ui| {
                    ui.label(
                        RichText::new("Floating Calendar")
                            .strong()
                            .color(self.theme.title),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button("✕").on_hover_text("Quit").clicked() {
                            action = Some(HeaderAction::Quit);
                        }
                        if ui
                            .small_button("—")
                            .on_hover_text("Minimize to bar")
                            .clicked()
                        {
                            action = Some(HeaderAction::Minimize);
                        }
                        if ui.small_button("This Month").clicked() {
                            action = Some(HeaderAction::ThisMonth);
                        }
                        if ui.small_button("This Week").clicked() {
                            action = Some(HeaderAction::ThisWeek);
                        }
                        if ui.small_button("Today").clicked() {
                            action = Some(HeaderAction::Today);
                        }
                    });
                });
            });

        if drag_started {
            self.begin_window_drag(ctx);
        }

        match action {
            Some(HeaderAction::Today) => self.jump_to_today(),
            Some(HeaderAction::ThisWeek) => self.select_this_week(),
            Some(HeaderAction::ThisMonth) => self.select_this_month(),
            Some(HeaderAction::Minimize) => self.minimize_to_bar(ctx),
            Some(HeaderAction::Quit) => self.request_quit(ctx),
            None => {}
        }
    }
}

use egui::RichText;

use super::FloatingCalendarApp;

impl FloatingCalendarApp {
    pub(super) fn render_mini_bar(&mut self, ctx: &egui::Context) {
        let frame = egui::Frame::none()
            .fill(self.theme.window_fill(self.settings.opacity))
            .rounding(10.0)
            .inner_margin(egui::Margin::symmetric(10.0, 6.0));

        let mut restore = false;
        let mut quit = false;

        egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                ui.label(RichText::new("Calendar").strong().color(self.theme.title));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    quit = ui.small_button("✕").on_hover_text("Quit").clicked();
                    restore = ui.small_button("⤢").on_hover_text("Restore").clicked();
                });
            });
        });

        if quit {
            self.request_quit(ctx);
        } else if restore {
            self.restore_from_bar(ctx);
        }
    }
}

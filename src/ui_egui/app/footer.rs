use egui::{RichText, Sense, Vec2};

use super::FloatingCalendarApp;
use crate::models::project::ProjectTag;
use crate::ui_egui::theme::to_color32;

const SWATCH_SIZE: f32 = 10.0;

impl FloatingCalendarApp {
    /// Selection info, legend and the copy/export actions.
    pub(super) fn render_footer(&mut self, ctx: &egui::Context) {
        let frame = egui::Frame::none()
            .fill(self.theme.window_fill(self.settings.opacity))
            .inner_margin(egui::Margin::symmetric(8.0, 6.0));

        let mut copy = false;
        let mut export = false;

        egui::TopBottomPanel::bottom("floating_footer")
            .show_separator_line(false)
            .frame(frame)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(self.selection.describe()).size(11.0));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        export = ui
                            .small_button("Export (CSV)")
                            .on_hover_text("Ctrl+Shift+E")
                            .clicked();
                        copy = ui.small_button("Copy").on_hover_text("Ctrl+Shift+C").clicked();
                    });
                });

                ui.horizontal_wrapped(|ui| {
                    ui.spacing_mut().item_spacing.x = 4.0;
                    for name in &self.settings.legend {
                        let color = to_color32(self.palette.color_for(&ProjectTag::new(name.as_str())));
                        let (rect, _) =
                            ui.allocate_exact_size(Vec2::splat(SWATCH_SIZE), Sense::hover());
                        ui.painter().rect_filled(rect, 2.0, color);
                        ui.label(RichText::new(name).size(11.0));
                        ui.add_space(6.0);
                    }
                });
            });

        if copy {
            self.copy_selection(ctx);
        }
        if export {
            self.export_selection_csv();
        }
    }
}

use chrono::NaiveDate;
use egui::RichText;

use super::state::ProjectPopup;
use super::FloatingCalendarApp;
use crate::models::project::ProjectTag;
use crate::utils::date::to_iso;

/// Numbered lines for the project list, capped at `limit` with a trailing
/// "... and N more".
pub(super) fn project_popup_lines(tags: &[ProjectTag], limit: usize) -> Vec<String> {
    let mut lines: Vec<String> = tags
        .iter()
        .take(limit)
        .enumerate()
        .map(|(i, tag)| format!("{}. {}", i + 1, tag))
        .collect();
    if tags.len() > limit {
        lines.push(format!("... and {} more", tags.len() - limit));
    }
    lines
}

impl FloatingCalendarApp {
    /// Show the tags for `date`, or close the popup when it has none.
    pub(super) fn open_project_popup(&mut self, date: NaiveDate) {
        let tags = self.projects.tags_for(date);
        self.state.project_popup = if tags.is_empty() {
            None
        } else {
            Some(ProjectPopup {
                date,
                lines: project_popup_lines(tags, self.settings.project_popup_limit),
            })
        };
    }

    pub(super) fn render_project_popup(&mut self, ctx: &egui::Context) {
        let Some(popup) = &self.state.project_popup else {
            return;
        };

        let mut open = true;
        let mut close_clicked = false;
        egui::Window::new(format!("Projects on {}", to_iso(popup.date)))
            .id(egui::Id::new("project_popup"))
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .open(&mut open)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().max_height(220.0).show(ui, |ui| {
                    for line in &popup.lines {
                        ui.label(RichText::new(line).size(12.0));
                    }
                });
                ui.add_space(4.0);
                close_clicked = ui.button("OK").clicked();
            });

        if !open || close_clicked {
            self.state.project_popup = None;
        }
    }
}

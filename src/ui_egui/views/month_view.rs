use chrono::{Datelike, Duration, NaiveDate};
use egui::{RichText, Vec2};

use super::calendar_cell::render_day_cell;
use crate::models::palette::ColorPalette;
use crate::models::project::DateProjectIndex;
use crate::models::selection::Selection;
use crate::ui_egui::theme::FloatingTheme;
use crate::utils::date::{first_of_month, shift_month, week_start};

const WEEKS_SHOWN: usize = 6;
const DAY_NAMES: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
const HEADER_HEIGHT: f32 = 20.0;
const SPACING: f32 = 2.0;

/// Action returned from month view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthViewAction {
    None,
    DateClicked(NaiveDate),
}

pub struct MonthView;

impl MonthView {
    /// First date shown in the grid: the Monday on or before the 1st.
    pub fn grid_start(month: NaiveDate) -> NaiveDate {
        week_start(first_of_month(month))
    }

    /// The 42 dates shown for `month`, Monday-first, row-major.
    pub fn grid_dates(month: NaiveDate) -> Vec<NaiveDate> {
        let start = Self::grid_start(month);
        (0..(WEEKS_SHOWN * 7) as i64)
            .map(|offset| start + Duration::days(offset))
            .collect()
    }

    #[allow(clippy::too_many_arguments)]
    pub fn show(
        ui: &mut egui::Ui,
        visible_month: &mut NaiveDate,
        today: NaiveDate,
        index: &DateProjectIndex,
        selection: &Selection,
        palette: &ColorPalette,
        theme: &FloatingTheme,
    ) -> MonthViewAction {
        let mut action = MonthViewAction::None;

        ui.horizontal(|ui| {
            if ui.small_button("◀").on_hover_text("Previous month").clicked() {
                *visible_month = shift_month(first_of_month(*visible_month), -1);
            }
            ui.with_layout(
                egui::Layout::right_to_left(egui::Align::Center),
                |ui| {
                    if ui.small_button("▶").on_hover_text("Next month").clicked() {
                        *visible_month = shift_month(first_of_month(*visible_month), 1);
                    }
                    ui.centered_and_justified(|ui| {
                        ui.label(
                            RichText::new(visible_month.format("%B %Y").to_string())
                                .strong()
                                .color(theme.title),
                        );
                    });
                },
            );
        });
        ui.add_space(4.0);

        let col_width = ((ui.available_width() - SPACING * 6.0) / 7.0).floor().max(16.0);
        let row_height = ((ui.available_height() - HEADER_HEIGHT - SPACING * 6.0)
            / WEEKS_SHOWN as f32)
            .floor()
            .max(24.0);
        let cell_size = Vec2::new(col_width, row_height);

        let month = visible_month.month();
        let dates = Self::grid_dates(*visible_month);

        egui::Grid::new("floating_month_grid")
            .spacing([SPACING, SPACING])
            .min_col_width(col_width)
            .show(ui, |ui| {
                for name in DAY_NAMES {
                    ui.allocate_ui_with_layout(
                        Vec2::new(col_width, HEADER_HEIGHT),
                        egui::Layout::centered_and_justified(egui::Direction::TopDown),
                        |ui| {
                            ui.label(RichText::new(name).size(11.0).color(theme.text));
                        },
                    );
                }
                ui.end_row();

                for week in dates.chunks(7) {
                    for date in week {
                        let date = *date;
                        let endpoint = selection.start() == Some(date) || selection.end() == Some(date);
                        let clicked = render_day_cell(
                            ui,
                            cell_size,
                            date,
                            today,
                            index.tags_for(date),
                            palette,
                            theme,
                            selection.contains(date),
                            endpoint,
                            date.month() == month,
                        );
                        if clicked {
                            action = MonthViewAction::DateClicked(date);
                        }
                    }
                    ui.end_row();
                }
            });

        action
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn grid_starts_on_monday_before_the_first() {
        // 2025-01-01 is a Wednesday
        assert_eq!(MonthView::grid_start(ymd(2025, 1, 15)), ymd(2024, 12, 30));
        // 2024-07-01 is a Monday
        assert_eq!(MonthView::grid_start(ymd(2024, 7, 20)), ymd(2024, 7, 1));
    }

    #[test]
    fn grid_has_six_full_weeks() {
        let dates = MonthView::grid_dates(ymd(2025, 3, 1));
        assert_eq!(dates.len(), 42);
        assert_eq!(dates[0].weekday(), chrono::Weekday::Mon);
        assert_eq!(dates[41] - dates[0], Duration::days(41));
        assert!(dates.contains(&ymd(2025, 3, 31)));
    }
}

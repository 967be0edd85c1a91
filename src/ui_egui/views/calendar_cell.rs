//! Day cell painting for the month grid.
//!
//! Replays the layout engine's [`DrawCommand`]s onto an egui painter and adds
//! the interactive bits (selection overlay, hover, tooltip, click).

use chrono::NaiveDate;
use egui::{Align2, FontId, Pos2, Rect, Sense, Stroke, Vec2};

use crate::models::palette::ColorPalette;
use crate::models::project::ProjectTag;
use crate::services::layout::{cell_draw_commands, CellRect, DrawCommand, TextAnchor};
use crate::ui_egui::theme::{to_color32, FloatingTheme};

/// Convert a float egui rect to whole pixels for the layout engine.
pub fn cell_rect_from(rect: Rect) -> CellRect {
    let x = rect.left().round() as i32;
    let y = rect.top().round() as i32;
    CellRect::new(
        x,
        y,
        rect.right().round() as i32 - x,
        rect.bottom().round() as i32 - y,
    )
}

pub fn rect_from(rect: CellRect) -> Rect {
    Rect::from_min_size(
        Pos2::new(rect.x as f32, rect.y as f32),
        Vec2::new(rect.width as f32, rect.height as f32),
    )
}

/// Paint commands in order. Empty rectangles are skipped.
pub fn paint_commands(painter: &egui::Painter, commands: &[DrawCommand]) {
    for command in commands {
        match command {
            DrawCommand::Fill { rect, color } => {
                if !rect.is_empty() {
                    painter.rect_filled(rect_from(*rect), 0.0, to_color32(*color));
                }
            }
            DrawCommand::RoundedRect {
                rect,
                radius,
                fill,
                stroke,
            } => {
                if !rect.is_empty() {
                    let area = rect_from(*rect);
                    painter.rect_filled(area, *radius, to_color32(*fill));
                    painter.rect_stroke(area, *radius, Stroke::new(1.0, to_color32(*stroke)));
                }
            }
            DrawCommand::Text {
                rect,
                anchor,
                text,
                size,
                color,
            } => {
                let area = rect_from(*rect);
                let (pos, align) = match anchor {
                    TextAnchor::TopLeft => (area.left_top(), Align2::LEFT_TOP),
                    TextAnchor::Center => (area.center(), Align2::CENTER_CENTER),
                };
                painter.text(pos, align, text, FontId::proportional(*size), to_color32(*color));
            }
            DrawCommand::Outline { rect, width, color } => {
                if !rect.is_empty() {
                    painter.rect_stroke(
                        rect_from(*rect),
                        0.0,
                        Stroke::new(*width, to_color32(*color)),
                    );
                }
            }
        }
    }
}

/// Render one day cell and report whether it was clicked.
#[allow(clippy::too_many_arguments)]
pub fn render_day_cell(
    ui: &mut egui::Ui,
    size: Vec2,
    date: NaiveDate,
    today: NaiveDate,
    tags: &[ProjectTag],
    palette: &ColorPalette,
    theme: &FloatingTheme,
    selected: bool,
    selection_endpoint: bool,
    in_current_month: bool,
) -> bool {
    let (rect, response) = ui.allocate_exact_size(size, Sense::click());
    if !ui.is_rect_visible(rect) {
        return response.clicked();
    }

    let painter = ui.painter_at(rect);
    let commands = cell_draw_commands(date, tags, cell_rect_from(rect), palette, today);
    paint_commands(&painter, &commands);

    if !in_current_month {
        painter.rect_filled(rect, 0.0, theme.background.gamma_multiply(0.55));
    }

    if selected {
        painter.rect_filled(rect.shrink(1.0), 3.0, theme.selection);
        if selection_endpoint {
            painter.rect_stroke(rect.shrink(1.5), 3.0, Stroke::new(1.5, theme.selection_edge));
        }
    }

    if response.hovered() {
        painter.rect_stroke(
            rect.shrink(0.5),
            2.0,
            Stroke::new(1.0, theme.accent.gamma_multiply(0.6)),
        );
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }

    let response = if tags.is_empty() {
        response
    } else {
        let summary = tags
            .iter()
            .map(ProjectTag::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        response.on_hover_text(summary)
    };

    response.clicked()
}

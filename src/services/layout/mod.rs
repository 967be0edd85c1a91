//! Cell layout engine for the month grid.
//!
//! Turns the ordered project tags of one date into colored sub-rectangles:
//!
//! * 0 tags: nothing beyond the background
//! * 1–4 tags: equal horizontal strips, top to bottom
//! * 5–9 tags: a 3×3 grid, unused slots in the placeholder color
//! * more than 9: the grid for the first nine plus a `+N` badge
//!
//! Everything here is integer pixel arithmetic and free of any UI toolkit, so
//! the painter in `ui_egui::views::calendar_cell` only has to replay the
//! [`DrawCommand`]s.

use chrono::{Datelike, NaiveDate};

use crate::models::palette::{ColorPalette, Rgb};
use crate::models::project::ProjectTag;

/// Largest tag count rendered as strips.
pub const MAX_STRIPS: usize = 4;
/// Slots in the 3×3 grid.
pub const GRID_SLOTS: usize = 9;
const GRID_COLUMNS: i32 = 3;

pub const STRIP_PADDING: i32 = 2;
pub const GRID_PADDING: i32 = 4;

pub const BADGE_WIDTH: i32 = 28;
pub const BADGE_HEIGHT: i32 = 16;
pub const BADGE_MARGIN: i32 = 6;
pub const BADGE_RADIUS: f32 = 6.0;

pub const DAY_FONT_SIZE: f32 = 12.0;
pub const BADGE_FONT_SIZE: f32 = 10.0;

/// Integer rectangle with inclusive `right`/`bottom` edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl CellRect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn right(&self) -> i32 {
        self.x + self.width - 1
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height - 1
    }

    /// Move each edge independently: positive `dx1`/`dy1` shrink from the
    /// top-left, negative `dx2`/`dy2` shrink from the bottom-right.
    pub fn adjusted(&self, dx1: i32, dy1: i32, dx2: i32, dy2: i32) -> Self {
        Self::new(
            self.x + dx1,
            self.y + dy1,
            self.width - dx1 + dx2,
            self.height - dy1 + dy2,
        )
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutKind {
    Empty,
    Strips,
    Grid,
}

/// One colored region of a cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellFill {
    /// Area allotted to this region before padding
    pub slot: CellRect,
    /// Area actually painted
    pub rect: CellRect,
    pub color: Rgb,
    /// `None` for empty grid slots
    pub tag: Option<ProjectTag>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverflowBadge {
    pub rect: CellRect,
    pub hidden: usize,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellLayout {
    pub kind: LayoutKind,
    pub fills: Vec<CellFill>,
    pub badge: Option<OverflowBadge>,
}

/// Compute the colored regions for `tags` inside `rect`.
pub fn layout_cell(tags: &[ProjectTag], rect: CellRect, palette: &ColorPalette) -> CellLayout {
    let count = tags.len();
    if count == 0 {
        return CellLayout {
            kind: LayoutKind::Empty,
            fills: Vec::new(),
            badge: None,
        };
    }

    if count <= MAX_STRIPS {
        return CellLayout {
            kind: LayoutKind::Strips,
            fills: strip_fills(tags, rect, palette),
            badge: None,
        };
    }

    let badge = (count > GRID_SLOTS).then(|| overflow_badge(rect, count - GRID_SLOTS));
    CellLayout {
        kind: LayoutKind::Grid,
        fills: grid_fills(tags, rect, palette),
        badge,
    }
}

fn strip_fills(tags: &[ProjectTag], rect: CellRect, palette: &ColorPalette) -> Vec<CellFill> {
    let count = tags.len() as i32;
    let base = rect.height / count;

    tags.iter()
        .enumerate()
        .map(|(i, tag)| {
            let i = i as i32;
            let y = rect.top() + i * base;
            // Equal strips; the last one absorbs the remainder.
            let height = if i == count - 1 {
                rect.height - (count - 1) * base
            } else {
                base
            };
            let slot = CellRect::new(rect.left(), y, rect.width, height);
            CellFill {
                slot,
                rect: slot.adjusted(STRIP_PADDING, STRIP_PADDING, -STRIP_PADDING, -STRIP_PADDING),
                color: palette.color_for(tag),
                tag: Some(tag.clone()),
            }
        })
        .collect()
}

fn grid_fills(tags: &[ProjectTag], rect: CellRect, palette: &ColorPalette) -> Vec<CellFill> {
    let cell_w = (rect.width - GRID_PADDING * 2) / GRID_COLUMNS;
    let cell_h = (rect.height - GRID_PADDING * 2) / GRID_COLUMNS;

    (0..GRID_SLOTS)
        .map(|idx| {
            let row = idx as i32 / GRID_COLUMNS;
            let col = idx as i32 % GRID_COLUMNS;
            let slot = CellRect::new(
                rect.left() + GRID_PADDING + col * cell_w,
                rect.top() + GRID_PADDING + row * cell_h,
                cell_w,
                cell_h,
            );
            let tag = tags.get(idx).cloned();
            let color = tag
                .as_ref()
                .map(|tag| palette.color_for(tag))
                .unwrap_or(palette.placeholder);
            CellFill {
                slot,
                rect: CellRect::new(slot.x + 1, slot.y + 1, cell_w - 2, cell_h - 2),
                color,
                tag,
            }
        })
        .collect()
}

fn overflow_badge(rect: CellRect, hidden: usize) -> OverflowBadge {
    OverflowBadge {
        rect: CellRect::new(
            rect.right() - BADGE_WIDTH - BADGE_MARGIN,
            rect.bottom() - BADGE_HEIGHT - BADGE_MARGIN,
            BADGE_WIDTH,
            BADGE_HEIGHT,
        ),
        hidden,
        text: format!("+{}", hidden),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    TopLeft,
    Center,
}

/// A toolkit-neutral paint operation, replayed in order.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Fill {
        rect: CellRect,
        color: Rgb,
    },
    RoundedRect {
        rect: CellRect,
        radius: f32,
        fill: Rgb,
        stroke: Rgb,
    },
    Text {
        rect: CellRect,
        anchor: TextAnchor,
        text: String,
        size: f32,
        color: Rgb,
    },
    Outline {
        rect: CellRect,
        width: f32,
        color: Rgb,
    },
}

/// Full paint sequence for one day cell: background, project overlay, day
/// number, overflow badge, then the today outline on top.
pub fn cell_draw_commands(
    date: NaiveDate,
    tags: &[ProjectTag],
    rect: CellRect,
    palette: &ColorPalette,
    today: NaiveDate,
) -> Vec<DrawCommand> {
    let layout = layout_cell(tags, rect, palette);
    let mut commands = Vec::with_capacity(layout.fills.len() + 4);

    commands.push(DrawCommand::Fill {
        rect,
        color: palette.background,
    });
    commands.extend(layout.fills.iter().map(|fill| DrawCommand::Fill {
        rect: fill.rect,
        color: fill.color,
    }));
    commands.push(DrawCommand::Text {
        rect: rect.adjusted(6, 4, -6, -4),
        anchor: TextAnchor::TopLeft,
        text: date.day().to_string(),
        size: DAY_FONT_SIZE,
        color: palette.text,
    });

    if let Some(badge) = layout.badge {
        commands.push(DrawCommand::RoundedRect {
            rect: badge.rect,
            radius: BADGE_RADIUS,
            fill: palette.background,
            stroke: palette.text,
        });
        commands.push(DrawCommand::Text {
            rect: badge.rect,
            anchor: TextAnchor::Center,
            text: badge.text,
            size: BADGE_FONT_SIZE,
            color: palette.text,
        });
    }

    if date == today {
        commands.push(DrawCommand::Outline {
            rect: rect.adjusted(1, 1, -1, -1),
            width: 1.0,
            color: palette.today,
        });
    }

    commands
}

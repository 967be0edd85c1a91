// Property-based tests for the cell layout engine and selection
// Checks tiling, grid and badge rules over random tag counts and cell sizes

#[path = "../fixtures/mod.rs"]
mod fixtures;

use chrono::{Duration, NaiveDate};
use floating_calendar::models::palette::ColorPalette;
use floating_calendar::models::project::ProjectTag;
use floating_calendar::models::selection::Selection;
use floating_calendar::services::layout::{
    cell_draw_commands, layout_cell, CellRect, DrawCommand, LayoutKind, GRID_SLOTS,
};
use proptest::prelude::*;

fn date_from_offset(offset: i64) -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, 1).unwrap() + Duration::days(offset)
}

proptest! {
    /// Property: 1..=4 tags tile the full cell height with no gap or overlap
    #[test]
    fn prop_strips_tile_height(
        n in 1usize..=4,
        x in -50i32..500,
        y in -50i32..500,
        width in 10i32..200,
        height in 10i32..200,
    ) {
        let rect = CellRect::new(x, y, width, height);
        let layout = layout_cell(&fixtures::tags::first(n), rect, &ColorPalette::default());

        prop_assert_eq!(layout.kind, LayoutKind::Strips);
        prop_assert_eq!(layout.fills.len(), n);
        prop_assert!(layout.badge.is_none());

        let base = height / n as i32;
        let mut next_top = y;
        for (i, fill) in layout.fills.iter().enumerate() {
            let expected = if i == n - 1 { height - (n as i32 - 1) * base } else { base };
            prop_assert_eq!(fill.slot.height, expected);
            prop_assert_eq!(fill.slot.y, next_top);
            prop_assert_eq!(fill.slot.x, x);
            prop_assert_eq!(fill.slot.width, width);
            next_top = fill.slot.y + fill.slot.height;
        }
        prop_assert_eq!(next_top, y + height);
    }

    /// Property: 5..=9 tags fill a 3x3 grid, the rest is placeholder
    #[test]
    fn prop_grid_without_badge(n in 5usize..=9, width in 20i32..200, height in 20i32..200) {
        let palette = ColorPalette::default();
        let layout = layout_cell(&fixtures::tags::first(n), CellRect::new(0, 0, width, height), &palette);

        prop_assert_eq!(layout.kind, LayoutKind::Grid);
        prop_assert_eq!(layout.fills.len(), GRID_SLOTS);
        prop_assert!(layout.badge.is_none());
        for fill in &layout.fills[n..] {
            prop_assert_eq!(fill.color, palette.placeholder);
            prop_assert!(fill.tag.is_none());
        }
    }

    /// Property: more than 9 tags always show "+<N-9>"
    #[test]
    fn prop_badge_counts_hidden_tags(n in 10usize..60) {
        let layout = layout_cell(&fixtures::tags::first(n), CellRect::new(0, 0, 80, 60), &ColorPalette::default());
        let badge = layout.badge.expect("badge for more than nine tags");
        prop_assert_eq!(badge.hidden, n - 9);
        prop_assert_eq!(badge.text, format!("+{}", n - 9));
    }

    /// Property: unknown tags always render with the fallback color
    #[test]
    fn prop_unknown_tags_use_fallback(n in 1usize..15) {
        let palette = ColorPalette::default();
        let layout = layout_cell(&fixtures::tags::unknown(n), CellRect::new(0, 0, 90, 70), &palette);
        for fill in layout.fills.iter().filter(|f| f.tag.is_some()) {
            prop_assert_eq!(fill.color, palette.fallback);
        }
    }

    /// Property: the today outline is the last command drawn
    #[test]
    fn prop_today_outline_drawn_last(n in 0usize..15, offset in 0i64..3000) {
        let date = date_from_offset(offset);
        let commands = cell_draw_commands(
            date,
            &fixtures::tags::first(n),
            CellRect::new(0, 0, 60, 50),
            &ColorPalette::default(),
            date,
        );
        let is_outline = matches!(commands.last(), Some(DrawCommand::Outline { .. }));
        prop_assert!(is_outline);
    }

    /// Property: any click sequence keeps start <= end
    #[test]
    fn prop_selection_stays_ordered(clicks in prop::collection::vec(0i64..400, 0..20)) {
        let mut selection = Selection::default();
        for offset in clicks {
            selection.click(date_from_offset(offset));
            if let Selection::Range { start, end } = selection {
                prop_assert!(start <= end);
                prop_assert_eq!(selection.dates().len() as i64, (end - start).num_days() + 1);
            }
        }
    }
}

#[test]
fn test_tag_order_is_preserved() {
    let tags: Vec<ProjectTag> = ["Delay", "Fabrication"].iter().map(|n| ProjectTag::new(*n)).collect();
    let layout = layout_cell(&tags, CellRect::new(0, 0, 50, 50), &ColorPalette::default());
    let order: Vec<_> = layout.fills.iter().filter_map(|f| f.tag.clone()).collect();
    assert_eq!(order, tags);
}

#[test]
fn test_uneven_strips_leave_remainder_to_last() {
    let rect = CellRect::new(0, 0, 60, 50);
    let layout = layout_cell(&fixtures::tags::first(3), rect, &ColorPalette::default());

    let heights: Vec<i32> = layout.fills.iter().map(|f| f.slot.height).collect();
    assert_eq!(heights, vec![16, 16, 18]);
    let tops: Vec<i32> = layout.fills.iter().map(|f| f.slot.y).collect();
    assert_eq!(tops, vec![0, 16, 32]);
    // Painted band is inset by the strip padding
    assert_eq!(layout.fills[2].rect, CellRect::new(2, 34, 56, 14));
}

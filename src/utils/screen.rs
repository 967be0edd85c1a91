//! Screen-space geometry for the floating window.
//!
//! Edge snapping after a header drag and the bottom-right anchoring used for
//! the initial position and the mini bar. Pure functions over [`ScreenRect`],
//! so the policies are testable without a display.

/// A rectangle in screen coordinates (logical points).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl ScreenRect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// Fallback work area when the viewport does not report a monitor size.
pub const DEFAULT_SCREEN: ScreenRect = ScreenRect::new(0.0, 0.0, 1920.0, 1080.0);

/// Screen area from egui's reported monitor size, or [`DEFAULT_SCREEN`].
pub fn screen_from_monitor_size(monitor_size: Option<(f32, f32)>) -> ScreenRect {
    match monitor_size {
        Some((width, height)) if width > 0.0 && height > 0.0 => {
            ScreenRect::new(0.0, 0.0, width, height)
        }
        _ => DEFAULT_SCREEN,
    }
}

/// Position for a window whose edge landed within `margin` of a screen edge.
///
/// Horizontal and vertical axes snap independently; left wins over right and
/// top wins over bottom. A snapped edge sits `inset` points from the screen
/// edge. Returns `None` when neither axis is close enough.
pub fn snap_to_edges(
    window: ScreenRect,
    screen: ScreenRect,
    margin: f32,
    inset: f32,
) -> Option<(f32, f32)> {
    let mut moved = false;
    let mut x = window.x;
    let mut y = window.y;

    if (window.x - screen.x).abs() <= margin {
        x = screen.x + inset;
        moved = true;
    } else if (screen.right() - window.right()).abs() <= margin {
        x = screen.right() - window.width - inset;
        moved = true;
    }

    if (window.y - screen.y).abs() <= margin {
        y = screen.y + inset;
        moved = true;
    } else if (screen.bottom() - window.bottom()).abs() <= margin {
        y = screen.bottom() - window.height - inset;
        moved = true;
    }

    moved.then_some((x, y))
}

/// Top-left corner that places a `width`×`height` window `margin` points
/// away from the bottom-right corner of `screen`.
pub fn anchor_bottom_right(screen: ScreenRect, width: f32, height: f32, margin: f32) -> (f32, f32) {
    (
        screen.right() - width - margin,
        screen.bottom() - height - margin,
    )
}

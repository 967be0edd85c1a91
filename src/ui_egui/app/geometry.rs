use super::state::{DragState, WindowGeometry, WindowMode};
use super::FloatingCalendarApp;
use crate::utils::screen::{anchor_bottom_right, screen_from_monitor_size, snap_to_edges, ScreenRect};

pub(super) const MINI_BAR_WIDTH: f32 = 180.0;
pub(super) const MINI_BAR_HEIGHT: f32 = 44.0;
/// Frames without movement after which a drag counts as finished
const DRAG_SETTLE_FRAMES: u32 = 3;

/// Whether an OS-owned drag is over. The release event can be swallowed by
/// the platform move loop, so a window that moved and then stayed put, or
/// that lost focus, also ends the drag.
pub(super) fn drag_finished(pointer_down: bool, focused: Option<bool>, drag: &DragState) -> bool {
    !pointer_down
        || focused == Some(false)
        || (drag.has_moved() && drag.still_frames >= DRAG_SETTLE_FRAMES)
}

impl FloatingCalendarApp {
    /// Move the window to the bottom-right corner once the monitor size is
    /// known.
    pub(super) fn place_initial_window(&mut self, ctx: &egui::Context) {
        let Some(monitor) = monitor_size(ctx) else {
            return;
        };
        let screen = screen_from_monitor_size(Some(monitor));
        let (x, y) = anchor_bottom_right(
            screen,
            self.settings.window_width,
            self.settings.window_height,
            self.settings.screen_margin,
        );
        log::debug!("Initial placement at ({}, {}) on {:?}", x, y, screen);
        ctx.send_viewport_cmd(egui::ViewportCommand::OuterPosition(egui::pos2(x, y)));
        self.state.initial_placement_done = true;
    }

    /// Called when the header drag starts; the OS moves the window from here.
    pub(super) fn begin_window_drag(&mut self, ctx: &egui::Context) {
        ctx.send_viewport_cmd(egui::ViewportCommand::StartDrag);
        self.state.drag = Some(DragState::new(outer_position(ctx)));
    }

    /// Snap to a nearby screen edge once the drag has finished.
    pub(super) fn finish_drag_if_released(&mut self, ctx: &egui::Context) {
        let Some(drag) = self.state.drag.as_mut() else {
            return;
        };
        drag.observe(outer_position(ctx));

        let pointer_down = ctx.input(|i| i.pointer.any_down());
        let focused = viewport_info(ctx).and_then(|info| info.focused);
        if !drag_finished(pointer_down, focused, drag) {
            // Keep frames coming while the OS owns the pointer
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
            return;
        }
        self.state.drag = None;

        let Some(window) = current_geometry(ctx) else {
            return;
        };
        let screen = screen_from_monitor_size(monitor_size(ctx));
        let rect = ScreenRect::new(window.x, window.y, window.width, window.height);
        if let Some((x, y)) =
            snap_to_edges(rect, screen, self.settings.snap_margin, self.settings.snap_inset)
        {
            log::debug!("Snapping window from ({}, {}) to ({}, {})", rect.x, rect.y, x, y);
            ctx.send_viewport_cmd(egui::ViewportCommand::OuterPosition(egui::pos2(x, y)));
        }
    }

    /// Collapse the window into the mini bar.
    pub(super) fn minimize_to_bar(&mut self, ctx: &egui::Context) {
        if self.state.mode == WindowMode::MiniBar {
            return;
        }
        if let Some(geometry) = current_geometry(ctx) {
            self.state.last_full_geometry = Some(geometry);
        }
        self.state.mode = WindowMode::MiniBar;
        self.state.project_popup = None;

        let screen = screen_from_monitor_size(monitor_size(ctx));
        let (x, y) = anchor_bottom_right(
            screen,
            MINI_BAR_WIDTH,
            MINI_BAR_HEIGHT,
            self.settings.screen_margin,
        );
        ctx.send_viewport_cmd(egui::ViewportCommand::MinInnerSize(egui::vec2(
            MINI_BAR_WIDTH,
            MINI_BAR_HEIGHT,
        )));
        ctx.send_viewport_cmd(egui::ViewportCommand::InnerSize(egui::vec2(
            MINI_BAR_WIDTH,
            MINI_BAR_HEIGHT,
        )));
        ctx.send_viewport_cmd(egui::ViewportCommand::OuterPosition(egui::pos2(x, y)));
        ctx.send_viewport_cmd(egui::ViewportCommand::Visible(true));
        log::info!("Collapsed to mini bar");
    }

    /// Return to the full window at its last geometry, or the default
    /// bottom-right placement.
    pub(super) fn restore_from_bar(&mut self, ctx: &egui::Context) {
        let geometry = self.state.last_full_geometry.take().unwrap_or_else(|| {
            let screen = screen_from_monitor_size(monitor_size(ctx));
            let (x, y) = anchor_bottom_right(
                screen,
                self.settings.window_width,
                self.settings.window_height,
                self.settings.screen_margin,
            );
            WindowGeometry {
                x,
                y,
                width: self.settings.window_width,
                height: self.settings.window_height,
            }
        });
        self.state.mode = WindowMode::Full;

        ctx.send_viewport_cmd(egui::ViewportCommand::Visible(true));
        ctx.send_viewport_cmd(egui::ViewportCommand::MinInnerSize(egui::vec2(
            super::MIN_WINDOW_WIDTH,
            super::MIN_WINDOW_HEIGHT,
        )));
        ctx.send_viewport_cmd(egui::ViewportCommand::InnerSize(egui::vec2(
            geometry.width,
            geometry.height,
        )));
        ctx.send_viewport_cmd(egui::ViewportCommand::OuterPosition(egui::pos2(
            geometry.x,
            geometry.y,
        )));
        ctx.send_viewport_cmd(egui::ViewportCommand::Focus);
        log::info!("Restored full window");
    }

    pub(super) fn toggle_window_mode(&mut self, ctx: &egui::Context) {
        match self.state.mode {
            WindowMode::Full => self.minimize_to_bar(ctx),
            WindowMode::MiniBar => self.restore_from_bar(ctx),
        }
    }
}

fn viewport_info(ctx: &egui::Context) -> Option<egui::ViewportInfo> {
    ctx.input(|input| input.raw.viewports.get(&egui::ViewportId::ROOT).cloned())
}

fn outer_position(ctx: &egui::Context) -> Option<(f32, f32)> {
    viewport_info(ctx)
        .and_then(|info| info.outer_rect)
        .map(|rect| (rect.left(), rect.top()))
}

fn monitor_size(ctx: &egui::Context) -> Option<(f32, f32)> {
    viewport_info(ctx)
        .and_then(|info| info.monitor_size)
        .map(|size| (size.x, size.y))
}

/// Outer position plus inner size of the root window, if reported.
fn current_geometry(ctx: &egui::Context) -> Option<WindowGeometry> {
    viewport_info(ctx).as_ref().and_then(geometry_from_viewport_info)
}

pub(super) fn geometry_from_viewport_info(info: &egui::ViewportInfo) -> Option<WindowGeometry> {
    let inner = info.inner_rect?;
    let (x, y) = info
        .outer_rect
        .map(|outer| (outer.left(), outer.top()))
        .unwrap_or((inner.left(), inner.top()));

    Some(WindowGeometry {
        x,
        y,
        width: inner.width(),
        height: inner.height(),
    })
}

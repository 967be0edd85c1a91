use chrono::NaiveDate;
use tray_icon::menu::MenuId;
use tray_icon::TrayIcon;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowMode {
    #[default]
    Full,
    /// Collapsed 180×44 bar in the bottom-right corner
    MiniBar,
}

/// Outer position and inner size of the full window, in logical points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowGeometry {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Project list shown after clicking a date that has tags
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectPopup {
    pub date: NaiveDate,
    pub lines: Vec<String>,
}

/// Header drag handed to the OS, tracked until it settles.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragState {
    /// Outer position when the drag started
    pub origin: Option<(f32, f32)>,
    /// Outer position seen last frame
    pub last: Option<(f32, f32)>,
    /// Consecutive frames the window has not moved since it last moved
    pub still_frames: u32,
}

impl DragState {
    pub fn new(origin: Option<(f32, f32)>) -> Self {
        Self {
            origin,
            last: origin,
            still_frames: 0,
        }
    }

    /// Record this frame's outer position.
    pub fn observe(&mut self, position: Option<(f32, f32)>) {
        if position.is_some() && position == self.last {
            self.still_frames += 1;
        } else {
            self.still_frames = 0;
        }
        self.last = position;
    }

    pub fn has_moved(&self) -> bool {
        self.last.is_some() && self.last != self.origin
    }
}

/// Live tray icon plus the ids of its menu entries.
pub struct TrayHandle {
    /// Dropping the icon removes it from the tray
    pub _icon: TrayIcon,
    pub show_id: MenuId,
    pub hide_id: MenuId,
    pub always_on_top_id: MenuId,
    pub quit_id: MenuId,
}

#[derive(Debug, Default)]
pub struct AppState {
    pub mode: WindowMode,
    /// Header drag handed to the OS, waiting to settle before snapping
    pub drag: Option<DragState>,
    /// Geometry to restore when leaving the mini bar
    pub last_full_geometry: Option<WindowGeometry>,
    /// Whether the first-frame bottom-right placement has run
    pub initial_placement_done: bool,
    pub project_popup: Option<ProjectPopup>,
}

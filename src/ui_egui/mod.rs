mod app;
pub mod theme;
pub mod views;

pub use app::{FloatingCalendarApp, WindowMode, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};

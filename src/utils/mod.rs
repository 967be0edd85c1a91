pub mod date;
pub mod screen;

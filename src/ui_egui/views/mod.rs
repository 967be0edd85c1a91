pub mod calendar_cell;
pub mod month_view;

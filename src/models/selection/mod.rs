// Selection model
// Click-driven date range selection

use chrono::NaiveDate;

use crate::utils::date::{dates_inclusive, month_bounds, to_iso, week_bounds};

/// Current date selection. A `Range` always has `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Empty,
    StartOnly(NaiveDate),
    Range { start: NaiveDate, end: NaiveDate },
}

impl Selection {
    /// Ordered range; swaps the endpoints when given backwards.
    pub fn range(a: NaiveDate, b: NaiveDate) -> Self {
        if a <= b {
            Selection::Range { start: a, end: b }
        } else {
            Selection::Range { start: b, end: a }
        }
    }

    /// Advance the state machine for a click on `date`.
    ///
    /// Clicking the pending start again clears it; a second distinct click
    /// completes the range; any click on a complete range starts over.
    pub fn click(&mut self, date: NaiveDate) {
        *self = match *self {
            Selection::Empty => Selection::StartOnly(date),
            Selection::StartOnly(start) if start == date => Selection::Empty,
            Selection::StartOnly(start) => Selection::range(start, date),
            Selection::Range { .. } => Selection::StartOnly(date),
        };
    }

    pub fn cancel(&mut self) {
        *self = Selection::Empty;
    }

    /// Select Monday..=Sunday of the week containing `today`.
    pub fn select_week_of(&mut self, today: NaiveDate) {
        let (start, end) = week_bounds(today);
        *self = Selection::Range { start, end };
    }

    /// Select the whole month containing `today`.
    pub fn select_month_of(&mut self, today: NaiveDate) {
        let (start, end) = month_bounds(today);
        *self = Selection::Range { start, end };
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Selection::Empty)
    }

    pub fn start(&self) -> Option<NaiveDate> {
        match *self {
            Selection::Empty => None,
            Selection::StartOnly(start) | Selection::Range { start, .. } => Some(start),
        }
    }

    pub fn end(&self) -> Option<NaiveDate> {
        match *self {
            Selection::Range { end, .. } => Some(end),
            _ => None,
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        match *self {
            Selection::Empty => false,
            Selection::StartOnly(start) => start == date,
            Selection::Range { start, end } => start <= date && date <= end,
        }
    }

    /// Every selected date in ascending order.
    pub fn dates(&self) -> Vec<NaiveDate> {
        match *self {
            Selection::Empty => Vec::new(),
            Selection::StartOnly(start) => vec![start],
            Selection::Range { start, end } => dates_inclusive(start, end),
        }
    }

    /// Footer text describing the selection.
    pub fn describe(&self) -> String {
        match *self {
            Selection::Empty => "No dates selected".to_string(),
            Selection::StartOnly(start) => format!("Start: {}", to_iso(start)),
            Selection::Range { start, end } => {
                format!("Range: {} → {}", to_iso(start), to_iso(end))
            }
        }
    }
}

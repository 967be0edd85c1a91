// Date utility functions
// ISO formatting plus the week/month spans used by the quick-jump buttons

use chrono::{Datelike, Duration, NaiveDate};

pub const ISO_FORMAT: &str = "%Y-%m-%d";

pub fn to_iso(date: NaiveDate) -> String {
    date.format(ISO_FORMAT).to_string()
}

pub fn parse_iso(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), ISO_FORMAT).ok()
}

/// Monday of the week containing `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

/// Monday..=Sunday of the week containing `date`.
pub fn week_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = week_start(date);
    (start, start + Duration::days(6))
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// First and last day of the month containing `date`.
pub fn month_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first = first_of_month(date);
    let next = shift_month(first, 1);
    (first, next - Duration::days(1))
}

/// Move a first-of-month date by `delta` months, keeping day 1.
pub fn shift_month(date: NaiveDate, delta: i32) -> NaiveDate {
    let months = date.year() * 12 + date.month0() as i32 + delta;
    let year = months.div_euclid(12);
    let month = months.rem_euclid(12) as u32 + 1;
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(date)
}

/// Every date from `start` to `end`, both inclusive. Empty when `end < start`.
pub fn dates_inclusive(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    start.iter_days().take_while(|day| *day <= end).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn iso_round_trips() {
        assert_eq!(to_iso(ymd(2025, 1, 3)), "2025-01-03");
        assert_eq!(parse_iso(" 2025-01-03 "), Some(ymd(2025, 1, 3)));
        assert_eq!(parse_iso("2025-13-01"), None);
        assert_eq!(parse_iso("01/03/2025"), None);
    }

    #[test]
    fn week_bounds_start_on_monday() {
        // 2025-01-01 is a Wednesday
        assert_eq!(week_bounds(ymd(2025, 1, 1)), (ymd(2024, 12, 30), ymd(2025, 1, 5)));
        // Sunday belongs to the week that started six days earlier
        assert_eq!(week_bounds(ymd(2025, 1, 5)), (ymd(2024, 12, 30), ymd(2025, 1, 5)));
        assert_eq!(week_start(ymd(2025, 1, 6)), ymd(2025, 1, 6));
    }

    #[test]
    fn month_bounds_handle_leap_years_and_december() {
        assert_eq!(month_bounds(ymd(2024, 2, 14)), (ymd(2024, 2, 1), ymd(2024, 2, 29)));
        assert_eq!(month_bounds(ymd(2025, 2, 14)), (ymd(2025, 2, 1), ymd(2025, 2, 28)));
        assert_eq!(month_bounds(ymd(2025, 12, 31)), (ymd(2025, 12, 1), ymd(2025, 12, 31)));
    }

    #[test]
    fn shift_month_wraps_years() {
        assert_eq!(shift_month(ymd(2025, 1, 1), -1), ymd(2024, 12, 1));
        assert_eq!(shift_month(ymd(2025, 12, 1), 1), ymd(2026, 1, 1));
        assert_eq!(shift_month(ymd(2025, 6, 1), 0), ymd(2025, 6, 1));
    }

    #[test]
    fn dates_inclusive_includes_both_ends() {
        let dates = dates_inclusive(ymd(2025, 1, 30), ymd(2025, 2, 2));
        assert_eq!(
            dates,
            vec![ymd(2025, 1, 30), ymd(2025, 1, 31), ymd(2025, 2, 1), ymd(2025, 2, 2)]
        );
        assert_eq!(dates_inclusive(ymd(2025, 1, 1), ymd(2025, 1, 1)), vec![ymd(2025, 1, 1)]);
        assert!(dates_inclusive(ymd(2025, 1, 2), ymd(2025, 1, 1)).is_empty());
    }
}

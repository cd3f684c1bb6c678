//! Gregorian month grid.
//!
//! # Responsibility
//! - Count days per month with the Gregorian leap rule.
//! - Lay out a month as 7-column weeks with empty padding cells.
//!
//! # Invariants
//! - Column 0 is Monday; day 1 lands in the column of its real weekday.
//! - Non-empty cells, read row by row, are exactly `1..=day_count`.

use crate::error::{PlannerError, PlannerResult};
use crate::model::date_key::DateKey;
use chrono::{Datelike, NaiveDate};

/// Columns per week row.
pub const DAYS_PER_WEEK: usize = 7;

/// One grid row; `None` marks a cell outside the month.
pub type Week = [Option<u32>; DAYS_PER_WEEK];

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const WEEKDAY_NAMES: [&str; DAYS_PER_WEEK] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Returns whether `year` has a February 29.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` of `year`.
///
/// # Errors
/// - `InvalidArgument` when `month` is outside `1..=12`.
pub fn day_count(year: i32, month: u32) -> PlannerResult<u32> {
    let days = match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        other => return Err(month_out_of_range(other)),
    };
    Ok(days)
}

/// Lays out `month` of `year` as Monday-first week rows.
///
/// Leading cells before day 1 and trailing cells after the last day are
/// `None`. A month spans four to six rows.
///
/// # Errors
/// - `InvalidArgument` when `month` is outside `1..=12` or `year` is outside
///   the supported date range.
pub fn layout(year: i32, month: u32) -> PlannerResult<Vec<Week>> {
    let days = day_count(year, month)?;
    let offset = first_weekday_offset(year, month)?;

    let mut weeks = Vec::with_capacity(6);
    let mut week: Week = [None; DAYS_PER_WEEK];
    let mut column = offset;

    for day in 1..=days {
        week[column] = Some(day);
        column += 1;
        if column == DAYS_PER_WEEK {
            weeks.push(week);
            week = [None; DAYS_PER_WEEK];
            column = 0;
        }
    }
    if column > 0 {
        weeks.push(week);
    }

    Ok(weeks)
}

/// Every date of the month in ascending order.
pub fn month_dates(year: i32, month: u32) -> PlannerResult<Vec<DateKey>> {
    let days = day_count(year, month)?;
    (1..=days).map(|day| DateKey::new(year, month, day)).collect()
}

/// English month name for `1..=12`.
pub fn month_name(month: u32) -> PlannerResult<&'static str> {
    month
        .checked_sub(1)
        .and_then(|index| MONTH_NAMES.get(index as usize))
        .copied()
        .ok_or_else(|| month_out_of_range(month))
}

/// Weekday column headers, Monday first.
pub fn weekday_names() -> &'static [&'static str; DAYS_PER_WEEK] {
    &WEEKDAY_NAMES
}

fn first_weekday_offset(year: i32, month: u32) -> PlannerResult<usize> {
    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
        PlannerError::invalid(format!("year {year} is outside the supported range"))
    })?;
    Ok(first.weekday().num_days_from_monday() as usize)
}

fn month_out_of_range(month: u32) -> PlannerError {
    PlannerError::invalid(format!("month must be within 1..=12, got {month}"))
}

#[cfg(test)]
mod tests {
    use super::{day_count, first_weekday_offset, is_leap_year, layout, month_name};

    #[test]
    fn leap_rule_handles_centuries() {
        assert!(is_leap_year(2024));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
    }

    #[test]
    fn first_weekday_offset_is_monday_based() {
        // 2024-01-01 was a Monday, 2024-09-01 a Sunday.
        assert_eq!(first_weekday_offset(2024, 1).unwrap(), 0);
        assert_eq!(first_weekday_offset(2024, 9).unwrap(), 6);
    }

    #[test]
    fn month_zero_and_thirteen_are_rejected() {
        assert!(day_count(2024, 0).is_err());
        assert!(day_count(2024, 13).is_err());
        assert!(layout(2024, 13).is_err());
        assert!(month_name(0).is_err());
    }

    #[test]
    fn february_2021_fills_exactly_four_rows() {
        // Starts on Monday with 28 days.
        let weeks = layout(2021, 2).unwrap();
        assert_eq!(weeks.len(), 4);
        assert!(weeks.iter().flatten().all(Option::is_some));
    }
}

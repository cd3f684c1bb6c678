//! Calendar date key.
//!
//! # Responsibility
//! - Identify one day's plan by (year, month, day).
//! - Render and parse the `M/D/YYYY` label shown to users.
//!
//! # Invariants
//! - Only valid dates are constructible; February 30 is rejected, not wrapped.
//! - Equality and ordering follow the calendar, not the label text.

use crate::error::{PlannerError, PlannerResult};
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

static US_DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{1,2})/(\d{1,2})/(-?\d{1,6})$").expect("valid M/D/YYYY regex")
});
static ISO_DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(-?\d{1,6})-(\d{1,2})-(\d{1,2})$").expect("valid YYYY-MM-DD regex")
});

/// Unique identifier for one calendar day's plan.
///
/// Serialized as an ISO `YYYY-MM-DD` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DateKey(NaiveDate);

impl DateKey {
    /// Builds a key from calendar parts.
    ///
    /// # Errors
    /// - `InvalidArgument` when the triple is not a real date.
    pub fn new(year: i32, month: u32, day: u32) -> PlannerResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| {
                PlannerError::invalid(format!("{month}/{day}/{year} is not a valid date"))
            })
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }

    /// ISO form used in logs and wire payloads.
    pub fn to_iso_string(&self) -> String {
        self.0.format("%Y-%m-%d").to_string()
    }
}

impl From<NaiveDate> for DateKey {
    fn from(value: NaiveDate) -> Self {
        Self(value)
    }
}

impl Display for DateKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}/{}", self.month(), self.day(), self.year())
    }
}

impl FromStr for DateKey {
    type Err = PlannerError;

    /// Accepts `M/D/YYYY` (the display label) or ISO `YYYY-MM-DD`.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        let parts = if let Some(caps) = US_DATE_RE.captures(trimmed) {
            (
                caps[3].parse::<i32>(),
                caps[1].parse::<u32>(),
                caps[2].parse::<u32>(),
            )
        } else if let Some(caps) = ISO_DATE_RE.captures(trimmed) {
            (
                caps[1].parse::<i32>(),
                caps[2].parse::<u32>(),
                caps[3].parse::<u32>(),
            )
        } else {
            return Err(PlannerError::invalid(format!(
                "unrecognized date `{trimmed}`; expected M/D/YYYY or YYYY-MM-DD"
            )));
        };

        match parts {
            (Ok(year), Ok(month), Ok(day)) => Self::new(year, month, day),
            _ => Err(PlannerError::invalid(format!("date `{trimmed}` is out of range"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::DateKey;

    #[test]
    fn display_uses_unpadded_month_day_year() {
        let date = DateKey::new(2024, 3, 7).unwrap();
        assert_eq!(date.to_string(), "3/7/2024");
        assert_eq!(date.to_iso_string(), "2024-03-07");
    }

    #[test]
    fn parse_accepts_both_label_shapes() {
        let from_label: DateKey = "12/31/2025".parse().unwrap();
        let from_iso: DateKey = " 2025-12-31 ".parse().unwrap();
        assert_eq!(from_label, from_iso);
    }

    #[test]
    fn parse_rejects_impossible_dates() {
        assert!("2/30/2024".parse::<DateKey>().is_err());
        assert!("2023-02-29".parse::<DateKey>().is_err());
        assert!("tomorrow".parse::<DateKey>().is_err());
    }

    #[test]
    fn keys_that_share_digits_do_not_collide() {
        // 1/11/2024 and 11/1/2024 both read "1112024" without separators.
        let a = DateKey::new(2024, 1, 11).unwrap();
        let b = DateKey::new(2024, 11, 1).unwrap();
        assert_ne!(a, b);
        assert!(a < b);
    }
}

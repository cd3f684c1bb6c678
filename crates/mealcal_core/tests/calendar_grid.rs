use chrono::{Datelike, NaiveDate};
use mealcal_core::{day_count, layout, month_dates, month_name, weekday_names, PlannerError};

#[test]
fn day_count_matches_gregorian_calendar() {
    assert_eq!(day_count(2024, 2).unwrap(), 29);
    assert_eq!(day_count(2023, 2).unwrap(), 28);
    assert_eq!(day_count(2024, 4).unwrap(), 30);
    assert_eq!(day_count(2024, 12).unwrap(), 31);
    assert_eq!(day_count(1900, 2).unwrap(), 28);
    assert_eq!(day_count(2000, 2).unwrap(), 29);
}

#[test]
fn day_count_agrees_with_chrono_for_a_range_of_years() {
    for year in 1890..=2110 {
        for month in 1..=12 {
            let first = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
            let next = if month == 12 {
                NaiveDate::from_ymd_opt(year + 1, 1, 1).unwrap()
            } else {
                NaiveDate::from_ymd_opt(year, month + 1, 1).unwrap()
            };
            let expected = (next - first).num_days() as u32;
            assert_eq!(day_count(year, month).unwrap(), expected, "{year}-{month}");
        }
    }
}

#[test]
fn invalid_month_is_an_invalid_argument() {
    for month in [0, 13, 99] {
        assert!(matches!(
            day_count(2024, month),
            Err(PlannerError::InvalidArgument(_))
        ));
        assert!(matches!(
            layout(2024, month),
            Err(PlannerError::InvalidArgument(_))
        ));
    }
}

#[test]
fn layout_covers_every_day_once_in_order_with_seven_cell_weeks() {
    for year in [2023, 2024, 2025, 2028] {
        for month in 1..=12 {
            let weeks = layout(year, month).unwrap();
            assert!((4..=6).contains(&weeks.len()));
            assert!(weeks.iter().all(|week| week.len() == 7));

            let days: Vec<u32> = weeks.iter().flatten().flatten().copied().collect();
            let expected: Vec<u32> = (1..=day_count(year, month).unwrap()).collect();
            assert_eq!(days, expected, "{year}-{month}");
        }
    }
}

#[test]
fn every_day_sits_in_its_monday_first_weekday_column() {
    for month in 1..=12 {
        let weeks = layout(2024, month).unwrap();
        for week in &weeks {
            for (column, cell) in week.iter().enumerate() {
                if let Some(day) = cell {
                    let date = NaiveDate::from_ymd_opt(2024, month, *day).unwrap();
                    assert_eq!(date.weekday().num_days_from_monday() as usize, column);
                }
            }
        }
    }
}

#[test]
fn september_2024_pads_first_week_up_to_sunday() {
    let weeks = layout(2024, 9).unwrap();
    assert_eq!(weeks[0], [None, None, None, None, None, None, Some(1)]);
    assert_eq!(weeks.len(), 6);
    assert_eq!(weeks[5], [Some(30), None, None, None, None, None, None]);
}

#[test]
fn layout_and_day_count_are_idempotent() {
    assert_eq!(layout(2026, 10).unwrap(), layout(2026, 10).unwrap());
    assert_eq!(day_count(2026, 10).unwrap(), day_count(2026, 10).unwrap());
}

#[test]
fn month_dates_lists_each_date_for_the_selector() {
    let dates = month_dates(2024, 2).unwrap();
    assert_eq!(dates.len(), 29);
    assert_eq!(dates[0].to_string(), "2/1/2024");
    assert_eq!(dates[28].to_string(), "2/29/2024");
}

#[test]
fn labels_are_english_and_monday_first() {
    assert_eq!(month_name(1).unwrap(), "January");
    assert_eq!(month_name(12).unwrap(), "December");
    assert_eq!(weekday_names()[0], "Monday");
    assert_eq!(weekday_names()[6], "Sunday");
}

//! Planner use-case service.
//!
//! # Responsibility
//! - Build month and date views for the presentation layer.
//! - Run save/delete commands and report them as notices.
//!
//! # Invariants
//! - Commands never panic on missing entries; `NotFound` becomes an error notice.
//! - Views are re-fetched by callers after every command; nothing is cached here.

use crate::calendar::grid::{self, DAYS_PER_WEEK};
use crate::error::{NotFoundTarget, PlannerError, PlannerResult};
use crate::model::date_key::DateKey;
use crate::model::meal::{MealPlan, MealType};
use crate::store::planner_store::PlanRepository;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};

/// Placeholder shown for a meal type without text.
pub const NO_MEAL_PLACEHOLDER: &str = "No meal added yet";

/// One grid cell ready for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalendarCell {
    /// `None` for padding cells outside the month.
    pub date: Option<DateKey>,
    /// Highlight flag: a plan is saved for this date.
    pub has_entry: bool,
}

impl CalendarCell {
    pub fn day(&self) -> Option<u32> {
        self.date.map(|date| date.day())
    }
}

/// Month grid plus labels and highlight state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthView {
    pub year: i32,
    pub month: u32,
    /// e.g. `January 2024`.
    pub title: String,
    pub weekday_names: [&'static str; DAYS_PER_WEEK],
    pub day_count: u32,
    pub weeks: Vec<[CalendarCell; DAYS_PER_WEEK]>,
}

/// One meal line of a date view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MealLine {
    pub meal: MealType,
    /// `None` when nothing (or only empty text) is stored.
    pub text: Option<String>,
}

impl Display for MealLine {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let text = self.text.as_deref().unwrap_or(NO_MEAL_PLACEHOLDER);
        write!(f, "{}: {text}", self.meal)
    }
}

/// Current plan of one date, one line per meal type in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanView {
    pub date: DateKey,
    pub has_entry: bool,
    pub meals: Vec<MealLine>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    Success,
    Error,
}

/// Outcome of a command, phrased for the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.level == NoticeLevel::Success
    }
}

impl Display for Notice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Use-case service over a planner repository.
pub struct PlannerService<R: PlanRepository> {
    repo: R,
}

impl<R: PlanRepository> PlannerService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Builds the month grid with highlight flags for saved dates.
    pub fn month_view(&self, year: i32, month: u32) -> PlannerResult<MonthView> {
        let weeks = grid::layout(year, month)?;
        let title = format!("{} {year}", grid::month_name(month)?);
        let day_count = grid::day_count(year, month)?;
        let saved: BTreeSet<DateKey> = self
            .repo
            .dates_in_month(year, month)
            .into_iter()
            .collect();

        let weeks = weeks
            .into_iter()
            .map(|week| -> PlannerResult<[CalendarCell; DAYS_PER_WEEK]> {
                let mut cells = [CalendarCell {
                    date: None,
                    has_entry: false,
                }; DAYS_PER_WEEK];
                for (cell, day) in cells.iter_mut().zip(week) {
                    if let Some(day) = day {
                        let date = DateKey::new(year, month, day)?;
                        cell.date = Some(date);
                        cell.has_entry = saved.contains(&date);
                    }
                }
                Ok(cells)
            })
            .collect::<PlannerResult<Vec<_>>>()?;

        Ok(MonthView {
            year,
            month,
            title,
            weekday_names: *grid::weekday_names(),
            day_count,
            weeks,
        })
    }

    /// Selectable dates of a month.
    pub fn dates_for_month(&self, year: i32, month: u32) -> PlannerResult<Vec<DateKey>> {
        grid::month_dates(year, month)
    }

    /// Raw stored plan (empty when none).
    pub fn plan(&self, date: DateKey) -> MealPlan {
        self.repo.get(date)
    }

    pub fn has_entry(&self, date: DateKey) -> bool {
        self.repo.has_entry(date)
    }

    /// Display-ready plan of one date.
    pub fn plan_view(&self, date: DateKey) -> PlanView {
        let plan = self.repo.get(date);
        let meals = MealType::ALL
            .iter()
            .map(|meal| MealLine {
                meal: *meal,
                text: plan.text(*meal).map(str::to_owned),
            })
            .collect();

        PlanView {
            date,
            has_entry: self.repo.has_entry(date),
            meals,
        }
    }

    /// Saves `input` for `date` with merge-on-empty semantics.
    pub fn save_plan(&mut self, date: DateKey, input: &MealPlan) -> Notice {
        self.repo.upsert(date, input);
        Notice::success(format!("Meal Plan for {date} has been saved."))
    }

    /// Deletes the whole plan of `date`.
    pub fn delete_plan(&mut self, date: DateKey) -> Notice {
        match self.repo.delete(date) {
            Ok(_) => Notice::success(format!("Meal Plan for {date} has been deleted.")),
            Err(err) => not_found_notice(&err),
        }
    }

    /// Deletes one meal type from the plan of `date`.
    pub fn delete_meal(&mut self, date: DateKey, meal: MealType) -> Notice {
        match self.repo.delete_meal_type(date, meal) {
            Ok(_) => Notice::success(format!("{meal} meal for {date} has been deleted.")),
            Err(err) => not_found_notice(&err),
        }
    }
}

fn not_found_notice(err: &PlannerError) -> Notice {
    match err {
        PlannerError::NotFound(NotFoundTarget::Plan(date)) => {
            Notice::error(format!("No meal plan found for {date}."))
        }
        PlannerError::NotFound(NotFoundTarget::Meal(date, meal)) => {
            Notice::error(format!("No {meal} meal found for {date}."))
        }
        other => Notice::error(other.to_string()),
    }
}

//! Core domain logic for the meal planner calendar.
//! This crate is the single source of truth for planner invariants.

pub mod calendar;
pub mod error;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;

pub use calendar::grid::{
    day_count, is_leap_year, layout, month_dates, month_name, weekday_names, Week, DAYS_PER_WEEK,
};
pub use error::{NotFoundTarget, PlannerError, PlannerResult};
pub use logging::{
    default_log_level, init_logging, init_logging_with, logging_status, LoggingConfig,
};
pub use model::date_key::DateKey;
pub use model::meal::{MealPlan, MealType};
pub use service::planner_service::{
    CalendarCell, MealLine, MonthView, Notice, NoticeLevel, PlanView, PlannerService,
    NO_MEAL_PLACEHOLDER,
};
pub use service::session::{PlannerSessions, SessionId, SessionPlanner};
pub use store::planner_store::{PlanRepository, PlannerStore};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}

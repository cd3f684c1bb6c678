//! Error taxonomy shared by calendar and planner operations.
//!
//! # Responsibility
//! - Provide one small error type for every core entry point.
//! - Keep "not found" recoverable and distinct from bad input.
//!
//! # Invariants
//! - An operation that returns an error leaves the store unmodified.

use crate::model::date_key::DateKey;
use crate::model::meal::MealType;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type PlannerResult<T> = Result<T, PlannerError>;

/// What a failed lookup was looking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotFoundTarget {
    /// No plan is stored for the date.
    Plan(DateKey),
    /// The date has a plan, but not for this meal type (or no plan at all).
    Meal(DateKey, MealType),
}

impl Display for NotFoundTarget {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plan(date) => write!(f, "meal plan for {date}"),
            Self::Meal(date, meal) => write!(f, "{meal} meal for {date}"),
        }
    }
}

/// Core error for calendar layout and planner store operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlannerError {
    /// Caller passed a value outside the accepted domain (month, year, label).
    InvalidArgument(String),
    /// Delete targeted an entry that does not exist.
    NotFound(NotFoundTarget),
}

impl PlannerError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Returns whether this error is the recoverable not-found condition.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

impl Display for PlannerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument(message) => write!(f, "invalid argument: {message}"),
            Self::NotFound(target) => write!(f, "not found: {target}"),
        }
    }
}

impl Error for PlannerError {}

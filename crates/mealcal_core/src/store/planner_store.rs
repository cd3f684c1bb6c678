//! Planner store contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide get/upsert/delete over date-keyed meal plans.
//! - Apply merge-on-empty save semantics in one place.
//!
//! # Invariants
//! - A date is present only after an explicit save, even if every text is empty.
//! - Empty text in a save never clears a stored value.
//! - `NotFound` deletes leave the store untouched.

use crate::error::{NotFoundTarget, PlannerError, PlannerResult};
use crate::model::date_key::DateKey;
use crate::model::meal::{MealPlan, MealType};
use log::debug;
use std::collections::BTreeMap;

/// Repository interface for date-keyed meal plans.
pub trait PlanRepository {
    /// Stored plan for `date`, or an empty plan when none was saved.
    fn get(&self, date: DateKey) -> MealPlan;
    /// Merges `partial` into the plan for `date`, creating it when absent.
    fn upsert(&mut self, date: DateKey, partial: &MealPlan);
    /// Removes the whole plan for `date` and returns it.
    fn delete(&mut self, date: DateKey) -> PlannerResult<MealPlan>;
    /// Removes one meal type from the plan for `date` and returns its text.
    fn delete_meal_type(&mut self, date: DateKey, meal: MealType) -> PlannerResult<String>;
    /// Returns whether a plan was saved for `date`.
    fn has_entry(&self, date: DateKey) -> bool;
    /// Saved dates inside `month` of `year`, ascending.
    fn dates_in_month(&self, year: i32, month: u32) -> Vec<DateKey>;
}

/// In-memory planner store; one per session.
#[derive(Debug, Clone, Default)]
pub struct PlannerStore {
    plans: BTreeMap<DateKey, MealPlan>,
}

impl PlannerStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.plans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }

    /// All saved dates, ascending.
    pub fn dates(&self) -> Vec<DateKey> {
        self.plans.keys().copied().collect()
    }
}

impl PlanRepository for PlannerStore {
    fn get(&self, date: DateKey) -> MealPlan {
        self.plans.get(&date).cloned().unwrap_or_default()
    }

    fn upsert(&mut self, date: DateKey, partial: &MealPlan) {
        let created = !self.plans.contains_key(&date);
        self.plans.entry(date).or_default().merge_from(partial);
        debug!(
            "event=plan_upsert module=store status=ok date={} created={}",
            date.to_iso_string(),
            created
        );
    }

    fn delete(&mut self, date: DateKey) -> PlannerResult<MealPlan> {
        match self.plans.remove(&date) {
            Some(plan) => {
                debug!(
                    "event=plan_delete module=store status=ok date={}",
                    date.to_iso_string()
                );
                Ok(plan)
            }
            None => {
                debug!(
                    "event=plan_delete module=store status=not_found date={}",
                    date.to_iso_string()
                );
                Err(PlannerError::NotFound(NotFoundTarget::Plan(date)))
            }
        }
    }

    fn delete_meal_type(&mut self, date: DateKey, meal: MealType) -> PlannerResult<String> {
        let removed = self
            .plans
            .get_mut(&date)
            .and_then(|plan| plan.remove(meal));

        match removed {
            Some(text) => {
                debug!(
                    "event=meal_delete module=store status=ok date={} meal={}",
                    date.to_iso_string(),
                    meal.label()
                );
                Ok(text)
            }
            None => {
                debug!(
                    "event=meal_delete module=store status=not_found date={} meal={}",
                    date.to_iso_string(),
                    meal.label()
                );
                Err(PlannerError::NotFound(NotFoundTarget::Meal(date, meal)))
            }
        }
    }

    fn has_entry(&self, date: DateKey) -> bool {
        self.plans.contains_key(&date)
    }

    fn dates_in_month(&self, year: i32, month: u32) -> Vec<DateKey> {
        self.plans
            .keys()
            .filter(|date| date.year() == year && date.month() == month)
            .copied()
            .collect()
    }
}

//! Domain model for the meal planner calendar.
//!
//! # Responsibility
//! - Define the date key, meal type and meal plan shapes used by core logic.
//! - Keep display formats separate from identity (`DateKey` compares by date).
//!
//! # Invariants
//! - A `DateKey` always names a real Gregorian date.
//! - `MealType` is a closed set; no runtime extension.

pub mod date_key;
pub mod meal;

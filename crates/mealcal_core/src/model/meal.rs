//! Meal types and per-date meal plans.
//!
//! # Responsibility
//! - Define the closed set of meal slots shown for every date.
//! - Hold free-form text per slot, with "absent" and "empty" both meaning
//!   nothing entered yet.
//!
//! # Invariants
//! - Iteration order is always Breakfast, Lunch, Snacks, Dinner.

use crate::error::PlannerError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// One meal slot of a day.
///
/// Variant order drives display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    Breakfast,
    Lunch,
    Snacks,
    Dinner,
}

impl MealType {
    /// Every meal type in display order.
    pub const ALL: [MealType; 4] = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Snacks,
        MealType::Dinner,
    ];

    /// User-facing label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Breakfast => "Breakfast",
            Self::Lunch => "Lunch",
            Self::Snacks => "Snacks",
            Self::Dinner => "Dinner",
        }
    }
}

impl Display for MealType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MealType {
    type Err = PlannerError;

    /// Case-insensitive label match; `snack` is accepted for `Snacks`.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "breakfast" => Ok(Self::Breakfast),
            "lunch" => Ok(Self::Lunch),
            "snacks" | "snack" => Ok(Self::Snacks),
            "dinner" => Ok(Self::Dinner),
            other => Err(PlannerError::invalid(format!(
                "unknown meal type `{other}`; expected breakfast|lunch|snacks|dinner"
            ))),
        }
    }
}

/// Per-date mapping from meal type to free text.
///
/// Used both as the stored plan and as the partial input of a save, where an
/// empty string means "leave unchanged".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MealPlan {
    meals: BTreeMap<MealType, String>,
}

impl MealPlan {
    /// Creates a plan with every meal type unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter, mainly for save inputs.
    pub fn with(mut self, meal: MealType, text: impl Into<String>) -> Self {
        self.set(meal, text);
        self
    }

    /// Stored text for `meal`, including empty text when it was saved empty.
    pub fn get(&self, meal: MealType) -> Option<&str> {
        self.meals.get(&meal).map(String::as_str)
    }

    /// Text for `meal` only when it carries content.
    pub fn text(&self, meal: MealType) -> Option<&str> {
        self.get(meal).filter(|text| !text.is_empty())
    }

    pub fn set(&mut self, meal: MealType, text: impl Into<String>) {
        self.meals.insert(meal, text.into());
    }

    /// Removes one meal type and returns its previous text.
    pub fn remove(&mut self, meal: MealType) -> Option<String> {
        self.meals.remove(&meal)
    }

    pub fn contains(&self, meal: MealType) -> bool {
        self.meals.contains_key(&meal)
    }

    /// Returns whether no meal type carries text.
    pub fn is_blank(&self) -> bool {
        self.meals.values().all(|text| text.is_empty())
    }

    /// Stored entries in display order.
    pub fn iter(&self) -> impl Iterator<Item = (MealType, &str)> {
        self.meals.iter().map(|(meal, text)| (*meal, text.as_str()))
    }

    /// Applies a partial save: non-empty texts overwrite, empty texts keep
    /// the current value, and meal types never stored before are recorded
    /// as empty so a later read still sees them as saved.
    pub fn merge_from(&mut self, partial: &MealPlan) {
        for (meal, text) in partial.iter() {
            if !text.is_empty() {
                self.set(meal, text);
            } else {
                self.meals.entry(meal).or_default();
            }
        }
    }
}

impl<S: Into<String>> FromIterator<(MealType, S)> for MealPlan {
    fn from_iter<T: IntoIterator<Item = (MealType, S)>>(iter: T) -> Self {
        Self {
            meals: iter
                .into_iter()
                .map(|(meal, text)| (meal, text.into()))
                .collect(),
        }
    }
}

// ABOUTME: Render model for generated meal plans after normalization
// ABOUTME: Meal, DayPlan, PlanSummary, PlanDisclaimer, and MealPlanResult definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::messages::UNKNOWN_MEAL_NAME;
use serde::{Deserialize, Serialize};

/// Slot a meal occupies within a day
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MealSlot {
    /// Breakfast meal
    Breakfast,
    /// Lunch meal
    Lunch,
    /// Dinner meal
    Dinner,
    /// Snack between meals
    Snack,
}

impl MealSlot {
    /// Display label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Breakfast => "Breakfast",
            Self::Lunch => "Lunch",
            Self::Dinner => "Dinner",
            Self::Snack => "Snack",
        }
    }
}

/// A single meal with its macros
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    /// Meal name, `"Unknown"` when the service left it out
    pub name: String,
    /// Energy in kcal
    pub calories: f64,
    /// Protein in grams
    pub protein: f64,
    /// Carbohydrates in grams
    pub carbs: f64,
    /// Fat in grams
    pub fats: f64,
}

impl Default for Meal {
    fn default() -> Self {
        Self {
            name: UNKNOWN_MEAL_NAME.to_owned(),
            calories: 0.0,
            protein: 0.0,
            carbs: 0.0,
            fats: 0.0,
        }
    }
}

/// One day of the plan
///
/// Missing main meals are `None` rather than placeholder meals so that the
/// presentation layer can say "not available" instead of inventing food.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    /// 1-based day number
    pub day: u32,
    /// Breakfast, if generated
    pub breakfast: Option<Meal>,
    /// Lunch, if generated
    pub lunch: Option<Meal>,
    /// Dinner, if generated
    pub dinner: Option<Meal>,
    /// Snacks, possibly empty
    pub snacks: Vec<Meal>,
}

impl DayPlan {
    /// Day with every slot empty
    #[must_use]
    pub const fn placeholder(day: u32) -> Self {
        Self {
            day,
            breakfast: None,
            lunch: None,
            dinner: None,
            snacks: Vec::new(),
        }
    }

    /// Whether the day has no meals at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.breakfast.is_none()
            && self.lunch.is_none()
            && self.dinner.is_none()
            && self.snacks.is_empty()
    }

    /// Present meals in serving order, snacks last
    pub fn meals(&self) -> impl Iterator<Item = (MealSlot, &Meal)> + '_ {
        [
            (MealSlot::Breakfast, self.breakfast.as_ref()),
            (MealSlot::Lunch, self.lunch.as_ref()),
            (MealSlot::Dinner, self.dinner.as_ref()),
        ]
        .into_iter()
        .filter_map(|(slot, meal)| meal.map(|meal| (slot, meal)))
        .chain(self.snacks.iter().map(|snack| (MealSlot::Snack, snack)))
    }

    /// Sum of calories across the day's meals
    #[must_use]
    pub fn total_calories(&self) -> f64 {
        self.meals().map(|(_, meal)| meal.calories).sum()
    }
}

/// Plan-level calorie summary
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanSummary {
    /// Calories across the whole plan
    pub total_calories: f64,
    /// Mean calories per day
    pub average_daily_calories: f64,
}

/// Caveats the service attaches to a generated plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanDisclaimer {
    /// Main disclaimer text
    pub message: String,
    /// Description of the data the plan was built from
    pub knowledge_base: Option<String>,
    /// Known limitations, possibly empty
    pub limitations: Vec<String>,
}

/// Normalized meal plan handed to presentation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlanResult {
    /// Plan length reported by the service, or the number of days received
    pub days: u32,
    /// Days in the order the service returned them
    pub meals: Vec<DayPlan>,
    /// Calorie summary, zeroed when absent
    pub summary: PlanSummary,
    /// Safety notice to show above the plan
    pub safety_warning: Option<String>,
    /// Disclaimer block to show above the plan
    pub disclaimer: Option<PlanDisclaimer>,
}

// ABOUTME: Turns an untrusted meal plan response body into a fully defaulted render model
// ABOUTME: Rejects only unusable bodies; per-day and per-meal defects become defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Response normalization
//!
//! The service is not trusted to return well-formed days. Once the body is a
//! JSON object holding a `meals` array, normalization cannot fail: every element
//! becomes exactly one [`DayPlan`], in order, and every field the renderer reads
//! is present and typed.

use crate::constants::messages::UNKNOWN_MEAL_NAME;
use crate::errors::{ResponseError, SchemaViolation};
use crate::models::{DayPlan, Meal, MealPlanResult, PlanDisclaimer, PlanSummary};
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// Parse and normalize a raw response body
///
/// # Errors
///
/// Returns `Empty` for a blank body, `MalformedJson` when it does not parse, and
/// `Schema` when it is not an object with a `meals` array
pub fn normalize(raw: &str) -> Result<MealPlanResult, ResponseError> {
    if raw.trim().is_empty() {
        return Err(ResponseError::Empty);
    }

    let value: Value =
        serde_json::from_str(raw).map_err(|source| ResponseError::MalformedJson { source })?;
    normalize_value(&value)
}

/// Normalize an already parsed response
///
/// # Errors
///
/// Returns `Schema` when `value` is not an object with a `meals` array
pub fn normalize_value(value: &Value) -> Result<MealPlanResult, ResponseError> {
    let object = value.as_object().ok_or(SchemaViolation::NotAnObject)?;
    let meals = object
        .get("meals")
        .and_then(Value::as_array)
        .ok_or(SchemaViolation::MissingMeals)?;

    let days: Vec<DayPlan> = meals
        .iter()
        .enumerate()
        .map(|(index, entry)| normalize_day(index, entry))
        .collect();

    let day_count = object
        .get("days")
        .and_then(positive_integer)
        .unwrap_or_else(|| u32::try_from(days.len()).unwrap_or(u32::MAX));

    let result = MealPlanResult {
        days: day_count,
        meals: days,
        summary: object
            .get("summary")
            .map_or_else(PlanSummary::default, normalize_summary),
        safety_warning: object.get("safetyWarning").and_then(non_empty_string),
        disclaimer: object.get("disclaimer").and_then(normalize_disclaimer),
    };

    debug!(
        days = result.days,
        elements = result.meals.len(),
        has_warning = result.safety_warning.is_some(),
        has_disclaimer = result.disclaimer.is_some(),
        "Normalized meal plan"
    );

    Ok(result)
}

fn normalize_day(index: usize, entry: &Value) -> DayPlan {
    let fallback_day = u32::try_from(index + 1).unwrap_or(u32::MAX);

    let Some(day) = entry.as_object() else {
        warn!(index, "Meal plan day is not an object, using placeholder");
        return DayPlan::placeholder(fallback_day);
    };

    DayPlan {
        day: day
            .get("day")
            .and_then(positive_integer)
            .unwrap_or(fallback_day),
        breakfast: day.get("breakfast").and_then(normalize_meal),
        lunch: day.get("lunch").and_then(normalize_meal),
        dinner: day.get("dinner").and_then(normalize_meal),
        snacks: day
            .get("snacks")
            .and_then(Value::as_array)
            .map(|snacks| snacks.iter().filter_map(normalize_meal).collect())
            .unwrap_or_default(),
    }
}

fn normalize_meal(value: &Value) -> Option<Meal> {
    value.as_object().map(meal_from_object)
}

fn meal_from_object(meal: &Map<String, Value>) -> Meal {
    let number = |key: &str| meal.get(key).map_or(0.0, number_or_zero);

    Meal {
        name: meal
            .get("name")
            .and_then(non_empty_string)
            .unwrap_or_else(|| UNKNOWN_MEAL_NAME.to_owned()),
        calories: number("calories"),
        protein: number("protein"),
        carbs: number("carbs"),
        fats: number("fats"),
    }
}

fn normalize_summary(value: &Value) -> PlanSummary {
    value.as_object().map_or_else(PlanSummary::default, |summary| {
        let number = |key: &str| summary.get(key).map_or(0.0, number_or_zero);
        PlanSummary {
            total_calories: number("totalCalories"),
            average_daily_calories: number("averageDailyCalories"),
        }
    })
}

fn normalize_disclaimer(value: &Value) -> Option<PlanDisclaimer> {
    let disclaimer = value.as_object()?;
    let message = disclaimer.get("message").and_then(non_empty_string)?;

    Some(PlanDisclaimer {
        message,
        knowledge_base: disclaimer.get("knowledgeBase").and_then(non_empty_string),
        limitations: disclaimer
            .get("limitations")
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(non_empty_string).collect())
            .unwrap_or_default(),
    })
}

/// A finite number, or a string holding one, else zero
fn number_or_zero(value: &Value) -> f64 {
    let number = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    };
    number.filter(|number| number.is_finite()).unwrap_or(0.0)
}

/// A whole number above zero, given as a number or a numeric string
fn positive_integer(value: &Value) -> Option<u32> {
    let number = match value {
        Value::Number(number) => number.as_u64().or_else(|| {
            number
                .as_f64()
                .filter(|value| value.fract().abs() < f64::EPSILON && *value > 0.0)
                .map(|value| value as u64)
        }),
        Value::String(text) => text.trim().parse::<u64>().ok(),
        _ => None,
    }?;

    u32::try_from(number).ok().filter(|number| *number > 0)
}

fn non_empty_string(value: &Value) -> Option<String> {
    value
        .as_str()
        .filter(|text| !text.trim().is_empty())
        .map(str::to_owned)
}

// ABOUTME: Integration tests for meal plan response normalization
// ABOUTME: Rejects unusable bodies and fills defaults for every malformed day and meal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs, clippy::float_cmp)]

use mealplan_client::errors::{ErrorCode, ResponseError, SchemaViolation};
use mealplan_client::models::{Meal, PlanSummary};
use mealplan_client::normalize::normalize;

const INVALID_FORMAT: &str = "Invalid response format from server. Please try again.";

#[test]
fn test_empty_body() {
    let err = normalize("").unwrap_err();

    assert!(matches!(err, ResponseError::Empty));
    assert_eq!(err.to_string(), INVALID_FORMAT);
    assert_eq!(err.code(), ErrorCode::EmptyResponse);
}

#[test]
fn test_malformed_json() {
    let err = normalize("not json").unwrap_err();

    assert!(matches!(err, ResponseError::MalformedJson { .. }));
    assert_eq!(err.to_string(), INVALID_FORMAT);
}

#[test]
fn test_missing_meals_array() {
    let err = normalize(r#"{"foo":1}"#).unwrap_err();

    assert!(matches!(
        err,
        ResponseError::Schema(SchemaViolation::MissingMeals)
    ));
    assert_eq!(
        err.to_string(),
        "Meal plan data is missing required meals array"
    );
}

#[test]
fn test_meals_not_an_array() {
    let err = normalize(r#"{"meals":{"day":1}}"#).unwrap_err();
    assert!(matches!(
        err,
        ResponseError::Schema(SchemaViolation::MissingMeals)
    ));
}

#[test]
fn test_top_level_not_an_object() {
    for body in ["[]", "42", "\"meals\"", "null"] {
        let err = normalize(body).unwrap_err();
        assert!(
            matches!(err, ResponseError::Schema(SchemaViolation::NotAnObject)),
            "body {body}"
        );
        assert_eq!(err.to_string(), "Invalid meal plan data received from server");
    }
}

#[test]
fn test_partial_day_is_defaulted() {
    let plan =
        normalize(r#"{"meals":[{"breakfast":{"name":"Oats","calories":300}}]}"#).unwrap();

    assert_eq!(plan.days, 1);
    assert_eq!(plan.meals.len(), 1);
    assert_eq!(plan.summary, PlanSummary::default());

    let day = &plan.meals[0];
    assert_eq!(day.day, 1);
    assert_eq!(
        day.breakfast,
        Some(Meal {
            name: "Oats".to_owned(),
            calories: 300.0,
            protein: 0.0,
            carbs: 0.0,
            fats: 0.0,
        })
    );
    assert!(day.lunch.is_none());
    assert!(day.dinner.is_none());
    assert!(day.snacks.is_empty());
}

#[test]
fn test_null_element_becomes_placeholder() {
    let plan = normalize(r#"{"meals":[null, {"day":5}]}"#).unwrap();

    assert_eq!(plan.meals.len(), 2);
    assert_eq!(plan.meals[0].day, 1);
    assert!(plan.meals[0].is_empty());
    assert_eq!(plan.meals[1].day, 5);
    assert_eq!(plan.days, 2);
}

#[test]
fn test_output_length_matches_input() {
    let plan = normalize(r#"{"meals":[1, "two", [], {}, true, {"day":"x"}]}"#).unwrap();

    assert_eq!(plan.meals.len(), 6);
    let numbers: Vec<u32> = plan.meals.iter().map(|day| day.day).collect();
    assert_eq!(numbers, vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_invalid_day_numbers_fall_back_to_position() {
    let plan = normalize(
        r#"{"meals":[{"day":0},{"day":-3},{"day":1.5},{"day":"4"},{"day":null}]}"#,
    )
    .unwrap();

    let numbers: Vec<u32> = plan.meals.iter().map(|day| day.day).collect();
    assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_meal_fields_defaulted_individually() {
    let plan = normalize(
        r#"{"meals":[{
            "lunch": {"calories": "450", "protein": null, "carbs": "lots", "fats": 12.5},
            "dinner": {"name": "", "calories": 600},
            "breakfast": "toast"
        }]}"#,
    )
    .unwrap();
    let day = &plan.meals[0];

    let lunch = day.lunch.as_ref().unwrap();
    assert_eq!(lunch.name, "Unknown");
    assert_eq!(lunch.calories, 450.0);
    assert_eq!(lunch.protein, 0.0);
    assert_eq!(lunch.carbs, 0.0);
    assert_eq!(lunch.fats, 12.5);

    assert_eq!(day.dinner.as_ref().unwrap().name, "Unknown");
    assert!(day.breakfast.is_none());
}

#[test]
fn test_snacks_keep_only_objects() {
    let plan = normalize(
        r#"{"meals":[
            {"snacks": [{"name": "Apple", "calories": 95}, null, "nuts", {"calories": 150}]},
            {"snacks": "none"}
        ]}"#,
    )
    .unwrap();

    let snacks = &plan.meals[0].snacks;
    assert_eq!(snacks.len(), 2);
    assert_eq!(snacks[0].name, "Apple");
    assert_eq!(snacks[1].name, "Unknown");
    assert_eq!(plan.meals[0].total_calories(), 245.0);
    assert!(plan.meals[1].snacks.is_empty());
}

#[test]
fn test_summary_and_day_count_from_body() {
    let plan = normalize(
        r#"{"days": 7, "meals": [{}, {}],
            "summary": {"totalCalories": 3600, "averageDailyCalories": "1800"}}"#,
    )
    .unwrap();

    assert_eq!(plan.days, 7);
    assert_eq!(plan.summary.total_calories, 3600.0);
    assert_eq!(plan.summary.average_daily_calories, 1800.0);
}

#[test]
fn test_malformed_summary_defaults_to_zero() {
    let plan = normalize(r#"{"days": "soon", "meals": [{}], "summary": "n/a"}"#).unwrap();

    assert_eq!(plan.days, 1);
    assert_eq!(plan.summary, PlanSummary::default());
}

#[test]
fn test_safety_warning_and_disclaimer() {
    let plan = normalize(
        r#"{"meals": [],
            "safetyWarning": "Calories below recommended minimum",
            "disclaimer": {
                "message": "Generated from a limited food list.",
                "knowledgeBase": "USDA sample",
                "limitations": ["Values are approximate", "", 4]
            }}"#,
    )
    .unwrap();

    assert_eq!(plan.days, 0);
    assert_eq!(
        plan.safety_warning.as_deref(),
        Some("Calories below recommended minimum")
    );
    let disclaimer = plan.disclaimer.unwrap();
    assert_eq!(disclaimer.message, "Generated from a limited food list.");
    assert_eq!(disclaimer.knowledge_base.as_deref(), Some("USDA sample"));
    assert_eq!(disclaimer.limitations, vec!["Values are approximate"]);
}

#[test]
fn test_blank_optional_blocks_are_dropped() {
    let plan = normalize(
        r#"{"meals": [], "safetyWarning": "  ", "disclaimer": {"limitations": ["x"]}}"#,
    )
    .unwrap();

    assert!(plan.safety_warning.is_none());
    assert!(plan.disclaimer.is_none());
}

#[test]
fn test_render_model_serializes_camel_case() {
    let plan = normalize(r#"{"meals":[{"breakfast":{"name":"Oats"}}]}"#).unwrap();
    let value = serde_json::to_value(&plan).unwrap();

    assert!(value["summary"].get("averageDailyCalories").is_some());
    assert!(value["meals"][0]["lunch"].is_null());
}

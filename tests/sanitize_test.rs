// ABOUTME: Integration tests for allergy and preference sanitization
// ABOUTME: Checks count and length bounds, input shape handling, and idempotence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use mealplan_client::sanitize::{
    sanitize_allergies, sanitize_allergy_list, sanitize_allergy_text, sanitize_preferences,
};
use serde_json::json;

#[test]
fn test_text_is_split_and_trimmed() {
    let allergies = sanitize_allergies(&json!(" peanuts ,shellfish,, , tree nuts "));
    assert_eq!(allergies, vec!["peanuts", "shellfish", "tree nuts"]);
}

#[test]
fn test_blank_text_yields_nothing() {
    assert!(sanitize_allergy_text("").is_empty());
    assert!(sanitize_allergy_text(" , ,, ").is_empty());
}

#[test]
fn test_text_truncated_to_500_chars_before_split() {
    // 499 filler characters, then a comma at position 500 that must be cut away
    let text = format!("{},second", "x".repeat(499));
    let allergies = sanitize_allergy_text(&format!("{text}x"));
    assert_eq!(allergies.len(), 1);

    let exactly = format!("{},y", "a".repeat(497));
    assert_eq!(exactly.chars().count(), 499);
    let allergies = sanitize_allergy_text(&format!("{exactly}zzzz"));
    assert_eq!(allergies.len(), 2);
    assert_eq!(allergies[1], "yz");
}

#[test]
fn test_text_entries_capped_at_100_chars() {
    let long = "b".repeat(150);
    let allergies = sanitize_allergy_text(&format!("{long},milk"));

    assert_eq!(allergies[0].chars().count(), 100);
    assert_eq!(allergies[1], "milk");
}

#[test]
fn test_text_keeps_first_50_entries() {
    let text = (0..80).map(|i| format!("a{i}")).collect::<Vec<_>>().join(",");
    let allergies = sanitize_allergy_text(&text);

    assert_eq!(allergies.len(), 50);
    assert_eq!(allergies[0], "a0");
    assert_eq!(allergies[49], "a49");
}

#[test]
fn test_multibyte_text_counts_characters() {
    let text = "食".repeat(600);
    let allergies = sanitize_allergy_text(&text);

    assert_eq!(allergies.len(), 1);
    assert_eq!(allergies[0].chars().count(), 100);
}

#[test]
fn test_array_keeps_only_strings_from_first_50() {
    let mut items: Vec<serde_json::Value> = (0..60).map(|i| json!(format!("item{i}"))).collect();
    items[1] = json!(42);
    items[2] = json!(null);
    items[3] = json!({"name": "egg"});

    let allergies = sanitize_allergies(&serde_json::Value::Array(items));

    assert_eq!(allergies.len(), 47);
    assert_eq!(allergies[0], "item0");
    assert_eq!(allergies[1], "item4");
    assert!(!allergies.contains(&"item50".to_owned()));
}

#[test]
fn test_array_entries_trimmed_and_truncated() {
    let allergies = sanitize_allergies(&json!(["  soy  ", "c".repeat(120), ""]));

    assert_eq!(allergies[0], "soy");
    assert_eq!(allergies[1].len(), 100);
    assert_eq!(allergies[2], "");
}

#[test]
fn test_other_shapes_yield_nothing() {
    for input in [json!(null), json!(12), json!(true), json!({"a": "b"})] {
        assert!(sanitize_allergies(&input).is_empty(), "input {input}");
        assert!(sanitize_preferences(&input).is_empty(), "input {input}");
    }
    assert!(sanitize_preferences(&json!("Low Carb")).is_empty());
}

#[test]
fn test_output_bounds_hold_for_large_input() {
    let items: Vec<String> = (0..200).map(|i| format!("{i}{}", "z".repeat(300))).collect();
    let allergies = sanitize_allergy_list(&items);

    assert!(allergies.len() <= 50);
    assert!(allergies.iter().all(|entry| entry.chars().count() <= 100));
}

#[test]
fn test_sanitizing_twice_is_a_no_op() {
    let padded_tail = format!("{} x", "q".repeat(99));
    let inputs = vec![
        json!(" peanuts , shellfish ,"),
        json!(format!("{},sesame", "w".repeat(140))),
        json!(["  gluten ", padded_tail, "", 7, "dairy"]),
    ];

    for input in inputs {
        let once = sanitize_allergies(&input);
        let twice = sanitize_allergy_list(&once);
        assert_eq!(once, twice, "input {input}");
    }
}

#[test]
fn test_preferences_pass_through_capped() {
    let labels: Vec<String> = (0..25).map(|i| format!("pref{i}")).collect();
    let preferences = sanitize_preferences(&json!(labels));

    assert_eq!(preferences.len(), 20);
    assert_eq!(preferences[19], "pref19");

    let mixed = sanitize_preferences(&json!(["Low Carb", 3, "High Protein"]));
    assert_eq!(mixed, vec!["Low Carb", "High Protein"]);
}

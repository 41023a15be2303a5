// ABOUTME: Bounds and cleans free-form allergy and preference input before transmission
// ABOUTME: Accepts any JSON shape, never fails, and is a fixed point on its own output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! List sanitization
//!
//! Lengths are counted in characters, not bytes, so truncation never splits a
//! code point. Every entry is trimmed, truncated, then trimmed at its end again,
//! which makes a second pass over sanitized output a no-op.

use crate::constants::limits::{
    MAX_ALLERGIES, MAX_ALLERGY_ENTRY_CHARS, MAX_ALLERGY_TEXT_CHARS, MAX_PREFERENCES,
};
use serde_json::Value;
use tracing::debug;

/// Sanitize allergies given either as free text or as a list
///
/// Text is split on commas, lists are taken entry by entry, anything else
/// yields no allergies.
#[must_use]
pub fn sanitize_allergies(input: &Value) -> Vec<String> {
    match input {
        Value::String(text) => sanitize_allergy_text(text),
        Value::Array(items) => {
            let sanitized: Vec<String> = items
                .iter()
                .take(MAX_ALLERGIES)
                .filter_map(Value::as_str)
                .map(clean_allergy_entry)
                .collect();
            debug!(
                received = items.len(),
                kept = sanitized.len(),
                "Sanitized allergy list"
            );
            sanitized
        }
        _ => Vec::new(),
    }
}

/// Sanitize the free-text allergy field
#[must_use]
pub fn sanitize_allergy_text(text: &str) -> Vec<String> {
    let sanitized: Vec<String> = truncate_chars(text, MAX_ALLERGY_TEXT_CHARS)
        .split(',')
        .map(clean_allergy_entry)
        .filter(|entry| !entry.is_empty())
        .take(MAX_ALLERGIES)
        .collect();
    debug!(
        chars = text.chars().count(),
        kept = sanitized.len(),
        "Sanitized allergy text"
    );
    sanitized
}

/// Sanitize an already split allergy list
///
/// Empty entries are kept; only the free-text path drops them.
#[must_use]
pub fn sanitize_allergy_list<S: AsRef<str>>(items: &[S]) -> Vec<String> {
    items
        .iter()
        .take(MAX_ALLERGIES)
        .map(|item| clean_allergy_entry(item.as_ref()))
        .collect()
}

/// Sanitize dietary preferences
///
/// Lists pass through with string entries only, anything else yields none.
#[must_use]
pub fn sanitize_preferences(input: &Value) -> Vec<String> {
    let Value::Array(items) = input else {
        return Vec::new();
    };

    let sanitized: Vec<String> = items
        .iter()
        .take(MAX_PREFERENCES)
        .filter_map(Value::as_str)
        .map(str::to_owned)
        .collect();
    debug!(
        received = items.len(),
        kept = sanitized.len(),
        "Sanitized preferences"
    );
    sanitized
}

fn clean_allergy_entry(entry: &str) -> String {
    truncate_chars(entry.trim(), MAX_ALLERGY_ENTRY_CHARS)
        .trim_end()
        .to_owned()
}

/// Longest prefix of `text` holding at most `max_chars` characters
fn truncate_chars(text: &str, max_chars: usize) -> &str {
    text.char_indices()
        .nth(max_chars)
        .map_or(text, |(index, _)| &text[..index])
}

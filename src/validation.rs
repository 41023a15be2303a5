// ABOUTME: Profile and plan-duration validation run before any request is built
// ABOUTME: Reports every missing field at once and range-checks calories and day counts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::ranges::{
    MAX_DAILY_CALORIES, MAX_PLAN_DAYS, MIN_DAILY_CALORIES, MIN_PLAN_DAYS,
};
use crate::errors::ValidationError;
use crate::models::{DietaryStyle, Goal, PlanDuration, Profile, ProfileField};
use serde_json::Value;

/// Outcome of checking a profile
#[derive(Debug, Default)]
pub struct ProfileReport {
    /// True only when nothing is missing and nothing is invalid
    pub complete: bool,
    /// Empty required fields, in form order
    pub missing: Vec<ProfileField>,
    /// Problems with fields that do hold a value
    pub errors: Vec<ValidationError>,
}

impl ProfileReport {
    /// Collapse the report into the error a caller should see first
    ///
    /// # Errors
    ///
    /// Returns `MissingFields` naming every empty field, otherwise the first field error
    pub fn into_result(self) -> Result<(), ValidationError> {
        if !self.missing.is_empty() {
            return Err(ValidationError::MissingFields {
                fields: self.missing,
            });
        }
        self.errors.into_iter().next().map_or(Ok(()), Err)
    }
}

/// Check a profile without side effects
#[must_use]
pub fn validate_profile(profile: &Profile) -> ProfileReport {
    let missing: Vec<ProfileField> = ProfileField::ALL
        .into_iter()
        .filter(|field| profile.field(*field).is_empty())
        .collect();

    let mut errors = Vec::new();

    if !profile.goal.is_empty() && Goal::from_wire(&profile.goal).is_none() {
        errors.push(ValidationError::UnsupportedOption {
            field: ProfileField::Goal,
            value: profile.goal.clone(),
        });
    }

    if !profile.calories_target.is_empty() {
        if let Err(err) = parse_calories(&profile.calories_target) {
            errors.push(err);
        }
    }

    if !profile.dietary_style.is_empty() && DietaryStyle::from_wire(&profile.dietary_style).is_none()
    {
        errors.push(ValidationError::UnsupportedOption {
            field: ProfileField::DietaryStyle,
            value: profile.dietary_style.clone(),
        });
    }

    ProfileReport {
        complete: missing.is_empty() && errors.is_empty(),
        missing,
        errors,
    }
}

/// Parse a daily calories target the way a numeric form field yields it
///
/// # Errors
///
/// Returns `CaloriesOutOfRange` when the value has no leading integer or lies
/// outside the accepted range
pub fn parse_calories(raw: &str) -> Result<i64, ValidationError> {
    parse_leading_integer(raw)
        .filter(|calories| (MIN_DAILY_CALORIES..=MAX_DAILY_CALORIES).contains(calories))
        .ok_or_else(|| ValidationError::CaloriesOutOfRange {
            value: raw.to_owned(),
        })
}

/// Resolve the requested plan length
///
/// Values that cannot be read as a number, or that read as zero, fall back to
/// the default week. Other values outside the range are rejected.
///
/// # Errors
///
/// Returns `DaysOutOfRange` for a parsed count outside `1..=30`
pub fn validate_days(raw: &Value) -> Result<PlanDuration, ValidationError> {
    let Some(days) = days_from_value(raw) else {
        return Ok(PlanDuration::default());
    };

    u32::try_from(days)
        .ok()
        .filter(|days| (MIN_PLAN_DAYS..=MAX_PLAN_DAYS).contains(days))
        .and_then(PlanDuration::new)
        .ok_or(ValidationError::DaysOutOfRange { days })
}

fn days_from_value(raw: &Value) -> Option<i64> {
    match raw {
        Value::Number(number) => number.as_i64().or_else(|| {
            number
                .as_f64()
                .filter(|value| value.is_finite())
                .map(|value| value.trunc() as i64)
        }),
        Value::String(text) => parse_leading_integer(text),
        _ => None,
    }
    .filter(|days| *days != 0)
}

/// Read an optionally signed run of digits at the start of `raw`
///
/// Leading whitespace is skipped and anything after the digits is ignored.
/// Values too large for `i64` saturate.
#[must_use]
pub fn parse_leading_integer(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut seen_digit = false;
    let mut value: i64 = 0;
    for digit in digits.bytes().take_while(u8::is_ascii_digit) {
        seen_digit = true;
        value = value
            .saturating_mul(10)
            .saturating_add(i64::from(digit - b'0'));
    }

    seen_digit.then_some(if negative { -value } else { value })
}

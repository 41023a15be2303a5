// ABOUTME: Request body sent to the meal plan generation endpoint
// ABOUTME: Holds the profile snapshot plus already-sanitized lists and the day count
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::profile::Profile;
use serde::{Deserialize, Serialize};

/// Body of `POST /api/mealplan`
///
/// Only the request builder constructs this in production; by then the lists are
/// sanitized and `days` is within the accepted range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestPayload {
    /// Profile exactly as validated
    pub profile: Profile,
    /// Preference labels, at most 20
    pub preferences: Vec<String>,
    /// Allergy entries, at most 50 of at most 100 characters each
    pub allergies: Vec<String>,
    /// Plan length in days
    pub days: u32,
}

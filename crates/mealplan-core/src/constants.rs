// ABOUTME: Constants for payload bounds, field ranges, service routes, and messages
// ABOUTME: Pure data constants grouped by domain for the meal plan pipeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into small domain modules rather than one flat list.

/// Bounds applied to user input before it reaches the network
pub mod limits {
    /// Maximum characters of free-text allergy input considered before splitting
    pub const MAX_ALLERGY_TEXT_CHARS: usize = 500;
    /// Maximum characters kept per allergy entry
    pub const MAX_ALLERGY_ENTRY_CHARS: usize = 100;
    /// Maximum number of allergy entries sent
    pub const MAX_ALLERGIES: usize = 50;
    /// Maximum number of preference entries sent
    pub const MAX_PREFERENCES: usize = 20;
    /// Maximum serialized request size in bytes (10 KiB)
    pub const MAX_PAYLOAD_BYTES: usize = 10 * 1024;
}

/// Accepted ranges for profile and plan fields
pub mod ranges {
    /// Lowest accepted daily calories target
    pub const MIN_DAILY_CALORIES: i64 = 1000;
    /// Highest accepted daily calories target
    pub const MAX_DAILY_CALORIES: i64 = 5000;
    /// Shortest plan the service accepts
    pub const MIN_PLAN_DAYS: u32 = 1;
    /// Longest plan the service accepts
    pub const MAX_PLAN_DAYS: u32 = 30;
    /// Plan length used when the duration cannot be parsed
    pub const DEFAULT_PLAN_DAYS: u32 = 7;
}

/// Meal plan service routes and defaults
pub mod service {
    /// Path of the generation endpoint, appended to the base URL
    pub const MEAL_PLAN_PATH: &str = "/api/mealplan";
    /// Base URL used when none is configured
    pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";
}

/// Environment variable names read by the client
pub mod env_vars {
    /// Primary base URL variable
    pub const API_URL: &str = "MEALPLAN_API_URL";
    /// Fallback base URL variable
    pub const API_URL_FALLBACK: &str = "API_URL";
    /// Optional user agent override
    pub const USER_AGENT: &str = "MEALPLAN_USER_AGENT";
}

/// User-facing messages
pub mod messages {
    /// Shown when the calories target is unparseable or out of range
    pub const CALORIES_RANGE: &str = "Daily calories target must be between 1000 and 5000";
    /// Shown when the plan duration is outside the accepted range
    pub const DAYS_RANGE: &str = "Number of days must be between 1 and 30";
    /// Prefix of the missing-fields message
    pub const MISSING_FIELDS_PREFIX: &str = "Please fill in the following required fields";
    /// Shown when the request body cannot be produced
    pub const SERIALIZATION_FAILED: &str =
        "Failed to prepare request data. Please check your input.";
    /// Shown when the request body exceeds the payload limit
    pub const PAYLOAD_TOO_LARGE: &str = "Request data too large. Please reduce input size.";
    /// Shown when the response body is empty or not JSON
    pub const INVALID_RESPONSE_FORMAT: &str =
        "Invalid response format from server. Please try again.";
    /// Shown when the response is JSON but not an object
    pub const INVALID_PLAN_DATA: &str = "Invalid meal plan data received from server";
    /// Shown when the response object has no meals array
    pub const MISSING_MEALS: &str = "Meal plan data is missing required meals array";
    /// Shown when the configured base URL is unusable
    pub const INVALID_API_URL: &str = "Invalid API URL configuration";
    /// Shown when a second generation is requested while one is running
    pub const BUSY: &str = "A meal plan is already being generated. Please wait.";
    /// Fallback when an error carries no message of its own
    pub const GENERIC_FAILURE: &str = "An error occurred while generating your meal plan";
    /// Name given to a meal the service left unnamed
    pub const UNKNOWN_MEAL_NAME: &str = "Unknown";

    /// Shown when the service cannot be reached at `base_url`
    #[must_use]
    pub fn connectivity(base_url: &str) -> String {
        format!(
            "Unable to connect to the server. Please make sure the backend is running on {base_url}"
        )
    }
}

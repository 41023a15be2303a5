// ABOUTME: Maps any generation failure to the single message shown to the user
// ABOUTME: Connectivity gets a fixed hint, other errors keep their own text, blanks fall back
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::messages;
use crate::errors::{MealPlanError, TransportError};
use tracing::warn;

/// User-facing message for a failed attempt
#[must_use]
pub fn classify(error: &MealPlanError) -> String {
    let message = match error {
        MealPlanError::Transport(TransportError::Connectivity { base_url, .. }) => {
            messages::connectivity(base_url)
        }
        other => {
            let text = other.to_string();
            if text.trim().is_empty() {
                messages::GENERIC_FAILURE.to_owned()
            } else {
                text
            }
        }
    };

    warn!(
        error_code = %error.code(),
        user_actionable = error.code().is_user_actionable(),
        status = error_status(error),
        message = %message,
        "Meal plan generation failed"
    );

    message
}

fn error_status(error: &MealPlanError) -> Option<u16> {
    match error {
        MealPlanError::Transport(transport) => transport.status(),
        _ => None,
    }
}

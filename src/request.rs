// ABOUTME: Builds the bounded JSON body for a meal plan request from raw form input
// ABOUTME: Validates, sanitizes, serializes, and enforces the payload size limit without I/O
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::limits::MAX_PAYLOAD_BYTES;
use crate::errors::ValidationError;
use crate::models::{Profile, RequestPayload};
use crate::sanitize::{sanitize_allergies, sanitize_preferences};
use crate::validation::{validate_days, validate_profile};
use serde_json::Value;
use tracing::debug;

/// A request that passed every local check and is ready to send
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedRequest {
    payload: RequestPayload,
    body: String,
}

impl PreparedRequest {
    /// Typed payload
    #[must_use]
    pub const fn payload(&self) -> &RequestPayload {
        &self.payload
    }

    /// Exact JSON text to send
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Body length in UTF-8 bytes
    #[must_use]
    pub fn size(&self) -> usize {
        self.body.len()
    }

    /// Take the body, dropping the typed payload
    #[must_use]
    pub fn into_body(self) -> String {
        self.body
    }
}

/// Validate and assemble a request body
///
/// Preferences and allergies may arrive in any JSON shape; unusable shapes
/// become empty lists rather than errors.
///
/// # Errors
///
/// Returns the first validation failure: missing profile fields (all of them
/// named), then invalid profile values, then an out-of-range day count, then a
/// serialization failure or an oversized body.
pub fn build_request(
    profile: &Profile,
    preferences: &Value,
    allergies: &Value,
    days: &Value,
) -> Result<PreparedRequest, ValidationError> {
    validate_profile(profile).into_result()?;
    let days = validate_days(days)?;

    let payload = RequestPayload {
        profile: profile.clone(),
        preferences: sanitize_preferences(preferences),
        allergies: sanitize_allergies(allergies),
        days: days.days(),
    };

    let body = serde_json::to_string(&payload)
        .map_err(|source| ValidationError::Serialization { source })?;
    check_payload_size(&body)?;

    debug!(
        size = body.len(),
        preferences = payload.preferences.len(),
        allergies = payload.allergies.len(),
        days = payload.days,
        "Prepared meal plan request"
    );

    Ok(PreparedRequest { payload, body })
}

/// Reject bodies over the size limit
///
/// # Errors
///
/// Returns `PayloadTooLarge` when `body` exceeds the limit in UTF-8 bytes
pub fn check_payload_size(body: &str) -> Result<(), ValidationError> {
    if body.len() > MAX_PAYLOAD_BYTES {
        debug!(
            size = body.len(),
            limit = MAX_PAYLOAD_BYTES,
            "Rejected oversized request body"
        );
        return Err(ValidationError::PayloadTooLarge {
            size: body.len(),
            limit: MAX_PAYLOAD_BYTES,
        });
    }
    Ok(())
}

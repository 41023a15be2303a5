// ABOUTME: Errors raised while turning a response body into a meal plan
// ABOUTME: Empty body, unparseable JSON, and top-level schema violations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::ErrorCode;
use crate::constants::messages;

/// Top-level shape problems; per-day problems are defaulted, never reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SchemaViolation {
    /// The body is valid JSON but not an object
    #[error("{}", messages::INVALID_PLAN_DATA)]
    NotAnObject,
    /// The object has no `meals` array
    #[error("{}", messages::MISSING_MEALS)]
    MissingMeals,
}

/// The response body could not be read as a meal plan
#[derive(Debug, thiserror::Error)]
pub enum ResponseError {
    /// The body was empty
    #[error("{}", messages::INVALID_RESPONSE_FORMAT)]
    Empty,

    /// The body was not JSON
    #[error("{}", messages::INVALID_RESPONSE_FORMAT)]
    MalformedJson {
        /// Underlying parse error
        #[source]
        source: serde_json::Error,
    },

    /// The JSON does not have the minimal meal plan shape
    #[error(transparent)]
    Schema(#[from] SchemaViolation),
}

impl ResponseError {
    /// Stable code for logging
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::Empty => ErrorCode::EmptyResponse,
            Self::MalformedJson { .. } => ErrorCode::InvalidFormat,
            Self::Schema(_) => ErrorCode::SchemaViolation,
        }
    }
}

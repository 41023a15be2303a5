// ABOUTME: Unified error taxonomy for the meal plan pipeline
// ABOUTME: Tags every failure at its origin and carries a stable ErrorCode for logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Error Types
//!
//! Each pipeline stage owns one error enum:
//! - `ValidationError` - input rejected before any network call
//! - `TransportError` - the HTTP exchange failed or returned a non-2xx status
//! - `ResponseError` - the body could not be read as a meal plan
//!
//! `MealPlanError` joins them so a single classifier can turn any failure into
//! one user-facing string. Variants carry structured context (field names,
//! status codes) instead of prose to be matched later.

/// Response parsing errors
pub mod response;
/// Transport errors
pub mod transport;
/// Input validation errors
pub mod validation;

pub use response::{ResponseError, SchemaViolation};
pub use transport::TransportError;
pub use validation::ValidationError;

use crate::constants::messages;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable error codes used in structured logs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// One or more required profile fields are empty
    MissingRequiredField,
    /// A numeric field is outside its range
    ValueOutOfRange,
    /// A field holds a value outside its enumeration
    InvalidInput,
    /// The request body could not be serialized
    SerializationError,
    /// The request body exceeds the payload limit
    PayloadTooLarge,
    /// The base URL configuration is unusable
    ConfigInvalid,
    /// The service could not be reached
    ExternalServiceUnavailable,
    /// The service answered with a non-2xx status
    ExternalServiceError,
    /// The service answered with an empty body
    EmptyResponse,
    /// The service answered with something that is not JSON
    InvalidFormat,
    /// The JSON body does not have the meal plan shape
    SchemaViolation,
    /// A generation is already in flight
    ResourceLocked,
}

impl ErrorCode {
    /// Code as it appears in logs
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MissingRequiredField => "MISSING_REQUIRED_FIELD",
            Self::ValueOutOfRange => "VALUE_OUT_OF_RANGE",
            Self::InvalidInput => "INVALID_INPUT",
            Self::SerializationError => "SERIALIZATION_ERROR",
            Self::PayloadTooLarge => "PAYLOAD_TOO_LARGE",
            Self::ConfigInvalid => "CONFIG_INVALID",
            Self::ExternalServiceUnavailable => "EXTERNAL_SERVICE_UNAVAILABLE",
            Self::ExternalServiceError => "EXTERNAL_SERVICE_ERROR",
            Self::EmptyResponse => "EMPTY_RESPONSE",
            Self::InvalidFormat => "INVALID_FORMAT",
            Self::SchemaViolation => "SCHEMA_VIOLATION",
            Self::ResourceLocked => "RESOURCE_LOCKED",
        }
    }

    /// Whether the user can fix the cause by editing the form
    #[must_use]
    pub const fn is_user_actionable(&self) -> bool {
        matches!(
            self,
            Self::MissingRequiredField
                | Self::ValueOutOfRange
                | Self::InvalidInput
                | Self::PayloadTooLarge
        )
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Any failure of a generation attempt
#[derive(Debug, thiserror::Error)]
pub enum MealPlanError {
    /// Input was rejected locally
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The HTTP exchange failed
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The response body was unusable
    #[error(transparent)]
    Response(#[from] ResponseError),

    /// Another generation is still running
    #[error("{}", messages::BUSY)]
    Busy,
}

impl MealPlanError {
    /// Stable code for logging
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::Validation(err) => err.code(),
            Self::Transport(err) => err.code(),
            Self::Response(err) => err.code(),
            Self::Busy => ErrorCode::ResourceLocked,
        }
    }

    /// Whether the service could not be reached at all
    #[must_use]
    pub const fn is_connectivity(&self) -> bool {
        matches!(self, Self::Transport(TransportError::Connectivity { .. }))
    }
}

/// Result type alias for generation attempts
pub type PipelineResult<T> = Result<T, MealPlanError>;

// ABOUTME: Validation errors raised before a request leaves the client
// ABOUTME: Missing fields, out-of-range values, unsupported options, and payload bounds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::ErrorCode;
use crate::constants::messages;
use crate::models::ProfileField;

/// Input rejected before transmission
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// Required fields are empty; lists every one of them
    #[error("{}: {}", messages::MISSING_FIELDS_PREFIX, join_labels(.fields))]
    MissingFields {
        /// Missing fields in form order
        fields: Vec<ProfileField>,
    },

    /// Calories target is not an integer in the accepted range
    #[error("{}", messages::CALORIES_RANGE)]
    CaloriesOutOfRange {
        /// Raw value as entered
        value: String,
    },

    /// An enumerated field holds a value outside its enumeration
    #[error("{field} has an unsupported value '{value}'")]
    UnsupportedOption {
        /// Offending field
        field: ProfileField,
        /// Raw value as entered
        value: String,
    },

    /// Plan duration parsed but falls outside the accepted range
    #[error("{}", messages::DAYS_RANGE)]
    DaysOutOfRange {
        /// Parsed day count
        days: i64,
    },

    /// The payload could not be serialized
    #[error("{}", messages::SERIALIZATION_FAILED)]
    Serialization {
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// The serialized payload is over the size limit
    #[error("{}", messages::PAYLOAD_TOO_LARGE)]
    PayloadTooLarge {
        /// Serialized size in bytes
        size: usize,
        /// Limit in bytes
        limit: usize,
    },
}

impl ValidationError {
    /// Stable code for logging
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::MissingFields { .. } => ErrorCode::MissingRequiredField,
            Self::CaloriesOutOfRange { .. } | Self::DaysOutOfRange { .. } => {
                ErrorCode::ValueOutOfRange
            }
            Self::UnsupportedOption { .. } => ErrorCode::InvalidInput,
            Self::Serialization { .. } => ErrorCode::SerializationError,
            Self::PayloadTooLarge { .. } => ErrorCode::PayloadTooLarge,
        }
    }

    /// Field the error is about, when it concerns a single profile field
    #[must_use]
    pub const fn field(&self) -> Option<ProfileField> {
        match self {
            Self::CaloriesOutOfRange { .. } => Some(ProfileField::CaloriesTarget),
            Self::UnsupportedOption { field, .. } => Some(*field),
            _ => None,
        }
    }
}

fn join_labels(fields: &[ProfileField]) -> String {
    fields
        .iter()
        .map(ProfileField::label)
        .collect::<Vec<_>>()
        .join(", ")
}

// ABOUTME: Transport errors for the single HTTP exchange with the meal plan service
// ABOUTME: Separates unreachable hosts from non-2xx answers and bad base URLs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::ErrorCode;
use crate::constants::messages;
use std::error::Error;

/// Failure of the HTTP exchange itself
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The configured base URL cannot be used to build a request
    #[error("{}", messages::INVALID_API_URL)]
    InvalidBaseUrl {
        /// Base URL as configured
        url: String,
    },

    /// The service could not be reached, or the connection broke mid-exchange
    #[error("{}", messages::connectivity(.base_url))]
    Connectivity {
        /// Base URL the client tried to reach
        base_url: String,
        /// Underlying I/O or client error
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },

    /// The service answered with a non-2xx status
    #[error("{message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Best-effort message extracted from the response body
        message: String,
    },
}

impl TransportError {
    /// Create a connectivity error for `base_url`
    #[must_use]
    pub fn connectivity(
        base_url: impl Into<String>,
        source: impl Into<Box<dyn Error + Send + Sync>>,
    ) -> Self {
        Self::Connectivity {
            base_url: base_url.into(),
            source: source.into(),
        }
    }

    /// Stable code for logging
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidBaseUrl { .. } => ErrorCode::ConfigInvalid,
            Self::Connectivity { .. } => ErrorCode::ExternalServiceUnavailable,
            Self::Status { .. } => ErrorCode::ExternalServiceError,
        }
    }

    /// HTTP status, when the service answered at all
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

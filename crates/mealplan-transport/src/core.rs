// ABOUTME: Transport trait for sending a prepared request body to the meal plan service
// ABOUTME: Lets the session run against HTTP in production and test doubles in tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::TransportError;
use async_trait::async_trait;

/// One request/response exchange with the meal plan service
#[async_trait]
pub trait MealPlanTransport: Send + Sync {
    /// Send a serialized request body and return the raw 2xx response text
    ///
    /// Implementations make exactly one attempt and never parse the body.
    ///
    /// # Errors
    ///
    /// Returns `TransportError::Connectivity` when the service cannot be reached
    /// and `TransportError::Status` for any non-2xx answer.
    async fn send(&self, body: &str) -> Result<String, TransportError>;

    /// Base URL the transport talks to, used in connectivity messages
    fn base_url(&self) -> &str;
}

// ABOUTME: HTTP transport for the meal plan generation service
// ABOUTME: Transport trait seam, shared reqwest client, and failure-body extraction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Meal plan service transport.
//!
//! This crate performs the one network exchange of a generation attempt. It
//! returns the raw response text so that parsing failures can be attributed
//! separately from transport failures.

// Re-export core modules so transport code can keep `use crate::errors::*`
pub use mealplan_core::constants;
pub use mealplan_core::errors;

/// Transport trait shared by the HTTP implementation and test doubles
pub mod core;
/// Message extraction from non-2xx response bodies
pub mod failure_body;
/// reqwest-backed transport
pub mod http;
/// Shared HTTP client
pub mod http_client;

pub use core::MealPlanTransport;
pub use failure_body::failure_message;
pub use http::HttpTransport;
pub use http_client::{initialize_shared_client, shared_client};

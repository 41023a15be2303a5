// ABOUTME: Configuration module for the meal plan client
// ABOUTME: Exposes environment-derived settings for the service endpoint and HTTP identity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Configuration module for the meal plan client
//!
//! - **Environment**: service base URL and user agent from environment variables

/// Environment-derived client configuration
pub mod environment;

pub use environment::ClientConfig;

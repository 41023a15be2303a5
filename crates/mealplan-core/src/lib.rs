// ABOUTME: Core types and constants for the meal plan client
// ABOUTME: Foundation crate with models, payload limits, and tagged error handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Meal Plan Core
//!
//! Foundation crate shared by the transport and the client pipeline. It holds no
//! I/O: only the data model exchanged with the meal plan service, the limits
//! that bound outbound payloads, and the error taxonomy every stage reports in.
//!
//! ## Modules
//!
//! - **constants**: Payload limits, field ranges, routes, and user-facing messages
//! - **errors**: `ValidationError`, `TransportError`, `ResponseError`, and `MealPlanError`
//! - **models**: Profile, preferences, durations, request payload, and the render model

/// Application constants organized by domain
pub mod constants;

/// Tagged error types for every pipeline stage
pub mod errors;

/// Data models for the request payload and the normalized meal plan
pub mod models;

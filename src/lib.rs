// ABOUTME: Main library entry point for the meal plan client
// ABOUTME: Validates dietary profiles, builds bounded requests, and normalizes generated plans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Meal Plan Client
//!
//! Client side of a meal plan generation service. A user's dietary profile,
//! preferences, allergies, and plan length are checked and bounded locally,
//! posted once to the service, and the untrusted response is normalized into a
//! render model in which every field is present and typed.
//!
//! ## Pipeline
//!
//! - **Validation**: required fields, calories range, plan length
//! - **Sanitization**: bounded allergy and preference lists
//! - **Request building**: serialization and the payload size limit
//! - **Transport**: a single HTTP POST through [`mealplan_transport`]
//! - **Normalization**: defaults for every missing or malformed element
//! - **Classification**: one user-facing message per failure
//!
//! [`session::MealPlanSession`] chains the stages, allows one attempt at a time,
//! and publishes a [`session::ViewState`] for a presentation layer.
//!
//! ## Example
//!
//! ```rust,no_run
//! use mealplan_client::config::ClientConfig;
//! use mealplan_client::form::FormSnapshot;
//! use mealplan_client::models::ProfileField;
//! use mealplan_client::session::MealPlanSession;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = ClientConfig::from_env()?;
//! let session = MealPlanSession::from_config(&config)?;
//!
//! let form = FormSnapshot::default()
//!     .with_profile_field(ProfileField::Goal, "weight-loss")
//!     .with_profile_field(ProfileField::CaloriesTarget, "1800")
//!     .with_profile_field(ProfileField::DietaryStyle, "vegetarian")
//!     .with_allergies("peanuts, shellfish");
//!
//! let plan = session.generate(&form).await?;
//! println!("{} days planned", plan.meals.len());
//! # Ok(())
//! # }
//! ```

/// Constants shared with the core crate
pub use mealplan_core::constants;
/// Error types shared with the core crate
pub use mealplan_core::errors;
/// Data models shared with the core crate
pub use mealplan_core::models;

/// Maps failures to user-facing messages
pub mod classifier;

/// Environment-derived client configuration
pub mod config;

/// Immutable form snapshots
pub mod form;

/// Structured logging setup
pub mod logging;

/// Response normalization
pub mod normalize;

/// Request assembly and size limit
pub mod request;

/// Allergy and preference sanitization
pub mod sanitize;

/// Single-flight generation sessions
pub mod session;

/// Profile and duration validation
pub mod validation;

pub use classifier::classify;
pub use config::ClientConfig;
pub use form::{FormEvent, FormSnapshot};
pub use normalize::normalize;
pub use request::{build_request, PreparedRequest};
pub use sanitize::{
    sanitize_allergies, sanitize_allergy_list, sanitize_allergy_text, sanitize_preferences,
};
pub use session::{MealPlanSession, ViewState};
pub use validation::{validate_days, validate_profile, ProfileReport};

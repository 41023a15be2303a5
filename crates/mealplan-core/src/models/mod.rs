// ABOUTME: Data models for the meal plan request and the normalized response
// ABOUTME: Re-exports profile, preference, duration, payload, and render model types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Core data models
//!
//! Outbound types (`Profile`, `PreferenceSet`, `PlanDuration`, `RequestPayload`)
//! describe what the client sends. Inbound types (`MealPlanResult` and its parts)
//! are the render model: every field is present and typed once normalized.

/// Profile fields and their enumerations
pub mod profile;
/// Dietary preference labels and the toggle-based preference set
pub mod preferences;
/// Plan duration bounds and the UI duration choices
pub mod duration;
/// Serialized request body
pub mod request;
/// Fully-defaulted meal plan render model
pub mod meal_plan;

pub use duration::{DurationChoice, PlanDuration};
pub use meal_plan::{DayPlan, Meal, MealPlanResult, MealSlot, PlanDisclaimer, PlanSummary};
pub use preferences::{DietaryPreference, PreferenceSet};
pub use profile::{DietaryStyle, Goal, Profile, ProfileField};
pub use request::RequestPayload;

// ABOUTME: User profile model with goal, calories target, and dietary style
// ABOUTME: Defines Goal, DietaryStyle, ProfileField, and the immutable Profile snapshot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Nutrition goal offered by the profile form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Goal {
    /// Caloric deficit
    WeightLoss,
    /// Caloric surplus
    WeightGain,
    /// Maintain current weight
    Maintenance,
    /// Surplus with a protein emphasis
    MuscleGain,
    /// Balanced eating without a weight target
    GeneralHealth,
}

impl Goal {
    /// Every goal, in form order
    pub const ALL: [Self; 5] = [
        Self::WeightLoss,
        Self::WeightGain,
        Self::Maintenance,
        Self::MuscleGain,
        Self::GeneralHealth,
    ];

    /// Value sent on the wire
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::WeightLoss => "weight-loss",
            Self::WeightGain => "weight-gain",
            Self::Maintenance => "maintenance",
            Self::MuscleGain => "muscle-gain",
            Self::GeneralHealth => "general-health",
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::WeightLoss => "Weight Loss",
            Self::WeightGain => "Weight Gain",
            Self::Maintenance => "Maintain Weight",
            Self::MuscleGain => "Muscle Gain",
            Self::GeneralHealth => "General Health",
        }
    }

    /// Parse a wire value, `None` when it is not one of the five goals
    #[must_use]
    pub fn from_wire(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|goal| goal.as_str() == value)
    }
}

/// Dietary style offered by the profile form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DietaryStyle {
    /// No restriction
    Omnivore,
    /// No meat or fish
    Vegetarian,
    /// No animal products
    Vegan,
    /// Fish but no other meat
    Pescatarian,
    /// Very low carbohydrate
    Keto,
    /// Paleolithic-style whole foods
    Paleo,
    /// Mediterranean pattern
    Mediterranean,
}

impl DietaryStyle {
    /// Every dietary style, in form order
    pub const ALL: [Self; 7] = [
        Self::Omnivore,
        Self::Vegetarian,
        Self::Vegan,
        Self::Pescatarian,
        Self::Keto,
        Self::Paleo,
        Self::Mediterranean,
    ];

    /// Value sent on the wire
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Omnivore => "omnivore",
            Self::Vegetarian => "vegetarian",
            Self::Vegan => "vegan",
            Self::Pescatarian => "pescatarian",
            Self::Keto => "keto",
            Self::Paleo => "paleo",
            Self::Mediterranean => "mediterranean",
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Omnivore => "Omnivore",
            Self::Vegetarian => "Vegetarian",
            Self::Vegan => "Vegan",
            Self::Pescatarian => "Pescatarian",
            Self::Keto => "Keto",
            Self::Paleo => "Paleo",
            Self::Mediterranean => "Mediterranean",
        }
    }

    /// Parse a wire value, `None` when it is not one of the seven styles
    #[must_use]
    pub fn from_wire(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|style| style.as_str() == value)
    }
}

/// Required profile field, used to name what is missing or invalid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProfileField {
    /// Nutrition goal
    Goal,
    /// Daily calories target
    CaloriesTarget,
    /// Dietary style
    DietaryStyle,
}

impl ProfileField {
    /// Every required field, in the order they are reported
    pub const ALL: [Self; 3] = [Self::Goal, Self::CaloriesTarget, Self::DietaryStyle];

    /// Label shown to the user
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Goal => "Goal",
            Self::CaloriesTarget => "Daily Calories Target",
            Self::DietaryStyle => "Dietary Style",
        }
    }

    /// JSON key of the field in the request payload
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Goal => "goal",
            Self::CaloriesTarget => "caloriesTarget",
            Self::DietaryStyle => "dietaryStyle",
        }
    }

    /// Resolve a field from its payload key
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Snapshot of the profile form
///
/// Values are kept exactly as the form produced them; the calories target stays
/// a string so that validation, not deserialization, decides what is acceptable.
/// Edits never mutate a snapshot in place: [`Profile::with_field`] returns a new one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Goal wire value, empty when unset
    #[serde(default)]
    pub goal: String,
    /// Daily calories target as typed, empty when unset
    #[serde(default)]
    pub calories_target: String,
    /// Dietary style wire value, empty when unset
    #[serde(default)]
    pub dietary_style: String,
}

impl Profile {
    /// Build a profile from its three raw field values
    #[must_use]
    pub fn new(
        goal: impl Into<String>,
        calories_target: impl Into<String>,
        dietary_style: impl Into<String>,
    ) -> Self {
        Self {
            goal: goal.into(),
            calories_target: calories_target.into(),
            dietary_style: dietary_style.into(),
        }
    }

    /// Raw value of a field
    #[must_use]
    pub fn field(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::Goal => &self.goal,
            ProfileField::CaloriesTarget => &self.calories_target,
            ProfileField::DietaryStyle => &self.dietary_style,
        }
    }

    /// New snapshot with one field replaced
    #[must_use]
    pub fn with_field(&self, field: ProfileField, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        let value = value.into();
        match field {
            ProfileField::Goal => next.goal = value,
            ProfileField::CaloriesTarget => next.calories_target = value,
            ProfileField::DietaryStyle => next.dietary_style = value,
        }
        next
    }

    /// Whether all three fields hold something, which is what gates the generate trigger
    #[must_use]
    pub fn has_required_fields(&self) -> bool {
        ProfileField::ALL
            .iter()
            .all(|field| !self.field(*field).is_empty())
    }
}

// ABOUTME: Immutable form snapshots that model the inputs a UI collects before generation
// ABOUTME: Each edit yields a new snapshot; prepare() runs the request builder on the current one
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::ValidationError;
use crate::models::{DurationChoice, PreferenceSet, Profile, ProfileField};
use crate::request::{build_request, PreparedRequest};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

/// One edit made in the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// A profile field was set
    ProfileField {
        /// Field edited
        field: ProfileField,
        /// New raw value
        value: String,
    },
    /// A preference checkbox was flipped
    TogglePreference(String),
    /// The allergy text box changed
    Allergies(String),
    /// A plan length was picked
    Duration(u32),
}

/// Everything entered in the form at one point in time
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSnapshot {
    /// Required profile fields
    #[serde(default)]
    pub profile: Profile,
    /// Selected dietary preferences
    #[serde(default)]
    pub preferences: PreferenceSet,
    /// Allergy text exactly as typed
    #[serde(default)]
    pub allergies: String,
    /// Chosen plan length
    #[serde(default)]
    pub duration: DurationChoice,
}

impl FormSnapshot {
    /// Apply one edit
    #[must_use]
    pub fn apply(&self, event: FormEvent) -> Self {
        match event {
            FormEvent::ProfileField { field, value } => self.with_profile_field(field, value),
            FormEvent::TogglePreference(label) => self.with_preference_toggled(&label),
            FormEvent::Allergies(text) => self.with_allergies(text),
            FormEvent::Duration(days) => self.with_duration(days),
        }
    }

    /// New snapshot with one profile field replaced
    #[must_use]
    pub fn with_profile_field(&self, field: ProfileField, value: impl Into<String>) -> Self {
        Self {
            profile: self.profile.with_field(field, value),
            ..self.clone()
        }
    }

    /// New snapshot with the labelled preference flipped
    #[must_use]
    pub fn with_preference_toggled(&self, label: &str) -> Self {
        Self {
            preferences: self.preferences.toggle_label(label),
            ..self.clone()
        }
    }

    /// New snapshot with the allergy text replaced
    #[must_use]
    pub fn with_allergies(&self, text: impl Into<String>) -> Self {
        Self {
            allergies: text.into(),
            ..self.clone()
        }
    }

    /// New snapshot with the plan length replaced; lengths the picker does not
    /// offer leave the snapshot unchanged
    #[must_use]
    pub fn with_duration(&self, days: u32) -> Self {
        DurationChoice::from_days(days).map_or_else(
            || {
                warn!(days, "Ignoring plan duration that is not offered");
                self.clone()
            },
            |duration| Self {
                duration,
                ..self.clone()
            },
        )
    }

    /// Whether every required profile field holds a value
    #[must_use]
    pub fn is_submittable(&self) -> bool {
        self.profile.has_required_fields()
    }

    /// Whether the user listed any allergy, which warrants a caution notice
    #[must_use]
    pub fn has_allergies(&self) -> bool {
        !self.allergies.trim().is_empty()
    }

    /// Build the request this snapshot describes
    ///
    /// # Errors
    ///
    /// Returns the validation failure reported by [`build_request`]
    pub fn prepare(&self) -> Result<PreparedRequest, ValidationError> {
        build_request(
            &self.profile,
            &Value::from(self.preferences.labels()),
            &Value::String(self.allergies.clone()),
            &Value::from(self.duration.days()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edits_leave_the_original_untouched() {
        let blank = FormSnapshot::default();
        let edited = blank
            .with_profile_field(ProfileField::Goal, "weight-loss")
            .with_allergies("peanuts");

        assert!(blank.profile.goal.is_empty());
        assert!(blank.allergies.is_empty());
        assert_eq!(edited.profile.goal, "weight-loss");
        assert!(edited.has_allergies());
    }

    #[test]
    fn unoffered_durations_are_ignored() {
        let form = FormSnapshot::default().with_duration(3).with_duration(4);
        assert_eq!(form.duration, DurationChoice::Three);
    }

    #[test]
    fn toggling_twice_clears_a_preference() {
        let form = FormSnapshot::default()
            .apply(FormEvent::TogglePreference("Low Carb".to_owned()))
            .apply(FormEvent::TogglePreference("Low Carb".to_owned()));
        assert!(form.preferences.is_empty());
    }
}

// ABOUTME: Dietary preference labels and the ordered, toggle-based preference set
// ABOUTME: Unknown labels are ignored on toggle; order follows selection order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// One of the fixed preference checkboxes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DietaryPreference {
    /// Reduced carbohydrates
    #[serde(rename = "Low Carb")]
    LowCarb,
    /// Protein emphasis
    #[serde(rename = "High Protein")]
    HighProtein,
    /// Reduced fat
    #[serde(rename = "Low Fat")]
    LowFat,
    /// No gluten
    #[serde(rename = "Gluten Free")]
    GlutenFree,
    /// No dairy
    #[serde(rename = "Dairy Free")]
    DairyFree,
    /// No nuts
    #[serde(rename = "Nut Free")]
    NutFree,
    /// No soy
    #[serde(rename = "Soy Free")]
    SoyFree,
    /// Fiber emphasis
    #[serde(rename = "High Fiber")]
    HighFiber,
    /// Reduced sodium
    #[serde(rename = "Low Sodium")]
    LowSodium,
    /// Organic ingredients when available
    #[serde(rename = "Organic Preferred")]
    OrganicPreferred,
}

impl DietaryPreference {
    /// Every preference, in checkbox order
    pub const ALL: [Self; 10] = [
        Self::LowCarb,
        Self::HighProtein,
        Self::LowFat,
        Self::GlutenFree,
        Self::DairyFree,
        Self::NutFree,
        Self::SoyFree,
        Self::HighFiber,
        Self::LowSodium,
        Self::OrganicPreferred,
    ];

    /// Label shown next to the checkbox and sent on the wire
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::LowCarb => "Low Carb",
            Self::HighProtein => "High Protein",
            Self::LowFat => "Low Fat",
            Self::GlutenFree => "Gluten Free",
            Self::DairyFree => "Dairy Free",
            Self::NutFree => "Nut Free",
            Self::SoyFree => "Soy Free",
            Self::HighFiber => "High Fiber",
            Self::LowSodium => "Low Sodium",
            Self::OrganicPreferred => "Organic Preferred",
        }
    }

    /// Resolve a label, `None` for anything outside the fixed list
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|pref| pref.label() == label)
    }
}

/// Selected preferences in the order they were switched on
///
/// Uniqueness comes from toggle semantics: toggling a selected preference removes
/// it, toggling an unselected one appends it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PreferenceSet(Vec<DietaryPreference>);

impl PreferenceSet {
    /// Empty selection
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// New set with `preference` flipped
    #[must_use]
    pub fn toggled(&self, preference: DietaryPreference) -> Self {
        let mut next = self.0.clone();
        if let Some(position) = next.iter().position(|p| *p == preference) {
            next.remove(position);
        } else {
            next.push(preference);
        }
        Self(next)
    }

    /// New set with the labelled preference flipped; unknown labels leave the set unchanged
    #[must_use]
    pub fn toggle_label(&self, label: &str) -> Self {
        DietaryPreference::from_label(label).map_or_else(
            || {
                tracing::warn!(label, "Ignoring unknown preference option");
                self.clone()
            },
            |preference| self.toggled(preference),
        )
    }

    /// Whether `preference` is selected
    #[must_use]
    pub fn contains(&self, preference: DietaryPreference) -> bool {
        self.0.contains(&preference)
    }

    /// Selected preferences in order
    pub fn iter(&self) -> impl Iterator<Item = DietaryPreference> + '_ {
        self.0.iter().copied()
    }

    /// Selected labels in order
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        self.0.iter().map(|pref| pref.label().to_owned()).collect()
    }

    /// Number of selected preferences
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether nothing is selected
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<DietaryPreference> for PreferenceSet {
    fn from_iter<I: IntoIterator<Item = DietaryPreference>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |set, pref| if set.contains(pref) { set } else { set.toggled(pref) })
    }
}

// ABOUTME: Plan duration with service-side bounds and the UI-constrained choices
// ABOUTME: PlanDuration is range-checked; DurationChoice is the 3/5/7 picker
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::ranges::{DEFAULT_PLAN_DAYS, MAX_PLAN_DAYS, MIN_PLAN_DAYS};
use serde::{Deserialize, Serialize};

/// Number of days requested, always within `MIN_PLAN_DAYS..=MAX_PLAN_DAYS`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct PlanDuration(u32);

impl PlanDuration {
    /// Duration used when none can be parsed
    pub const DEFAULT: Self = Self(DEFAULT_PLAN_DAYS);

    /// Range-checked constructor
    #[must_use]
    pub const fn new(days: u32) -> Option<Self> {
        if days >= MIN_PLAN_DAYS && days <= MAX_PLAN_DAYS {
            Some(Self(days))
        } else {
            None
        }
    }

    /// Number of days
    #[must_use]
    pub const fn days(self) -> u32 {
        self.0
    }
}

impl Default for PlanDuration {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u32> for PlanDuration {
    type Error = String;

    fn try_from(days: u32) -> Result<Self, Self::Error> {
        Self::new(days).ok_or_else(|| {
            format!("plan duration must be between {MIN_PLAN_DAYS} and {MAX_PLAN_DAYS} days")
        })
    }
}

impl From<PlanDuration> for u32 {
    fn from(duration: PlanDuration) -> Self {
        duration.0
    }
}

/// Durations the picker offers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum DurationChoice {
    /// Three days
    Three,
    /// Five days
    Five,
    /// A full week
    #[default]
    Seven,
}

impl DurationChoice {
    /// Every choice, in picker order
    pub const ALL: [Self; 3] = [Self::Three, Self::Five, Self::Seven];

    /// Number of days
    #[must_use]
    pub const fn days(self) -> u32 {
        match self {
            Self::Three => 3,
            Self::Five => 5,
            Self::Seven => 7,
        }
    }

    /// Resolve a day count, `None` when the picker does not offer it
    #[must_use]
    pub fn from_days(days: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|choice| choice.days() == days)
    }
}

impl TryFrom<u32> for DurationChoice {
    type Error = String;

    fn try_from(days: u32) -> Result<Self, Self::Error> {
        Self::from_days(days).ok_or_else(|| format!("{days} is not an offered plan duration"))
    }
}

impl From<DurationChoice> for u32 {
    fn from(choice: DurationChoice) -> Self {
        choice.days()
    }
}

impl From<DurationChoice> for PlanDuration {
    fn from(choice: DurationChoice) -> Self {
        Self(choice.days())
    }
}

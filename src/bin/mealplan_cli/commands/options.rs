// ABOUTME: options subcommand - lists the values each form field accepts
// ABOUTME: Wire values are what --goal and --style expect
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use mealplan_client::models::{DietaryPreference, DietaryStyle, DurationChoice, Goal};

pub fn run() {
    println!("Goals (--goal):");
    for goal in Goal::ALL {
        println!("  {:<16} {}", goal.as_str(), goal.label());
    }

    println!("\nDietary styles (--style):");
    for style in DietaryStyle::ALL {
        println!("  {:<16} {}", style.as_str(), style.label());
    }

    println!("\nPreferences (--preference, repeatable):");
    for preference in DietaryPreference::ALL {
        println!("  {}", preference.label());
    }

    let durations: Vec<String> = DurationChoice::ALL
        .iter()
        .map(|choice| choice.days().to_string())
        .collect();
    println!("\nDurations (--days): {}", durations.join(", "));
}

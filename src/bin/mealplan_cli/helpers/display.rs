// ABOUTME: Output formatting helpers for mealplan-cli
// ABOUTME: Renders a normalized meal plan and the allergy caution as plain text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use mealplan_client::models::{DayPlan, Meal, MealPlanResult, MealSlot};

const ALLERGY_NOTICE: &str = "Important Allergy Notice: Always verify allergen information with food labels, \
restaurant staff, and manufacturers. This tool filters based on available data but cannot guarantee \
complete allergen information. If you have severe allergies, consult with a healthcare professional \
before following any meal plan.";

/// Print the caution shown whenever allergies were entered
pub fn print_allergy_notice() {
    println!("{ALLERGY_NOTICE}");
    println!();
}

/// Print a full plan
pub fn print_plan(plan: &MealPlanResult) {
    println!("Your {}-Day Meal Plan", plan.days);
    println!("{}", "=".repeat(60));
    println!(
        "Total calories: {} | Avg daily calories: {}",
        plan.summary.total_calories, plan.summary.average_daily_calories
    );

    if let Some(warning) = &plan.safety_warning {
        println!("\nSafety Notice: {warning}");
    }

    if let Some(disclaimer) = &plan.disclaimer {
        match &disclaimer.knowledge_base {
            Some(knowledge_base) => println!("\nNote: {} {knowledge_base}", disclaimer.message),
            None => println!("\nNote: {}", disclaimer.message),
        }
        for limitation in &disclaimer.limitations {
            println!("  - {limitation}");
        }
    }

    for day in &plan.meals {
        print_day(day);
    }
}

fn print_day(day: &DayPlan) {
    println!("\nDay {}", day.day);
    println!("{}", "-".repeat(60));

    if day.is_empty() {
        println!("  No meal data available");
        return;
    }

    for (slot, meal) in [
        (MealSlot::Breakfast, &day.breakfast),
        (MealSlot::Lunch, &day.lunch),
        (MealSlot::Dinner, &day.dinner),
    ] {
        match meal {
            Some(meal) => print_meal(slot, meal),
            None => println!("  {:<10} Not available", slot.label()),
        }
    }

    for snack in &day.snacks {
        print_meal(MealSlot::Snack, snack);
    }

    println!("  {:<10} {} cal", "Total", day.total_calories());
}

fn print_meal(slot: MealSlot, meal: &Meal) {
    println!(
        "  {:<10} {} - {} cal (Protein: {}g, Carbs: {}g, Fats: {}g)",
        slot.label(),
        meal.name,
        meal.calories,
        meal.protein,
        meal.carbs,
        meal.fats
    );
}

// ABOUTME: generate subcommand - runs one meal plan generation attempt
// ABOUTME: Prints the plan as text or JSON, or fails with the classified message
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::helpers::display;
use anyhow::{bail, Result};
use mealplan_client::classifier::classify;
use mealplan_client::config::ClientConfig;
use mealplan_client::form::FormSnapshot;
use mealplan_client::session::MealPlanSession;
use mealplan_transport::initialize_shared_client;

pub async fn run(config: &ClientConfig, form: &FormSnapshot, json: bool) -> Result<()> {
    initialize_shared_client(config.user_agent.clone());
    let session = MealPlanSession::from_config(config)?;

    if form.has_allergies() && !json {
        display::print_allergy_notice();
    }

    match session.generate(form).await {
        Ok(plan) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&plan)?);
            } else {
                display::print_plan(&plan);
            }
            Ok(())
        }
        Err(err) => {
            let message = session.view().error.unwrap_or_else(|| classify(&err));
            bail!(message)
        }
    }
}

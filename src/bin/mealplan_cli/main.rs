// ABOUTME: mealplan-cli - command-line front end for the meal plan client
// ABOUTME: Generates plans, dry-runs request validation, and lists the accepted form options
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Generate a five day plan
//! mealplan-cli generate --goal weight-loss --calories 1800 --style vegetarian \
//!     --preference "High Protein" --allergies "peanuts, shellfish" --days 5
//!
//! # Print the normalized plan as JSON
//! mealplan-cli generate --goal maintenance --calories 2200 --style omnivore --json
//!
//! # Check a request locally without sending it
//! mealplan-cli validate --goal muscle-gain --calories 900 --style keto
//!
//! # List goals, dietary styles, preferences, and durations
//! mealplan-cli options
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use mealplan_client::config::ClientConfig;
use mealplan_client::form::{FormEvent, FormSnapshot};
use mealplan_client::logging::LoggingConfig;
use mealplan_client::models::{DurationChoice, ProfileField};
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "mealplan-cli",
    about = "Meal plan generation client",
    long_about = "Validates a dietary profile, requests a meal plan from the backend, and prints the normalized result."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Backend base URL override (defaults to MEALPLAN_API_URL, then API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Request a meal plan and print it
    Generate {
        #[command(flatten)]
        plan: PlanArgs,

        /// Print the normalized plan as JSON
        #[arg(long)]
        json: bool,
    },

    /// Build the request locally and report what would be sent
    Validate {
        #[command(flatten)]
        plan: PlanArgs,
    },

    /// List accepted goals, dietary styles, preferences, and durations
    Options,
}

/// Form inputs shared by `generate` and `validate`
#[derive(Args)]
struct PlanArgs {
    /// Goal (e.g. weight-loss, maintenance)
    #[arg(long, default_value = "")]
    goal: String,

    /// Daily calories target
    #[arg(long, default_value = "")]
    calories: String,

    /// Dietary style (e.g. omnivore, vegan)
    #[arg(long, default_value = "")]
    style: String,

    /// Dietary preference label, repeatable (e.g. "Low Carb")
    #[arg(long = "preference", short = 'p')]
    preferences: Vec<String>,

    /// Comma-separated allergies
    #[arg(long, default_value = "")]
    allergies: String,

    /// Plan length in days (3, 5, or 7)
    #[arg(long, default_value = "7", value_parser = parse_duration)]
    days: DurationChoice,
}

impl PlanArgs {
    fn into_form(self) -> FormSnapshot {
        let events = [
            (ProfileField::Goal, self.goal),
            (ProfileField::CaloriesTarget, self.calories),
            (ProfileField::DietaryStyle, self.style),
        ]
        .into_iter()
        .map(|(field, value)| FormEvent::ProfileField { field, value })
        .chain(self.preferences.into_iter().map(FormEvent::TogglePreference))
        .chain([
            FormEvent::Allergies(self.allergies),
            FormEvent::Duration(self.days.days()),
        ]);

        events.fold(FormSnapshot::default(), |form, event| form.apply(event))
    }
}

fn parse_duration(raw: &str) -> Result<DurationChoice, String> {
    let days: u32 = raw
        .trim()
        .parse()
        .map_err(|_| format!("'{raw}' is not a number of days"))?;
    DurationChoice::try_from(days)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env();
    let logging = if cli.verbose {
        logging.with_level("debug")
    } else {
        logging
    };
    logging.init()?;

    let config = ClientConfig::from_env()?;
    let config = match cli.api_url.as_deref() {
        Some(url) => config.with_base_url(url)?,
        None => config,
    };
    debug!(base_url = %config.base_url, "Using meal plan service");

    match cli.command {
        Command::Generate { plan, json } => {
            commands::generate::run(&config, &plan.into_form(), json).await
        }
        Command::Validate { plan } => commands::validate::run(&plan.into_form()),
        Command::Options => {
            commands::options::run();
            Ok(())
        }
    }
}

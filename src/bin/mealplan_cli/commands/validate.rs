// ABOUTME: validate subcommand - builds the request locally without sending it
// ABOUTME: Reports every profile problem at once, then the payload that would be posted
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::{bail, Result};
use mealplan_client::constants::limits::MAX_PAYLOAD_BYTES;
use mealplan_client::form::FormSnapshot;
use mealplan_client::validation::validate_profile;

pub fn run(form: &FormSnapshot) -> Result<()> {
    let report = validate_profile(&form.profile);
    if !report.complete {
        for field in &report.missing {
            eprintln!("missing: {field}");
        }
        for err in &report.errors {
            eprintln!("invalid: {err}");
        }
        bail!(
            "Profile has {} missing and {} invalid field(s)",
            report.missing.len(),
            report.errors.len()
        );
    }

    let request = form.prepare()?;
    let payload = serde_json::to_string_pretty(request.payload())?;

    println!("{payload}");
    println!();
    println!(
        "Payload OK: {} of {MAX_PAYLOAD_BYTES} bytes, {} allergies, {} preferences, {} days",
        request.size(),
        request.payload().allergies.len(),
        request.payload().preferences.len(),
        request.payload().days
    );
    Ok(())
}

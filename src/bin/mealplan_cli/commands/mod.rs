// ABOUTME: Command implementations for mealplan-cli
// ABOUTME: One module per subcommand
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod generate;
pub mod options;
pub mod validate;

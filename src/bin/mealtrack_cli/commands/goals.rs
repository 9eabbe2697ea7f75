// ABOUTME: Goals command for mealtrack-cli
// ABOUTME: Validates a biometric profile and prints its daily calorie and macro goals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealtrack Contributors

use anyhow::{Context, Result};
use mealtrack::intelligence::GoalCalculator;
use mealtrack::models::BiometricProfile;
use tracing::info;

use crate::helpers::display::print_json;

/// Calculate and print goals for a profile
pub fn run(profile: &BiometricProfile) -> Result<()> {
    profile.validate().context("Invalid biometric profile")?;

    let goals = GoalCalculator::from_env()?.calculate(profile);
    info!(calorie_goal = goals.calorie_goal, "Goals calculated");

    print_json(&goals)
}

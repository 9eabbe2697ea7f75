// ABOUTME: Badges command for mealtrack-cli
// ABOUTME: Evaluates the default catalog against a diary and optionally saves new badges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealtrack Contributors

use anyhow::Result;
use chrono::{NaiveDate, Utc};
use mealtrack::diary::AchievementContext;
use mealtrack::intelligence::{default_catalog, AchievementEvaluator, BadgeProgress};
use mealtrack::models::Badge;
use serde::Serialize;
use std::path::Path;
use tracing::info;

use crate::helpers::diary_file::{load_diary, save_diary};
use crate::helpers::display::print_json;

/// Options for the badges command
pub struct BadgeOptions {
    /// Daily calorie goal (kcal)
    pub calorie_goal: f64,
    /// Date the streak is measured against
    pub today: NaiveDate,
    /// Persist granted badges
    pub save: bool,
    /// Include per-badge progress in the output
    pub show_progress: bool,
}

#[derive(Serialize)]
struct BadgeReport {
    streak: u32,
    new_badges: Vec<Badge>,
    #[serde(skip_serializing_if = "Option::is_none")]
    progress: Option<Vec<BadgeProgress>>,
}

/// Evaluate badges for the diary at `path`
pub fn run(path: &Path, options: &BadgeOptions) -> Result<()> {
    let mut diary = load_diary(path)?;
    let catalog = default_catalog();
    let evaluator = AchievementEvaluator::from_env()?;
    let context = AchievementContext {
        today: options.today,
        now: Utc::now(),
        calorie_goal: options.calorie_goal,
        catalog: &catalog,
        evaluator: &evaluator,
    };

    let streak = diary.streak(options.today);
    let new_badges = diary.pending_badges(&context);

    if options.save && !new_badges.is_empty() {
        let granted = diary.grant(&new_badges, context.now);
        save_diary(path, &diary)?;
        info!(granted = granted.len(), path = %path.display(), "Saved earned badges");
    }

    let progress = options
        .show_progress
        .then(|| evaluator.progress(diary.meals(), streak, options.calorie_goal, &catalog));

    print_json(&BadgeReport {
        streak,
        new_badges,
        progress,
    })
}

// ABOUTME: Progress command for mealtrack-cli
// ABOUTME: Reports current and longest streaks, a weekly summary, and the weight trend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealtrack Contributors

use anyhow::Result;
use chrono::NaiveDate;
use mealtrack::intelligence::{
    longest_streak, remaining_to_target, weekly_summary, weight_trend, WeeklySummary, WeightTrend,
};
use serde::Serialize;
use std::path::Path;

use crate::helpers::diary_file::load_diary;
use crate::helpers::display::print_json;

#[derive(Serialize)]
struct ProgressReport {
    today: NaiveDate,
    current_streak: u32,
    longest_streak: u32,
    weekly_summary: WeeklySummary,
    weight_trend: Option<WeightTrend>,
    remaining_to_target_kg: Option<f64>,
}

/// Print a progress report for the diary at `path`
pub fn run(
    path: &Path,
    today: NaiveDate,
    week_start: NaiveDate,
    target_weight_kg: Option<f64>,
) -> Result<()> {
    let diary = load_diary(path)?;
    let dates = diary.meal_dates();
    let trend = weight_trend(diary.weights());

    let report = ProgressReport {
        today,
        current_streak: diary.streak(today),
        longest_streak: longest_streak(&dates),
        weekly_summary: weekly_summary(diary.meals(), week_start),
        remaining_to_target_kg: trend
            .as_ref()
            .and_then(|t| remaining_to_target(t.current_kg, target_weight_kg)),
        weight_trend: trend,
    };

    print_json(&report)
}

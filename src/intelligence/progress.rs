// ABOUTME: Progress evaluation over meal and weight history
// ABOUTME: Logging streaks, per-day totals, weekly summaries, and weight trends
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealtrack Contributors

//! Progress Evaluator
//!
//! Pure functions over read-only snapshots of the meal and weight collections.
//! Nothing is cached: every value is recomputed from the events it is given.

use super::dates::{local_date, longest_run};
use chrono::{Days, NaiveDate};
use mealtrack_core::models::{MacroTotals, MealEvent, WeightEntry};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Current logging streak in days
///
/// The run must end today, or yesterday when nothing has been logged yet today,
/// so a streak survives until one full day is skipped. A logged date after
/// `today` is the most recent date and therefore breaks the streak.
#[must_use]
pub fn streak(meal_dates: &BTreeSet<NaiveDate>, today: NaiveDate) -> u32 {
    let Some(&most_recent) = meal_dates.last() else {
        return 0;
    };

    let yesterday = today.pred_opt();
    if most_recent != today && Some(most_recent) != yesterday {
        return 0;
    }

    let mut count = 0;
    let mut day = Some(most_recent);
    while let Some(current) = day.filter(|d| meal_dates.contains(d)) {
        count += 1;
        day = current.pred_opt();
    }
    count
}

/// Best streak ever recorded, regardless of when it ended
#[must_use]
pub fn longest_streak(meal_dates: &BTreeSet<NaiveDate>) -> u32 {
    longest_run(meal_dates.iter().copied())
}

/// Calorie and macro totals for every day with at least one meal
#[must_use]
pub fn daily_totals(meals: &[MealEvent]) -> BTreeMap<NaiveDate, MacroTotals> {
    let mut totals: BTreeMap<NaiveDate, MacroTotals> = BTreeMap::new();
    for meal in meals {
        *totals.entry(local_date(meal.timestamp)).or_default() += meal.totals();
    }
    totals
}

/// Intake summary for one seven-day window
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct WeeklySummary {
    /// First day of the window
    pub week_start: NaiveDate,
    /// Last day of the window (inclusive)
    pub week_end: NaiveDate,
    /// Calories eaten across the window
    pub total_calories: f64,
    /// `total_calories / days_logged`, or 0 when nothing was logged
    pub avg_daily_calories: f64,
    /// Protein eaten (grams)
    pub total_protein: f64,
    /// Carbohydrates eaten (grams)
    pub total_carbs: f64,
    /// Fat eaten (grams)
    pub total_fat: f64,
    /// Distinct days within the window with at least one meal
    pub days_logged: u32,
}

/// Summarize the meals eaten in `[week_start, week_start + 6 days]`
#[must_use]
pub fn weekly_summary(meals: &[MealEvent], week_start: NaiveDate) -> WeeklySummary {
    let week_end = week_start
        .checked_add_days(Days::new(6))
        .unwrap_or(NaiveDate::MAX);

    let mut totals = MacroTotals::default();
    let mut days = BTreeSet::new();
    for meal in meals {
        let day = local_date(meal.timestamp);
        if (week_start..=week_end).contains(&day) {
            totals += meal.totals();
            days.insert(day);
        }
    }

    let days_logged = days.len() as u32;
    let avg_daily_calories = if days_logged == 0 {
        0.0
    } else {
        totals.calories / f64::from(days_logged)
    };

    WeeklySummary {
        week_start,
        week_end,
        total_calories: totals.calories,
        avg_daily_calories,
        total_protein: totals.protein_g,
        total_carbs: totals.carbs_g,
        total_fat: totals.fat_g,
        days_logged,
    }
}

/// Body weight movement across the weight log
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct WeightTrend {
    /// Date of the earliest entry
    pub start_date: NaiveDate,
    /// Weight at the earliest entry (kg)
    pub start_kg: f64,
    /// Date of the latest entry
    pub current_date: NaiveDate,
    /// Weight at the latest entry (kg)
    pub current_kg: f64,
    /// `current_kg - start_kg`; negative means weight lost
    pub change_kg: f64,
    /// Lowest recorded weight (kg)
    pub lowest_kg: f64,
    /// Highest recorded weight (kg)
    pub highest_kg: f64,
    /// Number of entries considered
    pub entries: usize,
}

/// Weight trend ordered by date; `None` for an empty log
///
/// Entries sharing a date keep their input order, so the last one logged for
/// the latest date is the current weight.
#[must_use]
pub fn weight_trend(entries: &[WeightEntry]) -> Option<WeightTrend> {
    let mut ordered: Vec<&WeightEntry> = entries.iter().collect();
    ordered.sort_by_key(|entry| entry.date);

    let first = ordered.first()?;
    let last = ordered.last()?;
    let (lowest_kg, highest_kg) = ordered.iter().fold(
        (f64::INFINITY, f64::NEG_INFINITY),
        |(low, high), entry| (low.min(entry.weight_kg), high.max(entry.weight_kg)),
    );

    Some(WeightTrend {
        start_date: first.date,
        start_kg: first.weight_kg,
        current_date: last.date,
        current_kg: last.weight_kg,
        change_kg: last.weight_kg - first.weight_kg,
        lowest_kg,
        highest_kg,
        entries: ordered.len(),
    })
}

/// Kilograms left to reach the target weight; `None` without a target
///
/// Positive means weight still to lose, negative means weight still to gain.
#[must_use]
pub fn remaining_to_target(current_kg: f64, target_weight_kg: Option<f64>) -> Option<f64> {
    target_weight_kg.map(|target| current_kg - target)
}

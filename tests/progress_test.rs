// ABOUTME: Integration tests for logging streaks, weekly summaries, and weight trends
// ABOUTME: Exercises progress evaluation through meal histories built like real diaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealtrack Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{Days, Weekday};
use common::{consecutive_days, date, meal_on, meals_on_days};
use mealtrack::intelligence::dates::week_start;
use mealtrack::intelligence::{
    longest_streak, meal_dates, remaining_to_target, streak, weekly_summary, weight_trend,
};
use mealtrack::models::{MealEvent, MealSlot, WeightEntry};
use std::collections::BTreeSet;

mod common;

// ============================================================================
// STREAKS
// ============================================================================

#[test]
fn test_three_consecutive_days_ending_today() {
    common::init_test_logging();
    let meals = meals_on_days(
        &[date(2024, 1, 1), date(2024, 1, 2), date(2024, 1, 3)],
        500.0,
    );
    assert_eq!(streak(&meal_dates(&meals), date(2024, 1, 3)), 3);
}

#[test]
fn test_gap_of_more_than_one_day_resets_streak() {
    let meals = meals_on_days(&[date(2024, 1, 1)], 500.0);
    assert_eq!(streak(&meal_dates(&meals), date(2024, 1, 5)), 0);
}

#[test]
fn test_later_logged_date_resets_streak() {
    let meals = meals_on_days(
        &[date(2024, 1, 2), date(2024, 1, 3), date(2024, 1, 9)],
        500.0,
    );
    assert_eq!(streak(&meal_dates(&meals), date(2024, 1, 3)), 0);
    assert_eq!(streak(&meal_dates(&meals), date(2024, 1, 9)), 1);
}

#[test]
fn test_multiple_meals_per_day_count_once() {
    let day = date(2024, 3, 10);
    let meals = vec![
        MealEvent::new(MealSlot::Breakfast, vec![], common::at(day, 7)),
        MealEvent::new(MealSlot::Lunch, vec![], common::at(day, 12)),
        MealEvent::new(MealSlot::Dinner, vec![], common::at(day, 19)),
    ];
    assert_eq!(streak(&meal_dates(&meals), day), 1);
}

#[test]
fn test_streak_crosses_month_and_year_boundaries() {
    let days = consecutive_days(date(2024, 1, 2), 5);
    assert_eq!(days[0], date(2023, 12, 29));

    let logged: BTreeSet<_> = days.into_iter().collect();
    assert_eq!(streak(&logged, date(2024, 1, 2)), 5);
    assert_eq!(streak(&logged, date(2024, 1, 3)), 5);
    assert_eq!(streak(&logged, date(2024, 1, 4)), 0);
}

#[test]
fn test_logging_today_never_decreases_streak() {
    let today = date(2024, 6, 15);
    for length in 0..10 {
        let mut logged: BTreeSet<_> = consecutive_days(today - Days::new(1), length)
            .into_iter()
            .collect();
        let before = streak(&logged, today);
        logged.insert(today);
        let after = streak(&logged, today);

        assert!(after >= before, "length {length}: {before} -> {after}");
        assert_eq!(after, before + 1);
    }
}

#[test]
fn test_longest_streak_survives_a_break() {
    let mut days = consecutive_days(date(2024, 2, 10), 8);
    days.extend(consecutive_days(date(2024, 2, 20), 2));
    let logged: BTreeSet<_> = days.into_iter().collect();

    assert_eq!(longest_streak(&logged), 8);
    assert_eq!(streak(&logged, date(2024, 2, 20)), 2);
}

// ============================================================================
// WEEKLY SUMMARY
// ============================================================================

#[test]
fn test_weekly_summary_counts_distinct_days() {
    let monday = week_start(date(2024, 1, 10), Weekday::Mon);
    assert_eq!(monday, date(2024, 1, 8));

    let meals = vec![
        meal_on(date(2024, 1, 8), 600.0),
        meal_on(date(2024, 1, 8), 900.0),
        meal_on(date(2024, 1, 10), 2100.0),
        meal_on(date(2024, 1, 14), 1800.0),
        meal_on(date(2024, 1, 15), 5000.0),
    ];

    let summary = weekly_summary(&meals, monday);
    assert_eq!(summary.days_logged, 3);
    assert!((summary.total_calories - 5400.0).abs() < 1e-9);
    assert!((summary.avg_daily_calories - 1800.0).abs() < 1e-9);
    assert!((summary.total_protein - 5400.0 * 0.3 / 4.0).abs() < 1e-6);
}

#[test]
fn test_weekly_summary_without_meals_is_zero() {
    let summary = weekly_summary(&[], date(2024, 1, 8));
    assert_eq!(summary.days_logged, 0);
    assert!(summary.total_calories.abs() < f64::EPSILON);
    assert!(summary.avg_daily_calories.abs() < f64::EPSILON);
}

// ============================================================================
// WEIGHT TREND
// ============================================================================

#[test]
fn test_weight_trend_and_remaining_to_target() {
    let entries = vec![
        WeightEntry::new(date(2024, 1, 15), 82.5),
        WeightEntry::new(date(2024, 1, 1), 85.0).with_note("start"),
        WeightEntry::new(date(2024, 1, 8), 83.4),
    ];

    let trend = weight_trend(&entries).unwrap();
    assert_eq!(trend.current_date, date(2024, 1, 15));
    assert!((trend.change_kg - -2.5).abs() < 1e-9);

    let remaining = remaining_to_target(trend.current_kg, Some(80.0)).unwrap();
    assert!((remaining - 2.5).abs() < 1e-9);
}

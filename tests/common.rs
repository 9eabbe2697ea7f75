// ABOUTME: Shared test utilities and fixture builders for integration tests
// ABOUTME: Provides quiet logging plus profile, meal, and diary helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealtrack Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `mealtrack`

use chrono::{Days, NaiveDate, NaiveDateTime};
use mealtrack::diary::Diary;
use mealtrack::models::{
    ActivityLevel, BiologicalSex, BiometricProfile, FoodLine, LoggingMethod, MealEvent, MealSlot,
    WeightGoal,
};
use std::env;
use std::sync::Once;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn at(day: NaiveDate, hour: u32) -> NaiveDateTime {
    day.and_hms_opt(hour, 0, 0).unwrap()
}

/// 70 kg, 175 cm, 30-year-old sedentary male
pub fn reference_profile(goal: WeightGoal) -> BiometricProfile {
    BiometricProfile {
        weight_kg: 70.0,
        height_cm: 175.0,
        age: 30,
        sex: BiologicalSex::Male,
        activity_level: ActivityLevel::Sedentary,
        weight_goal: goal,
        target_weight_kg: None,
    }
}

/// Single-food meal at noon on `day`
pub fn meal_on(day: NaiveDate, calories: f64) -> MealEvent {
    meal_with_method(day, calories, LoggingMethod::Manual)
}

pub fn meal_with_method(day: NaiveDate, calories: f64, method: LoggingMethod) -> MealEvent {
    MealEvent::new(
        MealSlot::Lunch,
        vec![FoodLine {
            name: "Chicken rice bowl".to_owned(),
            calories,
            protein_g: calories * 0.3 / 4.0,
            carbs_g: calories * 0.4 / 4.0,
            fat_g: calories * 0.3 / 9.0,
            portion: "1 bowl".to_owned(),
            quantity: 1.0,
        }],
        at(day, 12),
    )
    .with_logging_method(method)
}

/// One meal per day on each of `days`
pub fn meals_on_days(days: &[NaiveDate], calories: f64) -> Vec<MealEvent> {
    days.iter().map(|day| meal_on(*day, calories)).collect()
}

/// `count` consecutive days ending at `last`, oldest first
pub fn consecutive_days(last: NaiveDate, count: u64) -> Vec<NaiveDate> {
    (0..count)
        .rev()
        .map(|back| last - Days::new(back))
        .collect()
}

pub fn diary_with(meals: Vec<MealEvent>) -> Diary {
    let mut diary = Diary::new();
    for meal in meals {
        diary.add_meal(meal).unwrap();
    }
    diary
}

// ABOUTME: Calendar-date normalization helpers for meal and weight history
// ABOUTME: Maps wall-clock timestamps to local dates and measures consecutive-day runs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealtrack Contributors

//! Date normalization
//!
//! Meal timestamps carry local wall-clock semantics, so the calendar day of a meal
//! is simply the date part of its timestamp. No timezone conversion happens here.

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, Weekday};
use mealtrack_core::models::MealEvent;
use std::collections::BTreeSet;

/// Calendar day a wall-clock timestamp falls on
#[must_use]
pub fn local_date(timestamp: NaiveDateTime) -> NaiveDate {
    timestamp.date()
}

/// Distinct calendar days with at least one meal
#[must_use]
pub fn meal_dates(meals: &[MealEvent]) -> BTreeSet<NaiveDate> {
    meals.iter().map(|meal| local_date(meal.timestamp)).collect()
}

/// First day of the week containing `date`
#[must_use]
pub fn week_start(date: NaiveDate, first_day: Weekday) -> NaiveDate {
    let offset = (7 + date.weekday().num_days_from_monday() - first_day.num_days_from_monday()) % 7;
    date.checked_sub_days(Days::new(u64::from(offset)))
        .unwrap_or(date)
}

/// Length of the longest run of calendar-consecutive days
///
/// `dates` must be ascending; duplicates are ignored.
pub fn longest_run<I>(dates: I) -> u32
where
    I: IntoIterator<Item = NaiveDate>,
{
    let mut longest = 0;
    let mut current = 0;
    let mut previous: Option<NaiveDate> = None;

    for date in dates {
        if previous == Some(date) {
            continue;
        }
        current = match previous {
            Some(prev) if prev.succ_opt() == Some(date) => current + 1,
            _ => 1,
        };
        longest = longest.max(current);
        previous = Some(date);
    }

    longest
}

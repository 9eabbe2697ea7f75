// ABOUTME: Intelligence module for goal, progress, and achievement computation
// ABOUTME: Pure functions over read-only snapshots of meal, weight, and badge data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealtrack Contributors

//! # Intelligence Module
//!
//! Three cooperating, stateless computation units:
//!
//! - [`goal_calculator`]: biometric profile to BMR, TDEE, calorie goal and macro targets
//! - [`progress`]: streaks, per-day totals, weekly summaries and weight trends
//! - [`achievements`]: which catalog badges a history has newly earned
//!
//! None of them touch shared state; callers pass snapshots in and own persistence.

/// Achievement counters and badge evaluation
pub mod achievements;
/// Built-in static badge catalog
pub mod badge_catalog;
/// Calendar-date normalization helpers
pub mod dates;
/// Daily calorie and macro goal calculation
pub mod goal_calculator;
/// Streaks, daily totals, weekly summaries and weight trends
pub mod progress;

pub use achievements::{badge_progress, AchievementCounters, AchievementEvaluator, BadgeProgress};
pub use badge_catalog::default_catalog;
pub use dates::{local_date, meal_dates};
pub use goal_calculator::{GoalCalculator, GoalResult, MacroTargets};
pub use progress::{
    daily_totals, longest_streak, remaining_to_target, streak, weekly_summary, weight_trend,
    WeeklySummary, WeightTrend,
};

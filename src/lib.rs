// ABOUTME: Main library entry point for the mealtrack diet-tracking core
// ABOUTME: Goal calculation, progress evaluation, and achievement evaluation over a meal diary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealtrack Contributors

#![deny(unsafe_code)]

//! # Mealtrack
//!
//! The computational core of a diet-tracking application. Three pure
//! evaluators operate on read-only snapshots of a user's data:
//!
//! - **Goal calculation**: BMR (Mifflin-St Jeor), TDEE, a daily calorie goal
//!   and gram targets for protein, carbohydrates and fat
//! - **Progress evaluation**: logging streaks, per-day totals, weekly summaries
//!   and weight trends
//! - **Achievement evaluation**: which catalog badges a history has newly earned
//!
//! The [`diary::Diary`] collection owns meals, weigh-ins and earned badges and
//! ties the evaluators together when a meal is logged.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mealtrack::intelligence::GoalCalculator;
//! use mealtrack::models::{ActivityLevel, BiologicalSex, BiometricProfile, WeightGoal};
//!
//! let profile = BiometricProfile {
//!     weight_kg: 70.0,
//!     height_cm: 175.0,
//!     age: 30,
//!     sex: BiologicalSex::Male,
//!     activity_level: ActivityLevel::Sedentary,
//!     weight_goal: WeightGoal::Maintain,
//!     target_weight_kg: None,
//! };
//! let goals = GoalCalculator::new().calculate(&profile);
//! assert_eq!(goals.calorie_goal, 1979);
//! ```

/// Tunable constants for goal and achievement calculations
pub mod config;

/// Meal, weight and badge collection for a single user
pub mod diary;

/// Goal, progress and achievement evaluators
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Reference constants shared with the core crate
pub use mealtrack_core::constants;

/// Unified error type and error codes
pub use mealtrack_core::errors;

/// Domain models
pub use mealtrack_core::models;

// ABOUTME: Core data models for the mealtrack engine
// ABOUTME: Re-exports biometric profile, meal, weight, and badge value objects
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealtrack Contributors

//! Value objects consumed and produced by the goal, progress and achievement
//! computations. All of them are plain serde-serializable data; ownership of the
//! collections they live in belongs to the caller.

/// Biometric profile and the enums that parameterize goal calculation
pub mod profile;

/// Meal events, food lines and derived macro totals
pub mod meal;

/// Body weight log entries
pub mod weight;

/// Badge catalog entries, requirements and earned badges
pub mod badge;

pub use badge::{Badge, BadgeCategory, BadgeId, EarnedBadge, Requirement};
pub use meal::{FoodLine, LoggingMethod, MacroTotals, MealEvent, MealSlot};
pub use profile::{ActivityLevel, BiologicalSex, BiometricProfile, WeightGoal};
pub use weight::WeightEntry;

// ABOUTME: Configuration management module for tunable goal and achievement parameters
// ABOUTME: Exposes the intelligence configuration with defaults, env overrides, and validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealtrack Contributors
//! Configuration module for mealtrack
//!
//! Every product-chosen constant used by the calculators (coefficients, activity
//! multipliers, calorie adjustment and floor, macro split, goal-hit tolerance)
//! is read from here rather than hard-coded at the call site.

/// Intelligence module configuration (nutrition targets and achievements)
pub mod intelligence;

pub use intelligence::{
    AchievementConfig, ActivityFactorsConfig, BmrConfig, CalorieTargetConfig, ConfigError,
    IntelligenceConfig, MacroSplitConfig, NutritionConfig, OtherSexFormula,
};

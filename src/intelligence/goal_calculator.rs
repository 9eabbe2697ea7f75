// ABOUTME: Daily calorie and macronutrient goal calculation from biometrics
// ABOUTME: Mifflin-St Jeor BMR, activity-scaled TDEE, calorie target, and macro split
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealtrack Contributors

//! Goal Calculator Module
//!
//! Derives a daily calorie goal and gram targets for protein, carbohydrates and
//! fat from a [`BiometricProfile`]. Every function here is total: inputs are
//! trusted, and validation belongs to whoever collected the profile
//! (see [`BiometricProfile::validate`]).
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//! - `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). *Exercise Physiology*.

use crate::config::intelligence::{
    ActivityFactorsConfig, BmrConfig, CalorieTargetConfig, IntelligenceConfig, MacroSplitConfig,
    NutritionConfig,
};
use mealtrack_core::constants::energy::{KCAL_PER_G_CARBS, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN};
use mealtrack_core::errors::AppResult;
use mealtrack_core::models::{ActivityLevel, BiologicalSex, BiometricProfile, WeightGoal};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Daily targets derived from a biometric profile
///
/// Recomputed on demand; never the source of truth.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GoalResult {
    /// Basal Metabolic Rate (kcal/day), unrounded
    pub bmr: f64,
    /// Total Daily Energy Expenditure (kcal/day), unrounded
    pub tdee: f64,
    /// Daily calorie goal (kcal/day)
    pub calorie_goal: u32,
    /// Daily protein goal (grams)
    pub protein_g: u32,
    /// Daily carbohydrate goal (grams)
    pub carbs_g: u32,
    /// Daily fat goal (grams)
    pub fat_g: u32,
}

/// Gram targets for each macronutrient
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MacroTargets {
    /// Protein (grams)
    pub protein_g: u32,
    /// Carbohydrates (grams)
    pub carbs_g: u32,
    /// Fat (grams)
    pub fat_g: u32,
}

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `sex_constant`
/// - Men: +5
/// - Women: -161
/// - Other: per [`BmrConfig::other_sex_formula`]
#[must_use]
pub fn calculate_mifflin_st_jeor(profile: &BiometricProfile, config: &BmrConfig) -> f64 {
    let weight_component = config.msj_weight_coef * profile.weight_kg;
    let height_component = config.msj_height_coef * profile.height_cm;
    let age_component = config.msj_age_coef * f64::from(profile.age);

    let sex_constant = match profile.sex {
        BiologicalSex::Male => config.msj_male_constant,
        BiologicalSex::Female => config.msj_female_constant,
        BiologicalSex::Other => config.other_constant(),
    };

    weight_component + height_component + age_component + sex_constant
}

/// Multiplier for an activity level
#[must_use]
pub const fn activity_factor(level: ActivityLevel, config: &ActivityFactorsConfig) -> f64 {
    match level {
        ActivityLevel::Sedentary => config.sedentary,
        ActivityLevel::Light => config.light,
        ActivityLevel::Moderate => config.moderate,
        ActivityLevel::Active => config.active,
        ActivityLevel::VeryActive => config.very_active,
    }
}

/// Calculate Total Daily Energy Expenditure
///
/// Formula: TDEE = BMR x Activity Factor
#[must_use]
pub fn calculate_tdee(bmr: f64, level: ActivityLevel, config: &ActivityFactorsConfig) -> f64 {
    bmr * activity_factor(level, config)
}

/// Calorie goal for a weight goal: TDEE adjusted by the deficit/surplus, floored, then rounded
///
/// Rounding happens here and only here, so `lose` yields
/// `max(floor, round(TDEE - adjustment))`.
#[must_use]
pub fn calculate_calorie_goal(tdee: f64, goal: WeightGoal, config: &CalorieTargetConfig) -> u32 {
    let adjusted = match goal {
        WeightGoal::Lose => tdee - config.adjustment_kcal,
        WeightGoal::Maintain => tdee,
        WeightGoal::Gain => tdee + config.adjustment_kcal,
    };

    adjusted.max(config.floor_kcal).round() as u32
}

/// Split a rounded calorie goal into gram targets
///
/// Each macro is rounded independently, so the grams converted back to calories
/// may differ from the goal by a few kcal. That drift is left alone.
#[must_use]
pub fn calculate_macro_targets(calorie_goal: u32, split: &MacroSplitConfig) -> MacroTargets {
    let calories = f64::from(calorie_goal);
    MacroTargets {
        protein_g: (calories * split.protein_fraction / KCAL_PER_G_PROTEIN).round() as u32,
        carbs_g: (calories * split.carbs_fraction / KCAL_PER_G_CARBS).round() as u32,
        fat_g: (calories * split.fat_fraction / KCAL_PER_G_FAT).round() as u32,
    }
}

/// Stateless calculator bound to a nutrition configuration
#[derive(Debug, Clone)]
pub struct GoalCalculator {
    config: NutritionConfig,
}

impl Default for GoalCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl GoalCalculator {
    /// Create a calculator using the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: IntelligenceConfig::global().nutrition.clone(),
        }
    }

    /// Create a calculator from a fresh load of the environment configuration
    ///
    /// Unlike [`Self::new`], an invalid override is reported instead of
    /// falling back to defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if an override cannot be parsed or fails validation
    pub fn from_env() -> AppResult<Self> {
        Ok(Self::with_config(IntelligenceConfig::load()?.nutrition))
    }

    /// Create a calculator with custom configuration
    #[must_use]
    pub const fn with_config(config: NutritionConfig) -> Self {
        Self { config }
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &NutritionConfig {
        &self.config
    }

    /// Derive BMR, TDEE, calorie goal and macro targets for a profile
    #[must_use]
    pub fn calculate(&self, profile: &BiometricProfile) -> GoalResult {
        let bmr = calculate_mifflin_st_jeor(profile, &self.config.bmr);
        let tdee = calculate_tdee(bmr, profile.activity_level, &self.config.activity_factors);
        let calorie_goal =
            calculate_calorie_goal(tdee, profile.weight_goal, &self.config.calorie_targets);
        let macros = calculate_macro_targets(calorie_goal, &self.config.macro_split);

        debug!(
            bmr,
            tdee,
            calorie_goal,
            sex = %profile.sex,
            activity = %profile.activity_level,
            goal = %profile.weight_goal,
            "Calculated daily goals"
        );

        GoalResult {
            bmr,
            tdee,
            calorie_goal,
            protein_g: macros.protein_g,
            carbs_g: macros.carbs_g,
            fat_g: macros.fat_g,
        }
    }
}

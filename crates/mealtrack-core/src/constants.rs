// ABOUTME: Nutrition and gamification constants organized by domain
// ABOUTME: Energy densities, default calorie targets, and built-in badge identifiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealtrack Contributors

//! Constants module
//!
//! Pure data constants grouped by domain. Values that product owners may want to
//! tune (calorie adjustment, goal-hit tolerance) only provide the *defaults* here;
//! the runtime values live in the configuration layer.

/// Energy density of macronutrients (Atwater general factors)
pub mod energy {
    /// Kilocalories per gram of protein
    pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
    /// Kilocalories per gram of carbohydrate
    pub const KCAL_PER_G_CARBS: f64 = 4.0;
    /// Kilocalories per gram of fat
    pub const KCAL_PER_G_FAT: f64 = 9.0;
}

/// Mifflin-St Jeor coefficients
pub mod mifflin_st_jeor {
    /// Weight coefficient (per kg)
    pub const WEIGHT_COEF: f64 = 10.0;
    /// Height coefficient (per cm)
    pub const HEIGHT_COEF: f64 = 6.25;
    /// Age coefficient (per year)
    pub const AGE_COEF: f64 = -5.0;
    /// Male constant
    pub const MALE_CONSTANT: f64 = 5.0;
    /// Female constant
    pub const FEMALE_CONSTANT: f64 = -161.0;
}

/// Activity multipliers applied to BMR
pub mod activity_factors {
    /// Little or no exercise
    pub const SEDENTARY: f64 = 1.2;
    /// Light exercise 1-3 days/week
    pub const LIGHT: f64 = 1.375;
    /// Moderate exercise 3-5 days/week
    pub const MODERATE: f64 = 1.55;
    /// Hard exercise 6-7 days/week
    pub const ACTIVE: f64 = 1.725;
    /// Very hard exercise or physical job
    pub const VERY_ACTIVE: f64 = 1.9;
}

/// Daily calorie target defaults
pub mod calorie_targets {
    /// Deficit (lose) or surplus (gain) applied to TDEE, kcal/day
    pub const DEFAULT_ADJUSTMENT_KCAL: f64 = 500.0;
    /// Lowest calorie goal ever recommended, kcal/day
    pub const DEFAULT_FLOOR_KCAL: f64 = 1200.0;
    /// Share of calories from protein
    pub const DEFAULT_PROTEIN_FRACTION: f64 = 0.30;
    /// Share of calories from carbohydrates
    pub const DEFAULT_CARBS_FRACTION: f64 = 0.40;
    /// Share of calories from fat
    pub const DEFAULT_FAT_FRACTION: f64 = 0.30;
}

/// Achievement evaluation defaults
pub mod achievements {
    /// A day is a goal hit when its calories are within this fraction of the goal
    pub const DEFAULT_GOAL_HIT_TOLERANCE: f64 = 0.10;
}

/// Identifiers of the built-in badge catalog
pub mod badge_ids {
    /// First meal ever logged
    pub const FIRST_MEAL: &str = "FIRST_MEAL";
    /// Ten meals logged
    pub const MEALS_10: &str = "MEALS_10";
    /// Fifty meals logged
    pub const MEALS_50: &str = "MEALS_50";
    /// One hundred meals logged
    pub const MEALS_100: &str = "MEALS_100";
    /// Three day logging streak
    pub const STREAK_3: &str = "STREAK_3";
    /// Seven day logging streak
    pub const STREAK_7: &str = "STREAK_7";
    /// Thirty day logging streak
    pub const STREAK_30: &str = "STREAK_30";
    /// First meal logged from a photo
    pub const PHOTO_FIRST: &str = "PHOTO_FIRST";
    /// Ten meals logged from photos
    pub const PHOTO_10: &str = "PHOTO_10";
    /// First meal logged by voice
    pub const VOICE_FIRST: &str = "VOICE_FIRST";
    /// Ten meals logged by voice
    pub const VOICE_10: &str = "VOICE_10";
    /// First day within the calorie goal band
    pub const GOAL_HIT_1: &str = "GOAL_HIT_1";
    /// Ten days within the calorie goal band
    pub const GOAL_HIT_10: &str = "GOAL_HIT_10";
    /// Seven consecutive days within the calorie goal band
    pub const PERFECT_WEEK: &str = "PERFECT_WEEK";
    /// Thirty consecutive days within the calorie goal band
    pub const PERFECT_MONTH: &str = "PERFECT_MONTH";
}

/// Service identification used in structured logs
pub mod service_names {
    /// Service name reported by the CLI and library logs
    pub const MEALTRACK: &str = "mealtrack";
}

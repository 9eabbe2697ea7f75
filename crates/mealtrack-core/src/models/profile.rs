// ABOUTME: Biometric profile used to derive daily calorie and macro targets
// ABOUTME: Sex, activity level, and weight goal enums plus input-layer validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealtrack Contributors

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const MAX_WEIGHT_KG: f64 = 300.0;
const MAX_HEIGHT_CM: f64 = 300.0;
const MIN_AGE_YEARS: u32 = 10;
const MAX_AGE_YEARS: u32 = 120;

/// Biological sex category used to pick the BMR constant
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BiologicalSex {
    /// Male constant (+5)
    Male,
    /// Female constant (-161)
    Female,
    /// Neither constant applies directly; resolved by configuration
    Other,
}

/// Activity level for the TDEE multiplier, ordered from least to most active
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    Moderate,
    /// Hard exercise 6-7 days/week
    Active,
    /// Very hard exercise or physical job
    VeryActive,
}

/// Direction of the user's weight goal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WeightGoal {
    /// Caloric deficit
    Lose,
    /// Caloric balance
    Maintain,
    /// Caloric surplus
    Gain,
}

/// Biometric inputs for a single goal calculation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BiometricProfile {
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Age in years
    pub age: u32,
    /// Biological sex category
    pub sex: BiologicalSex,
    /// Activity level
    pub activity_level: ActivityLevel,
    /// Weight goal direction
    pub weight_goal: WeightGoal,
    /// Desired body weight in kilograms
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_weight_kg: Option<f64>,
}

impl BiometricProfile {
    /// Check that the collected values are physically plausible
    ///
    /// Goal calculation itself never calls this: it is offered to the layer
    /// that collects the profile (onboarding forms, the CLI).
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` for a weight, height, age or target weight
    /// outside the range the Mifflin-St Jeor equation was validated for.
    pub fn validate(&self) -> AppResult<()> {
        if !within(self.weight_kg, MAX_WEIGHT_KG) {
            return Err(AppError::out_of_range(format!(
                "Weight must be between 0 and {MAX_WEIGHT_KG} kg"
            )));
        }
        if !within(self.height_cm, MAX_HEIGHT_CM) {
            return Err(AppError::out_of_range(format!(
                "Height must be between 0 and {MAX_HEIGHT_CM} cm"
            )));
        }
        if !(MIN_AGE_YEARS..=MAX_AGE_YEARS).contains(&self.age) {
            return Err(AppError::out_of_range(format!(
                "Age must be between {MIN_AGE_YEARS} and {MAX_AGE_YEARS} years"
            )));
        }
        if let Some(target) = self.target_weight_kg {
            if !within(target, MAX_WEIGHT_KG) {
                return Err(AppError::out_of_range(format!(
                    "Target weight must be between 0 and {MAX_WEIGHT_KG} kg"
                )));
            }
        }
        Ok(())
    }
}

// NaN fails both comparisons
fn within(value: f64, max: f64) -> bool {
    value > 0.0 && value <= max
}

impl fmt::Display for BiologicalSex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Male => write!(f, "male"),
            Self::Female => write!(f, "female"),
            Self::Other => write!(f, "other"),
        }
    }
}

impl FromStr for BiologicalSex {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            "other" => Ok(Self::Other),
            _ => Err(AppError::invalid_input(format!("Unknown sex: {s}"))),
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sedentary => write!(f, "sedentary"),
            Self::Light => write!(f, "light"),
            Self::Moderate => write!(f, "moderate"),
            Self::Active => write!(f, "active"),
            Self::VeryActive => write!(f, "very_active"),
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "sedentary" => Ok(Self::Sedentary),
            "light" => Ok(Self::Light),
            "moderate" => Ok(Self::Moderate),
            "active" => Ok(Self::Active),
            "very_active" => Ok(Self::VeryActive),
            _ => Err(AppError::invalid_input(format!(
                "Unknown activity level: {s}"
            ))),
        }
    }
}

impl fmt::Display for WeightGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lose => write!(f, "lose"),
            Self::Maintain => write!(f, "maintain"),
            Self::Gain => write!(f, "gain"),
        }
    }
}

impl FromStr for WeightGoal {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lose" => Ok(Self::Lose),
            "maintain" => Ok(Self::Maintain),
            "gain" => Ok(Self::Gain),
            _ => Err(AppError::invalid_input(format!("Unknown weight goal: {s}"))),
        }
    }
}

// ABOUTME: Nutrition configuration for daily calorie and macro goal calculation
// ABOUTME: Configures BMR coefficients, activity multipliers, calorie targets, and macro split
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealtrack Contributors

//! Nutrition Goal Configuration
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Activity factors: `McArdle`, Katch & Katch (2010), Exercise Physiology

use super::ConfigError;
use mealtrack_core::constants::{activity_factors, calorie_targets, mifflin_st_jeor};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Nutrition goal configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NutritionConfig {
    /// Basal Metabolic Rate (BMR) calculation settings
    pub bmr: BmrConfig,
    /// Activity factor multipliers for TDEE calculation
    pub activity_factors: ActivityFactorsConfig,
    /// Deficit/surplus and floor applied to TDEE
    pub calorie_targets: CalorieTargetConfig,
    /// Share of the calorie goal assigned to each macronutrient
    pub macro_split: MacroSplitConfig,
}

/// Which BMR constant is used for the `other` sex category
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OtherSexFormula {
    /// Use the female constant (-161)
    FemaleFormula,
    /// Use the mean of the male and female constants (-78)
    #[default]
    Average,
}

impl fmt::Display for OtherSexFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FemaleFormula => write!(f, "female_formula"),
            Self::Average => write!(f, "average"),
        }
    }
}

impl FromStr for OtherSexFormula {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "female" | "female_formula" => Ok(Self::FemaleFormula),
            "average" => Ok(Self::Average),
            _ => Err(ConfigError::Parse(format!("Unknown other-sex formula: {s}"))),
        }
    }
}

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BmrConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor female constant (-161)
    pub msj_female_constant: f64,
    /// Constant policy for the `other` sex category
    pub other_sex_formula: OtherSexFormula,
}

impl BmrConfig {
    /// Constant used for the `other` sex category under the configured policy
    #[must_use]
    pub fn other_constant(&self) -> f64 {
        match self.other_sex_formula {
            OtherSexFormula::FemaleFormula => self.msj_female_constant,
            OtherSexFormula::Average => (self.msj_male_constant + self.msj_female_constant) / 2.0,
        }
    }
}

/// Activity factor multipliers for TDEE calculation
///
/// Reference: `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). Exercise Physiology
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActivityFactorsConfig {
    /// Sedentary (little/no exercise): 1.2
    pub sedentary: f64,
    /// Light (1-3 days/week): 1.375
    pub light: f64,
    /// Moderate (3-5 days/week): 1.55
    pub moderate: f64,
    /// Active (6-7 days/week): 1.725
    pub active: f64,
    /// Very active (physical job or 2x/day): 1.9
    pub very_active: f64,
}

/// Daily calorie target configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalorieTargetConfig {
    /// Subtracted from TDEE to lose, added to gain (kcal/day)
    pub adjustment_kcal: f64,
    /// Calorie goals never go below this (kcal/day)
    pub floor_kcal: f64,
}

/// Macronutrient split of the calorie goal (fractions summing to 1.0)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MacroSplitConfig {
    /// Protein share: 0.30
    pub protein_fraction: f64,
    /// Carbohydrate share: 0.40
    pub carbs_fraction: f64,
    /// Fat share: 0.30
    pub fat_fraction: f64,
}

impl NutritionConfig {
    /// Validate nutrition settings
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a multiplier, target or split is outside its range
    pub fn validate(&self) -> Result<(), ConfigError> {
        let factors = &self.activity_factors;
        let ordered = [
            factors.sedentary,
            factors.light,
            factors.moderate,
            factors.active,
            factors.very_active,
        ];
        if ordered[0] < 1.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Sedentary activity factor must be at least 1.0",
            ));
        }
        if ordered.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(ConfigError::InvalidRange(
                "Activity factors must be in ascending order",
            ));
        }

        let targets = &self.calorie_targets;
        if !targets.adjustment_kcal.is_finite() || targets.adjustment_kcal < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Calorie adjustment must be a non-negative number of kcal",
            ));
        }
        if !targets.floor_kcal.is_finite() || targets.floor_kcal <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Calorie floor must be a positive number of kcal",
            ));
        }

        self.macro_split.validate()
    }
}

impl MacroSplitConfig {
    /// Validate that every fraction is within 0.0-1.0 and they sum to 1.0
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidWeights` if the fractions don't sum to 1.0
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fractions = [self.protein_fraction, self.carbs_fraction, self.fat_fraction];
        if fractions.iter().any(|f| !(0.0..=1.0).contains(f)) {
            return Err(ConfigError::ValueOutOfRange(
                "Macro fractions must be between 0.0 and 1.0",
            ));
        }
        let sum: f64 = fractions.iter().sum();
        if (sum - 1.0).abs() > 0.01 {
            return Err(ConfigError::InvalidWeights(
                "Macro fractions must sum to 1.0",
            ));
        }
        Ok(())
    }
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: mifflin_st_jeor::WEIGHT_COEF,
            msj_height_coef: mifflin_st_jeor::HEIGHT_COEF,
            msj_age_coef: mifflin_st_jeor::AGE_COEF,
            msj_male_constant: mifflin_st_jeor::MALE_CONSTANT,
            msj_female_constant: mifflin_st_jeor::FEMALE_CONSTANT,
            other_sex_formula: OtherSexFormula::default(),
        }
    }
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: activity_factors::SEDENTARY,
            light: activity_factors::LIGHT,
            moderate: activity_factors::MODERATE,
            active: activity_factors::ACTIVE,
            very_active: activity_factors::VERY_ACTIVE,
        }
    }
}

impl Default for CalorieTargetConfig {
    fn default() -> Self {
        Self {
            adjustment_kcal: calorie_targets::DEFAULT_ADJUSTMENT_KCAL,
            floor_kcal: calorie_targets::DEFAULT_FLOOR_KCAL,
        }
    }
}

impl Default for MacroSplitConfig {
    fn default() -> Self {
        Self {
            protein_fraction: calorie_targets::DEFAULT_PROTEIN_FRACTION,
            carbs_fraction: calorie_targets::DEFAULT_CARBS_FRACTION,
            fat_fraction: calorie_targets::DEFAULT_FAT_FRACTION,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        assert!(NutritionConfig::default().validate().is_ok());
    }

    #[test]
    fn test_other_constant_follows_policy() {
        let mut bmr = BmrConfig::default();
        assert!((bmr.other_constant() - -78.0).abs() < f64::EPSILON);

        bmr.other_sex_formula = OtherSexFormula::FemaleFormula;
        assert!((bmr.other_constant() - -161.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_macro_split_must_sum_to_one() {
        let split = MacroSplitConfig {
            protein_fraction: 0.5,
            carbs_fraction: 0.4,
            fat_fraction: 0.3,
        };
        assert!(matches!(
            split.validate(),
            Err(ConfigError::InvalidWeights(_))
        ));
    }

    #[test]
    fn test_unordered_activity_factors_rejected() {
        let mut config = NutritionConfig::default();
        config.activity_factors.active = 1.5;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRange(_))
        ));
    }

    #[test]
    fn test_negative_adjustment_rejected() {
        let mut config = NutritionConfig::default();
        config.calorie_targets.adjustment_kcal = -100.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_other_sex_formula_parse() {
        assert_eq!(
            "female".parse::<OtherSexFormula>().unwrap(),
            OtherSexFormula::FemaleFormula
        );
        assert!("median".parse::<OtherSexFormula>().is_err());
    }
}

// ABOUTME: Intelligence configuration for goal calculation and achievement evaluation
// ABOUTME: Orchestrates domain-specific configs and provides unified validation and loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealtrack Contributors

//! Intelligence Configuration Module
//!
//! Configuration is organized into domain-specific modules:
//! - `nutrition` - BMR coefficients, activity multipliers, calorie targets, macro split
//! - `achievements` - Goal-hit tolerance band used by badge evaluation
//!
//! Values start from their defaults, then environment overrides are applied and
//! the result is validated. [`IntelligenceConfig::global`] caches the loaded
//! configuration for the lifetime of the process.

/// Badge evaluation settings
pub mod achievements;
/// Calorie and macro goal settings
pub mod nutrition;

pub use achievements::AchievementConfig;
pub use nutrition::{
    ActivityFactorsConfig, BmrConfig, CalorieTargetConfig, MacroSplitConfig, NutritionConfig,
    OtherSexFormula,
};

use mealtrack_core::errors::AppError;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use thiserror::Error;
use tracing::warn;

/// Global configuration singleton
static INTELLIGENCE_CONFIG: OnceLock<IntelligenceConfig> = OnceLock::new();

/// Configuration loading and validation errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Two related values are in the wrong order
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// An environment variable could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),

    /// Fractions or weights that must sum to one don't
    #[error("Invalid weights: {0}")]
    InvalidWeights(&'static str),

    /// A single value is outside its accepted range
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::config(error.to_string()).with_source(error)
    }
}

/// Main intelligence configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct IntelligenceConfig {
    /// Configuration for daily calorie and macro goals
    pub nutrition: NutritionConfig,
    /// Configuration for badge evaluation
    pub achievements: AchievementConfig,
}

impl IntelligenceConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        INTELLIGENCE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load intelligence config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns the first validation failure found
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.nutrition.validate()?;
        self.achievements.validate()
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Calorie target overrides
        Self::apply_env_var(
            "MEALTRACK_CALORIE_ADJUSTMENT_KCAL",
            &mut self.nutrition.calorie_targets.adjustment_kcal,
        )?;
        Self::apply_env_var(
            "MEALTRACK_CALORIE_FLOOR_KCAL",
            &mut self.nutrition.calorie_targets.floor_kcal,
        )?;

        // BMR policy override
        Self::apply_env_var(
            "MEALTRACK_OTHER_SEX_FORMULA",
            &mut self.nutrition.bmr.other_sex_formula,
        )?;

        // Macro split overrides
        Self::apply_env_var(
            "MEALTRACK_PROTEIN_FRACTION",
            &mut self.nutrition.macro_split.protein_fraction,
        )?;
        Self::apply_env_var(
            "MEALTRACK_CARBS_FRACTION",
            &mut self.nutrition.macro_split.carbs_fraction,
        )?;
        Self::apply_env_var(
            "MEALTRACK_FAT_FRACTION",
            &mut self.nutrition.macro_split.fat_fraction,
        )?;

        // Achievement overrides
        Self::apply_env_var(
            "MEALTRACK_GOAL_HIT_TOLERANCE",
            &mut self.achievements.goal_hit_tolerance,
        )?;

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mealtrack_core::errors::ErrorCode;

    #[test]
    fn test_default_config_is_valid() {
        assert!(IntelligenceConfig::default().validate().is_ok());
    }

    #[test]
    fn test_tolerance_out_of_range_rejected() {
        let mut config = IntelligenceConfig::default();
        config.achievements.goal_hit_tolerance = 1.5;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValueOutOfRange(_))
        ));
    }

    #[test]
    fn test_config_error_converts_to_config_invalid() {
        let error = AppError::from(ConfigError::Parse("Invalid MEALTRACK_FAT_FRACTION".into()));
        assert_eq!(error.code, ErrorCode::ConfigInvalid);
        assert_eq!(error.message, "Parse error: Invalid MEALTRACK_FAT_FRACTION");
        assert!(error.source.is_some());
    }

    #[test]
    fn test_config_round_trips_through_json() {
        let config = IntelligenceConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: IntelligenceConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}

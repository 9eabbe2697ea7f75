// ABOUTME: Achievement configuration for badge evaluation
// ABOUTME: Configures the calorie band that counts a logged day as a goal hit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealtrack Contributors

use super::ConfigError;
use mealtrack_core::constants::achievements;
use serde::{Deserialize, Serialize};

/// Achievement evaluation configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AchievementConfig {
    /// A day is a goal hit when `|calories - goal| <= goal * tolerance`
    pub goal_hit_tolerance: f64,
}

impl AchievementConfig {
    /// Validate achievement settings
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` if the tolerance is not in (0, 1)
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.goal_hit_tolerance > 0.0 && self.goal_hit_tolerance < 1.0) {
            return Err(ConfigError::ValueOutOfRange(
                "Goal hit tolerance must be between 0.0 and 1.0 (exclusive)",
            ));
        }
        Ok(())
    }
}

impl Default for AchievementConfig {
    fn default() -> Self {
        Self {
            goal_hit_tolerance: achievements::DEFAULT_GOAL_HIT_TOLERANCE,
        }
    }
}

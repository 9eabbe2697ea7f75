// ABOUTME: Achievement evaluation that decides which catalog badges are newly earned
// ABOUTME: Derives logging and goal-hit counters from meal history and checks badge thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealtrack Contributors

//! Achievement Evaluator
//!
//! Badges are independent: each one compares a single counter against its
//! threshold, and earning one never consumes progress toward another. The
//! evaluator is side-effect free; persisting the union of newly earned and
//! already earned badges is the caller's job.

use super::dates::longest_run;
use super::progress::daily_totals;
use crate::config::intelligence::{AchievementConfig, IntelligenceConfig};
use chrono::NaiveDate;
use mealtrack_core::errors::AppResult;
use mealtrack_core::models::{Badge, BadgeId, LoggingMethod, MealEvent, Requirement};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

/// Counters every badge requirement is checked against
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AchievementCounters {
    /// Current logging streak (days)
    pub streak: u32,
    /// Meals logged
    pub total_logs: u32,
    /// Meals logged from a photo
    pub photo_logs: u32,
    /// Meals logged by voice
    pub voice_logs: u32,
    /// Distinct days within the calorie goal band
    pub goal_hits: u32,
    /// Longest run of consecutive goal-hit days
    pub consecutive_goal_hits: u32,
}

impl AchievementCounters {
    /// Counter a requirement is measured by
    #[must_use]
    pub const fn value_for(&self, requirement: &Requirement) -> u32 {
        match requirement {
            Requirement::Streak(_) => self.streak,
            Requirement::TotalLogs(_) => self.total_logs,
            Requirement::PhotoLogs(_) => self.photo_logs,
            Requirement::VoiceLogs(_) => self.voice_logs,
            Requirement::GoalHits(_) => self.goal_hits,
            Requirement::ConsecutiveGoalHits(_) => self.consecutive_goal_hits,
        }
    }

    /// Whether a requirement's counter has reached its threshold
    #[must_use]
    pub const fn satisfies(&self, requirement: &Requirement) -> bool {
        self.value_for(requirement) >= requirement.threshold()
    }
}

/// Progress toward a single badge
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BadgeProgress {
    /// Badge being tracked
    pub badge_id: BadgeId,
    /// Current counter value
    pub current: u32,
    /// Threshold to reach
    pub target: u32,
    /// `current / target` clamped to 1.0; 1.0 for a zero threshold
    pub fraction: f64,
}

/// Progress toward `badge` given precomputed counters
#[must_use]
pub fn badge_progress(badge: &Badge, counters: &AchievementCounters) -> BadgeProgress {
    let current = counters.value_for(&badge.requirement);
    let target = badge.requirement.threshold();
    let fraction = if target == 0 {
        1.0
    } else {
        (f64::from(current) / f64::from(target)).min(1.0)
    };

    BadgeProgress {
        badge_id: badge.id.clone(),
        current,
        target,
        fraction,
    }
}

/// Whether a day's calories fall within `tolerance` of the goal (inclusive)
#[must_use]
pub fn is_goal_hit(calories: f64, calorie_goal: f64, tolerance: f64) -> bool {
    (calories - calorie_goal).abs() <= calorie_goal * tolerance
}

/// Ascending list of days whose total calories hit the goal band
#[must_use]
pub fn goal_hit_dates(history: &[MealEvent], calorie_goal: f64, tolerance: f64) -> Vec<NaiveDate> {
    daily_totals(history)
        .into_iter()
        .filter(|(_, totals)| is_goal_hit(totals.calories, calorie_goal, tolerance))
        .map(|(day, _)| day)
        .collect()
}

fn count_method(history: &[MealEvent], method: LoggingMethod) -> u32 {
    history
        .iter()
        .filter(|meal| meal.logging_method == method)
        .count() as u32
}

/// Decides which catalog badges a history has newly earned
#[derive(Debug, Clone)]
pub struct AchievementEvaluator {
    config: AchievementConfig,
}

impl Default for AchievementEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl AchievementEvaluator {
    /// Create an evaluator using the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: IntelligenceConfig::global().achievements.clone(),
        }
    }

    /// Create an evaluator from a fresh load of the environment configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if an override cannot be parsed or fails validation
    pub fn from_env() -> AppResult<Self> {
        Ok(Self::with_config(IntelligenceConfig::load()?.achievements))
    }

    /// Create an evaluator with custom configuration
    #[must_use]
    pub const fn with_config(config: AchievementConfig) -> Self {
        Self { config }
    }

    /// Derive every counter from the history in one pass over the daily totals
    #[must_use]
    pub fn counters(
        &self,
        history: &[MealEvent],
        streak: u32,
        calorie_goal: f64,
    ) -> AchievementCounters {
        let hits = goal_hit_dates(history, calorie_goal, self.config.goal_hit_tolerance);

        AchievementCounters {
            streak,
            total_logs: history.len() as u32,
            photo_logs: count_method(history, LoggingMethod::Photo),
            voice_logs: count_method(history, LoggingMethod::Voice),
            goal_hits: hits.len() as u32,
            consecutive_goal_hits: longest_run(hits),
        }
    }

    /// Badges from `catalog` whose threshold is met and that are not yet earned
    ///
    /// Calling again with `already_earned` extended by the result returns nothing.
    #[must_use]
    pub fn evaluate(
        &self,
        history: &[MealEvent],
        streak: u32,
        calorie_goal: f64,
        already_earned: &HashSet<BadgeId>,
        catalog: &[Badge],
    ) -> Vec<Badge> {
        let counters = self.counters(history, streak, calorie_goal);

        let earned: Vec<Badge> = catalog
            .iter()
            .filter(|badge| !already_earned.contains(&badge.id))
            .filter(|badge| counters.satisfies(&badge.requirement))
            .cloned()
            .collect();

        debug!(
            ?counters,
            newly_earned = earned.len(),
            "Evaluated achievements"
        );

        earned
    }

    /// Progress toward every catalog badge, earned or not
    #[must_use]
    pub fn progress(
        &self,
        history: &[MealEvent],
        streak: u32,
        calorie_goal: f64,
        catalog: &[Badge],
    ) -> Vec<BadgeProgress> {
        let counters = self.counters(history, streak, calorie_goal);
        catalog
            .iter()
            .map(|badge| badge_progress(badge, &counters))
            .collect()
    }
}

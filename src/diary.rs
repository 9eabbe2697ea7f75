// ABOUTME: Diary collection owning a user's meals, weigh-ins, and earned badges
// ABOUTME: Serializes mutations and runs the log-meal, recompute-streak, grant-badges sequence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealtrack Contributors

//! # Diary
//!
//! An explicit collection object passed to the evaluators instead of ambient
//! global stores. Mutations take `&mut self`, so one logical "append meal,
//! recompute streak, evaluate achievements, persist the union" sequence can
//! never interleave with another on the same diary.
//!
//! The diary round-trips through JSON; where that JSON lives is the caller's
//! concern.

use crate::intelligence::achievements::AchievementEvaluator;
use crate::intelligence::dates::meal_dates;
use crate::intelligence::progress::streak;
use chrono::{DateTime, NaiveDate, Utc};
use mealtrack_core::errors::{AppError, AppResult};
use mealtrack_core::models::{Badge, BadgeId, EarnedBadge, MealEvent, WeightEntry};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use tracing::info;

/// Everything needed to evaluate achievements after a meal is logged
#[derive(Debug, Clone, Copy)]
pub struct AchievementContext<'a> {
    /// Local calendar date the streak is measured against
    pub today: NaiveDate,
    /// Timestamp recorded on newly earned badges
    pub now: DateTime<Utc>,
    /// Current daily calorie goal (kcal)
    pub calorie_goal: f64,
    /// Badge catalog to evaluate
    pub catalog: &'a [Badge],
    /// Evaluator holding the goal-hit tolerance
    pub evaluator: &'a AchievementEvaluator,
}

/// Result of logging a meal through the diary
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MealLogOutcome {
    /// Streak after the meal was appended
    pub streak: u32,
    /// Badges granted by this meal
    pub new_badges: Vec<Badge>,
}

/// A user's meal log, weight log and earned badges
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Diary {
    #[serde(default)]
    meals: Vec<MealEvent>,
    #[serde(default)]
    weights: Vec<WeightEntry>,
    #[serde(default)]
    earned_badges: Vec<EarnedBadge>,
}

impl Diary {
    /// Create an empty diary
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a diary snapshot
    ///
    /// # Errors
    ///
    /// Returns `SerializationError` for malformed JSON
    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the diary snapshot
    ///
    /// # Errors
    ///
    /// Returns `SerializationError` if serialization fails
    pub fn to_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Logged meals in insertion order
    #[must_use]
    pub fn meals(&self) -> &[MealEvent] {
        &self.meals
    }

    /// Weigh-ins in insertion order
    #[must_use]
    pub fn weights(&self) -> &[WeightEntry] {
        &self.weights
    }

    /// Earned badges in the order they were granted
    #[must_use]
    pub fn earned_badges(&self) -> &[EarnedBadge] {
        &self.earned_badges
    }

    /// Append a meal
    ///
    /// # Errors
    ///
    /// Returns `ResourceAlreadyExists` if a meal with the same id is present
    pub fn add_meal(&mut self, meal: MealEvent) -> AppResult<()> {
        if self.meals.iter().any(|m| m.id == meal.id) {
            return Err(AppError::already_exists(format!("Meal {}", meal.id)));
        }
        info!(meal.id = %meal.id, meal.slot = ?meal.slot, "Meal added");
        self.meals.push(meal);
        Ok(())
    }

    /// Remove a meal, returning it
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if no meal has this id
    pub fn delete_meal(&mut self, id: &str) -> AppResult<MealEvent> {
        let index = self
            .meals
            .iter()
            .position(|m| m.id == id)
            .ok_or_else(|| AppError::not_found(format!("Meal {id}")))?;
        info!(meal.id = %id, "Meal deleted");
        Ok(self.meals.remove(index))
    }

    /// Replace a meal on edit: delete the old event, then add the new one
    ///
    /// Returns the replaced event. The diary is left unchanged on error.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if `id` is unknown, or `ResourceAlreadyExists`
    /// if the replacement's id collides with a different meal
    pub fn replace_meal(&mut self, id: &str, replacement: MealEvent) -> AppResult<MealEvent> {
        if replacement.id != id && self.meals.iter().any(|m| m.id == replacement.id) {
            return Err(AppError::already_exists(format!("Meal {}", replacement.id)));
        }
        let previous = self.delete_meal(id)?;
        self.meals.push(replacement);
        Ok(previous)
    }

    /// Append a weigh-in
    ///
    /// # Errors
    ///
    /// Returns `ResourceAlreadyExists` if an entry with the same id is present
    pub fn add_weight(&mut self, entry: WeightEntry) -> AppResult<()> {
        if self.weights.iter().any(|w| w.id == entry.id) {
            return Err(AppError::already_exists(format!(
                "Weight entry {}",
                entry.id
            )));
        }
        info!(weight.id = %entry.id, weight.date = %entry.date, "Weight entry added");
        self.weights.push(entry);
        Ok(())
    }

    /// Remove a weigh-in, returning it
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if no entry has this id
    pub fn delete_weight(&mut self, id: &str) -> AppResult<WeightEntry> {
        let index = self
            .weights
            .iter()
            .position(|w| w.id == id)
            .ok_or_else(|| AppError::not_found(format!("Weight entry {id}")))?;
        Ok(self.weights.remove(index))
    }

    /// Distinct days with at least one meal
    #[must_use]
    pub fn meal_dates(&self) -> BTreeSet<NaiveDate> {
        meal_dates(&self.meals)
    }

    /// Current logging streak as of `today`
    #[must_use]
    pub fn streak(&self, today: NaiveDate) -> u32 {
        streak(&self.meal_dates(), today)
    }

    /// Ids of every earned badge
    #[must_use]
    pub fn earned_ids(&self) -> HashSet<BadgeId> {
        self.earned_badges
            .iter()
            .map(|earned| earned.badge_id.clone())
            .collect()
    }

    /// Record badges as earned; ids already present are left untouched
    ///
    /// Returns the records that were added.
    pub fn grant(&mut self, badges: &[Badge], earned_at: DateTime<Utc>) -> Vec<EarnedBadge> {
        let mut known = self.earned_ids();
        let mut granted = Vec::new();
        for badge in badges {
            if known.insert(badge.id.clone()) {
                info!(badge.id = %badge.id, badge.name = %badge.name, "Badge earned");
                let record = EarnedBadge {
                    badge_id: badge.id.clone(),
                    earned_at,
                };
                self.earned_badges.push(record.clone());
                granted.push(record);
            }
        }
        granted
    }

    /// Newly earnable badges for the current snapshot without granting them
    #[must_use]
    pub fn pending_badges(&self, context: &AchievementContext<'_>) -> Vec<Badge> {
        context.evaluator.evaluate(
            &self.meals,
            self.streak(context.today),
            context.calorie_goal,
            &self.earned_ids(),
            context.catalog,
        )
    }

    /// Log a meal, recompute the streak, and grant whatever it unlocked
    ///
    /// # Errors
    ///
    /// Returns `ResourceAlreadyExists` if the meal id is already logged; nothing
    /// is granted in that case
    pub fn record_meal(
        &mut self,
        meal: MealEvent,
        context: &AchievementContext<'_>,
    ) -> AppResult<MealLogOutcome> {
        self.add_meal(meal)?;
        let streak = self.streak(context.today);
        let new_badges = self.pending_badges(context);
        self.grant(&new_badges, context.now);

        Ok(MealLogOutcome { streak, new_badges })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::intelligence::AchievementConfig;
    use crate::intelligence::badge_catalog::default_catalog;
    use mealtrack_core::errors::ErrorCode;
    use mealtrack_core::models::{FoodLine, MealSlot};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn meal(d: u32, calories: f64) -> MealEvent {
        MealEvent::new(
            MealSlot::Dinner,
            vec![FoodLine {
                name: "Pasta".to_owned(),
                calories,
                protein_g: 20.0,
                carbs_g: 80.0,
                fat_g: 15.0,
                portion: "1 plate".to_owned(),
                quantity: 1.0,
            }],
            day(d).and_hms_opt(19, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_delete_unknown_meal_is_not_found() {
        let mut diary = Diary::new();
        let err = diary.delete_meal("missing").unwrap_err();
        assert_eq!(err.code, ErrorCode::ResourceNotFound);
    }

    #[test]
    fn test_duplicate_meal_id_rejected() {
        let mut diary = Diary::new();
        let first = meal(1, 500.0);
        diary.add_meal(first.clone()).unwrap();
        let err = diary.add_meal(first).unwrap_err();
        assert_eq!(err.code, ErrorCode::ResourceAlreadyExists);
    }

    #[test]
    fn test_replace_meal_swaps_event() {
        let mut diary = Diary::new();
        let original = meal(1, 500.0);
        let id = original.id.clone();
        diary.add_meal(original).unwrap();

        let previous = diary.replace_meal(&id, meal(1, 650.0)).unwrap();
        assert_eq!(previous.id, id);
        assert_eq!(diary.meals().len(), 1);
        assert!((diary.meals()[0].totals().calories - 650.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_record_meal_grants_first_meal_once() {
        let evaluator = AchievementEvaluator::with_config(AchievementConfig::default());
        let catalog = default_catalog();
        let context = AchievementContext {
            today: day(1),
            now: Utc::now(),
            calorie_goal: 2000.0,
            catalog: &catalog,
            evaluator: &evaluator,
        };

        let mut diary = Diary::new();
        let outcome = diary.record_meal(meal(1, 500.0), &context).unwrap();
        assert_eq!(outcome.streak, 1);
        assert!(outcome
            .new_badges
            .iter()
            .any(|b| b.id.as_str() == "FIRST_MEAL"));

        let second = diary.record_meal(meal(1, 300.0), &context).unwrap();
        assert!(second.new_badges.is_empty());
        assert_eq!(diary.earned_badges().len(), outcome.new_badges.len());
    }

    #[test]
    fn test_grant_skips_already_earned() {
        let mut diary = Diary::new();
        let catalog = default_catalog();
        let now = Utc::now();

        assert_eq!(diary.grant(&catalog[..2], now).len(), 2);
        assert_eq!(diary.grant(&catalog[..3], now).len(), 1);
        assert_eq!(diary.earned_ids().len(), 3);
    }
}

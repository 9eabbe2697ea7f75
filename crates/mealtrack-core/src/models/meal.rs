// ABOUTME: Meal logging models for food intake tracking
// ABOUTME: MealEvent, MealSlot, FoodLine, LoggingMethod, and MacroTotals definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealtrack Contributors

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use uuid::Uuid;

/// Slot of the day a meal was eaten in
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MealSlot {
    /// Breakfast meal
    Breakfast,
    /// Lunch meal
    Lunch,
    /// Dinner meal
    Dinner,
    /// Snack between meals
    Snack,
}

/// How the meal was entered
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum LoggingMethod {
    /// Typed in or picked from search results
    #[default]
    Manual,
    /// Recognized from a photo
    Photo,
    /// Dictated by voice
    Voice,
    /// Added from a saved recipe
    Recipe,
}

/// Calorie and macronutrient amounts
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct MacroTotals {
    /// Energy in kcal
    pub calories: f64,
    /// Protein in grams
    pub protein_g: f64,
    /// Carbohydrates in grams
    pub carbs_g: f64,
    /// Fat in grams
    pub fat_g: f64,
}

impl MacroTotals {
    /// Scale every amount by `factor`
    #[must_use]
    pub fn scaled(self, factor: f64) -> Self {
        Self {
            calories: self.calories * factor,
            protein_g: self.protein_g * factor,
            carbs_g: self.carbs_g * factor,
            fat_g: self.fat_g * factor,
        }
    }
}

impl Add for MacroTotals {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            calories: self.calories + rhs.calories,
            protein_g: self.protein_g + rhs.protein_g,
            carbs_g: self.carbs_g + rhs.carbs_g,
            fat_g: self.fat_g + rhs.fat_g,
        }
    }
}

impl AddAssign for MacroTotals {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for MacroTotals {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

/// One food within a meal, with nutrition per portion
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FoodLine {
    /// Food name
    pub name: String,
    /// Calories per portion
    pub calories: f64,
    /// Protein per portion (grams)
    pub protein_g: f64,
    /// Carbohydrates per portion (grams)
    pub carbs_g: f64,
    /// Fat per portion (grams)
    pub fat_g: f64,
    /// Portion label shown to the user ("1 cup", "100 g")
    #[serde(default)]
    pub portion: String,
    /// Number of portions eaten
    #[serde(default = "default_quantity")]
    pub quantity: f64,
}

const fn default_quantity() -> f64 {
    1.0
}

impl FoodLine {
    /// Nutrition for the eaten quantity
    #[must_use]
    pub fn totals(&self) -> MacroTotals {
        MacroTotals {
            calories: self.calories,
            protein_g: self.protein_g,
            carbs_g: self.carbs_g,
            fat_g: self.fat_g,
        }
        .scaled(self.quantity)
    }
}

/// A logged meal
///
/// Meal events are immutable once created; an edit replaces the whole event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MealEvent {
    /// Unique identifier
    pub id: String,
    /// Meal slot
    pub slot: MealSlot,
    /// Foods eaten
    pub foods: Vec<FoodLine>,
    /// Local wall-clock time the meal was eaten
    pub timestamp: NaiveDateTime,
    /// How the meal was entered
    #[serde(default)]
    pub logging_method: LoggingMethod,
}

impl MealEvent {
    /// Create a manually logged meal with a fresh id
    #[must_use]
    pub fn new(slot: MealSlot, foods: Vec<FoodLine>, timestamp: NaiveDateTime) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            slot,
            foods,
            timestamp,
            logging_method: LoggingMethod::Manual,
        }
    }

    /// Tag the meal with the method it was entered by
    #[must_use]
    pub fn with_logging_method(mut self, method: LoggingMethod) -> Self {
        self.logging_method = method;
        self
    }

    /// Sum of every food line's macros times its quantity
    #[must_use]
    pub fn totals(&self) -> MacroTotals {
        self.foods.iter().map(FoodLine::totals).sum()
    }

    /// Calendar day the meal belongs to
    #[must_use]
    pub fn local_date(&self) -> NaiveDate {
        self.timestamp.date()
    }
}

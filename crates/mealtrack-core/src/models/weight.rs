// ABOUTME: Body weight log entries keyed by local calendar date
// ABOUTME: WeightEntry value object used for weight trend computation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealtrack Contributors

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A weigh-in on a given day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeightEntry {
    /// Unique identifier
    pub id: String,
    /// Local calendar date of the weigh-in
    pub date: NaiveDate,
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Free-form note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl WeightEntry {
    /// Create an entry with a fresh id
    #[must_use]
    pub fn new(date: NaiveDate, weight_kg: f64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            date,
            weight_kg,
            note: None,
        }
    }

    /// Attach a note
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

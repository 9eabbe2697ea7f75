// ABOUTME: Badge catalog entries and earned-badge records for gamification
// ABOUTME: Badge, BadgeId, BadgeCategory, Requirement, and EarnedBadge definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealtrack Contributors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of a catalog badge
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BadgeId(String);

impl BadgeId {
    /// Wrap a badge identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BadgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BadgeId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Grouping used when displaying badges
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BadgeCategory {
    /// Consecutive logging days
    Streak,
    /// Volume or method of logging
    Logging,
    /// Staying within the calorie goal
    Goal,
    /// Long-term milestones
    Milestone,
}

/// The single condition a badge is unlocked by
///
/// Each variant carries the threshold its counter must reach.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(tag = "kind", content = "threshold", rename_all = "snake_case")]
pub enum Requirement {
    /// Current logging streak in days
    Streak(u32),
    /// Meals logged in total
    TotalLogs(u32),
    /// Meals logged from a photo
    PhotoLogs(u32),
    /// Meals logged by voice
    VoiceLogs(u32),
    /// Distinct days within the calorie goal band
    GoalHits(u32),
    /// Longest run of consecutive goal-hit days
    ConsecutiveGoalHits(u32),
}

impl Requirement {
    /// Value the counter must reach
    #[must_use]
    pub const fn threshold(&self) -> u32 {
        match *self {
            Self::Streak(n)
            | Self::TotalLogs(n)
            | Self::PhotoLogs(n)
            | Self::VoiceLogs(n)
            | Self::GoalHits(n)
            | Self::ConsecutiveGoalHits(n) => n,
        }
    }
}

/// A catalog badge
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Badge {
    /// Stable identifier
    pub id: BadgeId,
    /// Display name
    pub name: String,
    /// What the user did to earn it
    pub description: String,
    /// Icon name for the client
    pub icon: String,
    /// Display grouping
    pub category: BadgeCategory,
    /// Unlock condition
    pub requirement: Requirement,
}

/// A badge the user has earned
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EarnedBadge {
    /// Earned catalog badge
    pub badge_id: BadgeId,
    /// When it was granted
    pub earned_at: DateTime<Utc>,
}

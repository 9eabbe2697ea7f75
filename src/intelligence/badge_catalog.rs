// ABOUTME: Built-in static badge catalog for logging, streak, and goal achievements
// ABOUTME: Reference data shared by every user; earned state lives in the diary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealtrack Contributors

use mealtrack_core::constants::badge_ids;
use mealtrack_core::models::{Badge, BadgeCategory, BadgeId, Requirement};

fn badge(
    id: &str,
    name: &str,
    description: &str,
    icon: &str,
    category: BadgeCategory,
    requirement: Requirement,
) -> Badge {
    Badge {
        id: BadgeId::from(id),
        name: name.to_owned(),
        description: description.to_owned(),
        icon: icon.to_owned(),
        category,
        requirement,
    }
}

/// The badges every user can earn
#[must_use]
pub fn default_catalog() -> Vec<Badge> {
    vec![
        badge(
            badge_ids::FIRST_MEAL,
            "First Bite",
            "Log your first meal",
            "utensils",
            BadgeCategory::Logging,
            Requirement::TotalLogs(1),
        ),
        badge(
            badge_ids::MEALS_10,
            "Getting Started",
            "Log 10 meals",
            "notebook",
            BadgeCategory::Logging,
            Requirement::TotalLogs(10),
        ),
        badge(
            badge_ids::MEALS_50,
            "Habit Builder",
            "Log 50 meals",
            "notebook-pen",
            BadgeCategory::Logging,
            Requirement::TotalLogs(50),
        ),
        badge(
            badge_ids::MEALS_100,
            "Centurion",
            "Log 100 meals",
            "trophy",
            BadgeCategory::Milestone,
            Requirement::TotalLogs(100),
        ),
        badge(
            badge_ids::STREAK_3,
            "On a Roll",
            "Log meals 3 days in a row",
            "flame",
            BadgeCategory::Streak,
            Requirement::Streak(3),
        ),
        badge(
            badge_ids::STREAK_7,
            "Week Warrior",
            "Log meals 7 days in a row",
            "flame",
            BadgeCategory::Streak,
            Requirement::Streak(7),
        ),
        badge(
            badge_ids::STREAK_30,
            "Unstoppable",
            "Log meals 30 days in a row",
            "rocket",
            BadgeCategory::Milestone,
            Requirement::Streak(30),
        ),
        badge(
            badge_ids::PHOTO_FIRST,
            "Snapshot",
            "Log a meal from a photo",
            "camera",
            BadgeCategory::Logging,
            Requirement::PhotoLogs(1),
        ),
        badge(
            badge_ids::PHOTO_10,
            "Food Photographer",
            "Log 10 meals from photos",
            "images",
            BadgeCategory::Logging,
            Requirement::PhotoLogs(10),
        ),
        badge(
            badge_ids::VOICE_FIRST,
            "Say It",
            "Log a meal by voice",
            "mic",
            BadgeCategory::Logging,
            Requirement::VoiceLogs(1),
        ),
        badge(
            badge_ids::VOICE_10,
            "Narrator",
            "Log 10 meals by voice",
            "audio-lines",
            BadgeCategory::Logging,
            Requirement::VoiceLogs(10),
        ),
        badge(
            badge_ids::GOAL_HIT_1,
            "Bullseye",
            "Finish a day within 10% of your calorie goal",
            "target",
            BadgeCategory::Goal,
            Requirement::GoalHits(1),
        ),
        badge(
            badge_ids::GOAL_HIT_10,
            "Sharpshooter",
            "Finish 10 days within 10% of your calorie goal",
            "crosshair",
            BadgeCategory::Goal,
            Requirement::GoalHits(10),
        ),
        badge(
            badge_ids::PERFECT_WEEK,
            "Perfect Week",
            "Hit your calorie goal 7 days in a row",
            "calendar-check",
            BadgeCategory::Goal,
            Requirement::ConsecutiveGoalHits(7),
        ),
        badge(
            badge_ids::PERFECT_MONTH,
            "Perfect Month",
            "Hit your calorie goal 30 days in a row",
            "crown",
            BadgeCategory::Milestone,
            Requirement::ConsecutiveGoalHits(30),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_ids_are_unique() {
        let catalog = default_catalog();
        let ids: HashSet<_> = catalog.iter().map(|b| b.id.clone()).collect();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn test_catalog_thresholds_are_positive() {
        assert!(default_catalog()
            .iter()
            .all(|b| b.requirement.threshold() > 0));
    }
}

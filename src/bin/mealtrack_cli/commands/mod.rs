// ABOUTME: Re-exports command modules for mealtrack-cli
// ABOUTME: Provides access to goals, progress, and badges commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealtrack Contributors

pub mod badges;
pub mod goals;
pub mod progress;

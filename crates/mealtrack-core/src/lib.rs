// ABOUTME: Core types and constants for the mealtrack diet-tracking engine
// ABOUTME: Foundation crate with error handling, nutrition constants, and domain models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealtrack Contributors

#![deny(unsafe_code)]

//! # Mealtrack Core
//!
//! Foundation crate providing shared types and constants for the mealtrack
//! diet-tracking engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Nutrition constants (energy densities, default targets, badge ids)
//! - **models**: Biometric profile, meal events, weight entries, and badges

/// Unified error handling system with standard error codes
pub mod errors;

/// Nutrition and gamification constants organized by domain
pub mod constants;

/// Core data models (`BiometricProfile`, `MealEvent`, `WeightEntry`, `Badge`)
pub mod models;

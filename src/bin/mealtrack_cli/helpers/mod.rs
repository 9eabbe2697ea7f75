// ABOUTME: Re-exports helper modules for mealtrack-cli
// ABOUTME: Provides access to diary file I/O and display formatting utilities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealtrack Contributors

pub mod diary_file;
pub mod display;

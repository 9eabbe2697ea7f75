// ABOUTME: Output formatting helpers for mealtrack-cli
// ABOUTME: Prints command results as pretty JSON on stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealtrack Contributors

use anyhow::Result;
use serde::Serialize;

/// Print a value as pretty JSON
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

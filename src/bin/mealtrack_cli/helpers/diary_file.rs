// ABOUTME: Diary file I/O for mealtrack-cli
// ABOUTME: Loads and saves the JSON form of a diary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealtrack Contributors

use anyhow::{Context, Result};
use mealtrack::diary::Diary;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Read a diary from a JSON file
pub fn load_diary(path: &Path) -> Result<Diary> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read diary {}", path.display()))?;
    let diary = Diary::from_json(&json)
        .with_context(|| format!("Failed to parse diary {}", path.display()))?;
    debug!(
        path = %path.display(),
        meals = diary.meals().len(),
        weights = diary.weights().len(),
        "Loaded diary"
    );
    Ok(diary)
}

/// Write a diary back to its JSON file
pub fn save_diary(path: &Path, diary: &Diary) -> Result<()> {
    fs::write(path, diary.to_json()?)
        .with_context(|| format!("Failed to write diary {}", path.display()))
}

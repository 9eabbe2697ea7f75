// ABOUTME: Mealtrack CLI - command-line front end for goal, progress, and badge evaluation
// ABOUTME: Reads profiles from flags and diaries from JSON files, prints JSON results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealtrack Contributors
//!
//! Usage:
//! ```bash
//! # Daily calorie and macro goals for a profile
//! mealtrack-cli goals --weight-kg 70 --height-cm 175 --age 30 --sex male \
//!     --activity sedentary --goal maintain
//!
//! # Streaks, weekly summary and weight trend for a diary
//! mealtrack-cli progress --diary diary.json --today 2024-01-10
//!
//! # Newly earned badges, saved back into the diary
//! mealtrack-cli badges --diary diary.json --calorie-goal 2009 --save
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use chrono::{Local, NaiveDate, Weekday};
use clap::{Args, Parser, Subcommand};
use mealtrack::intelligence::dates::week_start as start_of_week;
use mealtrack::logging::{init_from_env, LoggingConfig};
use mealtrack::models::{ActivityLevel, BiologicalSex, BiometricProfile, WeightGoal};
use std::path::PathBuf;
use tracing::{debug, Level};

#[derive(Parser)]
#[command(
    name = "mealtrack-cli",
    about = "Mealtrack diet-tracking CLI",
    long_about = "Calculate daily calorie goals, evaluate logging progress, and award achievement badges."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Calculate BMR, TDEE, calorie goal and macro targets
    Goals {
        #[command(flatten)]
        profile: ProfileArgs,
    },

    /// Report streaks, weekly intake and weight trend for a diary
    Progress {
        /// Diary JSON file
        #[arg(long)]
        diary: PathBuf,

        /// Date treated as today (defaults to the local date)
        #[arg(long)]
        today: Option<NaiveDate>,

        /// First day of the summarized week (defaults to the Monday of today's week)
        #[arg(long)]
        week_start: Option<NaiveDate>,

        /// Target weight used for the remaining-to-target figure
        #[arg(long)]
        target_weight_kg: Option<f64>,
    },

    /// Evaluate newly earned badges from the default catalog
    Badges {
        /// Diary JSON file
        #[arg(long)]
        diary: PathBuf,

        /// Daily calorie goal (kcal) used for goal-hit badges
        #[arg(long)]
        calorie_goal: f64,

        /// Date treated as today (defaults to the local date)
        #[arg(long)]
        today: Option<NaiveDate>,

        /// Write newly earned badges back into the diary file
        #[arg(long)]
        save: bool,

        /// Also print progress toward every badge
        #[arg(long)]
        show_progress: bool,
    },
}

/// Biometric profile flags
#[derive(Args)]
struct ProfileArgs {
    /// Body weight (kg)
    #[arg(long)]
    weight_kg: f64,

    /// Height (cm)
    #[arg(long)]
    height_cm: f64,

    /// Age (years)
    #[arg(long)]
    age: u32,

    /// Biological sex: male, female or other
    #[arg(long)]
    sex: BiologicalSex,

    /// Activity level: sedentary, light, moderate, active or very-active
    #[arg(long, default_value = "sedentary")]
    activity: ActivityLevel,

    /// Weight goal: lose, maintain or gain
    #[arg(long, default_value = "maintain")]
    goal: WeightGoal,

    /// Target body weight (kg)
    #[arg(long)]
    target_weight_kg: Option<f64>,
}

impl From<ProfileArgs> for BiometricProfile {
    fn from(args: ProfileArgs) -> Self {
        Self {
            weight_kg: args.weight_kg,
            height_cm: args.height_cm,
            age: args.age,
            sex: args.sex,
            activity_level: args.activity,
            weight_goal: args.goal,
            target_weight_kg: args.target_weight_kg,
        }
    }
}

fn today_or_local(today: Option<NaiveDate>) -> NaiveDate {
    today.unwrap_or_else(|| Local::now().date_naive())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        LoggingConfig::from_env().with_level(Level::DEBUG).init()?;
    } else {
        init_from_env()?;
    }

    debug!("Mealtrack CLI");

    match cli.command {
        Command::Goals { profile } => commands::goals::run(&profile.into())?,
        Command::Progress {
            diary,
            today,
            week_start,
            target_weight_kg,
        } => {
            let today = today_or_local(today);
            commands::progress::run(
                &diary,
                today,
                week_start.unwrap_or_else(|| start_of_week(today, Weekday::Mon)),
                target_weight_kg,
            )?;
        }
        Command::Badges {
            diary,
            calorie_goal,
            today,
            save,
            show_progress,
        } => {
            commands::badges::run(
                &diary,
                &commands::badges::BadgeOptions {
                    calorie_goal,
                    today: today_or_local(today),
                    save,
                    show_progress,
                },
            )?;
        }
    }

    Ok(())
}

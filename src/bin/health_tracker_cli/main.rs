// ABOUTME: Health Tracker CLI - terminal host for the Health Tracker Panel
// ABOUTME: Interactive REPL, batched command runs, and one-shot BMI/calorie/weekly commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Interactive session (default)
//! health-tracker
//!
//! # Run several panel commands in one session
//! health-tracker run "update-metrics 8 10000 7; track-water; compute-bmi 70 1.75"
//!
//! # One-shot calculations
//! health-tracker bmi --weight 70 --height 1.75
//! health-tracker calories --weight 68 --height 1.7 --age 30 --gender male --activity 1.5
//! health-tracker --seed 42 --format json weekly
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use clap::{Parser, Subcommand};
use health_tracker_panel::config::PanelConfig;
use health_tracker_panel::formatters::OutputFormat;
use health_tracker_panel::logging::LoggingConfig;
use health_tracker_panel::metrics::{parse_activity_factor, parse_age, Gender};
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "health-tracker",
    about = "Health Tracker Panel",
    long_about = "Track daily water, steps, and sleep, compute BMI and calories, and generate weekly reports."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Output format (text or json); overrides HEALTH_TRACKER_OUTPUT
    #[arg(long, global = true)]
    format: Option<OutputFormat>,

    /// Seed for reproducible tips, motivations, and weekly reports; overrides HEALTH_TRACKER_SEED
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Read panel commands from stdin until `quit`
    Interactive,

    /// Run `;`-separated panel commands in a single session
    Run {
        /// Commands, e.g. "update-metrics 8 10000 7; check-steps"
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        commands: Vec<String>,
    },

    /// Compute BMI
    Bmi {
        /// Weight in kilograms
        #[arg(long)]
        weight: f64,

        /// Height in meters
        #[arg(long)]
        height: f64,
    },

    /// Estimate daily calories (Mifflin-St Jeor)
    Calories {
        /// Weight in kilograms
        #[arg(long)]
        weight: f64,

        /// Height in meters
        #[arg(long)]
        height: f64,

        /// Age in years
        #[arg(long, value_parser = parse_age)]
        age: Option<f64>,

        /// Gender (male or female)
        #[arg(long)]
        gender: Option<Gender>,

        /// Activity factor or level name (e.g. 1.55 or moderately-active)
        #[arg(long, value_parser = parse_activity_factor)]
        activity: Option<f64>,
    },

    /// Generate a weekly report from a fresh random sample
    Weekly,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;

    let mut config = PanelConfig::from_env()?;
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    if let Some(format) = cli.format {
        config = config.with_output_format(format);
    }
    debug!(format = %config.output_format, "Health tracker CLI configured");

    match cli.command.unwrap_or(Command::Interactive) {
        Command::Interactive => commands::session::interactive(config)?,
        Command::Run { commands: script } => commands::oneshot::run(config, &script)?,
        Command::Bmi { weight, height } => commands::oneshot::bmi(config, weight, height)?,
        Command::Calories {
            weight,
            height,
            age,
            gender,
            activity,
        } => {
            let mut profile = config.calorie_profile;
            if let Some(age) = age {
                profile.age_years = age;
            }
            if let Some(gender) = gender {
                profile = profile.with_gender(gender);
            }
            if let Some(activity) = activity {
                profile = profile.with_activity_factor(activity);
            }
            commands::oneshot::calories(config.with_calorie_profile(profile), weight, height)?;
        }
        Command::Weekly => commands::oneshot::weekly(config)?,
    }

    Ok(())
}

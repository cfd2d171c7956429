// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Non-interactive command runners for health-tracker
// ABOUTME: Batched panel commands plus direct BMI, calorie, and weekly report commands

use crate::helpers::display::{print_error, print_output};
use anyhow::{bail, Result};
use health_tracker_panel::config::PanelConfig;
use health_tracker_panel::panel::{Command, HealthPanel};
use tracing::warn;

/// Execute `;`-separated commands against one panel, printing each result
pub fn run(config: PanelConfig, args: &[String]) -> Result<()> {
    let format = config.output_format;
    let mut panel = HealthPanel::new(config);
    let script = args.join(" ");
    let mut failures = 0_usize;

    for line in script.split(';').map(str::trim).filter(|line| !line.is_empty()) {
        match line.parse::<Command>() {
            Ok(command) => print_output(&panel.execute(command), format)?,
            Err(error) => {
                warn!(line, error = %error, "Skipping unparseable command");
                print_error(&error, format)?;
                failures += 1;
            }
        }
    }

    if failures > 0 {
        bail!("{failures} command(s) could not be parsed");
    }
    Ok(())
}

/// Compute and print a BMI
pub fn bmi(config: PanelConfig, weight_kg: f64, height_m: f64) -> Result<()> {
    let format = config.output_format;
    let mut panel = HealthPanel::new(config);
    print_output(&panel.execute(Command::compute_bmi(weight_kg, height_m)), format)
}

/// Estimate and print daily calories using the configured profile
pub fn calories(config: PanelConfig, weight_kg: f64, height_m: f64) -> Result<()> {
    let format = config.output_format;
    let mut panel = HealthPanel::new(config);
    print_output(
        &panel.execute(Command::estimate_calories(weight_kg, height_m)),
        format,
    )
}

/// Generate and print one weekly report
pub fn weekly(config: PanelConfig) -> Result<()> {
    let format = config.output_format;
    let mut panel = HealthPanel::new(config);
    print_output(&panel.execute(Command::GenerateWeeklyReport), format)
}

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output helpers for health-tracker
// ABOUTME: Prints formatted command results, errors, and the command reference

use anyhow::Result;
use health_tracker_panel::errors::AppError;
use health_tracker_panel::formatters::{format_error, format_output, OutputFormat};
use health_tracker_panel::panel::CommandOutput;

/// Print a command result on stdout
pub fn print_output(output: &CommandOutput, format: OutputFormat) -> Result<()> {
    let formatted = format_output(output, format)?;
    println!("{}", formatted.data);
    Ok(())
}

/// Print an error on stderr
pub fn print_error(error: &AppError, format: OutputFormat) -> Result<()> {
    let formatted = format_error(error, format)?;
    eprintln!("{}", formatted.data);
    Ok(())
}

/// Greeting shown when an interactive session starts
pub fn print_welcome() {
    println!("Health Tracker Panel");
    println!("{}", "=".repeat(40));
    println!("Type `help` for commands, `quit` to leave.\n");
}

/// Command reference for the interactive session
pub fn print_help() {
    println!("\nCOMMANDS:");
    println!("  update-metrics <water> <steps> <sleep>   Replace today's metrics");
    println!("  track-water | check-steps | evaluate-sleep");
    println!("  compute-bmi [<weight_kg> <height_m>]     Uses stored values when omitted");
    println!("  estimate-calories [<weight_kg> <height_m>]");
    println!("  generate-weekly-report                   New random week each time");
    println!("  add-random-tip | remove-last-tip");
    println!("  cycle-background | toggle-emphasis | change-motivation");
    println!("  snapshot                                 Show the whole panel");
    println!("  reset-all [yes]                          Asks first unless `yes` is given");
    println!("  help | quit\n");
}

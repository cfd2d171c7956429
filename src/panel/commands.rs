// ABOUTME: Command table for the Health Tracker Panel
// ABOUTME: Typed commands plus a whitespace-separated text syntax for terminal hosts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Panel commands
//!
//! Text syntax is `<command-name> [args...]`, e.g. `update-metrics 8 10000 7`
//! or `compute-bmi 70 1.75`. Missing numeric arguments are passed through as
//! empty strings and coerce to zero like any other bad input. Unknown command
//! names are the only parse failure.

use health_core::errors::{AppError, AppResult};
use std::str::FromStr;

/// Raw weight and height fields, as typed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodyInputs {
    /// Weight field (kg)
    pub weight: String,
    /// Height field (m)
    pub height: String,
}

impl BodyInputs {
    /// Wrap raw weight and height strings
    #[must_use]
    pub fn new(weight: impl Into<String>, height: impl Into<String>) -> Self {
        Self {
            weight: weight.into(),
            height: height.into(),
        }
    }

    /// Build from numeric values
    #[must_use]
    pub fn from_values(weight_kg: f64, height_m: f64) -> Self {
        Self::new(weight_kg.to_string(), height_m.to_string())
    }
}

/// A command a host issues to the panel
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replace water, steps, and sleep from raw input fields
    UpdateMetrics {
        /// Water field
        water: String,
        /// Steps field
        steps: String,
        /// Sleep field
        sleep: String,
    },
    /// Assess the stored water count
    TrackWater,
    /// Assess the stored step count
    CheckSteps,
    /// Assess the stored sleep hours
    EvaluateSleep,
    /// Compute BMI; `None` uses the stored weight and height
    ComputeBmi {
        /// New weight/height fields, if any
        inputs: Option<BodyInputs>,
    },
    /// Estimate daily calories; `None` uses the stored weight and height
    EstimateCalories {
        /// New weight/height fields, if any
        inputs: Option<BodyInputs>,
    },
    /// Draw a fresh weekly sample and report on it
    GenerateWeeklyReport,
    /// Append a random tip
    AddRandomTip,
    /// Remove the last tip
    RemoveLastTip,
    /// Move to the next background color
    CycleBackground,
    /// Flip banner emphasis
    ToggleEmphasis,
    /// Replace the banner text with a random motivation
    ChangeMotivation,
    /// Report the full panel state without changing it
    Snapshot,
    /// Restore every default; ignored unless confirmed
    ResetAll {
        /// Whether the user confirmed the reset
        confirmed: bool,
    },
}

/// Every command name accepted by the text syntax, in table order
pub const COMMAND_NAMES: [&str; 14] = [
    "update-metrics",
    "track-water",
    "check-steps",
    "evaluate-sleep",
    "compute-bmi",
    "estimate-calories",
    "generate-weekly-report",
    "add-random-tip",
    "remove-last-tip",
    "cycle-background",
    "toggle-emphasis",
    "change-motivation",
    "snapshot",
    "reset-all",
];

impl Command {
    /// Update metrics from raw strings
    #[must_use]
    pub fn update_metrics(
        water: impl Into<String>,
        steps: impl Into<String>,
        sleep: impl Into<String>,
    ) -> Self {
        Self::UpdateMetrics {
            water: water.into(),
            steps: steps.into(),
            sleep: sleep.into(),
        }
    }

    /// Compute BMI for explicit values
    #[must_use]
    pub fn compute_bmi(weight_kg: f64, height_m: f64) -> Self {
        Self::ComputeBmi {
            inputs: Some(BodyInputs::from_values(weight_kg, height_m)),
        }
    }

    /// Estimate calories for explicit values
    #[must_use]
    pub fn estimate_calories(weight_kg: f64, height_m: f64) -> Self {
        Self::EstimateCalories {
            inputs: Some(BodyInputs::from_values(weight_kg, height_m)),
        }
    }

    /// Canonical command name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::UpdateMetrics { .. } => "update-metrics",
            Self::TrackWater => "track-water",
            Self::CheckSteps => "check-steps",
            Self::EvaluateSleep => "evaluate-sleep",
            Self::ComputeBmi { .. } => "compute-bmi",
            Self::EstimateCalories { .. } => "estimate-calories",
            Self::GenerateWeeklyReport => "generate-weekly-report",
            Self::AddRandomTip => "add-random-tip",
            Self::RemoveLastTip => "remove-last-tip",
            Self::CycleBackground => "cycle-background",
            Self::ToggleEmphasis => "toggle-emphasis",
            Self::ChangeMotivation => "change-motivation",
            Self::Snapshot => "snapshot",
            Self::ResetAll { .. } => "reset-all",
        }
    }
}

fn body_inputs(args: &[&str]) -> Option<BodyInputs> {
    if args.is_empty() {
        return None;
    }
    let field = |index: usize| args.get(index).copied().unwrap_or_default();
    Some(BodyInputs::new(field(0), field(1)))
}

fn is_confirmation(arg: &str) -> bool {
    matches!(
        arg.to_lowercase().as_str(),
        "yes" | "y" | "--yes" | "-y" | "true" | "confirm"
    )
}

impl FromStr for Command {
    type Err = AppError;

    fn from_str(line: &str) -> AppResult<Self> {
        let mut tokens = line.split_whitespace();
        let name = tokens
            .next()
            .ok_or_else(|| AppError::invalid_input("empty command"))?;
        let args: Vec<&str> = tokens.collect();
        let arg = |index: usize| args.get(index).copied().unwrap_or_default();

        let command = match name.to_lowercase().as_str() {
            "update-metrics" => Self::update_metrics(arg(0), arg(1), arg(2)),
            "track-water" => Self::TrackWater,
            "check-steps" => Self::CheckSteps,
            "evaluate-sleep" => Self::EvaluateSleep,
            "compute-bmi" => Self::ComputeBmi {
                inputs: body_inputs(&args),
            },
            "estimate-calories" => Self::EstimateCalories {
                inputs: body_inputs(&args),
            },
            "generate-weekly-report" => Self::GenerateWeeklyReport,
            "add-random-tip" => Self::AddRandomTip,
            "remove-last-tip" => Self::RemoveLastTip,
            "cycle-background" => Self::CycleBackground,
            "toggle-emphasis" => Self::ToggleEmphasis,
            "change-motivation" => Self::ChangeMotivation,
            "snapshot" => Self::Snapshot,
            "reset-all" => Self::ResetAll {
                confirmed: args.first().is_some_and(|a| is_confirmation(a)),
            },
            other => {
                return Err(AppError::invalid_input(format!("unknown command '{other}'"))
                    .with_details(serde_json::json!({ "known_commands": COMMAND_NAMES })));
            }
        };
        Ok(command)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_missing_metric_args_become_empty_fields() {
        let command: Command = "update-metrics 8".parse().unwrap();
        assert_eq!(command, Command::update_metrics("8", "", ""));
    }

    #[test]
    fn test_bmi_without_args_uses_stored_inputs() {
        let command: Command = "compute-bmi".parse().unwrap();
        assert_eq!(command, Command::ComputeBmi { inputs: None });
    }

    #[test]
    fn test_reset_requires_explicit_confirmation() {
        assert_eq!(
            "reset-all".parse::<Command>().unwrap(),
            Command::ResetAll { confirmed: false }
        );
        assert_eq!(
            "reset-all YES".parse::<Command>().unwrap(),
            Command::ResetAll { confirmed: true }
        );
    }

    #[test]
    fn test_every_listed_name_parses() {
        for name in COMMAND_NAMES {
            let command: Command = name.parse().unwrap();
            assert_eq!(command.name(), name);
        }
    }

    #[test]
    fn test_unknown_command_is_rejected() {
        assert!("dance".parse::<Command>().is_err());
        assert!("   ".parse::<Command>().is_err());
    }
}

// ABOUTME: Typed results returned by panel commands
// ABOUTME: Serializable per-command outputs and the full panel snapshot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::presentation::{OutputPanels, ProgressIndicator, TipList};
use chrono::{DateTime, Utc};
use health_core::models::{BodyMeasurements, HealthRecord, WeeklySample};
use health_metrics::assessments::{SleepQuality, StepsStatus, WaterStatus};
use health_metrics::{Assessment, BmiResult, CalorieProfile, WeeklyReport};
use serde::Serialize;

/// Everything a host needs to redraw the panel
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelSnapshot {
    /// Current health record
    pub record: HealthRecord,
    /// Current weight and height inputs
    pub body: BodyMeasurements,
    /// Water, steps, and sleep progress bars
    pub progress: [ProgressIndicator; 3],
    /// Tip list in display order
    pub tips: TipList,
    /// Selected background index
    pub background_index: usize,
    /// Selected background color
    pub background_color: &'static str,
    /// Motivational banner text
    pub motivation: String,
    /// Whether the banner is emphasized
    pub emphasized: bool,
    /// Output regions
    pub panels: OutputPanels,
}

/// Result of one panel command
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "command", rename_all = "kebab-case")]
pub enum CommandOutput {
    /// New record after `update-metrics`
    MetricsUpdated {
        /// Stored record
        record: HealthRecord,
        /// Progress bars for the record
        progress: [ProgressIndicator; 3],
        /// One-line summary written to the status panel
        summary: String,
    },
    /// Water assessment
    WaterAssessed(Assessment<WaterStatus>),
    /// Steps assessment
    StepsAssessed(Assessment<StepsStatus>),
    /// Sleep assessment
    SleepAssessed(Assessment<SleepQuality>),
    /// Valid BMI
    BmiComputed {
        /// Weight used (kg)
        weight_kg: f64,
        /// Height used (m)
        height_m: f64,
        /// Full-precision result
        result: BmiResult,
        /// Rounded display line
        display: String,
    },
    /// Weight or height was not positive
    BmiInvalid {
        /// Weight used (kg)
        weight_kg: f64,
        /// Height used (m)
        height_m: f64,
        /// Explanation shown to the user
        message: String,
    },
    /// Daily calorie estimate
    CaloriesEstimated {
        /// Weight used (kg)
        weight_kg: f64,
        /// Height used (m)
        height_m: f64,
        /// Age, gender, and activity factor used
        profile: CalorieProfile,
        /// Estimated kcal per day
        kcal: i64,
    },
    /// Fresh weekly sample and its report
    WeeklyReportGenerated {
        /// When the sample was drawn
        generated_at: DateTime<Utc>,
        /// The sample the report was computed from
        sample: WeeklySample,
        /// Report over the sample
        report: WeeklyReport,
    },
    /// Tip appended
    TipAdded {
        /// The appended tip
        tip: String,
        /// List length after the append
        total: usize,
    },
    /// Remove-last-tip outcome
    TipRemoved {
        /// Whether a tip was removed
        removed: bool,
        /// List length after the call
        remaining: usize,
    },
    /// New background selection
    BackgroundCycled {
        /// Palette index
        index: usize,
        /// Color at the index
        color: &'static str,
    },
    /// New emphasis flag
    EmphasisToggled {
        /// Whether the banner is now emphasized
        emphasized: bool,
    },
    /// New banner text
    MotivationChanged {
        /// Banner text
        text: String,
    },
    /// Current state, unchanged
    Snapshot(PanelSnapshot),
    /// State after a confirmed reset
    Reset(PanelSnapshot),
    /// Reset was requested without confirmation; nothing changed
    ResetDeclined,
}

impl CommandOutput {
    /// The message written to an output panel, if this result writes one
    #[must_use]
    pub fn panel_message(&self) -> Option<String> {
        match self {
            Self::MetricsUpdated { summary, .. } => Some(summary.clone()),
            Self::WaterAssessed(assessment) => Some(assessment.message.clone()),
            Self::StepsAssessed(assessment) => Some(assessment.message.clone()),
            Self::SleepAssessed(assessment) => Some(assessment.message.clone()),
            Self::BmiComputed { display, .. } => Some(display.clone()),
            Self::BmiInvalid { message, .. } => Some(message.clone()),
            Self::CaloriesEstimated { kcal, .. } => {
                Some(format!("Estimated Daily Calories: {kcal} kcal"))
            }
            Self::WeeklyReportGenerated { report, .. } => Some(format!(
                "Weekly Report: {} total steps, {} average, {} good sleep days",
                report.total_steps, report.average_steps, report.good_sleep_days
            )),
            _ => None,
        }
    }
}

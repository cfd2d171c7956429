// ABOUTME: Plain-text rendering of panel command results for terminal hosts
// ABOUTME: Draws progress bars, weekly report tables, tip lists, and snapshots
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::panel::{CommandOutput, PanelSnapshot};
use crate::presentation::ProgressIndicator;
use health_core::models::WeeklySample;
use health_metrics::WeeklyReport;
use std::fmt::Write;

const BAR_WIDTH: usize = 20;
const MET: &str = "\u{2713}";
const MISSED: &str = "\u{2717}";

/// Render any command result as text
#[must_use]
pub fn render_output(output: &CommandOutput) -> String {
    match output {
        CommandOutput::MetricsUpdated {
            progress, summary, ..
        } => {
            let mut out = summary.clone();
            for indicator in progress {
                out.push('\n');
                out.push_str(&render_progress(indicator));
            }
            out
        }
        CommandOutput::WaterAssessed(assessment) => assessment.message.clone(),
        CommandOutput::StepsAssessed(assessment) => assessment.message.clone(),
        CommandOutput::SleepAssessed(assessment) => assessment.message.clone(),
        CommandOutput::BmiComputed { display, .. } => display.clone(),
        CommandOutput::BmiInvalid { message, .. } => message.clone(),
        CommandOutput::CaloriesEstimated {
            profile, kcal, ..
        } => format!(
            "Estimated Daily Calories: {kcal} kcal (age {}, {}, activity x{})",
            profile.age_years, profile.gender, profile.activity_factor
        ),
        CommandOutput::WeeklyReportGenerated { sample, report, .. } => {
            render_weekly_report(sample, report)
        }
        CommandOutput::TipAdded { tip, total } => format!("Added tip #{total}: {tip}"),
        CommandOutput::TipRemoved { removed: true, remaining } => {
            format!("Removed last tip ({remaining} left)")
        }
        CommandOutput::TipRemoved { removed: false, .. } => "No tips to remove".to_owned(),
        CommandOutput::BackgroundCycled { index, color } => {
            format!("Background #{index}: {color}")
        }
        CommandOutput::EmphasisToggled { emphasized } => {
            format!("Emphasis {}", if *emphasized { "on" } else { "off" })
        }
        CommandOutput::MotivationChanged { text } => text.clone(),
        CommandOutput::Snapshot(snapshot) => render_snapshot(snapshot),
        CommandOutput::Reset(snapshot) => {
            format!("All data reset to defaults\n{}", render_snapshot(snapshot))
        }
        CommandOutput::ResetDeclined => "Reset cancelled".to_owned(),
    }
}

/// Render one progress bar, e.g. `Water  [###############-----]  75%  6/8 cups`
#[must_use]
pub fn render_progress(indicator: &ProgressIndicator) -> String {
    let filled = filled_cells(indicator.percent);
    format!(
        "{:<6} [{}{}] {:>3.0}%  {}",
        indicator.metric.name(),
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled),
        indicator.percent,
        indicator.label
    )
}

fn filled_cells(percent: f64) -> usize {
    // percent is clamped to [0, 100] by ProgressIndicator
    ((percent / 100.0) * BAR_WIDTH as f64).round().clamp(0.0, BAR_WIDTH as f64) as usize
}

const fn mark(met: bool) -> &'static str {
    if met {
        MET
    } else {
        MISSED
    }
}

/// Render the weekly report as a per-day table plus totals
#[must_use]
pub fn render_weekly_report(sample: &WeeklySample, report: &WeeklyReport) -> String {
    let mut out = String::from("Weekly Health Report\n");
    for (day, goals) in sample.days().zip(&report.daily_goals) {
        // Writing to a String cannot fail
        let _ = writeln!(
            out,
            "Day {}: water {} {} | steps {} {} | sleep {} {}",
            day.day,
            day.water,
            mark(goals.water_met),
            day.steps,
            mark(goals.steps_met),
            day.sleep,
            mark(goals.sleep_met),
        );
    }
    let _ = writeln!(out, "Total steps: {}", report.total_steps);
    let _ = writeln!(out, "Average steps: {}", report.average_steps);
    let _ = write!(out, "Good sleep days: {}/{}", report.good_sleep_days, report.daily_goals.len());
    out
}

/// Render the full panel state
#[must_use]
pub fn render_snapshot(snapshot: &PanelSnapshot) -> String {
    let mut out = snapshot.record.summary();
    for indicator in &snapshot.progress {
        let _ = write!(out, "\n{}", render_progress(indicator));
    }
    let _ = write!(
        out,
        "\nBody: {} kg, {} m",
        snapshot.body.weight_kg, snapshot.body.height_m
    );
    let _ = write!(
        out,
        "\nBackground: #{} {}",
        snapshot.background_index, snapshot.background_color
    );
    let banner = if snapshot.emphasized {
        format!("**{}**", snapshot.motivation)
    } else {
        snapshot.motivation.clone()
    };
    let _ = write!(out, "\nMotivation: {banner}");
    out.push_str("\nTips:");
    if snapshot.tips.is_empty() {
        out.push_str(" (none)");
    }
    for (position, tip) in snapshot.tips.entries().iter().enumerate() {
        let _ = write!(out, "\n  {}. {tip}", position + 1);
    }
    out
}

// ABOUTME: Progress indicators rendered from the daily health record
// ABOUTME: Percentages are capped at 100 and use display-only goals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use health_core::constants::progress;
use health_core::models::HealthRecord;
use serde::Serialize;

/// Which metric a progress indicator tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressMetric {
    /// Cups of water
    Water,
    /// Steps
    Steps,
    /// Hours of sleep
    Sleep,
}

impl ProgressMetric {
    /// Display goal for this metric
    #[must_use]
    pub const fn goal(&self) -> u32 {
        match self {
            Self::Water => progress::WATER_GOAL,
            Self::Steps => progress::STEPS_GOAL,
            Self::Sleep => progress::SLEEP_GOAL,
        }
    }

    /// Unit shown in the indicator label
    #[must_use]
    pub const fn unit(&self) -> &'static str {
        match self {
            Self::Water => "cups",
            Self::Steps => "steps",
            Self::Sleep => "hours",
        }
    }

    /// Display name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Water => "Water",
            Self::Steps => "Steps",
            Self::Sleep => "Sleep",
        }
    }
}

/// A single progress bar
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressIndicator {
    /// Tracked metric
    pub metric: ProgressMetric,
    /// Current value
    pub value: u32,
    /// Display goal
    pub goal: u32,
    /// Fill percentage in `[0, 100]`
    pub percent: f64,
    /// Label such as `6/8 cups`
    pub label: String,
}

impl ProgressIndicator {
    /// Build an indicator for one metric value
    #[must_use]
    pub fn new(metric: ProgressMetric, value: u32) -> Self {
        let goal = metric.goal();
        let percent = (f64::from(value) / f64::from(goal) * 100.0).min(progress::MAX_PERCENT);
        Self {
            metric,
            value,
            goal,
            percent,
            label: format!("{value}/{goal} {}", metric.unit()),
        }
    }
}

/// Water, steps, and sleep indicators for a record, in that order
#[must_use]
pub fn progress_for(record: &HealthRecord) -> [ProgressIndicator; 3] {
    [
        ProgressIndicator::new(ProgressMetric::Water, record.daily_water_cups()),
        ProgressIndicator::new(ProgressMetric::Steps, record.daily_steps_count()),
        ProgressIndicator::new(ProgressMetric::Sleep, record.sleep_hours()),
    ]
}

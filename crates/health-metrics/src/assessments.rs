// ABOUTME: Threshold assessments for daily water, steps, and sleep
// ABOUTME: Maps a single metric value to a category and a display message
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Daily metric assessments
//!
//! Each assessment is a pure function of one value. Water and steps use the
//! same goals as the healthy flag; sleep uses a closed 7-9 hour "good" band so
//! that oversleeping is reported separately.

use health_core::constants::{goals, sleep_bands};
use serde::Serialize;
use std::fmt;

/// Category produced by an assessment
pub trait AssessmentCategory: Copy + fmt::Debug {
    /// Human-readable category label
    fn label(&self) -> &'static str;

    /// Whether the category represents a met goal
    fn is_positive(&self) -> bool;
}

/// Result of assessing one metric value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assessment<C> {
    /// Category the value falls into
    pub category: C,
    /// The assessed value
    pub value: u32,
    /// Display message carrying the value
    pub message: String,
}

impl<C: AssessmentCategory> Assessment<C> {
    /// Category label
    #[must_use]
    pub fn label(&self) -> &'static str {
        self.category.label()
    }

    /// Whether the assessed goal is met
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.category.is_positive()
    }
}

/// Hydration categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WaterStatus {
    /// At or above the daily water goal
    Hydrated,
    /// Below the daily water goal
    NeedsMoreWater,
}

impl AssessmentCategory for WaterStatus {
    fn label(&self) -> &'static str {
        match self {
            Self::Hydrated => "hydrated",
            Self::NeedsMoreWater => "needs more water",
        }
    }

    fn is_positive(&self) -> bool {
        matches!(self, Self::Hydrated)
    }
}

/// Step goal categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepsStatus {
    /// At or above the daily step goal
    GoalAchieved,
    /// Below the daily step goal
    KeepWalking,
}

impl AssessmentCategory for StepsStatus {
    fn label(&self) -> &'static str {
        match self {
            Self::GoalAchieved => "goal achieved",
            Self::KeepWalking => "keep walking",
        }
    }

    fn is_positive(&self) -> bool {
        matches!(self, Self::GoalAchieved)
    }
}

/// Sleep duration categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SleepQuality {
    /// Within the 7-9 hour band
    Good,
    /// Fewer than 7 hours
    Insufficient,
    /// More than 9 hours
    Excessive,
}

impl AssessmentCategory for SleepQuality {
    fn label(&self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Insufficient => "insufficient",
            Self::Excessive => "excessive",
        }
    }

    fn is_positive(&self) -> bool {
        matches!(self, Self::Good)
    }
}

/// Assess today's water intake
#[must_use]
pub fn describe_water(cups: u32) -> Assessment<WaterStatus> {
    if cups >= goals::WATER_CUPS {
        Assessment {
            category: WaterStatus::Hydrated,
            value: cups,
            message: format!("Hydrated ({cups} cups)"),
        }
    } else {
        Assessment {
            category: WaterStatus::NeedsMoreWater,
            value: cups,
            message: format!("Drink more water ({cups}/{} cups)", goals::WATER_CUPS),
        }
    }
}

/// Assess today's step count
#[must_use]
pub fn describe_steps(steps: u32) -> Assessment<StepsStatus> {
    if steps >= goals::STEPS {
        Assessment {
            category: StepsStatus::GoalAchieved,
            value: steps,
            message: format!("Step goal achieved ({steps} steps)"),
        }
    } else {
        Assessment {
            category: StepsStatus::KeepWalking,
            value: steps,
            message: format!("Keep walking! ({steps}/{} steps)", goals::STEPS),
        }
    }
}

/// Assess last night's sleep
#[must_use]
pub fn describe_sleep(hours: u32) -> Assessment<SleepQuality> {
    let (category, message) = if (sleep_bands::GOOD_MIN_HOURS..=sleep_bands::GOOD_MAX_HOURS)
        .contains(&hours)
    {
        (SleepQuality::Good, format!("Good sleep ({hours} hours)"))
    } else if hours < sleep_bands::GOOD_MIN_HOURS {
        (
            SleepQuality::Insufficient,
            format!(
                "Not enough rest! ({hours}/{} hours)",
                sleep_bands::GOOD_MIN_HOURS
            ),
        )
    } else {
        (SleepQuality::Excessive, format!("Too much sleep ({hours} hours)"))
    };

    Assessment {
        category,
        value: hours,
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_water_boundary() {
        assert_eq!(describe_water(7).category, WaterStatus::NeedsMoreWater);
        assert_eq!(describe_water(8).category, WaterStatus::Hydrated);
        assert_eq!(describe_water(7).message, "Drink more water (7/8 cups)");
    }

    #[test]
    fn test_sleep_bands_are_closed() {
        assert_eq!(describe_sleep(6).category, SleepQuality::Insufficient);
        assert_eq!(describe_sleep(7).category, SleepQuality::Good);
        assert_eq!(describe_sleep(9).category, SleepQuality::Good);
        assert_eq!(describe_sleep(10).category, SleepQuality::Excessive);
    }
}

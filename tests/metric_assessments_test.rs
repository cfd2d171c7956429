// ABOUTME: Integration tests for water, steps, and sleep assessments
// ABOUTME: Validates category thresholds and display messages at each boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use health_tracker_panel::metrics::assessments::{SleepQuality, StepsStatus, WaterStatus};
use health_tracker_panel::metrics::{describe_sleep, describe_steps, describe_water};

#[test]
fn test_water_threshold() {
    let below = describe_water(7);
    assert_eq!(below.category, WaterStatus::NeedsMoreWater);
    assert_eq!(below.message, "Drink more water (7/8 cups)");
    assert!(!below.is_positive());

    let at = describe_water(8);
    assert_eq!(at.category, WaterStatus::Hydrated);
    assert_eq!(at.message, "Hydrated (8 cups)");
    assert_eq!(at.label(), "hydrated");

    assert_eq!(describe_water(9).category, WaterStatus::Hydrated);
}

#[test]
fn test_steps_threshold() {
    let below = describe_steps(9_999);
    assert_eq!(below.category, StepsStatus::KeepWalking);
    assert_eq!(below.message, "Keep walking! (9999/10000 steps)");

    let at = describe_steps(10_000);
    assert_eq!(at.category, StepsStatus::GoalAchieved);
    assert_eq!(at.message, "Step goal achieved (10000 steps)");

    assert_eq!(describe_steps(10_001).category, StepsStatus::GoalAchieved);
}

#[test]
fn test_sleep_bands() {
    let cases = [
        (0, SleepQuality::Insufficient),
        (6, SleepQuality::Insufficient),
        (7, SleepQuality::Good),
        (8, SleepQuality::Good),
        (9, SleepQuality::Good),
        (10, SleepQuality::Excessive),
    ];
    for (hours, expected) in cases {
        assert_eq!(describe_sleep(hours).category, expected, "hours={hours}");
    }
}

#[test]
fn test_sleep_messages_carry_value() {
    assert_eq!(describe_sleep(5).message, "Not enough rest! (5/7 hours)");
    assert_eq!(describe_sleep(7).message, "Good sleep (7 hours)");
    assert_eq!(describe_sleep(10).message, "Too much sleep (10 hours)");
}

#[test]
fn test_assessment_serializes_category_name() {
    let json = serde_json::to_value(describe_water(6)).unwrap();
    assert_eq!(json["category"], "needs_more_water");
    assert_eq!(json["value"], 6);
}

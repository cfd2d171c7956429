// ABOUTME: Integration tests for weekly sample generation and report synthesis
// ABOUTME: Validates ranges, seeded reproducibility, totals, and per-day goal checks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use health_tracker_panel::metrics::{generate_weekly_sample, weekly_report};
use health_tracker_panel::models::WeeklySample;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[test]
fn test_flat_week_totals() {
    let sample = WeeklySample::new([6; 7], [5_000; 7], [7; 7]);
    let report = weekly_report(&sample);
    assert_eq!(report.total_steps, 35_000);
    assert_eq!(report.average_steps, 5_000);
    assert_eq!(report.good_sleep_days, 7);
    assert_eq!(report.daily_water, [6; 7]);
}

#[test]
fn test_per_day_goals_are_independent() {
    let sample = WeeklySample::new(
        [8, 4, 8, 4, 8, 4, 8],
        [10_000, 10_000, 4_000, 9_999, 10_000, 5_000, 10_001],
        [7, 7, 7, 5, 6, 8, 8],
    );
    let report = weekly_report(&sample);

    assert_eq!(report.daily_goals.len(), 7);
    let first = report.daily_goals[0];
    assert_eq!(first.day, 1);
    assert!(first.water_met && first.steps_met && first.sleep_met);
    assert!(first.all_met());

    let second = report.daily_goals[1];
    assert!(!second.water_met);
    assert!(second.steps_met);
    assert!(second.sleep_met);

    let fourth = report.daily_goals[3];
    assert!(!fourth.water_met && !fourth.steps_met && !fourth.sleep_met);

    let all_met: Vec<usize> = report
        .daily_goals
        .iter()
        .filter(|d| d.all_met())
        .map(|d| d.day)
        .collect();
    assert_eq!(all_met, vec![1, 7]);
    assert_eq!(report.good_sleep_days, 5);
}

#[test]
fn test_report_is_pure_over_a_captured_sample() {
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    let sample = generate_weekly_sample(&mut rng);
    assert_eq!(weekly_report(&sample), weekly_report(&sample));
}

#[test]
fn test_successive_samples_differ() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let first = generate_weekly_sample(&mut rng);
    let second = generate_weekly_sample(&mut rng);
    assert_ne!(first, second);
}

#[test]
fn test_generated_report_stays_in_bounds() {
    let mut rng = ChaCha8Rng::seed_from_u64(1234);
    for _ in 0..100 {
        let report = weekly_report(&generate_weekly_sample(&mut rng));
        assert!((28_000..=69_993).contains(&report.total_steps));
        assert!((4_000..=9_999).contains(&report.average_steps));
        assert!(report.good_sleep_days <= 7);
        // Steps never reach the goal in a generated week
        assert!(report.daily_goals.iter().all(|d| !d.steps_met));
    }
}

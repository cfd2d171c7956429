// ABOUTME: Weekly health report generation from a seven-day sample
// ABOUTME: Random sample drawing with an injected RNG plus deterministic report synthesis
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Weekly report
//!
//! Generation and analysis are split so the analysis is deterministic:
//! [`generate_weekly_sample`] draws from whatever RNG the caller passes, and
//! [`weekly_report`] is a pure function of the sample it is given.

use crate::rounding::round_half_up;
use health_core::constants::{goals, weekly};
use health_core::models::WeeklySample;
use rand::Rng;
use serde::Serialize;
use std::array;

/// Goal outcomes for a single day, evaluated independently per metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyGoalCheck {
    /// 1-based day number
    pub day: usize,
    /// Water at or above goal
    pub water_met: bool,
    /// Steps at or above goal
    pub steps_met: bool,
    /// Sleep at or above goal
    pub sleep_met: bool,
}

impl DailyGoalCheck {
    /// All three goals met on this day
    #[must_use]
    pub const fn all_met(&self) -> bool {
        self.water_met && self.steps_met && self.sleep_met
    }
}

/// Structured weekly report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeeklyReport {
    /// Cups of water per day, in day order
    pub daily_water: [u32; weekly::DAYS],
    /// Sum of steps across the week
    pub total_steps: u64,
    /// Mean steps per day, rounded to the nearest integer
    pub average_steps: u64,
    /// Days with at least the goal hours of sleep
    pub good_sleep_days: usize,
    /// Per-day goal outcomes
    pub daily_goals: Vec<DailyGoalCheck>,
}

/// Draw a fresh week of metrics
///
/// Each value is uniform over its inclusive range: water 4-8 cups, steps
/// 4000-9999, sleep 5-8 hours. The three sequences are drawn independently.
pub fn generate_weekly_sample<R: Rng + ?Sized>(rng: &mut R) -> WeeklySample {
    let water = array::from_fn(|_| rng.gen_range(weekly::WATER_MIN..=weekly::WATER_MAX));
    let steps = array::from_fn(|_| rng.gen_range(weekly::STEPS_MIN..=weekly::STEPS_MAX));
    let sleep = array::from_fn(|_| rng.gen_range(weekly::SLEEP_MIN..=weekly::SLEEP_MAX));
    WeeklySample::new(water, steps, sleep)
}

/// Summarize a weekly sample
#[must_use]
pub fn weekly_report(sample: &WeeklySample) -> WeeklyReport {
    let total_steps: u64 = sample.steps.iter().map(|&steps| u64::from(steps)).sum();
    let average_steps = round_half_up(total_steps as f64 / weekly::DAYS as f64) as u64;

    let good_sleep_days = sample
        .sleep
        .iter()
        .filter(|&&hours| hours >= goals::SLEEP_HOURS)
        .count();

    let daily_goals = sample
        .days()
        .map(|day| DailyGoalCheck {
            day: day.day,
            water_met: day.water >= goals::WATER_CUPS,
            steps_met: day.steps >= goals::STEPS,
            sleep_met: day.sleep >= goals::SLEEP_HOURS,
        })
        .collect();

    WeeklyReport {
        daily_water: sample.water,
        total_steps,
        average_steps,
        good_sleep_days,
        daily_goals,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_generated_values_stay_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..200 {
            let sample = generate_weekly_sample(&mut rng);
            assert!(sample.water.iter().all(|w| (4..=8).contains(w)));
            assert!(sample.steps.iter().all(|s| (4000..=9999).contains(s)));
            assert!(sample.sleep.iter().all(|h| (5..=8).contains(h)));
        }
    }

    #[test]
    fn test_same_seed_same_sample() {
        let first = generate_weekly_sample(&mut ChaCha8Rng::seed_from_u64(42));
        let second = generate_weekly_sample(&mut ChaCha8Rng::seed_from_u64(42));
        assert_eq!(first, second);
    }

    #[test]
    fn test_mean_rounds_half_up() {
        // 35004 / 7 = 5000.57 -> 5001
        let sample = WeeklySample::new(
            [4; 7],
            [5000, 5000, 5000, 5000, 5000, 5000, 5004],
            [5; 7],
        );
        let report = weekly_report(&sample);
        assert_eq!(report.total_steps, 35_004);
        assert_eq!(report.average_steps, 5001);
    }
}

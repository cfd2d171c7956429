// ABOUTME: Seven-day metric sample consumed by the weekly report
// ABOUTME: Three independent per-day sequences for water, steps, and sleep
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::weekly::DAYS;
use serde::{Deserialize, Serialize};

/// A week of simulated metrics
///
/// The three sequences are independent; day `n` of one says nothing about day
/// `n` of another. Samples are ephemeral and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklySample {
    /// Cups of water per day
    pub water: [u32; DAYS],
    /// Steps per day
    pub steps: [u32; DAYS],
    /// Hours of sleep per day
    pub sleep: [u32; DAYS],
}

/// One day's values pulled from a [`WeeklySample`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayMetrics {
    /// 1-based day number
    pub day: usize,
    /// Cups of water
    pub water: u32,
    /// Steps
    pub steps: u32,
    /// Hours of sleep
    pub sleep: u32,
}

impl WeeklySample {
    /// Build a sample from fixed sequences
    #[must_use]
    pub const fn new(water: [u32; DAYS], steps: [u32; DAYS], sleep: [u32; DAYS]) -> Self {
        Self {
            water,
            steps,
            sleep,
        }
    }

    /// Iterate the week day by day, in order
    pub fn days(&self) -> impl Iterator<Item = DayMetrics> + '_ {
        (0..DAYS).map(move |index| DayMetrics {
            day: index + 1,
            water: self.water[index],
            steps: self.steps[index],
            sleep: self.sleep[index],
        })
    }
}

// ABOUTME: State store owning the daily health record and body measurement inputs
// ABOUTME: Applies permissive input coercion and keeps the healthy flag derived
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # State Store
//!
//! Holds the single [`HealthRecord`] for a session plus the weight and height
//! inputs. Every write goes through [`HealthRecord::new`], so the healthy flag
//! is always derived from the stored counts.

use crate::input::{parse_count, parse_measurement};
use health_core::models::{BodyMeasurements, HealthRecord};
use tracing::debug;

/// Owned mutable health state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StateStore {
    record: HealthRecord,
    body: BodyMeasurements,
}

impl StateStore {
    /// Store initialized with the reset defaults
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the record from raw input strings
    ///
    /// Unparseable, missing, or negative values become 0; nothing here fails.
    pub fn set_from_inputs(&mut self, water_raw: &str, steps_raw: &str, sleep_raw: &str) -> HealthRecord {
        self.record = HealthRecord::new(
            parse_count(water_raw),
            parse_count(steps_raw),
            parse_count(sleep_raw),
        );
        debug!(
            water = self.record.daily_water_cups(),
            steps = self.record.daily_steps_count(),
            sleep = self.record.sleep_hours(),
            healthy = self.record.is_healthy(),
            "health record updated"
        );
        self.record
    }

    /// Read-only copy of the current record
    #[must_use]
    pub const fn current_snapshot(&self) -> HealthRecord {
        self.record
    }

    /// Replace weight and height from raw input strings
    pub fn set_body_inputs(&mut self, weight_raw: &str, height_raw: &str) -> BodyMeasurements {
        self.body = BodyMeasurements::new(parse_measurement(weight_raw), parse_measurement(height_raw));
        self.body
    }

    /// Current weight and height inputs
    #[must_use]
    pub const fn body(&self) -> BodyMeasurements {
        self.body
    }

    /// Restore record and body inputs to their defaults
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_inputs_become_zero() {
        let mut store = StateStore::new();
        let record = store.set_from_inputs("lots", "", "-3");
        assert_eq!(record, HealthRecord::new(0, 0, 0));
        assert_eq!(store.current_snapshot(), record);
    }

    #[test]
    fn test_reset_restores_body_defaults() {
        let mut store = StateStore::new();
        store.set_body_inputs("90", "1.9");
        store.reset();
        assert_eq!(store.body(), BodyMeasurements::new(68.0, 1.7));
    }
}

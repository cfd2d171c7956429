// ABOUTME: Daily health record with a derived healthy flag, plus body measurements
// ABOUTME: The healthy flag is recomputed on every construction and cannot be set directly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::{calories, defaults, goals};
use serde::{Deserialize, Serialize};

/// Current water, steps, and sleep metrics with the derived healthiness flag
///
/// Fields are private so `is_healthy` can only ever be the result of
/// [`HealthRecord::evaluate_healthy`] over the other three values.
/// Deserialization goes through the same constructor, so any `is_healthy`
/// present in the input is ignored and recomputed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "HealthRecordFields")]
pub struct HealthRecord {
    daily_water_cups: u32,
    daily_steps_count: u32,
    sleep_hours: u32,
    is_healthy: bool,
}

#[derive(Deserialize)]
struct HealthRecordFields {
    daily_water_cups: u32,
    daily_steps_count: u32,
    sleep_hours: u32,
}

impl From<HealthRecordFields> for HealthRecord {
    fn from(fields: HealthRecordFields) -> Self {
        Self::new(
            fields.daily_water_cups,
            fields.daily_steps_count,
            fields.sleep_hours,
        )
    }
}

impl HealthRecord {
    /// Build a record and derive its healthy flag
    #[must_use]
    pub const fn new(daily_water_cups: u32, daily_steps_count: u32, sleep_hours: u32) -> Self {
        Self {
            daily_water_cups,
            daily_steps_count,
            sleep_hours,
            is_healthy: Self::evaluate_healthy(daily_water_cups, daily_steps_count, sleep_hours),
        }
    }

    /// True iff every daily goal is met
    #[must_use]
    pub const fn evaluate_healthy(water_cups: u32, steps: u32, sleep_hours: u32) -> bool {
        water_cups >= goals::WATER_CUPS && steps >= goals::STEPS && sleep_hours >= goals::SLEEP_HOURS
    }

    /// Cups of water today
    #[must_use]
    pub const fn daily_water_cups(&self) -> u32 {
        self.daily_water_cups
    }

    /// Steps walked today
    #[must_use]
    pub const fn daily_steps_count(&self) -> u32 {
        self.daily_steps_count
    }

    /// Hours slept last night
    #[must_use]
    pub const fn sleep_hours(&self) -> u32 {
        self.sleep_hours
    }

    /// Derived: all three goals met
    #[must_use]
    pub const fn is_healthy(&self) -> bool {
        self.is_healthy
    }

    /// One-line status summary shown after a metrics update
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Water: {} cups, Steps: {}, Sleep: {} hrs -> Overall Healthy? {}",
            self.daily_water_cups, self.daily_steps_count, self.sleep_hours, self.is_healthy
        )
    }
}

impl Default for HealthRecord {
    fn default() -> Self {
        Self::new(defaults::WATER_CUPS, defaults::STEPS, defaults::SLEEP_HOURS)
    }
}

/// Weight and height inputs used by the BMI and calorie commands
///
/// Values are stored as entered; negative numbers are kept so the BMI
/// calculation can reject them explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyMeasurements {
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in meters
    pub height_m: f64,
}

impl BodyMeasurements {
    /// Create measurements from weight (kg) and height (m)
    #[must_use]
    pub const fn new(weight_kg: f64, height_m: f64) -> Self {
        Self {
            weight_kg,
            height_m,
        }
    }

    /// Height converted to centimeters
    #[must_use]
    pub fn height_cm(&self) -> f64 {
        self.height_m * calories::CM_PER_METER
    }
}

impl Default for BodyMeasurements {
    fn default() -> Self {
        Self::new(defaults::WEIGHT_KG, defaults::HEIGHT_M)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_default_record_is_not_healthy() {
        let record = HealthRecord::default();
        assert_eq!(record.daily_water_cups(), 6);
        assert_eq!(record.daily_steps_count(), 8500);
        assert_eq!(record.sleep_hours(), 7);
        assert!(!record.is_healthy());
    }

    #[test]
    fn test_deserialize_recomputes_healthy_flag() {
        let json = r#"{"daily_water_cups":2,"daily_steps_count":100,"sleep_hours":3,"is_healthy":true}"#;
        let record: HealthRecord = serde_json::from_str(json).unwrap();
        assert!(!record.is_healthy());
    }

    #[test]
    fn test_summary_line() {
        let record = HealthRecord::new(8, 10_000, 7);
        assert_eq!(
            record.summary(),
            "Water: 8 cups, Steps: 10000, Sleep: 7 hrs -> Overall Healthy? true"
        );
    }
}

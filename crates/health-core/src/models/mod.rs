// ABOUTME: Core data models for the Health Tracker Panel
// ABOUTME: Daily health record, body measurements, and weekly sample definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Health data models shared by the metric algorithms and the panel.

/// Daily health record and body measurements
pub mod health;
/// Seven-day sample used by the weekly report
pub mod weekly;

pub use health::{BodyMeasurements, HealthRecord};
pub use weekly::{DayMetrics, WeeklySample};

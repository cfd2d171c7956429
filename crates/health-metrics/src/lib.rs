// ABOUTME: Health metric algorithms for the Health Tracker Panel
// ABOUTME: Pure assessments, body metrics, and weekly report generation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Health Metrics
//!
//! Pure computations over health data. Nothing in this crate holds state or
//! performs I/O; randomness is always supplied by the caller.
//!
//! - **assessments**: water, steps, and sleep categories with display messages
//! - **bmi**: Body Mass Index with half-open category bands
//! - **nutrition_calculator**: Mifflin-St Jeor daily calorie estimate
//! - **weekly_report**: seven-day sample generation and report synthesis

/// Water, steps, and sleep assessments
pub mod assessments;

/// Body Mass Index calculation
pub mod bmi;

/// Daily calorie estimation
pub mod nutrition_calculator;

/// Weekly sample generation and report synthesis
pub mod weekly_report;

/// Rounding helpers shared by the calculators
pub mod rounding;

pub use assessments::{describe_sleep, describe_steps, describe_water, Assessment};
pub use bmi::{compute_bmi, BmiCategory, BmiResult};
pub use nutrition_calculator::{
    basal_metabolic_rate, estimate_daily_calories, parse_activity_factor, parse_age,
    ActivityLevel, CalorieProfile, Gender,
};
pub use weekly_report::{generate_weekly_sample, weekly_report, DailyGoalCheck, WeeklyReport};

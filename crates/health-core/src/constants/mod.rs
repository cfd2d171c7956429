// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Goals, thresholds, reset defaults, and fixed pools for the Health Tracker Panel
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped by domain rather than kept in one flat list. Goal
//! thresholds here are the single source for the `is_healthy` flag, the metric
//! formatters, and the weekly report's per-day checks.

/// Daily goals shared by the healthy flag and the weekly report
pub mod goals {
    /// Cups of water at or above which a day counts as hydrated
    pub const WATER_CUPS: u32 = 8;
    /// Step count at or above which the step goal is achieved
    pub const STEPS: u32 = 10_000;
    /// Minimum hours of sleep for a day to count as rested
    pub const SLEEP_HOURS: u32 = 7;
}

/// Sleep quality bands used by the sleep formatter
pub mod sleep_bands {
    /// Lower bound (inclusive) of the "good" band
    pub const GOOD_MIN_HOURS: u32 = 7;
    /// Upper bound (inclusive) of the "good" band
    pub const GOOD_MAX_HOURS: u32 = 9;
}

/// Display-only goals for progress indicators
pub mod progress {
    /// Water progress goal (cups)
    pub const WATER_GOAL: u32 = 8;
    /// Steps progress goal
    pub const STEPS_GOAL: u32 = 10_000;
    /// Sleep progress goal (hours). Intentionally 8, not the 7-9 "good" band.
    pub const SLEEP_GOAL: u32 = 8;
    /// Cap for progress percentages
    pub const MAX_PERCENT: f64 = 100.0;
}

/// Body Mass Index category boundaries (kg/m²)
pub mod bmi {
    /// Values below this are underweight
    pub const UNDERWEIGHT_BELOW: f64 = 18.5;
    /// Values below this (and at or above underweight) are normal
    pub const NORMAL_BELOW: f64 = 25.0;
    /// Values below this (and at or above normal) are overweight
    pub const OVERWEIGHT_BELOW: f64 = 30.0;
    /// Decimal places used when displaying a BMI value
    pub const DISPLAY_DECIMALS: usize = 2;
}

/// Mifflin-St Jeor coefficients and calorie wiring defaults
pub mod calories {
    /// Weight coefficient (kcal per kg)
    pub const MSJ_WEIGHT_COEF: f64 = 10.0;
    /// Height coefficient (kcal per cm)
    pub const MSJ_HEIGHT_COEF: f64 = 6.25;
    /// Age coefficient (kcal per year)
    pub const MSJ_AGE_COEF: f64 = -5.0;
    /// Constant added for males
    pub const MSJ_MALE_CONSTANT: f64 = 5.0;
    /// Constant added for females
    pub const MSJ_FEMALE_CONSTANT: f64 = -161.0;
    /// Centimeters per meter
    pub const CM_PER_METER: f64 = 100.0;
    /// Activity factor applied when the caller does not supply one
    pub const DEFAULT_ACTIVITY_FACTOR: f64 = 1.2;
    /// Age used by the panel's calorie command
    pub const PANEL_AGE_YEARS: f64 = 30.0;
    /// Activity factor used by the panel's calorie command
    pub const PANEL_ACTIVITY_FACTOR: f64 = 1.5;

    /// Standard activity level multipliers (`McArdle` et al., Exercise Physiology)
    pub mod activity_factors {
        /// Little or no exercise
        pub const SEDENTARY: f64 = 1.2;
        /// Exercise 1-3 days/week
        pub const LIGHTLY_ACTIVE: f64 = 1.375;
        /// Exercise 3-5 days/week
        pub const MODERATELY_ACTIVE: f64 = 1.55;
        /// Exercise 6-7 days/week
        pub const VERY_ACTIVE: f64 = 1.725;
        /// Hard training twice a day
        pub const EXTRA_ACTIVE: f64 = 1.9;
    }
}

/// Weekly sample generation ranges (inclusive)
pub mod weekly {
    /// Days in a weekly sample
    pub const DAYS: usize = 7;
    /// Minimum cups of water per simulated day
    pub const WATER_MIN: u32 = 4;
    /// Maximum cups of water per simulated day
    pub const WATER_MAX: u32 = 8;
    /// Minimum steps per simulated day
    pub const STEPS_MIN: u32 = 4_000;
    /// Maximum steps per simulated day
    pub const STEPS_MAX: u32 = 9_999;
    /// Minimum sleep hours per simulated day
    pub const SLEEP_MIN: u32 = 5;
    /// Maximum sleep hours per simulated day
    pub const SLEEP_MAX: u32 = 8;
}

/// Values restored by a confirmed reset
pub mod defaults {
    /// Default cups of water
    pub const WATER_CUPS: u32 = 6;
    /// Default step count
    pub const STEPS: u32 = 8_500;
    /// Default sleep hours
    pub const SLEEP_HOURS: u32 = 7;
    /// Default body weight (kg)
    pub const WEIGHT_KG: f64 = 68.0;
    /// Default height (m)
    pub const HEIGHT_M: f64 = 1.7;
    /// Default background palette index
    pub const BACKGROUND_INDEX: usize = 0;
    /// Default emphasis state of the motivational banner
    pub const EMPHASIS: bool = true;
    /// Default motivational banner text
    pub const MOTIVATION: &str = "Stay consistent and you'll see progress!";
    /// Tips present before any mutation
    pub const SEED_TIPS: [&str; 3] = [
        "Start your day with a glass of water",
        "Take a 10-minute walk after meals",
        "Practice deep breathing for 5 minutes daily",
    ];
}

/// Pool that random tips are drawn from (duplicates allowed)
pub const HEALTHY_TIPS: [&str; 7] = [
    "Get sunlight exposure in the morning",
    "Include protein in every meal",
    "Stand up and stretch every hour",
    "Practice gratitude daily",
    "Limit processed foods",
    "Stay hydrated with water throughout the day",
    "Get 7-9 hours of quality sleep",
];

/// Pool that the motivational banner text is drawn from
pub const MOTIVATIONS: [&str; 5] = [
    "Your health is your wealth",
    "Progress, not perfection!",
    "Small changes create big results",
    "You're stronger than you think",
    "Every day is a fresh start",
];

/// Background colors, cycled in order
pub const BACKGROUND_PALETTE: [&str; 5] = ["#f0f7f4", "#e6f2ff", "#fff2e6", "#f9f0ff", "#f0f8ff"];

/// Environment variable names read by the panel configuration
pub mod env_config {
    /// Age used for calorie estimates
    pub const AGE: &str = "HEALTH_TRACKER_AGE";
    /// Gender used for calorie estimates (`male` or `female`)
    pub const GENDER: &str = "HEALTH_TRACKER_GENDER";
    /// Activity factor or level name used for calorie estimates
    pub const ACTIVITY: &str = "HEALTH_TRACKER_ACTIVITY";
    /// Seed for reproducible randomness
    pub const SEED: &str = "HEALTH_TRACKER_SEED";
    /// Output format (`text` or `json`)
    pub const OUTPUT: &str = "HEALTH_TRACKER_OUTPUT";
}

/// Service names used in structured logs
pub mod service_names {
    /// Name of the panel service
    pub const HEALTH_TRACKER: &str = "health-tracker";
}

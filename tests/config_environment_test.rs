// ABOUTME: Unit tests for config environment functionality
// ABOUTME: Validates environment variable parsing, defaults, and configuration errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use health_tracker_panel::config::PanelConfig;
use health_tracker_panel::errors::ErrorCode;
use health_tracker_panel::formatters::OutputFormat;
use health_tracker_panel::metrics::Gender;
use serial_test::serial;
use std::env;

const VARS: [&str; 5] = [
    "HEALTH_TRACKER_AGE",
    "HEALTH_TRACKER_GENDER",
    "HEALTH_TRACKER_ACTIVITY",
    "HEALTH_TRACKER_SEED",
    "HEALTH_TRACKER_OUTPUT",
];

fn clear_vars() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_vars();
    let config = PanelConfig::from_env().unwrap();
    assert!((config.calorie_profile.age_years - 30.0).abs() < f64::EPSILON);
    assert_eq!(config.calorie_profile.gender, Gender::Male);
    assert!((config.calorie_profile.activity_factor - 1.5).abs() < f64::EPSILON);
    assert_eq!(config.rng_seed, None);
    assert_eq!(config.output_format, OutputFormat::Text);
}

#[test]
#[serial]
fn test_all_variables_parsed() {
    clear_vars();
    env::set_var("HEALTH_TRACKER_AGE", "42");
    env::set_var("HEALTH_TRACKER_GENDER", "Female");
    env::set_var("HEALTH_TRACKER_ACTIVITY", "1.725");
    env::set_var("HEALTH_TRACKER_SEED", "7");
    env::set_var("HEALTH_TRACKER_OUTPUT", "json");

    let config = PanelConfig::from_env().unwrap();
    clear_vars();

    assert!((config.calorie_profile.age_years - 42.0).abs() < f64::EPSILON);
    assert_eq!(config.calorie_profile.gender, Gender::Female);
    assert!((config.calorie_profile.activity_factor - 1.725).abs() < f64::EPSILON);
    assert_eq!(config.rng_seed, Some(7));
    assert_eq!(config.output_format, OutputFormat::Json);
}

#[test]
#[serial]
fn test_malformed_values_are_config_errors() {
    let cases = [
        ("HEALTH_TRACKER_AGE", "thirty"),
        ("HEALTH_TRACKER_GENDER", "robot"),
        ("HEALTH_TRACKER_ACTIVITY", "couch"),
        ("HEALTH_TRACKER_SEED", "-1"),
        ("HEALTH_TRACKER_OUTPUT", "yaml"),
    ];
    for (var, value) in cases {
        clear_vars();
        env::set_var(var, value);
        let error = PanelConfig::from_env().unwrap_err();
        assert_eq!(error.code, ErrorCode::ConfigInvalid, "{var}={value}");
        assert_eq!(error.details["variable"], var);
    }
    clear_vars();
}

#[test]
fn test_builder_overrides() {
    let config = PanelConfig::default()
        .with_seed(99)
        .with_output_format(OutputFormat::Json);
    assert_eq!(config.rng_seed, Some(99));
    assert_eq!(config.output_format, OutputFormat::Json);
}

#[test]
fn test_config_serializes_format_name() {
    let json = serde_json::to_value(PanelConfig::default()).unwrap();
    assert_eq!(json["output_format"], "text");
    assert_eq!(json["calorie_profile"]["gender"], "male");
}

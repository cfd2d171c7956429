// ABOUTME: Environment configuration for the Health Tracker Panel
// ABOUTME: Parses calorie wiring, randomness seed, and output format from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration
//!
//! User inputs are coerced permissively, but configuration is not user data:
//! a malformed environment value is reported as `CONFIG_INVALID` instead of
//! silently becoming zero.

use crate::formatters::OutputFormat;
use health_core::constants::env_config;
use health_core::errors::{AppError, AppResult};
use health_metrics::nutrition_calculator::{
    parse_activity_factor, parse_age, CalorieProfile, Gender,
};
use serde::Serialize;
use std::env;
use tracing::info;

/// Runtime configuration for a panel session
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PanelConfig {
    /// Age, gender, and activity factor used by the calorie command
    pub calorie_profile: CalorieProfile,
    /// Seed for reproducible tips, motivations, and weekly samples
    pub rng_seed: Option<u64>,
    /// Output format for rendered command results
    pub output_format: OutputFormat,
}

impl PanelConfig {
    /// Load configuration from the process environment
    ///
    /// # Errors
    ///
    /// Returns `CONFIG_INVALID` if any variable is set but malformed
    pub fn from_env() -> AppResult<Self> {
        let config = Self::from_lookup(|key| env::var(key).ok())?;
        info!(
            age = config.calorie_profile.age_years,
            gender = %config.calorie_profile.gender,
            activity_factor = config.calorie_profile.activity_factor,
            seeded = config.rng_seed.is_some(),
            output = %config.output_format,
            "Panel configuration loaded"
        );
        Ok(config)
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// # Errors
    ///
    /// Returns `CONFIG_INVALID` if any looked-up value is malformed
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let mut profile = config.calorie_profile;

        if let Some(raw) = lookup(env_config::AGE) {
            profile.age_years =
                parse_age(&raw).map_err(|reason| invalid(env_config::AGE, &reason))?;
        }
        if let Some(raw) = lookup(env_config::GENDER) {
            profile.gender = raw
                .parse::<Gender>()
                .map_err(|reason| invalid(env_config::GENDER, &reason))?;
        }
        if let Some(raw) = lookup(env_config::ACTIVITY) {
            profile.activity_factor =
                parse_activity_factor(&raw).map_err(|reason| invalid(env_config::ACTIVITY, &reason))?;
        }
        config.calorie_profile = profile;

        if let Some(raw) = lookup(env_config::SEED) {
            let seed = raw
                .trim()
                .parse::<u64>()
                .map_err(|e| invalid(env_config::SEED, &e.to_string()))?;
            config.rng_seed = Some(seed);
        }
        if let Some(raw) = lookup(env_config::OUTPUT) {
            config.output_format = raw
                .parse::<OutputFormat>()
                .map_err(|e| invalid(env_config::OUTPUT, &e.message))?;
        }

        Ok(config)
    }

    /// Use a fixed seed for all randomness
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    /// Override the output format
    #[must_use]
    pub const fn with_output_format(mut self, output_format: OutputFormat) -> Self {
        self.output_format = output_format;
        self
    }

    /// Override the calorie profile
    #[must_use]
    pub const fn with_calorie_profile(mut self, calorie_profile: CalorieProfile) -> Self {
        self.calorie_profile = calorie_profile;
        self
    }
}

fn invalid(key: &str, reason: &str) -> AppError {
    AppError::config(format!("{key}: {reason}")).with_details(serde_json::json!({ "variable": key }))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use health_core::errors::ErrorCode;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = PanelConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, PanelConfig::default());
        assert!((config.calorie_profile.activity_factor - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_level_name_accepted_for_activity() {
        let config =
            PanelConfig::from_lookup(lookup_from(&[("HEALTH_TRACKER_ACTIVITY", "sedentary")])).unwrap();
        assert!((config.calorie_profile.activity_factor - 1.2).abs() < f64::EPSILON);
    }

    #[test]
    fn test_malformed_seed_is_config_error() {
        let error = PanelConfig::from_lookup(lookup_from(&[("HEALTH_TRACKER_SEED", "abc")])).unwrap_err();
        assert_eq!(error.code, ErrorCode::ConfigInvalid);
    }
}

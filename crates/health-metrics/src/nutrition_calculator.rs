// ABOUTME: Daily calorie estimation using the Mifflin-St Jeor equation
// ABOUTME: BMR from weight, height, age, and gender scaled by an activity factor
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Calculator Module
//!
//! Estimates daily energy needs from body measurements.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! - `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). *Exercise Physiology*.
//!
//! Unlike a clinical calculator, inputs are not range-checked: negative or
//! nonsensical values flow straight through the arithmetic.

use crate::rounding::round_half_up;
use health_core::constants::calories::{self, activity_factors};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Gender for BMR calculations
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male gender (higher BMR)
    #[default]
    Male,
    /// Female gender (lower BMR)
    Female,
}

impl Gender {
    /// Mifflin-St Jeor constant term for this gender
    #[must_use]
    pub const fn msj_constant(&self) -> f64 {
        match self {
            Self::Male => calories::MSJ_MALE_CONSTANT,
            Self::Female => calories::MSJ_FEMALE_CONSTANT,
        }
    }

    /// Lowercase name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            other => Err(format!("unknown gender '{other}', expected male or female")),
        }
    }
}

/// Activity level presets for TDEE calculation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Sedentary (little/no exercise)
    Sedentary,
    /// Lightly active (1-3 days/week)
    LightlyActive,
    /// Moderately active (3-5 days/week)
    ModeratelyActive,
    /// Very active (6-7 days/week)
    VeryActive,
    /// Extra active (hard training 2x/day)
    ExtraActive,
}

impl ActivityLevel {
    /// Multiplier applied to BMR
    #[must_use]
    pub const fn factor(&self) -> f64 {
        match self {
            Self::Sedentary => activity_factors::SEDENTARY,
            Self::LightlyActive => activity_factors::LIGHTLY_ACTIVE,
            Self::ModeratelyActive => activity_factors::MODERATELY_ACTIVE,
            Self::VeryActive => activity_factors::VERY_ACTIVE,
            Self::ExtraActive => activity_factors::EXTRA_ACTIVE,
        }
    }

    /// Parse a level name (`sedentary`, `lightly_active`, `lightly-active`, ...)
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().replace('-', "_").as_str() {
            "sedentary" => Some(Self::Sedentary),
            "lightly_active" | "light" => Some(Self::LightlyActive),
            "moderately_active" | "moderate" => Some(Self::ModeratelyActive),
            "very_active" | "very" => Some(Self::VeryActive),
            "extra_active" | "extra" => Some(Self::ExtraActive),
            _ => None,
        }
    }
}

/// Parse an activity factor given either as a number or a level name
///
/// # Errors
///
/// Returns a message when the input is neither a finite number nor a known level.
pub fn parse_activity_factor(raw: &str) -> Result<f64, String> {
    if let Ok(factor) = raw.trim().parse::<f64>() {
        if factor.is_finite() {
            return Ok(factor);
        }
    }
    ActivityLevel::from_name(raw)
        .map(|level| level.factor())
        .ok_or_else(|| format!("'{raw}' is neither a number nor a known activity level"))
}

/// Parse an age in years
///
/// # Errors
///
/// Returns a message when the input is not a finite number.
pub fn parse_age(raw: &str) -> Result<f64, String> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|age| age.is_finite())
        .ok_or_else(|| format!("'{raw}' is not a finite age"))
}

/// Age, gender, and activity inputs for a calorie estimate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalorieProfile {
    /// Age in years
    pub age_years: f64,
    /// Gender used for the BMR constant
    pub gender: Gender,
    /// Multiplier applied to BMR
    pub activity_factor: f64,
}

impl CalorieProfile {
    /// Profile for the given age with the default gender (male) and factor (1.2)
    #[must_use]
    pub const fn new(age_years: f64) -> Self {
        Self {
            age_years,
            gender: Gender::Male,
            activity_factor: calories::DEFAULT_ACTIVITY_FACTOR,
        }
    }

    /// Override the gender
    #[must_use]
    pub const fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }

    /// Override the activity factor
    #[must_use]
    pub const fn with_activity_factor(mut self, activity_factor: f64) -> Self {
        self.activity_factor = activity_factor;
        self
    }

    /// Use a preset activity level
    #[must_use]
    pub const fn with_activity_level(self, level: ActivityLevel) -> Self {
        self.with_activity_factor(level.factor())
    }
}

impl Default for CalorieProfile {
    /// The panel's wiring: 30 years, male, factor 1.5
    fn default() -> Self {
        Self::new(calories::PANEL_AGE_YEARS).with_activity_factor(calories::PANEL_ACTIVITY_FACTOR)
    }
}

/// Basal Metabolic Rate using Mifflin-St Jeor (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `gender_offset`
/// - Men: +5
/// - Women: -161
#[must_use]
pub fn basal_metabolic_rate(weight_kg: f64, height_m: f64, age_years: f64, gender: Gender) -> f64 {
    let height_cm = height_m * calories::CM_PER_METER;

    calories::MSJ_WEIGHT_COEF * weight_kg
        + calories::MSJ_HEIGHT_COEF * height_cm
        + calories::MSJ_AGE_COEF * age_years
        + gender.msj_constant()
}

/// Estimated daily calories: `round(BMR x activity_factor)`
///
/// Ties round toward positive infinity.
#[must_use]
pub fn estimate_daily_calories(weight_kg: f64, height_m: f64, profile: &CalorieProfile) -> i64 {
    let bmr = basal_metabolic_rate(weight_kg, height_m, profile.age_years, profile.gender);
    round_half_up(bmr * profile.activity_factor) as i64
}

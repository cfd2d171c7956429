// ABOUTME: Body Mass Index calculation with WHO category bands
// ABOUTME: Rejects non-positive inputs with an explicit invalid-input error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Body Mass Index
//!
//! `BMI = weight_kg / height_m²`. Categories are decided on the unrounded
//! value with half-open bands, so 25.0 is overweight and 30.0 is obesity.
//! Rounding to two decimals happens only in [`BmiResult::display_value`].

use crate::rounding::round_to_places;
use health_core::constants::bmi;
use health_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// BMI category bands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    /// Below 18.5
    Underweight,
    /// 18.5 up to (not including) 25
    NormalWeight,
    /// 25 up to (not including) 30
    Overweight,
    /// 30 and above
    Obesity,
}

impl BmiCategory {
    /// Classify an unrounded BMI value
    #[must_use]
    pub fn from_value(value: f64) -> Self {
        if value < bmi::UNDERWEIGHT_BELOW {
            Self::Underweight
        } else if value < bmi::NORMAL_BELOW {
            Self::NormalWeight
        } else if value < bmi::OVERWEIGHT_BELOW {
            Self::Overweight
        } else {
            Self::Obesity
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::NormalWeight => "Normal weight",
            Self::Overweight => "Overweight",
            Self::Obesity => "Obesity",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A computed BMI
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmiResult {
    /// Full-precision BMI value
    pub value: f64,
    /// Category of the unrounded value
    pub category: BmiCategory,
}

impl BmiResult {
    /// Value rounded to two decimals for display
    #[must_use]
    pub fn display_value(&self) -> String {
        let rounded = round_to_places(self.value, bmi::DISPLAY_DECIMALS);
        format!("{rounded:.prec$}", prec = bmi::DISPLAY_DECIMALS)
    }
}

impl fmt::Display for BmiResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BMI: {} ({})", self.display_value(), self.category)
    }
}

/// Compute BMI from weight (kg) and height (m)
///
/// # Errors
///
/// Returns `InvalidPhysicalInput` when either value is zero, negative, or not
/// a finite number.
pub fn compute_bmi(weight_kg: f64, height_m: f64) -> AppResult<BmiResult> {
    let is_valid = |v: f64| v.is_finite() && v > 0.0;
    if !is_valid(weight_kg) || !is_valid(height_m) {
        debug!(weight_kg, height_m, "rejecting BMI input");
        return Err(AppError::invalid_physical_input(weight_kg, height_m));
    }

    let value = weight_kg / (height_m * height_m);
    Ok(BmiResult {
        value,
        category: BmiCategory::from_value(value),
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_band_edges_fall_into_higher_band() {
        assert_eq!(BmiCategory::from_value(18.499), BmiCategory::Underweight);
        assert_eq!(BmiCategory::from_value(18.5), BmiCategory::NormalWeight);
        assert_eq!(BmiCategory::from_value(25.0), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_value(30.0), BmiCategory::Obesity);
    }

    #[test]
    fn test_display_rounds_only_for_output() {
        let result = compute_bmi(70.0, 1.75).unwrap();
        assert_eq!(result.to_string(), "BMI: 22.86 (Normal weight)");
        assert!((result.value - 22.857_142_857).abs() < 1e-9);
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(compute_bmi(f64::NAN, 1.7).is_err());
        assert!(compute_bmi(70.0, f64::INFINITY).is_err());
    }
}

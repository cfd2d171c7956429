// ABOUTME: Rounding helpers for calorie, average, and BMI display calculations
// ABOUTME: Round-half-up semantics where ties always move toward positive infinity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Round to the nearest integer, ties toward positive infinity
///
/// `f64::round` sends ties away from zero, which differs for negative halves
/// (`-2.5` becomes `-3` there, `-2` here).
#[must_use]
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Round to a fixed number of decimal places, ties toward positive infinity
///
/// Display strings are formatted from this value so exact ties such as
/// `18.125` show as `18.13` rather than the half-to-even `18.12`.
#[must_use]
pub fn round_to_places(value: f64, places: usize) -> f64 {
    let scale = 10_f64.powi(places as i32);
    round_half_up(value * scale) / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ties_move_toward_positive_infinity() {
        assert!((round_half_up(2.5) - 3.0).abs() < f64::EPSILON);
        assert!((round_half_up(-2.5) - -2.0).abs() < f64::EPSILON);
        assert!((round_half_up(2396.25) - 2396.0).abs() < f64::EPSILON);
        assert!((round_half_up(-0.4) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_round_to_places_breaks_ties_upward() {
        assert_eq!(format!("{:.2}", round_to_places(18.125, 2)), "18.13");
        assert_eq!(format!("{:.2}", round_to_places(5.125, 2)), "5.13");
        assert_eq!(format!("{:.2}", round_to_places(22.857_142, 2)), "22.86");
        assert_eq!(format!("{:.1}", round_to_places(0.25, 1)), "0.3");
    }
}

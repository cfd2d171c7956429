// ABOUTME: Permissive numeric parsing for raw user input fields
// ABOUTME: Malformed, missing, or negative counts coerce to zero instead of erroring
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Input coercion
//!
//! Form-style inputs are never rejected. Counts take the longest leading run
//! of digits (`"12abc"` is 12, `"8.9"` is 8, `"0x10"` is 16), and anything
//! that yields no digits or a negative number becomes 0. Measurements take the
//! longest leading decimal literal (`"1.7m"` is 1.7) and keep their sign so
//! downstream validation can reject them.

/// Parse a non-negative integer count
///
/// Values above `u32::MAX` saturate.
#[must_use]
pub fn parse_count(raw: &str) -> u32 {
    let trimmed = raw.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let (radix, digits) = match unsigned.get(..2) {
        Some("0x" | "0X") => (16, &unsigned[2..]),
        _ => (10, unsigned),
    };

    let mut value: u64 = 0;
    let mut saw_digit = false;
    for digit in digits.chars().map_while(|c| c.to_digit(radix)) {
        saw_digit = true;
        value = value
            .saturating_mul(u64::from(radix))
            .saturating_add(u64::from(digit));
    }

    if !saw_digit || (negative && value > 0) {
        return 0;
    }
    u32::try_from(value).unwrap_or(u32::MAX)
}

/// Parse a floating-point measurement
///
/// Returns 0.0 when no numeric prefix exists or the result is not finite.
#[must_use]
pub fn parse_measurement(raw: &str) -> f64 {
    let trimmed = raw.trim_start();
    let end = decimal_prefix_len(trimmed.as_bytes());
    if end == 0 {
        return 0.0;
    }
    trimmed[..end]
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

/// Length of the longest prefix shaped like `[+-]digits[.digits][e[+-]digits]`
fn decimal_prefix_len(bytes: &[u8]) -> usize {
    let count_digits = |from: usize| bytes[from..].iter().take_while(|b| b.is_ascii_digit()).count();

    let mut pos = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let integer_digits = count_digits(pos);
    pos += integer_digits;

    let mut fraction_digits = 0;
    if bytes.get(pos) == Some(&b'.') {
        fraction_digits = count_digits(pos + 1);
        if integer_digits > 0 || fraction_digits > 0 {
            pos += 1 + fraction_digits;
        }
    }

    if integer_digits == 0 && fraction_digits == 0 {
        return 0;
    }

    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(bytes.get(pos + 1), Some(b'+' | b'-')));
        let exponent_digits = count_digits(pos + 1 + sign);
        if exponent_digits > 0 {
            pos += 1 + sign + exponent_digits;
        }
    }

    pos
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_prefix_semantics() {
        assert_eq!(parse_count("12abc"), 12);
        assert_eq!(parse_count("  8.9"), 8);
        assert_eq!(parse_count("+7"), 7);
        assert_eq!(parse_count("0x10"), 16);
        assert_eq!(parse_count("-0"), 0);
    }

    #[test]
    fn test_count_coerces_to_zero() {
        assert_eq!(parse_count(""), 0);
        assert_eq!(parse_count("abc"), 0);
        assert_eq!(parse_count("-5"), 0);
        assert_eq!(parse_count("0x"), 0);
    }

    #[test]
    fn test_count_saturates() {
        assert_eq!(parse_count("99999999999999999999999"), u32::MAX);
    }

    #[test]
    fn test_measurement_prefix_semantics() {
        assert!((parse_measurement("1.7m") - 1.7).abs() < f64::EPSILON);
        assert!((parse_measurement(" .5") - 0.5).abs() < f64::EPSILON);
        assert!((parse_measurement("5.") - 5.0).abs() < f64::EPSILON);
        assert!((parse_measurement("1e2kg") - 100.0).abs() < f64::EPSILON);
        assert!((parse_measurement("2e") - 2.0).abs() < f64::EPSILON);
        assert!((parse_measurement("-68") + 68.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_measurement_coerces_to_zero() {
        assert!(parse_measurement("").abs() < f64::EPSILON);
        assert!(parse_measurement("kg").abs() < f64::EPSILON);
        assert!(parse_measurement(".").abs() < f64::EPSILON);
        assert!(parse_measurement("-").abs() < f64::EPSILON);
        assert!(parse_measurement("1e400").abs() < f64::EPSILON);
    }
}

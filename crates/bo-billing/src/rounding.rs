// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Integer division with rounding
//!
//! Money stays in integers end to end. Installments are rounded half away
//! from zero, so `50_000 / 6` gives `8_333` and `100_000 / 6` gives `16_667`.

/// `numerator / denominator` rounded half away from zero
///
/// `denominator` must be positive.
pub fn div_round_half_away(numerator: i128, denominator: i128) -> i128 {
    debug_assert!(denominator > 0);
    let quotient = numerator / denominator;
    let remainder = numerator % denominator;
    if 2 * remainder.abs() >= denominator {
        quotient + numerator.signum()
    } else {
        quotient
    }
}

/// `numerator / denominator` rounded toward negative infinity
pub fn div_floor(numerator: i128, denominator: i128) -> i128 {
    numerator.div_euclid(denominator)
}

/// Narrow an intermediate back to an amount, saturating at the bounds
pub fn saturate(value: i128) -> i64 {
    value.clamp(i64::MIN as i128, i64::MAX as i128) as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounds_half_away_from_zero() {
        assert_eq!(div_round_half_away(5, 2), 3);
        assert_eq!(div_round_half_away(-5, 2), -3);
        assert_eq!(div_round_half_away(7, 2), 4);
        assert_eq!(div_round_half_away(4, 2), 2);
    }

    #[test]
    fn test_installment_figures() {
        assert_eq!(div_round_half_away(200_000, 6), 33_333);
        assert_eq!(div_round_half_away(100_000, 6), 16_667);
        assert_eq!(div_round_half_away(50_000, 6), 8_333);
        assert_eq!(div_round_half_away(-100_000, 6), -16_667);
        assert_eq!(div_round_half_away(0, 6), 0);
    }

    #[test]
    fn test_floor_goes_toward_negative_infinity() {
        assert_eq!(div_floor(7, 2), 3);
        assert_eq!(div_floor(-7, 2), -4);
    }

    #[test]
    fn test_saturate_clamps() {
        assert_eq!(saturate(i128::MAX), i64::MAX);
        assert_eq!(saturate(i128::MIN), i64::MIN);
        assert_eq!(saturate(42), 42);
    }
}

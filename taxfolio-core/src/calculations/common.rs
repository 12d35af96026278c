//! Shared helpers for tax calculations: money and rate rounding, and
//! decimal comparison utilities used across the engine.

use rust_decimal::Decimal;

/// Rounds a money amount to exactly two decimal places, half-up.
///
/// Values at exactly 0.005 round away from zero, the usual financial
/// convention.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use taxfolio_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds a rate to four decimal places, half-up.
///
/// Used for derived rates such as the effective rate; configured statutory
/// rates are never rounded.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use taxfolio_core::calculations::common::round_rate;
///
/// assert_eq!(round_rate(dec!(0.08444)), dec!(0.0844));
/// assert_eq!(round_rate(dec!(0.08445)), dec!(0.0845));
/// ```
pub fn round_rate(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(4, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Returns the maximum of two decimal values.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use taxfolio_core::calculations::common::max;
///
/// assert_eq!(max(dec!(100.00), dec!(200.00)), dec!(200.00));
/// assert_eq!(max(dec!(-100.00), dec!(-200.00)), dec!(-100.00));
/// ```
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // round_half_up tests
    // =========================================================================

    #[test]
    fn round_half_up_rounds_down_below_midpoint() {
        let result = round_half_up(dec!(123.454));

        assert_eq!(result, dec!(123.45));
    }

    #[test]
    fn round_half_up_rounds_up_at_midpoint() {
        let result = round_half_up(dec!(123.455));

        assert_eq!(result, dec!(123.46));
    }

    #[test]
    fn round_half_up_handles_negative_values() {
        let result = round_half_up(dec!(-123.455));

        assert_eq!(result, dec!(-123.46)); // Away from zero
    }

    #[test]
    fn round_half_up_preserves_already_rounded_values() {
        let result = round_half_up(dec!(123.45));

        assert_eq!(result, dec!(123.45));
    }

    #[test]
    fn round_half_up_handles_zero() {
        let result = round_half_up(dec!(0.00));

        assert_eq!(result, dec!(0.00));
    }

    // =========================================================================
    // round_rate tests
    // =========================================================================

    #[test]
    fn round_rate_keeps_four_decimal_places() {
        let result = round_rate(dec!(0.12345));

        assert_eq!(result, dec!(0.1235));
    }

    #[test]
    fn round_rate_preserves_exact_rates() {
        let result = round_rate(dec!(0.0844));

        assert_eq!(result, dec!(0.0844));
    }

    #[test]
    fn round_rate_handles_zero() {
        let result = round_rate(dec!(0));

        assert_eq!(result, dec!(0));
    }

    // =========================================================================
    // max tests
    // =========================================================================

    #[test]
    fn max_returns_larger_value() {
        let result = max(dec!(100.00), dec!(200.00));

        assert_eq!(result, dec!(200.00));
    }

    #[test]
    fn max_handles_equal_values() {
        let result = max(dec!(150.00), dec!(150.00));

        assert_eq!(result, dec!(150.00));
    }

    #[test]
    fn max_handles_negative_and_positive() {
        let result = max(dec!(-50.00), dec!(50.00));

        assert_eq!(result, dec!(50.00));
    }
}

use rust_decimal::prelude::*;

/// Rounds `value` to `dp` fraction digits, halves away from zero.
///
/// Rounding goes through `Decimal` so that values like `2.675` or `16.65`
/// round the way they read rather than the way their binary form does.
/// Non-finite input is returned unchanged.
pub fn round_half_away(value: f64, dp: u32) -> f64 {
    to_decimal(value)
        .map(|d| {
            d.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
                .to_f64()
                .unwrap_or(value)
        })
        .unwrap_or(value)
}

/// Converts a finite `f64` to `Decimal`, `None` for NaN, infinities or
/// magnitudes outside the `Decimal` range.
pub fn to_decimal(value: f64) -> Option<Decimal> {
    if !value.is_finite() {
        return None;
    }
    Decimal::from_f64(value)
}

/// Renders `value` rounded half away from zero with exactly `dp` fraction
/// digits and no grouping.
///
/// Magnitudes beyond the `Decimal` range fall back to the float formatter;
/// at that size the fraction digits carry no information anyway.
pub fn fixed_digits(value: f64, dp: u32) -> String {
    match to_decimal(value) {
        Some(d) => {
            let rounded = d.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
            format!("{:.*}", dp as usize, rounded)
        }
        None => format!("{:.*}", dp as usize, value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_round_half_away_from_zero() {
        assert_eq!(round_half_away(2.675, 2), 2.68);
        assert_eq!(round_half_away(16.65, 1), 16.7);
        assert_eq!(round_half_away(-16.65, 1), -16.7);
        assert_eq!(round_half_away(0.04, 1), 0.0);
    }

    #[test]
    fn test_round_non_finite_passthrough() {
        assert!(round_half_away(f64::NAN, 1).is_nan());
        assert_eq!(round_half_away(f64::INFINITY, 1), f64::INFINITY);
    }

    #[test]
    fn test_to_decimal() {
        assert_eq!(to_decimal(2.5), Some(dec!(2.5)));
        assert_eq!(to_decimal(-125000.0), Some(dec!(-125000)));
        assert_eq!(to_decimal(f64::NAN), None);
        assert_eq!(to_decimal(1e30), None);
    }

    #[test]
    fn test_fixed_digits() {
        assert_eq!(fixed_digits(8.75, 1), "8.8");
        assert_eq!(fixed_digits(12.0, 2), "12.00");
        assert_eq!(fixed_digits(193.554, 0), "194");
        assert_eq!(fixed_digits(1e30, 0), "1000000000000000019884624838656");
    }
}

//! Decimal conversion helpers for quote amounts.
//!
//! CRITICAL: Rounding strategy for multi-currency:
//! - Target amounts round to the target currency's decimal places
//! - Use banker's rounding (round half to even)
//! - The USD leg truncates to cents

use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;

/// Converts a KRW amount into a currency priced at `unit_rate` KRW per unit.
///
/// Uses banker's rounding (round half to even) to minimize cumulative errors.
#[must_use]
pub fn krw_to_currency(amount_krw: Decimal, unit_rate: Decimal, decimal_places: u32) -> Decimal {
    (amount_krw / unit_rate)
        .round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointNearestEven)
}

/// Truncates a value toward zero at `decimal_places`.
#[must_use]
pub fn truncate_dp(value: Decimal, decimal_places: u32) -> Decimal {
    value.round_dp_with_strategy(decimal_places, RoundingStrategy::ToZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_krw_to_currency() {
        // 397,000 KRW at 9.0565 KRW/JPY -> 32,794.34... -> 32,794 JPY
        let result = krw_to_currency(dec!(397000), dec!(9.0565), 0);
        assert_eq!(result, dec!(32794));
    }

    #[test]
    fn test_bankers_rounding() {
        // Round half to even: 2.5 -> 2, 3.5 -> 4
        assert_eq!(krw_to_currency(dec!(2.5), dec!(1), 0), dec!(2));
        assert_eq!(krw_to_currency(dec!(3.5), dec!(1), 0), dec!(4));
    }

    #[test]
    fn test_truncate_dp() {
        assert_eq!(truncate_dp(dec!(305.1475), 2), dec!(305.14));
        assert_eq!(truncate_dp(dec!(305.149), 2), dec!(305.14));
        assert_eq!(truncate_dp(dec!(305), 2), dec!(305));
    }

    proptest! {
        #[test]
        fn prop_truncate_never_increases_magnitude(
            cents in 0i64..1_000_000_000,
        ) {
            let value = Decimal::new(cents, 4);
            let truncated = truncate_dp(value, 2);
            prop_assert!(truncated <= value);
            prop_assert!(truncated.scale() <= 2);
        }

        #[test]
        fn prop_conversion_respects_decimal_places(
            krw in 1i64..100_000_000,
            rate_hundredths in 1i64..1_000_000,
            dp in 0u32..4,
        ) {
            let rate = Decimal::new(rate_hundredths, 2);
            let converted = krw_to_currency(Decimal::from(krw), rate, dp);
            prop_assert!(converted.scale() <= dp);
        }
    }
}

//! Conversions between REAL database columns and fixed-scale decimals.

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

/// Fractional digits of prices, discounts and line totals
pub const PRICE_SCALE: u32 = 2;

/// Build a decimal with exactly `scale` fractional digits from a REAL value.
pub fn from_f64(value: f64, scale: u32) -> Decimal {
    let rounded = Decimal::from_f64(value).unwrap_or_default();
    with_scale(rounded, scale)
}

/// Round (half away from zero) and pad to exactly `scale` fractional digits.
pub fn with_scale(value: Decimal, scale: u32) -> Decimal {
    let mut d = value.round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero);
    d.rescale(scale);
    d
}

pub fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_from_f64_keeps_two_digits() {
        assert_eq!(from_f64(379.99, PRICE_SCALE).to_string(), "379.99");
        assert_eq!(from_f64(1000.0, PRICE_SCALE).to_string(), "1000.00");
        assert_eq!(from_f64(0.2, PRICE_SCALE).to_string(), "0.20");
    }

    #[test]
    fn test_with_scale_rounds_and_pads() {
        let d = Decimal::from_str("1234.5").unwrap();
        assert_eq!(with_scale(d, 3).to_string(), "1234.500");
        let d = Decimal::from_str("10.005").unwrap();
        assert_eq!(with_scale(d, 2).to_string(), "10.01");
    }
}

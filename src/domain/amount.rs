//! Token amounts: Cairo `u256` calldata layout and decimal unit conversion.
//!
//! Starknet contracts take and return `u256` as two felts, `[low, high]`,
//! each holding 128 bits.

use alloy_primitives::U256;
use rust_decimal::Decimal;
use starknet::core::types::{Felt, U256 as CairoU256};

use crate::error::{Error, Result};

/// Widen a felt to a 256-bit integer. Every felt fits.
#[must_use]
pub fn felt_to_u256(felt: Felt) -> U256 {
    U256::from_be_bytes(felt.to_bytes_be())
}

/// Convert an amount into the Cairo `u256` word pair.
#[must_use]
pub fn to_cairo_u256(value: U256) -> CairoU256 {
    let limbs = value.as_limbs();
    let low = u128::from(limbs[0]) | (u128::from(limbs[1]) << 64);
    let high = u128::from(limbs[2]) | (u128::from(limbs[3]) << 64);
    CairoU256::from_words(low, high)
}

#[must_use]
pub fn from_cairo_u256(value: CairoU256) -> U256 {
    (U256::from(value.high()) << 128) | U256::from(value.low())
}

/// Calldata for a `u256` argument: `[low, high]`.
#[must_use]
pub fn u256_calldata(value: U256) -> [Felt; 2] {
    let words = to_cairo_u256(value);
    [Felt::from(words.low()), Felt::from(words.high())]
}

/// Decode a `u256` returned as `[low, high]`.
///
/// Returns `None` if either half does not fit in 128 bits.
#[must_use]
pub fn u256_from_felts(low: Felt, high: Felt) -> Option<U256> {
    let low = u128::try_from(low).ok()?;
    let high = u128::try_from(high).ok()?;
    Some(from_cairo_u256(CairoU256::from_words(low, high)))
}

/// Convert a human-readable amount into base units.
///
/// Fractional digits beyond `decimals` are truncated.
///
/// # Errors
///
/// Returns [`Error::Parse`] for negative amounts or if the result overflows
/// 256 bits.
pub fn parse_units(amount: Decimal, decimals: u32) -> Result<U256> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(Error::Parse(format!("negative amount {amount}")));
    }

    let scale = amount.scale();
    let mantissa = U256::from(amount.mantissa().unsigned_abs());
    let ten = U256::from(10u8);

    if decimals >= scale {
        ten.checked_pow(U256::from(decimals - scale))
            .and_then(|factor| mantissa.checked_mul(factor))
            .ok_or_else(|| Error::Parse(format!("amount {amount} overflows u256")))
    } else {
        let divisor = ten.pow(U256::from(scale - decimals));
        Ok(mantissa / divisor)
    }
}

/// Convert base units into a human-readable amount.
///
/// # Errors
///
/// Returns [`Error::Parse`] if the value does not fit in a [`Decimal`].
pub fn format_units(value: U256, decimals: u32) -> Result<Decimal> {
    let words = to_cairo_u256(value);
    let int_val = (words.high() == 0)
        .then(|| i128::try_from(words.low()).ok())
        .flatten()
        .ok_or_else(|| Error::Parse(format!("{value} is too large for a decimal amount")))?;

    Decimal::try_from_i128_with_scale(int_val, decimals)
        .map(|d| d.normalize())
        .map_err(|e| Error::Parse(format!("cannot format {value} with {decimals} decimals: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn felts_widen_without_loss() {
        assert_eq!(felt_to_u256(Felt::from(0xaaa_u64)), U256::from(0xaaa_u64));
        assert_eq!(
            felt_to_u256(Felt::MAX) + U256::from(1u8),
            U256::from_str_radix(
                "800000000000011000000000000000000000000000000000000000000000001",
                16
            )
            .unwrap()
        );
    }

    #[test]
    fn calldata_keeps_small_values_in_low_half() {
        assert_eq!(u256_calldata(U256::from(5u8)), [Felt::from(5u64), Felt::ZERO]);
    }

    #[test]
    fn calldata_covers_the_high_half() {
        let value = (U256::from(3u8) << 128) | U256::from(7u8);
        let [low, high] = u256_calldata(value);
        assert_eq!(low, Felt::from(7u64));
        assert_eq!(high, Felt::from(3u64));
        assert_eq!(u256_from_felts(low, high), Some(value));
    }

    #[test]
    fn cairo_words_hold_u256_max() {
        let words = to_cairo_u256(U256::MAX);
        assert_eq!(words.low(), u128::MAX);
        assert_eq!(words.high(), u128::MAX);
        assert_eq!(from_cairo_u256(words), U256::MAX);
    }

    #[test]
    fn decoding_rejects_oversized_halves() {
        let oversized = Felt::from(u128::MAX) + Felt::ONE;
        assert_eq!(u256_from_felts(oversized, Felt::ZERO), None);
        assert_eq!(u256_from_felts(Felt::ZERO, oversized), None);
    }

    #[test]
    fn parse_units_scales_by_decimals() {
        assert_eq!(parse_units(dec!(1), 6).unwrap(), U256::from(1_000_000u64));
        assert_eq!(parse_units(dec!(0.5), 6).unwrap(), U256::from(500_000u64));
        assert_eq!(
            parse_units(dec!(100), 18).unwrap(),
            U256::from(100u64) * U256::from(10u64).pow(U256::from(18u8))
        );
    }

    #[test]
    fn parse_units_truncates_extra_precision() {
        assert_eq!(parse_units(dec!(1.1234567), 6).unwrap(), U256::from(1_123_456u64));
    }

    #[test]
    fn parse_units_rejects_negative() {
        assert!(parse_units(dec!(-1), 6).is_err());
        assert_eq!(parse_units(dec!(0), 6).unwrap(), U256::ZERO);
    }

    #[test]
    fn parse_units_rejects_scale_factors_beyond_u256() {
        assert!(parse_units(dec!(1), 78).is_err());
        assert!(parse_units(dec!(1), 80).is_err());
        assert!(parse_units(dec!(0.1), 79).is_err());
        assert_eq!(
            parse_units(dec!(1), 77).unwrap(),
            U256::from(10u64).pow(U256::from(77u8))
        );
    }

    #[test]
    fn parse_units_rejects_products_beyond_u256() {
        assert!(parse_units(dec!(1000), 76).is_err());
    }

    #[test]
    fn format_units_reverses_parse_units() {
        assert_eq!(format_units(U256::from(500_000u64), 6).unwrap(), dec!(0.5));
        assert_eq!(format_units(U256::ZERO, 18).unwrap(), dec!(0));
    }

    #[test]
    fn format_units_rejects_values_beyond_decimal_range() {
        assert!(format_units(U256::MAX, 18).is_err());
        assert!(format_units(U256::from(1u8), 40).is_err());
    }
}

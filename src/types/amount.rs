//! Exact fixed-point amount arithmetic.
//!
//! ## Overview
//!
//! All asset amounts in fillable-core use fixed-point representation to
//! avoid floating-point errors. Values are stored as u128 base units
//! scaled by 10^18, the standard token base-unit convention.
//!
//! ## Why Fixed-Point?
//!
//! Floating-point rounding could make a theoretically-fillable order
//! appear unfillable (or the reverse) once the fee exchange rate is
//! applied. Integer base units keep every comparison exact.
//!
//! ## Scale Factor
//!
//! The scale factor is 10^18 (one quintillion base units per whole
//! token), matching 18-decimal token denominations. u64 overflows at
//! ~18.4 whole tokens under this scale, hence u128.
//!
//! ## Examples
//!
//! ```
//! use fillable_core::types::amount::{SCALE, to_base_units, from_base_units};
//!
//! // Convert 1.5 whole tokens to base units
//! let amount = to_base_units("1.5").unwrap();
//! assert_eq!(amount, 1_500_000_000_000_000_000);
//!
//! // Convert back to a string
//! let s = from_base_units(amount);
//! assert_eq!(s, "1.500000000000000000");
//! ```

use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use thiserror::Error;

/// An asset amount in base units (fixed-point, scaled by 10^18).
pub type Amount = u128;

/// Scaling factor for fixed-point arithmetic: 10^18
///
/// One whole token equals 10^18 base units.
pub const SCALE: Amount = 1_000_000_000_000_000_000;

/// Maximum whole-token value representable in an [`Amount`]
///
/// u128::MAX / SCALE ≈ 3.4 * 10^20 whole tokens. String conversion is
/// bounded tighter by `rust_decimal`'s 96-bit mantissa (~7.9 * 10^10
/// whole tokens); amounts beyond that are built directly in base units.
pub const MAX_WHOLE_TOKENS: Amount = u128::MAX / SCALE;

/// Error raised when a decimal literal cannot be converted to an amount.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    /// The string is not a valid decimal literal
    #[error("invalid amount literal: {0:?}")]
    InvalidLiteral(String),

    /// The literal is negative; amounts are unsigned
    #[error("amount is negative: {0:?}")]
    Negative(String),

    /// The scaled value does not fit the supported range
    #[error("amount out of range: {0:?}")]
    OutOfRange(String),
}

// ============================================================================
// Conversion Functions
// ============================================================================

/// Convert a decimal string to base units
///
/// Fractional digits beyond the 18th are rounded to the nearest base
/// unit.
///
/// # Arguments
///
/// * `s` - Decimal string (e.g., "50", "0.5", "1.000000000000000001")
///
/// # Example
///
/// ```
/// use fillable_core::types::amount::to_base_units;
///
/// assert_eq!(to_base_units("1"), Ok(1_000_000_000_000_000_000));
/// assert_eq!(to_base_units("50"), Ok(50_000_000_000_000_000_000));
/// assert_eq!(to_base_units("0.000000000000000001"), Ok(1));
/// assert!(to_base_units("-1").is_err());
/// ```
pub fn to_base_units(s: &str) -> Result<Amount, AmountError> {
    let decimal =
        Decimal::from_str(s).map_err(|_| AmountError::InvalidLiteral(s.to_string()))?;
    decimal_to_base_units(decimal)
}

/// Convert a Decimal to base units
///
/// # Arguments
///
/// * `d` - rust_decimal::Decimal value
///
/// # Errors
///
/// [`AmountError::Negative`] for negative values,
/// [`AmountError::OutOfRange`] when the scaled value overflows the
/// Decimal mantissa.
pub fn decimal_to_base_units(d: Decimal) -> Result<Amount, AmountError> {
    if d.is_sign_negative() {
        return Err(AmountError::Negative(d.to_string()));
    }

    let scaled = d
        .checked_mul(Decimal::from(SCALE as u64))
        .ok_or_else(|| AmountError::OutOfRange(d.to_string()))?;
    let rounded = scaled.round_dp(0);
    rounded
        .to_u128()
        .ok_or_else(|| AmountError::OutOfRange(d.to_string()))
}

/// Convert base units to a Decimal
///
/// Returns `None` when the value exceeds the Decimal mantissa
/// (amounts above ~7.9 * 10^10 whole tokens).
pub fn base_units_to_decimal(value: Amount) -> Option<Decimal> {
    let d = Decimal::from_u128(value)?;
    Some(d / Decimal::from(SCALE as u64))
}

/// Convert base units to a string with 18 decimal places
///
/// Pure integer formatting; total over the full u128 range.
///
/// # Example
///
/// ```
/// use fillable_core::types::amount::from_base_units;
///
/// assert_eq!(from_base_units(1_000_000_000_000_000_000), "1.000000000000000000");
/// assert_eq!(from_base_units(1), "0.000000000000000001");
/// ```
pub fn from_base_units(value: Amount) -> String {
    format!("{}.{:018}", value / SCALE, value % SCALE)
}

/// Convert base units to a human-readable string (trimmed trailing zeros)
///
/// # Example
///
/// ```
/// use fillable_core::types::amount::from_base_units_trimmed;
///
/// assert_eq!(from_base_units_trimmed(1_000_000_000_000_000_000), "1");
/// assert_eq!(from_base_units_trimmed(1_500_000_000_000_000_000), "1.5");
/// ```
pub fn from_base_units_trimmed(value: Amount) -> String {
    let s = from_base_units(value);
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Convert a whole-token count to base units
///
/// # Example
///
/// ```
/// use fillable_core::types::amount::{whole, SCALE};
///
/// assert_eq!(whole(50), 50 * SCALE);
/// ```
pub fn whole(tokens: u64) -> Amount {
    Amount::from(tokens) * SCALE
}

// ============================================================================
// Arithmetic Functions
// ============================================================================

/// Add two amounts
///
/// # Returns
///
/// * `Some(Amount)` - Result of a + b
/// * `None` - If overflow occurs
pub fn checked_add(a: Amount, b: Amount) -> Option<Amount> {
    a.checked_add(b)
}

/// Subtract two amounts
///
/// # Returns
///
/// * `Some(Amount)` - Result of a - b
/// * `None` - If underflow occurs
pub fn checked_sub(a: Amount, b: Amount) -> Option<Amount> {
    a.checked_sub(b)
}

/// Compute floor(a * b / c) exactly
///
/// The rate-scaling primitive: applies an exchange rate fixed as the
/// ratio b / c to a quantity a, rounding down. The intermediate product
/// is decomposed so a * b overflowing u128 does not by itself fail the
/// computation.
///
/// # Returns
///
/// * `Some(Amount)` - The exact floored quotient
/// * `None` - If c is zero, or the result itself exceeds u128
///
/// # Example
///
/// ```
/// use fillable_core::types::amount::{mul_div_floor, whole};
///
/// // 5 fee tokens at a 50:1 maker/fee rate cover 250 maker tokens
/// assert_eq!(mul_div_floor(whole(5), whole(50), whole(1)), Some(whole(250)));
/// assert_eq!(mul_div_floor(7, 3, 2), Some(10));
/// assert_eq!(mul_div_floor(1, 1, 0), None);
/// ```
pub fn mul_div_floor(a: Amount, b: Amount, c: Amount) -> Option<Amount> {
    if c == 0 {
        return None;
    }

    match a.checked_mul(b) {
        Some(product) => Some(product / c),
        None => {
            // a = q*c + r, so floor(a*b/c) = q*b + floor(r*b/c)
            let quot = (a / c).checked_mul(b)?;
            let part = (a % c).checked_mul(b)? / c;
            quot.checked_add(part)
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_constant() {
        assert_eq!(SCALE, 1_000_000_000_000_000_000);
        assert_eq!(MAX_WHOLE_TOKENS, u128::MAX / SCALE);
    }

    #[test]
    fn test_to_base_units_basic() {
        assert_eq!(to_base_units("1.0"), Ok(SCALE));
        assert_eq!(to_base_units("1"), Ok(SCALE));
        assert_eq!(to_base_units("0.5"), Ok(500_000_000_000_000_000));
        assert_eq!(to_base_units("0.000000000000000001"), Ok(1));
        assert_eq!(to_base_units("50"), Ok(50_000_000_000_000_000_000));
    }

    #[test]
    fn test_to_base_units_above_u64() {
        // 50 whole tokens in base units exceeds u64::MAX
        let fifty = to_base_units("50").unwrap();
        assert!(fifty > u64::MAX as u128);
    }

    #[test]
    fn test_to_base_units_edge_cases() {
        assert_eq!(to_base_units("0"), Ok(0));
        assert_eq!(to_base_units("0.0"), Ok(0));

        assert_eq!(
            to_base_units("-1.0"),
            Err(AmountError::Negative("-1.0".to_string()))
        );
        assert_eq!(
            to_base_units("abc"),
            Err(AmountError::InvalidLiteral("abc".to_string()))
        );
        assert_eq!(
            to_base_units(""),
            Err(AmountError::InvalidLiteral("".to_string()))
        );
    }

    #[test]
    fn test_from_base_units() {
        assert_eq!(from_base_units(SCALE), "1.000000000000000000");
        assert_eq!(from_base_units(500_000_000_000_000_000), "0.500000000000000000");
        assert_eq!(from_base_units(1), "0.000000000000000001");
        assert_eq!(from_base_units(0), "0.000000000000000000");
    }

    #[test]
    fn test_from_base_units_trimmed() {
        assert_eq!(from_base_units_trimmed(SCALE), "1");
        assert_eq!(from_base_units_trimmed(1_500_000_000_000_000_000), "1.5");
        assert_eq!(from_base_units_trimmed(1), "0.000000000000000001");
        assert_eq!(from_base_units_trimmed(0), "0");
    }

    #[test]
    fn test_whole() {
        assert_eq!(whole(0), 0);
        assert_eq!(whole(1), SCALE);
        assert_eq!(whole(50), 50_000_000_000_000_000_000);
    }

    #[test]
    fn test_roundtrip() {
        let values = ["1", "0.5", "50", "0.000000000000000001", "123456.789"];

        for s in values {
            let units = to_base_units(s).unwrap();
            let back = from_base_units(units);
            let original = Decimal::from_str(s).unwrap();
            let converted = Decimal::from_str(&back).unwrap();
            assert_eq!(original, converted, "Roundtrip failed for {}", s);
        }
    }

    #[test]
    fn test_base_units_to_decimal() {
        assert_eq!(base_units_to_decimal(SCALE), Some(Decimal::ONE));
        assert_eq!(
            base_units_to_decimal(500_000_000_000_000_000),
            Decimal::from_str("0.5").ok()
        );
        // Beyond the Decimal mantissa
        assert_eq!(base_units_to_decimal(u128::MAX), None);
    }

    #[test]
    fn test_checked_add() {
        assert_eq!(checked_add(whole(50), whole(1)), Some(whole(51)));
        assert_eq!(checked_add(u128::MAX, 1), None);
    }

    #[test]
    fn test_checked_sub() {
        assert_eq!(checked_sub(whole(50), whole(2)), Some(whole(48)));
        assert_eq!(checked_sub(0, 1), None);
    }

    #[test]
    fn test_mul_div_floor_exact() {
        // 5 * 50 / 1 = 250, all in whole tokens
        assert_eq!(
            mul_div_floor(whole(5), whole(50), whole(1)),
            Some(whole(250))
        );
        // Flooring: 7 * 3 / 2 = 10.5 -> 10
        assert_eq!(mul_div_floor(7, 3, 2), Some(10));
        assert_eq!(mul_div_floor(0, whole(50), whole(1)), Some(0));
    }

    #[test]
    fn test_mul_div_floor_zero_divisor() {
        assert_eq!(mul_div_floor(whole(5), whole(50), 0), None);
    }

    #[test]
    fn test_mul_div_floor_wide_product() {
        // a * b overflows u128 but the quotient is representable
        let a = u128::MAX / 2;
        assert_eq!(mul_div_floor(a, 4, 2), Some(a.checked_mul(2).unwrap()));
        // Identity rate on a huge value
        assert_eq!(mul_div_floor(u128::MAX, 3, 3), Some(u128::MAX));
    }

    #[test]
    fn test_mul_div_floor_unrepresentable() {
        // True quotient exceeds u128
        assert_eq!(mul_div_floor(u128::MAX, 2, 1), None);
    }
}

//! Fixed-point conversion for clearing-house parameters.
//!
//! The canister stores every ratio, factor and amount as an integer
//! scaled by 10^20. Two conversions exist and they are NOT
//! interchangeable:
//!
//! - [`to_precision`] multiplies in binary floating point and truncates.
//!   Good enough for dimensionless factors (percentages, exponents).
//! - [`to_parse_units`] goes through the decimal string form of the value
//!   and a base-10 fixed-point parser, so values that are exact in decimal
//!   stay exact. Use it for currency-like amounts.

use alloy_primitives::I256;
use alloy_primitives::utils::{ParseUnits, parse_units};
use thiserror::Error;

/// Number of fractional decimal digits in the canister's fixed-point format.
pub const PRECISION_DECIMALS: u8 = 20;

/// 10^20 as an `f64` (exactly representable).
const PRECISION: f64 = 1e20;

/// Magnitude bound for [`to_parse_units`], just under `I256::MAX / 10^20`.
/// The parser's internal multiply is unchecked above it.
const PARSE_UNITS_LIMIT: f64 = 5.7e56;

/// `u128::MAX + 1` (2^128) as an `f64`, exclusive bound for `nat` fields.
const NAT_LIMIT: f64 = 340_282_366_920_938_463_463_374_607_431_768_211_456.0;

/// Errors raised while encoding a decimal value for the wire.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
  /// NaN or infinity cannot be scaled.
  #[error("cannot encode non-finite value {0}")]
  NonFinite(f64),

  /// The scaled value does not fit the target integer.
  #[error("{0} scaled by 10^20 is out of range")]
  Overflow(f64),

  /// The decimal parser rejected the formatted value.
  #[error("failed to parse {text:?} as a 20-decimal fixed-point number: {reason}")]
  Parse {
    /// Decimal text handed to the parser.
    text: String,
    /// Parser error message.
    reason: String,
  },

  /// A wire field is unsigned but the value is negative.
  #[error("{field} must not be negative, got {value}")]
  Negative {
    /// Wire field being populated.
    field: &'static str,
    /// Offending input.
    value: f64,
  },

  /// The encoded value does not fit the wire field's 128-bit width.
  #[error("{field} does not fit in 128 bits, got {value}")]
  TooLarge {
    /// Wire field being populated.
    field: &'static str,
    /// Offending input.
    value: f64,
  },
}

/// Scale `value` by 10^20 in floating point and truncate toward zero.
///
/// Subject to binary rounding error for fractions that are not powers of two.
///
/// # Errors
/// Returns [`ConversionError::NonFinite`] for NaN/infinity and
/// [`ConversionError::Overflow`] when the result leaves the `i128` range.
pub fn to_precision(value: f64) -> Result<i128, ConversionError> {
  if !value.is_finite() {
    return Err(ConversionError::NonFinite(value));
  }

  let scaled = value * PRECISION;
  // i128::MAX rounds up to 2^127 as f64, so that bound is exclusive.
  if scaled >= i128::MAX as f64 || scaled < i128::MIN as f64 {
    return Err(ConversionError::Overflow(value));
  }

  #[allow(clippy::cast_possible_truncation)]
  let truncated = scaled.trunc() as i128;
  Ok(truncated)
}

/// Parse the decimal form of `value` as a 20-decimal fixed-point integer.
///
/// `f64`'s `Display` yields the shortest string that round-trips and never
/// uses exponent notation, so `1.5` parses as `"1.5"` and `5e-9` as
/// `"0.000000005"`. Fractional digits beyond 20 are truncated by the parser.
///
/// # Errors
/// Returns [`ConversionError::NonFinite`] for NaN/infinity,
/// [`ConversionError::Overflow`] when `|value|` reaches
/// `I256::MAX / 10^20`, and [`ConversionError::Parse`] if the parser
/// rejects the text.
pub fn to_parse_units(value: f64) -> Result<I256, ConversionError> {
  if !value.is_finite() {
    return Err(ConversionError::NonFinite(value));
  }
  if value.abs() >= PARSE_UNITS_LIMIT {
    return Err(ConversionError::Overflow(value));
  }

  let text = value.to_string();
  let parsed = parse_units(&text, PRECISION_DECIMALS).map_err(|e| ConversionError::Parse {
    text: text.clone(),
    reason: e.to_string(),
  })?;

  match parsed {
    ParseUnits::U256(unsigned) => {
      I256::try_from(unsigned).map_err(|_| ConversionError::Overflow(value))
    }
    ParseUnits::I256(signed) => Ok(signed),
  }
}

/// Encode a dimensionless factor for an unsigned (`nat`) wire field.
///
/// Same float multiply-and-truncate as [`to_precision`], narrowed straight
/// into the full `u128` range rather than through `i128`.
///
/// # Errors
/// Rejects non-finite input, values that truncate below zero and results
/// of 2^128 or more.
pub fn to_wire_factor(field: &'static str, value: f64) -> Result<u128, ConversionError> {
  if !value.is_finite() {
    return Err(ConversionError::NonFinite(value));
  }

  let scaled = (value * PRECISION).trunc();
  if scaled < 0.0 {
    return Err(ConversionError::Negative { field, value });
  }
  if scaled >= NAT_LIMIT {
    return Err(ConversionError::TooLarge { field, value });
  }

  #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
  let narrowed = scaled as u128;
  Ok(narrowed)
}

/// Encode a currency-like amount for an unsigned (`nat`) wire field.
///
/// # Errors
/// Propagates [`to_parse_units`] errors, rejects negative values and
/// amounts wider than 128 bits.
pub fn to_wire_amount(field: &'static str, value: f64) -> Result<u128, ConversionError> {
  let parsed = to_parse_units(value)?;
  if parsed.is_negative() {
    return Err(ConversionError::Negative { field, value });
  }

  u128::try_from(parsed.into_raw()).map_err(|_| ConversionError::TooLarge { field, value })
}

#[cfg(test)]
mod tests {
  use super::*;

  fn i256(text: &str) -> I256 {
    I256::from_dec_str(text).unwrap()
  }

  #[test]
  fn test_to_precision_one_percent() {
    // 0.01 * 10^20
    assert_eq!(to_precision(0.01).unwrap(), 1_000_000_000_000_000_000);
  }

  #[test]
  fn test_to_precision_whole_numbers() {
    assert_eq!(to_precision(1.0).unwrap(), 100_000_000_000_000_000_000);
    assert_eq!(to_precision(10.0).unwrap(), 1_000_000_000_000_000_000_000);
    assert_eq!(to_precision(0.5).unwrap(), 50_000_000_000_000_000_000);
  }

  #[test]
  fn test_to_precision_zero_and_sign() {
    assert_eq!(to_precision(0.0).unwrap(), 0);
    assert_eq!(to_precision(-0.0).unwrap(), 0);
    assert_eq!(to_precision(-0.5).unwrap(), -50_000_000_000_000_000_000);
  }

  #[test]
  fn test_to_precision_truncates_below_one_unit() {
    assert_eq!(to_precision(1e-21).unwrap(), 0);
    assert_eq!(to_precision(-1e-21).unwrap(), 0);
  }

  #[test]
  fn test_to_precision_rejects_non_finite() {
    assert!(to_precision(f64::NAN).unwrap_err().to_string().contains("non-finite"));
    assert!(matches!(to_precision(f64::INFINITY), Err(ConversionError::NonFinite(_))));
  }

  #[test]
  fn test_to_precision_overflow() {
    assert!(matches!(to_precision(1e19), Err(ConversionError::Overflow(_))));
    assert!(matches!(to_precision(-1e19), Err(ConversionError::Overflow(_))));
  }

  #[test]
  fn test_to_parse_units_one_and_a_half() {
    assert_eq!(to_parse_units(1.5).unwrap(), i256("150000000000000000000"));
  }

  #[test]
  fn test_to_parse_units_is_decimal_exact() {
    // 0.1 is inexact in binary; the decimal path keeps it exact.
    assert_eq!(to_parse_units(0.1).unwrap(), i256("10000000000000000000"));
    assert_eq!(to_parse_units(5e-9).unwrap(), i256("500000000000"));
    assert_eq!(to_parse_units(123.456).unwrap(), i256("12345600000000000000000"));
  }

  #[test]
  fn test_to_parse_units_zero_and_negative() {
    assert_eq!(to_parse_units(0.0).unwrap(), I256::ZERO);
    assert_eq!(to_parse_units(-2.25).unwrap(), i256("-225000000000000000000"));
  }

  #[test]
  fn test_to_parse_units_rejects_non_finite() {
    assert!(matches!(to_parse_units(f64::NEG_INFINITY), Err(ConversionError::NonFinite(_))));
  }

  #[test]
  fn test_precision_paths_differ_for_binary_inexact_input() {
    // 1.1 * 1e20 in f64 rounds up by one ulp (16384).
    let float_path = to_precision(1.1).unwrap();
    let decimal_path = to_parse_units(1.1).unwrap();
    assert_eq!(float_path, 110_000_000_000_000_016_384);
    assert_eq!(decimal_path, i256("110000000000000000000"));
    assert_ne!(i256(&float_path.to_string()), decimal_path);
  }

  #[test]
  fn test_to_wire_factor() {
    assert_eq!(to_wire_factor("fundingFactor", 1.0).unwrap(), 100_000_000_000_000_000_000);
    assert_eq!(
      to_wire_factor("fundingFactor", -1.0),
      Err(ConversionError::Negative { field: "fundingFactor", value: -1.0 })
    );
  }

  #[test]
  fn test_to_parse_units_rejects_magnitudes_beyond_i256() {
    assert_eq!(to_parse_units(1e60), Err(ConversionError::Overflow(1e60)));
    assert_eq!(to_parse_units(-1e60), Err(ConversionError::Overflow(-1e60)));
    assert_eq!(to_parse_units(6e56), Err(ConversionError::Overflow(6e56)));
    assert_eq!(to_parse_units(-6e56), Err(ConversionError::Overflow(-6e56)));
  }

  #[test]
  fn test_to_parse_units_keeps_sign_near_the_bound() {
    let high = to_parse_units(5e56).unwrap();
    assert!(high.is_positive());
    assert_eq!(high, i256(&format!("5{}", "0".repeat(76))));
    assert!(to_parse_units(-5e56).unwrap().is_negative());
  }

  #[test]
  fn test_to_wire_factor_uses_full_u128_range() {
    let scaled = to_wire_factor("fundingFactor", 3e18).unwrap();
    assert!(scaled > i128::MAX as u128);
    assert!(matches!(
      to_wire_factor("fundingFactor", 4e18),
      Err(ConversionError::TooLarge { field: "fundingFactor", .. })
    ));
    // Truncation toward zero keeps a tiny negative at zero.
    assert_eq!(to_wire_factor("fundingFactor", -1e-21).unwrap(), 0);
  }

  #[test]
  fn test_to_wire_factor_matches_to_precision_in_range() {
    for value in [0.0, 0.01, 1.1, 2e-8, 10.0, 1e15] {
      let signed = to_precision(value).unwrap();
      assert_eq!(to_wire_factor("f", value).unwrap(), u128::try_from(signed).unwrap());
    }
  }

  #[test]
  fn test_to_wire_amount() {
    assert_eq!(to_wire_amount("amount", 2.5).unwrap(), 250_000_000_000_000_000_000);
    assert!(matches!(
      to_wire_amount("amount", -0.5),
      Err(ConversionError::Negative { field: "amount", .. })
    ));
    assert!(matches!(
      to_wire_amount("amount", 1e30),
      Err(ConversionError::TooLarge { field: "amount", .. })
    ));
    assert_eq!(to_wire_amount("amount", 1e60), Err(ConversionError::Overflow(1e60)));
  }
}

//! Fixed-point decimal with 18 fractional digits.
//!
//! [`BigDec18`] is the display-side view of a monetary amount. Internally it
//! stores the amount in base units (`value * 10^18`) as an arbitrary-precision
//! integer, so conversions to and from the wire integer are exact.

use num_bigint::BigUint;
use num_traits::Zero;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::config::DECIMALS;
use crate::error::TxError;

/// `10^18`, the number of base units in one display unit.
///
/// Initialized on first use and never mutated afterwards.
pub fn base_unit_factor() -> &'static BigUint {
    static FACTOR: OnceLock<BigUint> = OnceLock::new();
    FACTOR.get_or_init(|| BigUint::from(10u32).pow(DECIMALS))
}

/// A non-negative decimal amount with exactly 18 fractional digits of
/// precision.
///
/// Parsing truncates digits beyond the 18th; nothing within that precision is
/// ever lost. Equality is numeric: `"1"`, `"1.0"` and `"1.000"` are equal.
///
/// # Examples
///
/// ```
/// use minter_tx::codec::BigDec18;
///
/// let ten: BigDec18 = "10".parse().unwrap();
/// assert_eq!(ten.to_string(), "10.000000000000000000");
/// assert_eq!(ten.to_string_short(4), "10.0000");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BigDec18 {
    units: BigUint,
}

impl BigDec18 {
    /// Wraps an amount already expressed in base units.
    pub fn from_base_units(units: BigUint) -> Self {
        Self { units }
    }

    /// The amount in base units.
    pub fn base_units(&self) -> &BigUint {
        &self.units
    }

    pub fn into_base_units(self) -> BigUint {
        self.units
    }

    pub fn is_zero(&self) -> bool {
        self.units.is_zero()
    }

    /// Renders with at most `digits` fractional digits (truncating, never
    /// rounding). `digits == 0` renders the integer part only.
    pub fn to_string_short(&self, digits: usize) -> String {
        let (int_part, frac_part) = self.split();
        let digits = digits.min(DECIMALS as usize);
        if digits == 0 {
            return int_part;
        }
        format!("{}.{}", int_part, &frac_part[..digits])
    }

    /// Integer part and the zero-padded 18-digit fractional part.
    fn split(&self) -> (String, String) {
        let factor = base_unit_factor();
        let int_part = &self.units / factor;
        let frac_part = &self.units % factor;
        (
            int_part.to_str_radix(10),
            format!("{:0>width$}", frac_part.to_str_radix(10), width = DECIMALS as usize),
        )
    }
}

impl From<u64> for BigDec18 {
    fn from(value: u64) -> Self {
        Self {
            units: BigUint::from(value) * base_unit_factor(),
        }
    }
}

impl FromStr for BigDec18 {
    type Err = TxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TxError::InvalidAmount(s.to_string());

        let (int_text, frac_text) = match s.split_once('.') {
            Some((i, f)) => (i, f),
            None => (s, ""),
        };
        if int_text.is_empty() && frac_text.is_empty() {
            return Err(invalid());
        }
        let all_digits = |t: &str| t.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(int_text) || !all_digits(frac_text) {
            return Err(invalid());
        }

        let int_units = if int_text.is_empty() {
            BigUint::zero()
        } else {
            BigUint::parse_bytes(int_text.as_bytes(), 10).ok_or_else(invalid)? * base_unit_factor()
        };

        let frac_digits = &frac_text[..frac_text.len().min(DECIMALS as usize)];
        let frac_units = if frac_digits.is_empty() {
            BigUint::zero()
        } else {
            let padded = format!("{:0<width$}", frac_digits, width = DECIMALS as usize);
            BigUint::parse_bytes(padded.as_bytes(), 10).ok_or_else(invalid)?
        };

        Ok(Self {
            units: int_units + frac_units,
        })
    }
}

impl fmt::Display for BigDec18 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (int_part, frac_part) = self.split();
        write!(f, "{}.{}", int_part, frac_part)
    }
}

impl Serialize for BigDec18 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BigDec18 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> BigDec18 {
        s.parse().unwrap()
    }

    #[test]
    fn parses_integer_amounts() {
        assert_eq!(dec("1").base_units(), base_unit_factor());
        assert_eq!(dec("10"), BigDec18::from(10));
    }

    #[test]
    fn parses_fractional_amounts() {
        assert_eq!(dec("0.5").base_units(), &BigUint::from(500_000_000_000_000_000u64));
        assert_eq!(dec(".5"), dec("0.5"));
        assert_eq!(dec("1."), dec("1"));
        assert_eq!(
            dec("0.000000000000000001").base_units(),
            &BigUint::from(1u32)
        );
    }

    #[test]
    fn truncates_beyond_eighteen_digits() {
        assert_eq!(dec("0.0000000000000000019"), dec("0.000000000000000001"));
    }

    #[test]
    fn numeric_equality() {
        assert_eq!(dec("1"), dec("1.000"));
        assert_eq!(dec("007"), dec("7"));
    }

    #[test]
    fn rejects_garbage() {
        for bad in ["", ".", "-1", "1e5", "1.2.3", " 1", "abc", "+1"] {
            assert!(
                matches!(bad.parse::<BigDec18>(), Err(TxError::InvalidAmount(_))),
                "{:?} should not parse",
                bad
            );
        }
    }

    #[test]
    fn display_has_exactly_eighteen_digits() {
        assert_eq!(dec("1").to_string(), "1.000000000000000000");
        assert_eq!(dec("0.25").to_string(), "0.250000000000000000");
        assert_eq!(BigDec18::default().to_string(), "0.000000000000000000");
    }

    #[test]
    fn short_rendering_truncates() {
        assert_eq!(dec("1.23456789").to_string_short(4), "1.2345");
        assert_eq!(dec("12.9").to_string_short(0), "12");
        assert_eq!(dec("3").to_string_short(40), dec("3").to_string());
    }

    #[test]
    fn large_amounts_survive() {
        let big = "123456789012345678901234567890.123456789012345678";
        assert_eq!(dec(big).to_string(), big);
    }

    #[test]
    fn serde_uses_text_form() {
        let json = serde_json::to_string(&dec("2.5")).unwrap();
        assert_eq!(json, "\"2.500000000000000000\"");
        let back: BigDec18 = serde_json::from_str(&json).unwrap();
        assert_eq!(back, dec("2.5"));
    }
}

//! Natural Bridge Module
//!
//! Conversions between [`DecimalInteger`] and `malachite::Natural`.

use entities_decimal_integer::{DecimalInteger, DecimalIntegerError};
use malachite::Natural;

/// Converter between decimal integers and malachite naturals
pub struct NaturalBridge;

impl NaturalBridge {
    /// Convert a decimal integer to a `Natural`
    ///
    /// Digits are folded most-significant first (Horner's rule).
    pub fn to_natural(value: &DecimalInteger) -> Natural {
        let ten = Natural::from(10u32);
        value
            .digits()
            .iter()
            .rev()
            .fold(Natural::from(0u32), |acc, &digit| acc * &ten + Natural::from(u32::from(digit)))
    }

    /// Convert a `Natural` to a decimal integer
    ///
    /// Goes through malachite's decimal rendering, so the only failure left
    /// is allocation of the digit buffer.
    pub fn from_natural(value: &Natural) -> Result<DecimalInteger, DecimalIntegerError> {
        DecimalInteger::from_decimal_str(&value.to_string())
    }

    /// Check that `value` and `expected` hold the same number
    pub fn agrees(value: &DecimalInteger, expected: &Natural) -> bool {
        Self::to_natural(value) == *expected
    }
}

//! Decimal Integer Module
//!
//! Provides the arbitrary-precision, non-negative integer type backed by a
//! sequence of decimal digits.
//!
//! # Representation
//!
//! Digits are stored least-significant first: index 0 holds the units digit.
//! Every value keeps two invariants after each public operation:
//!
//! - each stored entry is in `0..=9`
//! - the most-significant entry is non-zero, except for zero itself which is
//!   stored as the single digit `0`
//!
//! # Arithmetic
//!
//! Addition is carry-ripple addition aligned at index 0. Multiplication is
//! schoolbook long multiplication: one partial product per multiplier digit,
//! shifted to the digit's place value and accumulated with the addition
//! routine, so carry handling lives in one place.
//!
//! The operator forms (`+`, `*`, `+=`, `*=`) treat allocation failure as fatal.
//! [`DecimalInteger::try_add_assign`] and [`DecimalInteger::try_mul_assign`]
//! reserve the result storage up front and report
//! [`DecimalIntegerError::AllocationFailure`] instead.
//!
//! # Examples
//!
//! ```rust
//! use entities_decimal_integer::DecimalInteger;
//!
//! let a: DecimalInteger = "999".parse().unwrap();
//! let b = DecimalInteger::from(1u32);
//! assert_eq!((&a + &b).to_string(), "1000");
//!
//! let c = DecimalInteger::from(5u32) * DecimalInteger::from(1000u32);
//! assert_eq!(c.to_decimal_string(), "5000");
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Mul, MulAssign};
use std::str::FromStr;

use crate::error::DecimalIntegerError;

/// Arbitrary-precision non-negative integer stored as little-endian decimal digits
pub struct DecimalInteger {
    digits: Vec<u8>,
}

impl DecimalInteger {
    /// The value zero, stored as a single `0` digit
    pub fn zero() -> Self {
        Self { digits: vec![0] }
    }

    pub fn one() -> Self {
        Self { digits: vec![1] }
    }

    /// Parse decimal text such as `"12345"`
    ///
    /// Every character must be an ASCII digit. Leading zeros are accepted and
    /// normalized away, so `"007"` parses to the same value as `"7"`.
    ///
    /// # Errors
    ///
    /// * [`DecimalIntegerError::EmptyInput`] - `text` is empty
    /// * [`DecimalIntegerError::InvalidDigitCharacter`] - the first character outside
    ///   `'0'..='9'`, with its byte position
    /// * [`DecimalIntegerError::AllocationFailure`] - the digit buffer could not be allocated
    pub fn from_decimal_str(text: &str) -> Result<Self, DecimalIntegerError> {
        if text.is_empty() {
            return Err(DecimalIntegerError::EmptyInput);
        }
        if let Some((position, character)) = text.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
            return Err(DecimalIntegerError::InvalidDigitCharacter { character, position });
        }

        // All characters are ASCII digits, so bytes and characters coincide.
        let mut digits = try_digit_buffer(text.len())?;
        digits.extend(text.bytes().rev().map(|b| b - b'0'));
        let len = digits.len();
        Ok(Self::from_raw_digits(digits, len))
    }

    pub fn from_u64(value: u64) -> Self {
        Self::from_u128(u128::from(value))
    }

    /// Build from a native integer by repeated division by 10
    pub fn from_u128(mut value: u128) -> Self {
        let len = value.checked_ilog10().map_or(1, |log| log as usize + 1);
        let mut digits = Vec::with_capacity(len);
        loop {
            digits.push((value % 10) as u8);
            value /= 10;
            if value == 0 {
                break;
            }
        }
        Self { digits }
    }

    /// Build from little-endian digits, checking each entry is in `0..=9`
    ///
    /// An empty slice is treated as zero. Leading (most-significant) zeros are trimmed.
    pub fn from_digits_le(digits: &[u8]) -> Result<Self, DecimalIntegerError> {
        if let Some((position, &digit)) = digits.iter().enumerate().find(|&(_, &d)| d > 9) {
            return Err(DecimalIntegerError::InvalidDigitValue { digit, position });
        }
        let mut buffer = try_digit_buffer(digits.len().max(1))?;
        buffer.extend_from_slice(digits);
        Ok(Self::from_raw_digits(buffer, digits.len()))
    }

    /// Take ownership of the first `len` entries of a precomputed digit buffer.
    ///
    /// The caller guarantees every entry is a digit; only debug builds check it.
    pub(crate) fn from_raw_digits(mut digits: Vec<u8>, len: usize) -> Self {
        debug_assert!(len <= digits.len());
        digits.truncate(len);
        debug_assert!(digits.iter().all(|&d| d <= 9));
        let mut value = Self { digits };
        value.normalize();
        value
    }

    /// Deep copy that reports allocation failure instead of aborting
    pub fn try_clone(&self) -> Result<Self, DecimalIntegerError> {
        let mut digits = try_digit_buffer(self.digits.len())?;
        digits.extend_from_slice(&self.digits);
        Ok(Self { digits })
    }

    /// Little-endian digits; index 0 is the units digit
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// Number of significant decimal digits (1 for zero)
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_zero(&self) -> bool {
        self.digits == [0]
    }

    /// Convert to `u64`, or `None` if the value does not fit
    pub fn to_u64(&self) -> Option<u64> {
        self.to_u128().and_then(|value| u64::try_from(value).ok())
    }

    /// Convert to `u128`, or `None` if the value does not fit
    pub fn to_u128(&self) -> Option<u128> {
        self.digits
            .iter()
            .rev()
            .try_fold(0u128, |acc, &digit| acc.checked_mul(10)?.checked_add(u128::from(digit)))
    }

    pub fn to_decimal_string(&self) -> String {
        self.to_string()
    }

    /// `self += rhs`, reserving the result storage before touching any digit
    ///
    /// On error `self` is left unchanged.
    pub fn try_add_assign(&mut self, rhs: &DecimalInteger) -> Result<(), DecimalIntegerError> {
        self.reserve_digits(self.digits.len().max(rhs.digits.len()) + 1)?;
        self.add_digits(&rhs.digits);
        Ok(())
    }

    /// Grow the digit buffer so it can hold `requested` digits without reallocating
    fn reserve_digits(&mut self, requested: usize) -> Result<(), DecimalIntegerError> {
        self.digits
            .try_reserve_exact(requested.saturating_sub(self.digits.len()))
            .map_err(|_| DecimalIntegerError::AllocationFailure { requested })
    }

    /// `self *= rhs`, reserving the product and scratch storage up front
    ///
    /// On error `self` is left unchanged.
    pub fn try_mul_assign(&mut self, rhs: &DecimalInteger) -> Result<(), DecimalIntegerError> {
        if self.is_zero() || rhs.is_zero() {
            self.set_zero();
            return Ok(());
        }
        let capacity = self.digits.len() + rhs.digits.len();
        let accumulator = try_digit_buffer(capacity)?;
        let partial = try_digit_buffer(capacity)?;
        self.multiply_digits(&rhs.digits, accumulator, partial);
        Ok(())
    }

    /// `self + rhs` as a new value, reporting allocation failure
    pub fn try_add(&self, rhs: &DecimalInteger) -> Result<Self, DecimalIntegerError> {
        let mut sum = self.try_clone()?;
        sum.try_add_assign(rhs)?;
        Ok(sum)
    }

    /// `self * rhs` as a new value, reporting allocation failure
    pub fn try_mul(&self, rhs: &DecimalInteger) -> Result<Self, DecimalIntegerError> {
        let mut product = self.try_clone()?;
        product.try_mul_assign(rhs)?;
        Ok(product)
    }

    fn add_digits(&mut self, addend: &[u8]) {
        add_digits_into(&mut self.digits, addend);
        self.normalize();
    }

    /// Schoolbook multiplication of `self` by `multiplier`.
    ///
    /// `accumulator` and `partial` are scratch buffers; with a capacity of
    /// `len(self) + len(multiplier)` neither has to grow.
    fn multiply_digits(&mut self, multiplier: &[u8], mut accumulator: Vec<u8>, mut partial: Vec<u8>) {
        tracing::trace!(
            multiplicand_digits = self.digits.len(),
            multiplier_digits = multiplier.len(),
            "multiplying decimal integers"
        );

        accumulator.clear();
        accumulator.push(0);
        let mut partial_products = 0usize;

        for (shift, &factor) in multiplier.iter().enumerate() {
            if factor == 0 {
                continue;
            }
            // The partial product starts at the multiplier digit's place value.
            partial.clear();
            partial.resize(shift, 0);
            let mut carry = 0u8;
            for &digit in &self.digits {
                let product = digit * factor + carry;
                partial.push(product % 10);
                carry = product / 10;
            }
            while carry != 0 {
                partial.push(carry % 10);
                carry /= 10;
            }
            add_digits_into(&mut accumulator, &partial);
            partial_products += 1;
        }

        tracing::trace!(partial_products, product_digits = accumulator.len(), "multiplication done");

        let len = accumulator.len();
        *self = Self::from_raw_digits(accumulator, len);
    }

    fn set_zero(&mut self) {
        self.digits.clear();
        self.digits.push(0);
    }

    /// Trim every leading zero digit, keeping a single `0` for zero
    fn normalize(&mut self) {
        while self.digits.len() > 1 && self.digits.last() == Some(&0) {
            self.digits.pop();
        }
        if self.digits.is_empty() {
            self.digits.push(0);
        }
    }
}

/// Allocate an empty digit buffer able to hold `requested` digits
fn try_digit_buffer(requested: usize) -> Result<Vec<u8>, DecimalIntegerError> {
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(requested)
        .map_err(|_| DecimalIntegerError::AllocationFailure { requested })?;
    Ok(buffer)
}

/// Carry-ripple addition of `addend` into `acc`, both little-endian.
///
/// Does not normalize. The result is `max(len)` digits long, plus one only
/// when a final carry remains.
fn add_digits_into(acc: &mut Vec<u8>, addend: &[u8]) {
    if acc.len() < addend.len() {
        acc.resize(addend.len(), 0);
    }
    let mut carry = 0u8;
    for (index, slot) in acc.iter_mut().enumerate() {
        if index >= addend.len() && carry == 0 {
            break;
        }
        let sum = *slot + addend.get(index).copied().unwrap_or(0) + carry;
        *slot = sum % 10;
        carry = sum / 10;
    }
    if carry != 0 {
        acc.push(carry);
    }
}

impl Default for DecimalInteger {
    fn default() -> Self {
        Self::zero()
    }
}

impl Clone for DecimalInteger {
    fn clone(&self) -> Self {
        Self {
            digits: self.digits.clone(),
        }
    }

    // Reuses the existing allocation when it is large enough.
    fn clone_from(&mut self, source: &Self) {
        self.digits.clone_from(&source.digits);
    }
}

impl PartialEq for DecimalInteger {
    fn eq(&self, other: &Self) -> bool {
        self.digits.len() == other.digits.len()
            && self
                .digits
                .iter()
                .rev()
                .zip(other.digits.iter().rev())
                .all(|(a, b)| a == b)
    }
}

impl Eq for DecimalInteger {}

impl Hash for DecimalInteger {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.digits.hash(state);
    }
}

impl fmt::Display for DecimalInteger {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let text: String = self.digits.iter().rev().map(|&d| char::from(b'0' + d)).collect();
        f.pad(&text)
    }
}

impl fmt::Debug for DecimalInteger {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "DecimalInteger({})", self)
    }
}

impl FromStr for DecimalInteger {
    type Err = DecimalIntegerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_decimal_str(s)
    }
}

impl From<u8> for DecimalInteger {
    fn from(value: u8) -> Self {
        Self::from_u128(u128::from(value))
    }
}

impl From<u16> for DecimalInteger {
    fn from(value: u16) -> Self {
        Self::from_u128(u128::from(value))
    }
}

impl From<u32> for DecimalInteger {
    fn from(value: u32) -> Self {
        Self::from_u128(u128::from(value))
    }
}

impl From<u64> for DecimalInteger {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl From<u128> for DecimalInteger {
    fn from(value: u128) -> Self {
        Self::from_u128(value)
    }
}

impl From<usize> for DecimalInteger {
    fn from(value: usize) -> Self {
        Self::from_u128(value as u128)
    }
}

impl AddAssign<&DecimalInteger> for DecimalInteger {
    fn add_assign(&mut self, rhs: &DecimalInteger) {
        self.add_digits(&rhs.digits);
    }
}

impl AddAssign for DecimalInteger {
    fn add_assign(&mut self, rhs: DecimalInteger) {
        *self += &rhs;
    }
}

impl MulAssign<&DecimalInteger> for DecimalInteger {
    fn mul_assign(&mut self, rhs: &DecimalInteger) {
        if self.is_zero() || rhs.is_zero() {
            self.set_zero();
            return;
        }
        let capacity = self.digits.len() + rhs.digits.len();
        self.multiply_digits(&rhs.digits, Vec::with_capacity(capacity), Vec::with_capacity(capacity));
    }
}

impl MulAssign for DecimalInteger {
    fn mul_assign(&mut self, rhs: DecimalInteger) {
        *self *= &rhs;
    }
}

impl Add<&DecimalInteger> for &DecimalInteger {
    type Output = DecimalInteger;

    fn add(self, rhs: &DecimalInteger) -> DecimalInteger {
        let mut sum = self.clone();
        sum += rhs;
        sum
    }
}

impl Add<&DecimalInteger> for DecimalInteger {
    type Output = DecimalInteger;

    fn add(mut self, rhs: &DecimalInteger) -> DecimalInteger {
        self += rhs;
        self
    }
}

impl Add for DecimalInteger {
    type Output = DecimalInteger;

    fn add(mut self, rhs: DecimalInteger) -> DecimalInteger {
        self += &rhs;
        self
    }
}

impl Mul<&DecimalInteger> for &DecimalInteger {
    type Output = DecimalInteger;

    fn mul(self, rhs: &DecimalInteger) -> DecimalInteger {
        let mut product = self.clone();
        product *= rhs;
        product
    }
}

impl Mul<&DecimalInteger> for DecimalInteger {
    type Output = DecimalInteger;

    fn mul(mut self, rhs: &DecimalInteger) -> DecimalInteger {
        self *= rhs;
        self
    }
}

impl Mul for DecimalInteger {
    type Output = DecimalInteger;

    fn mul(mut self, rhs: DecimalInteger) -> DecimalInteger {
        self *= &rhs;
        self
    }
}

impl Sum for DecimalInteger {
    fn sum<I: Iterator<Item = DecimalInteger>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, value| acc + value)
    }
}

impl<'a> Sum<&'a DecimalInteger> for DecimalInteger {
    fn sum<I: Iterator<Item = &'a DecimalInteger>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, value| acc + value)
    }
}

impl Product for DecimalInteger {
    fn product<I: Iterator<Item = DecimalInteger>>(iter: I) -> Self {
        iter.fold(Self::one(), |acc, value| acc * value)
    }
}

impl<'a> Product<&'a DecimalInteger> for DecimalInteger {
    fn product<I: Iterator<Item = &'a DecimalInteger>>(iter: I) -> Self {
        iter.fold(Self::one(), |acc, value| acc * value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(text: &str) -> DecimalInteger {
        DecimalInteger::from_decimal_str(text).unwrap()
    }

    #[test]
    fn test_parse_stores_little_endian() {
        let value = big("1234");
        assert_eq!(value.digits(), &[4, 3, 2, 1]);
        assert_eq!(value.len(), 4);
    }

    #[test]
    fn test_parse_empty_input() {
        assert_eq!(DecimalInteger::from_decimal_str(""), Err(DecimalIntegerError::EmptyInput));
    }

    #[test]
    fn test_parse_invalid_characters() {
        assert_eq!(
            DecimalInteger::from_decimal_str("12a4"),
            Err(DecimalIntegerError::InvalidDigitCharacter { character: 'a', position: 2 })
        );
        assert_eq!(
            DecimalInteger::from_decimal_str("-5"),
            Err(DecimalIntegerError::InvalidDigitCharacter { character: '-', position: 0 })
        );
        assert_eq!(
            DecimalInteger::from_decimal_str(" 5"),
            Err(DecimalIntegerError::InvalidDigitCharacter { character: ' ', position: 0 })
        );
        // Byte position, not character index
        assert_eq!(
            DecimalInteger::from_decimal_str("1é"),
            Err(DecimalIntegerError::InvalidDigitCharacter { character: 'é', position: 1 })
        );
    }

    #[test]
    fn test_parse_leading_zeros_normalized() {
        assert_eq!(big("007"), big("7"));
        assert_eq!(big("007").digits(), &[7]);
        assert_eq!(big("0000"), DecimalInteger::zero());
        assert_eq!(big("0000").len(), 1);
    }

    #[test]
    fn test_from_native() {
        assert_eq!(DecimalInteger::from_u64(0).digits(), &[0]);
        assert_eq!(DecimalInteger::from_u64(120).digits(), &[0, 2, 1]);
        assert_eq!(DecimalInteger::from_u64(u64::MAX).to_string(), u64::MAX.to_string());
        assert_eq!(DecimalInteger::from_u128(u128::MAX).to_string(), u128::MAX.to_string());
        assert_eq!(DecimalInteger::from(7u8), big("7"));
        assert_eq!(DecimalInteger::from(65535u16), big("65535"));
        assert_eq!(DecimalInteger::from(42usize), big("42"));
    }

    #[test]
    fn test_from_digits_le() {
        assert_eq!(DecimalInteger::from_digits_le(&[1, 2, 3]).unwrap(), big("321"));
        assert_eq!(DecimalInteger::from_digits_le(&[5, 0, 0]).unwrap().digits(), &[5]);
        assert_eq!(DecimalInteger::from_digits_le(&[]).unwrap(), DecimalInteger::zero());
        assert_eq!(
            DecimalInteger::from_digits_le(&[1, 10, 3]),
            Err(DecimalIntegerError::InvalidDigitValue { digit: 10, position: 1 })
        );
    }

    #[test]
    fn test_from_raw_digits_respects_length() {
        let value = DecimalInteger::from_raw_digits(vec![3, 0, 0, 9], 3);
        assert_eq!(value.digits(), &[3]);
    }

    #[test]
    fn test_to_native() {
        assert_eq!(big("18446744073709551615").to_u64(), Some(u64::MAX));
        assert_eq!(big("18446744073709551616").to_u64(), None);
        assert_eq!(big("18446744073709551616").to_u128(), Some(u128::from(u64::MAX) + 1));
        assert_eq!(big("340282366920938463463374607431768211456").to_u128(), None);
    }

    #[test]
    fn test_addition_carry_ripple() {
        assert_eq!((big("999") + big("1")).to_string(), "1000");
        assert_eq!((big("1") + big("999")).to_string(), "1000");
        assert_eq!((big("0") + big("0")).to_string(), "0");
        assert_eq!((big("5") + big("50")).to_string(), "55");
        assert_eq!((big("123") + big("877")).len(), 4);
    }

    #[test]
    fn test_addition_length_exact() {
        let sum = big("12") + big("34");
        assert_eq!(sum.len(), 2);
        assert_eq!(sum.digits(), &[6, 4]);
    }

    #[test]
    fn test_add_assign_leaves_rhs_untouched() {
        let mut a = big("95");
        let b = big("17");
        a += &b;
        assert_eq!(a, big("112"));
        assert_eq!(b, big("17"));
    }

    #[test]
    fn test_multiplication() {
        assert_eq!((big("5") * big("1000")).to_string(), "5000");
        assert_eq!((big("12") * big("12")).to_string(), "144");
        assert_eq!((big("99") * big("99")).to_string(), "9801");
        assert_eq!((big("123456789") * big("0")).to_string(), "0");
        assert_eq!((big("0") * big("123456789")).digits(), &[0]);
        assert_eq!((big("100") * big("1")).to_string(), "100");
    }

    #[test]
    fn test_multiplication_matches_native() {
        let a = 151353562466743631u128;
        let product = DecimalInteger::from(a) * DecimalInteger::from(a);
        assert_eq!(product.to_string(), (a * a).to_string());
    }

    #[test]
    fn test_mul_assign_repeated() {
        let mut value = DecimalInteger::from(5u32);
        value *= DecimalInteger::from(1000u32);
        value *= DecimalInteger::from(1000u32);
        assert_eq!(value.to_string(), "5000000");
    }

    #[test]
    fn test_digit_buffer_allocation_failure() {
        assert_eq!(
            try_digit_buffer(usize::MAX),
            Err(DecimalIntegerError::AllocationFailure { requested: usize::MAX })
        );
        assert!(try_digit_buffer(16).unwrap().capacity() >= 16);
    }

    #[test]
    fn test_failed_reserve_leaves_value_unchanged() {
        let mut value = big("98765");
        assert_eq!(
            value.reserve_digits(usize::MAX),
            Err(DecimalIntegerError::AllocationFailure { requested: usize::MAX })
        );
        assert_eq!(value.digits(), &[5, 6, 7, 8, 9]);
        assert_eq!(value, big("98765"));

        value.try_add_assign(&big("5")).unwrap();
        assert_eq!(value, big("98770"));
    }

    #[test]
    fn test_from_u128_sizes_buffer_exactly() {
        assert!(DecimalInteger::from_u128(0).digits.capacity() < 8);
        assert!(DecimalInteger::from_u128(7).digits.capacity() < 8);
        assert!(DecimalInteger::from_u128(10).digits.capacity() < 8);
        assert!(DecimalInteger::from_u128(u128::MAX).digits.capacity() >= 39);
    }

    #[test]
    fn test_carry_flush_with_padded_operands() {
        let lhs = big("0000999");
        let rhs = DecimalInteger::from_digits_le(&[9, 9, 9, 0, 0, 0]).unwrap();
        let product = &lhs * &rhs;
        assert_eq!(product.to_string(), "998001");
        assert_eq!(product.len(), 6);

        let zero = DecimalInteger::from_raw_digits(vec![0, 0, 0], 3);
        assert_eq!((&zero * &lhs).digits(), &[0]);
    }

    #[test]
    fn test_try_variants() {
        let mut a = big("999");
        a.try_add_assign(&big("1")).unwrap();
        assert_eq!(a, big("1000"));
        a.try_mul_assign(&big("25")).unwrap();
        assert_eq!(a, big("25000"));
        assert_eq!(a.try_add(&big("5")).unwrap(), big("25005"));
        assert_eq!(a.try_mul(&big("0")).unwrap(), DecimalInteger::zero());
        assert_eq!(a.try_clone().unwrap(), a);
    }

    #[test]
    fn test_equality() {
        assert_eq!(big("12345"), DecimalInteger::from(12345u32));
        assert_ne!(big("12345"), big("12346"));
        assert_ne!(big("1"), big("10"));
        assert_eq!(DecimalInteger::zero(), DecimalInteger::default());
    }

    #[test]
    fn test_clone_is_independent() {
        let original = big("42");
        let mut copy = original.clone();
        copy += big("1");
        assert_eq!(original, big("42"));
        assert_eq!(copy, big("43"));

        let mut target = big("123456789");
        target.clone_from(&original);
        assert_eq!(target, original);
    }

    #[test]
    fn test_display_and_debug() {
        let value = big("0042");
        assert_eq!(value.to_string(), "42");
        assert_eq!(format!("{:>5}", value), "   42");
        assert_eq!(format!("{:?}", value), "DecimalInteger(42)");
        assert_eq!(DecimalInteger::zero().to_decimal_string(), "0");
    }

    #[test]
    fn test_sum_and_product() {
        let values = vec![big("1"), big("2"), big("3"), big("4")];
        let sum: DecimalInteger = values.iter().sum();
        let product: DecimalInteger = values.iter().product();
        assert_eq!(sum, big("10"));
        assert_eq!(product, big("24"));

        let empty: Vec<DecimalInteger> = Vec::new();
        assert_eq!(empty.iter().sum::<DecimalInteger>(), DecimalInteger::zero());
        assert_eq!(empty.into_iter().product::<DecimalInteger>(), DecimalInteger::one());
    }

    #[test]
    fn test_hash_consistent_with_eq() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(big("007"));
        assert!(set.contains(&big("7")));
    }
}

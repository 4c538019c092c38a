//! Decimal Integer Errors
//!
//! Failures that construction and fallible arithmetic report to the caller.

use std::fmt;

/// Errors produced while building or growing a [`DecimalInteger`](crate::DecimalInteger)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecimalIntegerError {
    /// Decimal text had no characters
    EmptyInput,
    /// Decimal text contained a character outside `'0'..='9'`
    InvalidDigitCharacter {
        character: char,
        /// Byte offset of the character in the input text
        position: usize,
    },
    /// A raw digit buffer held an entry greater than 9
    InvalidDigitValue { digit: u8, position: usize },
    /// Storage for a digit buffer of `requested` entries could not be obtained
    AllocationFailure { requested: usize },
}

impl fmt::Display for DecimalIntegerError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DecimalIntegerError::EmptyInput => write!(f, "empty decimal input"),
            DecimalIntegerError::InvalidDigitCharacter { character, position } => {
                write!(f, "invalid digit character {:?} at position {}", character, position)
            }
            DecimalIntegerError::InvalidDigitValue { digit, position } => {
                write!(f, "digit value {} at position {} is out of range 0-9", digit, position)
            }
            DecimalIntegerError::AllocationFailure { requested } => {
                write!(f, "failed to allocate storage for {} digits", requested)
            }
        }
    }
}

impl std::error::Error for DecimalIntegerError {}

//! Driver Errors

use std::fmt;

use entities_decimal_integer::DecimalIntegerError;

/// Errors reported by the demonstration driver
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DemoError {
    /// An operand was not valid decimal text
    Operand(DecimalIntegerError),
    /// Operator other than `+`, `add`, `*` or `mul`
    UnknownOperation(String),
    /// Expression did not have exactly three parts
    WrongArgumentCount(usize),
    /// Result disagreed with malachite
    VerificationFailed { expression: String },
}

impl fmt::Display for DemoError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DemoError::Operand(err) => write!(f, "Invalid operand: {}", err),
            DemoError::UnknownOperation(op) => {
                write!(f, "Unknown operation {:?} (expected +, add, * or mul)", op)
            }
            DemoError::WrongArgumentCount(count) => {
                write!(f, "Expected LHS OP RHS, got {} argument(s)", count)
            }
            DemoError::VerificationFailed { expression } => {
                write!(f, "Verification failed for {}", expression)
            }
        }
    }
}

impl std::error::Error for DemoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DemoError::Operand(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DecimalIntegerError> for DemoError {
    fn from(err: DecimalIntegerError) -> Self {
        DemoError::Operand(err)
    }
}

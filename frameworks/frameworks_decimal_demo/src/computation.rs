//! Computation Module
//!
//! Expressions the driver evaluates, the built-in sample set, and the
//! malachite cross-check.

use std::fmt;
use std::str::FromStr;

use adapters_malachite::NaturalBridge;
use entities_decimal_integer::DecimalInteger;

use crate::error::DemoError;

/// Operand of the long self-multiplication sample
const LONG_OPERAND: &str = "151353562466743631513535624667436315135356246674363151353562466743631513535624667436315135356246674363";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Multiply,
}

impl Operation {
    pub fn apply(self, lhs: &DecimalInteger, rhs: &DecimalInteger) -> DecimalInteger {
        match self {
            Operation::Add => lhs + rhs,
            Operation::Multiply => lhs * rhs,
        }
    }

    fn symbol(self) -> char {
        match self {
            Operation::Add => '+',
            Operation::Multiply => '*',
        }
    }
}

impl FromStr for Operation {
    type Err = DemoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" | "add" => Ok(Operation::Add),
            "*" | "mul" => Ok(Operation::Multiply),
            other => Err(DemoError::UnknownOperation(other.to_string())),
        }
    }
}

/// One binary expression over decimal integers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Computation {
    pub lhs: DecimalInteger,
    pub operation: Operation,
    pub rhs: DecimalInteger,
}

impl Computation {
    pub fn parse(lhs: &str, operation: &str, rhs: &str) -> Result<Self, DemoError> {
        Ok(Self {
            lhs: lhs.parse()?,
            operation: operation.parse()?,
            rhs: rhs.parse()?,
        })
    }

    /// Built-in sample computations run when no expression is given
    pub fn samples() -> Result<Vec<Self>, DemoError> {
        Ok(vec![
            Self::parse("5", "*", "1000")?,
            Self::parse("5", "+", "50")?,
            Self::parse("999", "+", "1")?,
            Self::parse("151353562466743631", "*", "151353562466743631")?,
            Self::parse(LONG_OPERAND, "*", LONG_OPERAND)?,
        ])
    }

    pub fn evaluate(&self) -> DecimalInteger {
        self.operation.apply(&self.lhs, &self.rhs)
    }

    /// Check `result` against the same expression computed with malachite
    pub fn verify(&self, result: &DecimalInteger) -> bool {
        let lhs = NaturalBridge::to_natural(&self.lhs);
        let rhs = NaturalBridge::to_natural(&self.rhs);
        let expected = match self.operation {
            Operation::Add => lhs + rhs,
            Operation::Multiply => lhs * rhs,
        };
        NaturalBridge::agrees(result, &expected)
    }
}

impl fmt::Display for Computation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} {}", self.lhs, self.operation.symbol(), self.rhs)
    }
}

/// Evaluate every computation and render one `expression = result` line each
///
/// With `verify` set, the first result that disagrees with malachite stops the run.
pub fn run(computations: &[Computation], verify: bool) -> Result<Vec<String>, DemoError> {
    let mut lines = Vec::with_capacity(computations.len());
    for computation in computations {
        let result = computation.evaluate();
        tracing::debug!(expression = %computation, digits = result.len(), "evaluated");

        if verify {
            if !computation.verify(&result) {
                tracing::error!(expression = %computation, "result disagrees with malachite");
                return Err(DemoError::VerificationFailed {
                    expression: computation.to_string(),
                });
            }
            tracing::info!(expression = %computation, "verified against malachite");
        }

        lines.push(format!("{} = {}", computation, result));
    }
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use entities_decimal_integer::DecimalIntegerError;

    #[test]
    fn test_operation_parsing() {
        assert_eq!("+".parse::<Operation>().unwrap(), Operation::Add);
        assert_eq!("add".parse::<Operation>().unwrap(), Operation::Add);
        assert_eq!("*".parse::<Operation>().unwrap(), Operation::Multiply);
        assert_eq!("mul".parse::<Operation>().unwrap(), Operation::Multiply);
        assert_eq!(
            "-".parse::<Operation>(),
            Err(DemoError::UnknownOperation("-".to_string()))
        );
    }

    #[test]
    fn test_invalid_operand() {
        assert_eq!(
            Computation::parse("12", "+", "3x"),
            Err(DemoError::Operand(DecimalIntegerError::InvalidDigitCharacter {
                character: 'x',
                position: 1,
            }))
        );
    }

    #[test]
    fn test_run_samples() {
        let samples = Computation::samples().unwrap();
        let lines = run(&samples, true).unwrap();
        assert_eq!(lines.len(), samples.len());
        assert_eq!(lines[0], "5 * 1000 = 5000");
        assert_eq!(lines[1], "5 + 50 = 55");
        assert_eq!(lines[2], "999 + 1 = 1000");
    }

    #[test]
    fn test_run_normalizes_display() {
        let computation = Computation::parse("007", "add", "0003").unwrap();
        let lines = run(&[computation], false).unwrap();
        assert_eq!(lines, vec!["7 + 3 = 10".to_string()]);
    }

    #[test]
    fn test_verify_detects_mismatch() {
        let computation = Computation::parse("2", "*", "3").unwrap();
        assert!(computation.verify(&DecimalInteger::from(6u32)));
        assert!(!computation.verify(&DecimalInteger::from(5u32)));
    }
}

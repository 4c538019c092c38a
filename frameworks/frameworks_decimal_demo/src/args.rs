//! Command-Line Argument Parsing Module
//!
//! Uses clap for type-safe argument parsing.

use clap::Parser;

use crate::computation::Computation;
use crate::error::DemoError;

/// Decimal integer demonstration arguments
#[derive(Parser, Debug)]
#[command(name = "decimal-demo")]
#[command(about = "Arbitrary-precision decimal integer arithmetic")]
pub struct DemoArgs {
    /// Cross-check every result against malachite
    #[arg(long)]
    pub verify: bool,

    /// Expression to evaluate as `LHS OP RHS`; runs the built-in samples when empty
    pub expression: Vec<String>,
}

impl DemoArgs {
    /// Computations selected by the arguments
    pub fn computations(&self) -> Result<Vec<Computation>, DemoError> {
        match self.expression.as_slice() {
            [] => Computation::samples(),
            [lhs, op, rhs] => Ok(vec![Computation::parse(lhs, op, rhs)?]),
            other => Err(DemoError::WrongArgumentCount(other.len())),
        }
    }
}

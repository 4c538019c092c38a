//! Frameworks Layer: Decimal Integer Demonstration
//!
//! Drives the decimal integer type from the command line: runs a fixed set of
//! sample computations, or a single `LHS OP RHS` expression, and can cross-check
//! every result against malachite.
//!
//! ## Modules
//!
//! - **[`args`](args/index.html)**: Command-line arguments
//! - **[`computation`](computation/index.html)**: Expressions, evaluation and verification
//! - **[`error`](error/index.html)**: Driver errors

pub mod args;
pub mod computation;
pub mod error;

pub use args::DemoArgs;
pub use computation::{run, Computation, Operation};
pub use error::DemoError;

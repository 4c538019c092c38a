//! Entities Layer: Decimal Integer
//!
//! Provides the arbitrary-precision, non-negative decimal integer type:
//! - Construction from decimal text, native unsigned integers and digit buffers
//! - Addition and schoolbook multiplication (in place and by value)
//! - Equality and decimal rendering
//!
//! Digits are stored least-significant first, one decimal digit per entry.
//!
//! ## See Also
//!
//! - [`adapters_malachite`](../adapters_malachite/index.html): conversions to and from
//!   `malachite::Natural`

pub mod decimal_integer;
pub mod error;

pub use decimal_integer::DecimalInteger;
pub use error::DecimalIntegerError;

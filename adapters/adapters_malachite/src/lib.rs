//! Adapters Layer: Malachite Bridge
//!
//! Converts between [`DecimalInteger`] and malachite's `Natural`, so decimal
//! integers can be exchanged with code built on malachite and checked against it.
//!
//! ## See Also
//!
//! - [`entities_decimal_integer`](../entities_decimal_integer/index.html): the decimal integer type

pub mod natural_bridge;

pub use natural_bridge::NaturalBridge;

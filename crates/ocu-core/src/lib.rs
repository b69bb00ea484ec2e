//! ocu-core: stable foundation for the OCU sizing toolkit.
//!
//! Contains:
//! - units (uom SI types + constructors)
//! - numeric (Real + step rounding)

pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use numeric::*;
pub use units::*;

//! ocu-report: presentation-facing sizing results.
//!
//! Plain value objects (suffixed f64, serde) for whatever frontend renders
//! them; unit-typed quantities stay behind in ocu-sizing.

pub mod summary;
pub mod types;

pub use summary::build_report;
pub use types::*;

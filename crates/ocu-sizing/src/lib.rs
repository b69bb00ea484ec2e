//! ocu-sizing: sizing pipeline for odour control units.
//!
//! Five deterministic stages with data flowing strictly forward:
//! - tank flow aggregation (freeboard volume × air changes, summed)
//! - capacity rounding (next 50 m³/hr step)
//! - vessel selection (first catalog shell whose carbon bed lands in band)
//! - media sizing (carbon mass, 25 kg bag packaging)
//! - pressure-drop estimation (bed drop lookup + fixed losses, fan class)
//!
//! Every stage is a pure function of its inputs; the static configuration
//! (vessel catalog, bed drop table, fixed losses) is embedded read-only data.
//!
//! # Example
//!
//! ```
//! use ocu_core::units::{m, s};
//! use ocu_sizing::{FreeboardRule, TankKind, TankSpec, size_unit};
//!
//! let tanks = [TankSpec {
//!     kind: TankKind::BarScreenChamber,
//!     length: m(2.0),
//!     breadth: m(1.5),
//!     total_height: m(1.0),
//!     rule: FreeboardRule::FullHeight,
//! }];
//!
//! let outcome = size_unit(&tanks, 20.0, s(30.0));
//! assert_eq!(outcome.required_capacity_m3_hr, 100);
//! assert_eq!(outcome.pressure.fan_class.label(), "standard");
//! ```

pub mod capacity;
pub mod media;
pub mod pipeline;
pub mod pressure;
pub mod tank;
pub mod vessel;

// Re-exports
pub use capacity::{CAPACITY_STEP_M3_HR, required_capacity};
pub use media::{MediaRequirement, size_media};
pub use pipeline::{SizingOutcome, size_unit};
pub use pressure::{FanClass, PressureDropBreakdown, bed_drop_per_metre, estimate_pressure_drop};
pub use tank::{FreeboardRule, TankKind, TankResult, TankSpec, VentilationDemand, aggregate_flow};
pub use vessel::{
    SelectedVessel, VESSEL_CATALOG, VesselEntry, required_media_volume, select_vessel,
};

//! The sizing pipeline, wired strictly forward.

use crate::capacity::required_capacity;
use crate::media::{MediaRequirement, size_media};
use crate::pressure::{PressureDropBreakdown, estimate_pressure_drop};
use crate::tank::{TankSpec, VentilationDemand, aggregate_flow};
use crate::vessel::{SelectedVessel, required_media_volume, select_vessel};
use ocu_core::units::Time;

/// Everything the presentation layer needs from one sizing run.
#[derive(Debug, Clone)]
pub struct SizingOutcome {
    pub demand: VentilationDemand,
    pub required_capacity_m3_hr: u64,
    pub vessel: SelectedVessel,
    pub media: MediaRequirement,
    pub pressure: PressureDropBreakdown,
}

/// Run the whole pipeline once.
///
/// Total for finite non-negative inputs: zero tanks produce an all-zero
/// sizing with the smallest vessel and a standard fan. The aggregate flow
/// feeds both the capacity step and the vessel stage; the selected vessel
/// and its bed height feed the pressure estimate.
pub fn size_unit(tanks: &[TankSpec], ach: f64, contact_time: Time) -> SizingOutcome {
    let demand = aggregate_flow(tanks, ach);
    let required_capacity_m3_hr = required_capacity(demand.total_flow);

    let media_volume = required_media_volume(demand.total_flow, contact_time);
    let vessel = select_vessel(media_volume);
    let media = size_media(media_volume);
    let pressure = estimate_pressure_drop(demand.total_flow, &vessel);

    SizingOutcome {
        demand,
        required_capacity_m3_hr,
        vessel,
        media,
        pressure,
    }
}

//! Rounds the aggregate flow up to the standard OCU capacity step.

use ocu_core::numeric::ceil_to_step;
use ocu_core::units::VolumeRate;
use uom::si::volume_rate::cubic_meter_per_hour;

/// OCU capacities are quoted in 50 m³/hr steps.
pub const CAPACITY_STEP_M3_HR: u64 = 50;

/// Required OCU capacity in m³/hr: total flow rounded up to the next step.
/// An exact multiple stays unchanged; zero flow needs zero capacity.
pub fn required_capacity(total_flow: VolumeRate) -> u64 {
    ceil_to_step(
        total_flow.get::<cubic_meter_per_hour>(),
        CAPACITY_STEP_M3_HR,
    )
}

//! Bed pressure-drop estimation and fan classification.

use crate::vessel::SelectedVessel;
use ocu_core::units::{Pressure, Velocity, VolumeRate, mps, pa};
use uom::si::length::meter;
use uom::si::pressure::pascal;
use uom::si::volume_rate::cubic_meter_per_second;

/// Unit bed pressure drop (Pa per metre of bed) keyed by superficial phase
/// velocity (m/s). Keys ascend 0.10..0.40 in 0.01 steps; lookups snap to the
/// nearest key, so velocities outside the range take the boundary value.
pub const BED_DROP_TABLE: [(f64, f64); 31] = [
    (0.10, 400.0),
    (0.11, 500.0),
    (0.12, 600.0),
    (0.13, 700.0),
    (0.14, 800.0),
    (0.15, 900.0),
    (0.16, 950.0),
    (0.17, 1000.0),
    (0.18, 1050.0),
    (0.19, 1150.0),
    (0.20, 1200.0),
    (0.21, 1300.0),
    (0.22, 1400.0),
    (0.23, 1500.0),
    (0.24, 1700.0),
    (0.25, 1800.0),
    (0.26, 1850.0),
    (0.27, 1900.0),
    (0.28, 1950.0),
    (0.29, 2000.0),
    (0.30, 2150.0),
    (0.31, 2200.0),
    (0.32, 2300.0),
    (0.33, 2400.0),
    (0.34, 2550.0),
    (0.35, 2600.0),
    (0.36, 2750.0),
    (0.37, 2800.0),
    (0.38, 2950.0),
    (0.39, 3250.0),
    (0.40, 3500.0),
];

/// Fixed system losses, Pa.
pub const PREFILTER_DROP_PA: f64 = 65.0;
pub const DUCT_DROP_PA: f64 = 100.0;
pub const SUCTION_DROP_PA: f64 = 300.0;

/// At or above this total drop the unit needs a high-pressure fan.
pub const HIGH_PRESSURE_THRESHOLD_PA: f64 = 1700.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FanClass {
    Standard,
    HighPressure,
}

impl FanClass {
    /// Strictly below the threshold is standard; the threshold itself already
    /// needs the high-pressure fan.
    pub fn for_total_drop(total_drop: Pressure) -> Self {
        if total_drop.get::<pascal>() < HIGH_PRESSURE_THRESHOLD_PA {
            FanClass::Standard
        } else {
            FanClass::HighPressure
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FanClass::Standard => "standard",
            FanClass::HighPressure => "high-pressure",
        }
    }

    /// Recommended fan construction.
    pub fn fan_type(&self) -> &'static str {
        match self {
            FanClass::Standard => "PP fan",
            FanClass::HighPressure => "FRP fan (high pressure)",
        }
    }
}

/// Nearest-key lookup into [`BED_DROP_TABLE`].
///
/// Binary search over the ascending keys; an exact midpoint keeps the lower
/// key. Velocities outside the table range take the boundary value.
pub fn bed_drop_per_metre(phase_velocity_m_s: f64) -> f64 {
    let idx = BED_DROP_TABLE.partition_point(|(key, _)| *key < phase_velocity_m_s);
    if idx == 0 {
        return BED_DROP_TABLE[0].1;
    }
    if idx == BED_DROP_TABLE.len() {
        return BED_DROP_TABLE[BED_DROP_TABLE.len() - 1].1;
    }
    let (lo_key, lo_val) = BED_DROP_TABLE[idx - 1];
    let (hi_key, hi_val) = BED_DROP_TABLE[idx];
    if phase_velocity_m_s - lo_key <= hi_key - phase_velocity_m_s {
        lo_val
    } else {
        hi_val
    }
}

/// Pressure drop across the bed and the fixed system losses.
#[derive(Debug, Clone, Copy)]
pub struct PressureDropBreakdown {
    /// Superficial velocity through the vessel cross-section, rounded to the
    /// table's 0.01 m/s resolution.
    pub phase_velocity: Velocity,
    pub bed_drop_per_m_pa: f64,
    pub bed_drop: Pressure,
    pub total_drop: Pressure,
    pub fan_class: FanClass,
}

/// Look up the bed drop for the selected vessel and add the fixed losses.
pub fn estimate_pressure_drop(
    total_flow: VolumeRate,
    vessel: &SelectedVessel,
) -> PressureDropBreakdown {
    let area_m2 = vessel.entry.cross_section_m2();
    let velocity_m_s = total_flow.get::<cubic_meter_per_second>() / area_m2;
    let rounded_m_s = (velocity_m_s * 100.0).round() / 100.0;

    let per_m = bed_drop_per_metre(rounded_m_s);
    let bed_drop_pa = per_m * vessel.bed_height.get::<meter>();
    let total_pa = bed_drop_pa + PREFILTER_DROP_PA + DUCT_DROP_PA + SUCTION_DROP_PA;
    tracing::debug!(
        phase_velocity_m_s = rounded_m_s,
        bed_drop_per_m_pa = per_m,
        total_drop_pa = total_pa,
        "pressure drop estimated"
    );

    PressureDropBreakdown {
        phase_velocity: mps(rounded_m_s),
        bed_drop_per_m_pa: per_m,
        bed_drop: pa(bed_drop_pa),
        total_drop: pa(total_pa),
        fan_class: FanClass::for_total_drop(pa(total_pa)),
    }
}

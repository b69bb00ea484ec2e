//! Report data types.

use serde::{Deserialize, Serialize};

/// One row of the tank flowrate table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TankRow {
    pub tank: String,
    pub freeboard_rule: String,
    pub dimensions_m: String,
    pub freeboard_m: f64,
    pub freeboard_volume_m3: f64,
    pub flowrate_m3_hr: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VentilationSummary {
    pub total_flow_m3_hr: f64,
    pub required_capacity_m3_hr: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VesselSummary {
    pub diameter_m: f64,
    pub shell_height_m: f64,
    pub bed_height_m: f64,
    pub media_volume_m3: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaSummary {
    pub carbon_mass_kg: f64,
    pub packaged_mass_kg: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PressureDropSummary {
    pub phase_velocity_m_s: f64,
    pub bed_drop_per_m_pa: f64,
    pub bed_drop_pa: f64,
    pub prefilter_drop_pa: f64,
    pub duct_drop_pa: f64,
    pub suction_drop_pa: f64,
    pub total_drop_pa: f64,
    pub fan_class: String,
    pub fan_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SizingReport {
    pub case_name: String,
    pub tanks: Vec<TankRow>,
    pub ventilation: VentilationSummary,
    pub vessel: VesselSummary,
    pub media: MediaSummary,
    pub pressure_drop: PressureDropSummary,
}

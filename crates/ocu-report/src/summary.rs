//! Builds a presentation-ready report from a sizing outcome.

use crate::types::{
    MediaSummary, PressureDropSummary, SizingReport, TankRow, VentilationSummary, VesselSummary,
};
use ocu_sizing::pressure::{DUCT_DROP_PA, PREFILTER_DROP_PA, SUCTION_DROP_PA};
use ocu_sizing::{SizingOutcome, TankResult};
use uom::si::length::meter;
use uom::si::mass::kilogram;
use uom::si::pressure::pascal;
use uom::si::velocity::meter_per_second;
use uom::si::volume::cubic_meter;
use uom::si::volume_rate::cubic_meter_per_hour;

pub fn build_report(case_name: &str, outcome: &SizingOutcome) -> SizingReport {
    SizingReport {
        case_name: case_name.to_string(),
        tanks: outcome.demand.tanks.iter().map(tank_row).collect(),
        ventilation: VentilationSummary {
            total_flow_m3_hr: outcome.demand.total_flow.get::<cubic_meter_per_hour>(),
            required_capacity_m3_hr: outcome.required_capacity_m3_hr,
        },
        vessel: VesselSummary {
            diameter_m: outcome.vessel.entry.diameter_m,
            shell_height_m: outcome.vessel.entry.shell_height_m,
            bed_height_m: outcome.vessel.bed_height.get::<meter>(),
            media_volume_m3: outcome.media.media_volume.get::<cubic_meter>(),
        },
        media: MediaSummary {
            carbon_mass_kg: outcome.media.carbon_mass.get::<kilogram>(),
            packaged_mass_kg: outcome.media.packaged_mass_kg,
        },
        pressure_drop: PressureDropSummary {
            phase_velocity_m_s: outcome.pressure.phase_velocity.get::<meter_per_second>(),
            bed_drop_per_m_pa: outcome.pressure.bed_drop_per_m_pa,
            bed_drop_pa: outcome.pressure.bed_drop.get::<pascal>(),
            prefilter_drop_pa: PREFILTER_DROP_PA,
            duct_drop_pa: DUCT_DROP_PA,
            suction_drop_pa: SUCTION_DROP_PA,
            total_drop_pa: outcome.pressure.total_drop.get::<pascal>(),
            fan_class: outcome.pressure.fan_class.label().to_string(),
            fan_type: outcome.pressure.fan_class.fan_type().to_string(),
        },
    }
}

fn tank_row(result: &TankResult) -> TankRow {
    let spec = &result.spec;
    TankRow {
        tank: spec.kind.label().to_string(),
        freeboard_rule: spec.rule.label().to_string(),
        dimensions_m: format!(
            "{} × {} × {}",
            spec.length.get::<meter>(),
            spec.breadth.get::<meter>(),
            spec.total_height.get::<meter>()
        ),
        freeboard_m: result.freeboard.get::<meter>(),
        freeboard_volume_m3: result.freeboard_volume.get::<cubic_meter>(),
        flowrate_m3_hr: result.flowrate.get::<cubic_meter_per_hour>(),
    }
}

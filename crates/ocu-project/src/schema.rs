//! Sizing case schema definitions.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SizingCase {
    pub version: u32,
    pub name: String,
    pub air_changes_per_hour: f64,
    #[serde(default = "default_contact_time_s")]
    pub contact_time_s: f64,
    #[serde(default)]
    pub tanks: Vec<TankDef>,
}

fn default_contact_time_s() -> f64 {
    30.0
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TankDef {
    pub id: String,
    pub kind: TankKindDef,
    pub length_m: f64,
    pub breadth_m: f64,
    pub height_m: f64,
}

/// Tank kind. The equalization tank carries its input-time freeboard choice;
/// every other kind has a fixed rule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum TankKindDef {
    BarScreenChamber,
    OilGreaseTrap,
    EqualizationTank { freeboard: EqualizationFreeboardDef },
    SludgeHoldingTank,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum EqualizationFreeboardDef {
    HeightMinusOne,
    HalfHeight,
}

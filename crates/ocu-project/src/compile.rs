//! Builds core sizing inputs from case definitions.

use crate::schema::{EqualizationFreeboardDef, SizingCase, TankDef, TankKindDef};
use ocu_core::units::{Time, m, s};
use ocu_sizing::{FreeboardRule, TankKind, TankSpec};

/// Core inputs compiled from a validated case.
#[derive(Debug, Clone)]
pub struct CompiledCase {
    pub tanks: Vec<TankSpec>,
    pub air_changes_per_hour: f64,
    pub contact_time: Time,
}

pub fn compile_case(case: &SizingCase) -> CompiledCase {
    CompiledCase {
        tanks: case.tanks.iter().map(build_tank).collect(),
        air_changes_per_hour: case.air_changes_per_hour,
        contact_time: s(case.contact_time_s),
    }
}

fn build_tank(def: &TankDef) -> TankSpec {
    let (kind, rule) = match &def.kind {
        TankKindDef::BarScreenChamber => (TankKind::BarScreenChamber, FreeboardRule::FullHeight),
        TankKindDef::OilGreaseTrap => (TankKind::OilGreaseTrap, FreeboardRule::FullHeight),
        TankKindDef::EqualizationTank { freeboard } => (
            TankKind::EqualizationTank,
            match freeboard {
                EqualizationFreeboardDef::HeightMinusOne => FreeboardRule::HeightMinusOne,
                EqualizationFreeboardDef::HalfHeight => FreeboardRule::HalfHeight,
            },
        ),
        TankKindDef::SludgeHoldingTank => {
            (TankKind::SludgeHoldingTank, FreeboardRule::FixedOneMetre)
        }
    };
    TankSpec {
        kind,
        length: m(def.length_m),
        breadth: m(def.breadth_m),
        total_height: m(def.height_m),
        rule,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_kinds_get_their_standard_rule() {
        let def = TankDef {
            id: "t1".to_string(),
            kind: TankKindDef::SludgeHoldingTank,
            length_m: 2.0,
            breadth_m: 2.0,
            height_m: 5.0,
        };
        let spec = build_tank(&def);
        assert_eq!(spec.kind, TankKind::SludgeHoldingTank);
        assert_eq!(Some(spec.rule), spec.kind.standard_rule());
    }

    #[test]
    fn equalization_rule_comes_from_the_def() {
        let def = TankDef {
            id: "eq".to_string(),
            kind: TankKindDef::EqualizationTank {
                freeboard: EqualizationFreeboardDef::HalfHeight,
            },
            length_m: 4.0,
            breadth_m: 2.0,
            height_m: 3.0,
        };
        let spec = build_tank(&def);
        assert_eq!(spec.kind, TankKind::EqualizationTank);
        assert_eq!(spec.rule, FreeboardRule::HalfHeight);
    }
}

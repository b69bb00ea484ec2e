//! Tank freeboard rules and ventilation flow aggregation.

use ocu_core::units::{Length, Volume, VolumeRate, m, m3ph};
use uom::si::volume::cubic_meter;

/// Process tanks covered by the sizing calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TankKind {
    BarScreenChamber,
    OilGreaseTrap,
    EqualizationTank,
    SludgeHoldingTank,
}

impl TankKind {
    pub fn label(&self) -> &'static str {
        match self {
            TankKind::BarScreenChamber => "Bar Screen Chamber",
            TankKind::OilGreaseTrap => "Oil & Grease Trap",
            TankKind::EqualizationTank => "Equalization Tank",
            TankKind::SludgeHoldingTank => "Sludge Holding Tank",
        }
    }

    /// The fixed freeboard rule for this kind, or `None` where the rule is
    /// chosen at input time (Equalization Tank).
    pub fn standard_rule(&self) -> Option<FreeboardRule> {
        match self {
            TankKind::BarScreenChamber | TankKind::OilGreaseTrap => {
                Some(FreeboardRule::FullHeight)
            }
            TankKind::EqualizationTank => None,
            TankKind::SludgeHoldingTank => Some(FreeboardRule::FixedOneMetre),
        }
    }
}

/// How much of a tank's height counts as odour-generating freeboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FreeboardRule {
    /// The full tank height.
    FullHeight,
    /// Height minus one metre. A negative result is passed through unchanged;
    /// input sanity is the caller's responsibility.
    HeightMinusOne,
    /// Half the tank height.
    HalfHeight,
    /// Fixed 1.0 m. Sludge holding tanks use this: the height is still
    /// collected and displayed, but the formula ignores it.
    FixedOneMetre,
}

impl FreeboardRule {
    pub fn label(&self) -> &'static str {
        match self {
            FreeboardRule::FullHeight => "full height",
            FreeboardRule::HeightMinusOne => "height - 1",
            FreeboardRule::HalfHeight => "height / 2",
            FreeboardRule::FixedOneMetre => "fixed 1.0 m",
        }
    }

    pub fn freeboard(&self, total_height: Length) -> Length {
        match self {
            FreeboardRule::FullHeight => total_height,
            FreeboardRule::HeightMinusOne => total_height - m(1.0),
            FreeboardRule::HalfHeight => total_height / 2.0,
            FreeboardRule::FixedOneMetre => m(1.0),
        }
    }
}

/// One configured tank. A plain value object; never mutated after input.
#[derive(Debug, Clone, Copy)]
pub struct TankSpec {
    pub kind: TankKind,
    pub length: Length,
    pub breadth: Length,
    pub total_height: Length,
    pub rule: FreeboardRule,
}

impl TankSpec {
    pub fn freeboard(&self) -> Length {
        self.rule.freeboard(self.total_height)
    }

    pub fn freeboard_volume(&self) -> Volume {
        self.length * self.breadth * self.freeboard()
    }
}

/// Derived airflow figures for one tank.
#[derive(Debug, Clone, Copy)]
pub struct TankResult {
    pub spec: TankSpec,
    pub freeboard: Length,
    pub freeboard_volume: Volume,
    pub flowrate: VolumeRate,
}

/// Per-tank results plus the summed extraction flow.
#[derive(Debug, Clone)]
pub struct VentilationDemand {
    pub tanks: Vec<TankResult>,
    pub total_flow: VolumeRate,
}

/// Evaluate every tank at `ach` air changes per hour and sum the flows.
///
/// Zero tanks is not an error: the demand is simply zero and the downstream
/// stages run with it.
pub fn aggregate_flow(tanks: &[TankSpec], ach: f64) -> VentilationDemand {
    let mut total_flow = m3ph(0.0);
    let mut results = Vec::with_capacity(tanks.len());
    for spec in tanks {
        let freeboard = spec.freeboard();
        let freeboard_volume = spec.freeboard_volume();
        let flowrate = m3ph(freeboard_volume.get::<cubic_meter>() * ach);
        total_flow += flowrate;
        results.push(TankResult {
            spec: *spec,
            freeboard,
            freeboard_volume,
            flowrate,
        });
    }
    VentilationDemand {
        tanks: results,
        total_flow,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uom::si::length::meter;
    use uom::si::volume_rate::cubic_meter_per_hour;

    fn tank(kind: TankKind, l: f64, b: f64, h: f64, rule: FreeboardRule) -> TankSpec {
        TankSpec {
            kind,
            length: m(l),
            breadth: m(b),
            total_height: m(h),
            rule,
        }
    }

    #[test]
    fn full_height_rule_uses_whole_tank() {
        let t = tank(TankKind::BarScreenChamber, 2.0, 1.5, 1.0, FreeboardRule::FullHeight);
        assert_eq!(t.freeboard().get::<meter>(), 1.0);
        assert!((t.freeboard_volume().get::<cubic_meter>() - 3.0).abs() < 1e-12);
    }

    #[test]
    fn equalization_sub_rules() {
        let minus = tank(
            TankKind::EqualizationTank,
            3.0,
            2.0,
            4.0,
            FreeboardRule::HeightMinusOne,
        );
        assert_eq!(minus.freeboard().get::<meter>(), 3.0);

        let half = tank(
            TankKind::EqualizationTank,
            3.0,
            2.0,
            4.0,
            FreeboardRule::HalfHeight,
        );
        assert_eq!(half.freeboard().get::<meter>(), 2.0);
    }

    #[test]
    fn height_minus_one_may_go_negative() {
        let t = tank(
            TankKind::EqualizationTank,
            1.0,
            1.0,
            0.5,
            FreeboardRule::HeightMinusOne,
        );
        assert_eq!(t.freeboard().get::<meter>(), -0.5);
    }

    #[test]
    fn sludge_holding_tank_ignores_height() {
        for h in [0.2, 1.0, 7.5] {
            let t = tank(TankKind::SludgeHoldingTank, 2.0, 2.0, h, FreeboardRule::FixedOneMetre);
            assert_eq!(t.freeboard().get::<meter>(), 1.0);
        }
    }

    #[test]
    fn standard_rule_mapping() {
        assert_eq!(
            TankKind::BarScreenChamber.standard_rule(),
            Some(FreeboardRule::FullHeight)
        );
        assert_eq!(
            TankKind::OilGreaseTrap.standard_rule(),
            Some(FreeboardRule::FullHeight)
        );
        assert_eq!(TankKind::EqualizationTank.standard_rule(), None);
        assert_eq!(
            TankKind::SludgeHoldingTank.standard_rule(),
            Some(FreeboardRule::FixedOneMetre)
        );
    }

    #[test]
    fn aggregate_sums_tank_flows() {
        let tanks = [
            tank(TankKind::BarScreenChamber, 2.0, 1.5, 1.0, FreeboardRule::FullHeight),
            tank(TankKind::SludgeHoldingTank, 2.0, 2.0, 3.0, FreeboardRule::FixedOneMetre),
        ];
        let demand = aggregate_flow(&tanks, 10.0);
        assert_eq!(demand.tanks.len(), 2);
        // 3.0 m³ and 4.0 m³ of freeboard at 10 ACH
        assert!((demand.tanks[0].flowrate.get::<cubic_meter_per_hour>() - 30.0).abs() < 1e-9);
        assert!((demand.tanks[1].flowrate.get::<cubic_meter_per_hour>() - 40.0).abs() < 1e-9);
        assert!((demand.total_flow.get::<cubic_meter_per_hour>() - 70.0).abs() < 1e-9);
    }

    #[test]
    fn aggregate_of_nothing_is_zero() {
        let demand = aggregate_flow(&[], 25.0);
        assert!(demand.tanks.is_empty());
        assert_eq!(demand.total_flow.get::<cubic_meter_per_hour>(), 0.0);
    }
}

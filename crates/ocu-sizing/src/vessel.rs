//! Vessel catalog and first-fit selection by carbon bed height.

use ocu_core::units::{Length, Time, Volume, VolumeRate, m};
use uom::si::volume::cubic_meter;

/// One standard vessel shell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VesselEntry {
    pub diameter_m: f64,
    pub shell_height_m: f64,
}

impl VesselEntry {
    pub fn cross_section_m2(&self) -> f64 {
        std::f64::consts::PI * (self.diameter_m / 2.0).powi(2)
    }
}

/// Standard shells, ascending diameter. The order is load-bearing: selection
/// is first-fit and the smallest entry doubles as the fallback.
pub const VESSEL_CATALOG: [VesselEntry; 10] = [
    VesselEntry { diameter_m: 0.7, shell_height_m: 1.2 },
    VesselEntry { diameter_m: 0.9, shell_height_m: 1.6 },
    VesselEntry { diameter_m: 1.2, shell_height_m: 1.6 },
    VesselEntry { diameter_m: 1.4, shell_height_m: 1.6 },
    VesselEntry { diameter_m: 1.6, shell_height_m: 1.8 },
    VesselEntry { diameter_m: 1.8, shell_height_m: 1.8 },
    VesselEntry { diameter_m: 1.9, shell_height_m: 1.8 },
    VesselEntry { diameter_m: 2.0, shell_height_m: 1.8 },
    VesselEntry { diameter_m: 2.2, shell_height_m: 1.8 },
    VesselEntry { diameter_m: 2.4, shell_height_m: 1.8 },
];

/// Acceptable carbon bed height band, inclusive on both ends.
pub const BED_HEIGHT_MIN_M: f64 = 0.6;
pub const BED_HEIGHT_MAX_M: f64 = 0.8;

/// Carbon volume needed to give the air stream `contact_time` in the bed.
pub fn required_media_volume(total_flow: VolumeRate, contact_time: Time) -> Volume {
    total_flow * contact_time
}

/// A catalog shell plus the bed height the media volume produces in it.
///
/// The bed height is only guaranteed inside the band when some catalog entry
/// matched; in the fallback case it is whatever the smallest shell yields.
#[derive(Debug, Clone, Copy)]
pub struct SelectedVessel {
    pub entry: VesselEntry,
    pub bed_height: Length,
}

/// First catalog shell whose bed height lands inside the band; if none does,
/// the smallest shell with whatever bed height results.
pub fn select_vessel(media_volume: Volume) -> SelectedVessel {
    let volume_m3 = media_volume.get::<cubic_meter>();
    for entry in &VESSEL_CATALOG {
        let bed_m = volume_m3 / entry.cross_section_m2();
        if (BED_HEIGHT_MIN_M..=BED_HEIGHT_MAX_M).contains(&bed_m) {
            tracing::debug!(
                diameter_m = entry.diameter_m,
                bed_height_m = bed_m,
                "vessel matched bed-height band"
            );
            return SelectedVessel {
                entry: *entry,
                bed_height: m(bed_m),
            };
        }
    }

    let entry = VESSEL_CATALOG[0];
    let bed_m = volume_m3 / entry.cross_section_m2();
    tracing::debug!(
        diameter_m = entry.diameter_m,
        bed_height_m = bed_m,
        "no shell holds the bed in band, taking the smallest"
    );
    SelectedVessel {
        entry,
        bed_height: m(bed_m),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ocu_core::units::m3;
    use uom::si::length::meter;
    use uom::si::time::second;
    use uom::si::volume_rate::cubic_meter_per_hour;

    #[test]
    fn catalog_is_ascending() {
        for pair in VESSEL_CATALOG.windows(2) {
            assert!(pair[0].diameter_m < pair[1].diameter_m);
        }
    }

    #[test]
    fn media_volume_from_flow_and_contact_time() {
        // 60 m³/hr for 30 s of contact: 60/3600 × 30 = 0.5 m³
        let volume = required_media_volume(
            VolumeRate::new::<cubic_meter_per_hour>(60.0),
            Time::new::<second>(30.0),
        );
        assert!((volume.get::<cubic_meter>() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn selects_first_shell_in_band() {
        // 0.5 m³: the 0.7 m shell gives ~1.30 m (too tall), the 0.9 m shell
        // gives ~0.786 m, inside the band.
        let selected = select_vessel(m3(0.5));
        assert_eq!(selected.entry.diameter_m, 0.9);
        assert!((selected.bed_height.get::<meter>() - 0.786).abs() < 1e-3);
    }

    #[test]
    fn first_fit_wins_when_two_shells_are_in_band() {
        // 1.22 m³ puts both the 1.4 m (~0.79 m bed) and 1.6 m (~0.61 m bed)
        // shells in band; scan order must pick the 1.4 m one.
        let selected = select_vessel(m3(1.22));
        assert_eq!(selected.entry.diameter_m, 1.4);
    }

    #[test]
    fn zero_volume_falls_back_to_smallest() {
        let selected = select_vessel(m3(0.0));
        assert_eq!(selected.entry.diameter_m, 0.7);
        assert_eq!(selected.bed_height.get::<meter>(), 0.0);
    }

    #[test]
    fn oversized_volume_falls_back_to_smallest() {
        // Too much media for any shell to keep the bed under 0.8 m.
        let selected = select_vessel(m3(50.0));
        assert_eq!(selected.entry.diameter_m, 0.7);
        assert!(selected.bed_height.get::<meter>() > BED_HEIGHT_MAX_M);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use ocu_core::units::m3;
    use proptest::prelude::*;
    use uom::si::length::meter;

    proptest! {
        #[test]
        fn selection_is_first_fit(volume_m3 in 0.0_f64..10.0) {
            let selected = select_vessel(m3(volume_m3));
            let first_match = VESSEL_CATALOG.iter().find(|e| {
                let bed = volume_m3 / e.cross_section_m2();
                (BED_HEIGHT_MIN_M..=BED_HEIGHT_MAX_M).contains(&bed)
            });
            match first_match {
                Some(entry) => prop_assert_eq!(selected.entry, *entry),
                None => prop_assert_eq!(selected.entry, VESSEL_CATALOG[0]),
            }
            prop_assert!(selected.bed_height.get::<meter>().is_finite());
        }
    }
}
